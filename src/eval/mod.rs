//! Numeric evaluation of composed expressions.
//!
//! This module provides:
//! - The [`Evaluator`] capability the engine delegates arithmetic to
//! - A default implementation backed by fasteval
//! - Display formatting for numeric results

mod evaluation;
mod format;

pub use evaluation::{EvalError, Evaluator, FastevalEvaluator};
pub use format::format_result;

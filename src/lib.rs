//! tenkey: a keypad-driven calculator expression engine.
//!
//! The crate implements the state machine behind a calculator display: an
//! expression string built one keypad token at a time, with the usual
//! composition rules (leading-zero suppression, one decimal point per
//! operand, last-operator-wins) and on-demand evaluation through a pluggable
//! arithmetic backend.
//!
//! ```
//! use tenkey::{ExpressionEngine, Token};
//!
//! let mut engine = ExpressionEngine::new();
//! for raw in ["2", "+", "2", "="] {
//!     engine.handle(Token::parse(raw).unwrap());
//! }
//! assert_eq!(engine.expression(), "4");
//! ```

pub mod engine;
pub mod eval;
pub mod token;

pub use engine::{EngineConfig, ExpressionEngine};
pub use eval::{EvalError, Evaluator, FastevalEvaluator};
pub use token::{Operator, Token};

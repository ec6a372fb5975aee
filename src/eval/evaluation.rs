//! Expression evaluation using fasteval.
//!
//! The engine composes infix strings out of digits, a decimal point, and the
//! four basic operators; turning such a string into a number is delegated to
//! an [`Evaluator`] so front ends can substitute their own arithmetic backend.

use std::collections::BTreeMap;

use thiserror::Error;

/// Why an expression failed to produce a displayable number.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The evaluator could not parse or evaluate the expression.
    #[error("malformed expression: {0}")]
    Malformed(String),
    /// The arithmetic produced NaN or an infinity (division by zero included).
    #[error("result is not finite")]
    NonFinite,
}

/// Arithmetic evaluation capability.
///
/// Input is a string composed only of digits, `.`, and the operators
/// `+ - * /`; standard precedence (`*` and `/` bind tighter) and left-to-right
/// associativity apply. Implementations must return a finite value or an
/// error; non-finite results must never be passed through as display text.
pub trait Evaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError>;
}

/// Default evaluator backed by the fasteval crate.
///
/// fasteval is an arithmetic-only expression evaluator; no variables are bound
/// and no dynamic code of any kind is involved.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastevalEvaluator;

impl Evaluator for FastevalEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        // Empty namespace: no custom variables or functions.
        let mut namespace = BTreeMap::<String, f64>::new();

        // fasteval::Error does not implement std::error::Error; carry the
        // rendered message instead.
        let value = fasteval::ez_eval(expression, &mut namespace)
            .map_err(|err| EvalError::Malformed(format!("{err:?}")))?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

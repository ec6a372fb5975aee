//! The expression-input state machine.
//!
//! [`ExpressionEngine`] owns the expression string a calculator front end
//! displays. Each keypad token mutates it in place through exactly one
//! operation; the front end re-reads [`ExpressionEngine::expression`] after
//! every token and renders it verbatim.
//!
//! Two logical modes: COMPOSING (the user is building an expression) and
//! RESULT_SHOWN (the expression holds the value of a successful evaluation).
//! Any composing token received in RESULT_SHOWN either replaces the
//! expression (digit, zero, dot) or continues from the result (operator).
//! A failed evaluation parks the expression on an error marker that every
//! handler treats like the default value.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::eval::{format_result, Evaluator, FastevalEvaluator};
use crate::token::{Operator, Token};

lazy_static! {
    /// Character class over the operator symbols, built from the keypad's
    /// operator list. Splitting on it yields the operands of an expression.
    static ref OPERATOR_CHAR: Regex = {
        let symbols: String = Operator::SYMBOLS.iter().collect();
        Regex::new(&format!("[{}]", regex::escape(&symbols))).expect("valid operator class")
    };

    /// An operand consisting only of zeros.
    static ref ALL_ZEROS: Regex = Regex::new(r"^0+$").expect("valid zero pattern");
}

/// Display constants of the engine.
///
/// These are the knobs a front end may want to retheme; the defaults match a
/// conventional twelve-digit pocket calculator.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// The expression shown before any input, and after a clear.
    pub default_value: String,
    /// Sentinel text shown after a failed evaluation.
    pub error_text: String,
    /// Longest plain result, in characters, before switching to exponential
    /// notation.
    pub max_digits: usize,
    /// Fractional mantissa digits used in exponential notation.
    pub exponent_digits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_value: "0".to_string(),
            error_text: "Error".to_string(),
            max_digits: 12,
            exponent_digits: 6,
        }
    }
}

/// The calculator's expression-construction and evaluation state machine.
#[derive(Clone, Debug)]
pub struct ExpressionEngine<E = FastevalEvaluator> {
    expression: String,
    result_displayed: bool,
    config: EngineConfig,
    evaluator: E,
}

impl ExpressionEngine<FastevalEvaluator> {
    /// Engine with the default fasteval backend and default display config.
    pub fn new() -> Self {
        Self::with_evaluator(FastevalEvaluator)
    }
}

impl Default for ExpressionEngine<FastevalEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> ExpressionEngine<E> {
    /// Engine with a custom evaluation backend.
    pub fn with_evaluator(evaluator: E) -> Self {
        Self::with_config(evaluator, EngineConfig::default())
    }

    pub fn with_config(evaluator: E, config: EngineConfig) -> Self {
        Self {
            expression: config.default_value.clone(),
            result_displayed: false,
            config,
            evaluator,
        }
    }

    /// The current expression, verbatim display contract for the front end.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Whether the expression currently holds a computed result.
    pub fn is_result_displayed(&self) -> bool {
        self.result_displayed
    }

    /// Route a token to its handler.
    pub fn handle(&mut self, token: Token) {
        match token {
            Token::Clear => self.reset(),
            Token::Equals => self.evaluate(),
            Token::Operator(op) => self.push_operator(op),
            Token::Zero => self.push_zero(false),
            Token::DoubleZero => self.push_zero(true),
            Token::Dot => self.push_dot(),
            Token::Digit(d) => self.push_digit(d),
        }
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        self.expression = self.config.default_value.clone();
        self.result_displayed = false;
    }

    /// Evaluate the composed expression and replace it with the result.
    ///
    /// Incomplete expressions (empty, poisoned, or ending in an operator) are
    /// silently ignored. A failed evaluation, division by zero included,
    /// replaces the expression with the error marker.
    pub fn evaluate(&mut self) {
        if self.expression.is_empty() || self.expression == self.config.error_text {
            return;
        }
        if self.ends_with_operator() {
            return;
        }

        match self.evaluator.evaluate(&self.expression) {
            Ok(value) => {
                self.expression =
                    format_result(value, self.config.max_digits, self.config.exponent_digits);
                self.result_displayed = true;
            }
            Err(err) => {
                debug!(expression = %self.expression, %err, "evaluation failed");
                self.expression = self.config.error_text.clone();
                self.result_displayed = false;
            }
        }
    }

    /// Append an operator, replacing a trailing one (last operator wins).
    ///
    /// On a displayed result the operator continues from it, chaining the
    /// computation.
    pub fn push_operator(&mut self, op: Operator) {
        if self.result_displayed {
            self.result_displayed = false;
        }

        if self.expression.is_empty()
            || self.expression == self.config.default_value
            || self.expression == self.config.error_text
        {
            self.expression = self.config.default_value.clone();
        }

        if self.ends_with_operator() {
            self.expression.pop();
        }

        self.expression.push(op.symbol());
    }

    /// Append a zero or double-zero, suppressing redundant leading zeros.
    pub fn push_zero(&mut self, double: bool) {
        if self.result_displayed {
            self.expression = self.config.default_value.clone();
            self.result_displayed = false;
            return;
        }

        // The poisoned marker behaves like the default value.
        if self.expression == self.config.error_text {
            self.expression = self.config.default_value.clone();
        }

        let last = self.expression.chars().last();
        let operand = self.current_operand();

        // A bare "0" operand never accumulates further single zeros.
        if !double && last == Some('0') && operand == "0" {
            return;
        }

        if double {
            // A fresh operand cannot start with two zeros; collapse to one.
            if last.is_some_and(Operator::is_symbol) {
                self.expression.push('0');
                return;
            }
            // No doubling up on an all-zero operand or right after an
            // operator-digit boundary.
            if ALL_ZEROS.is_match(operand) || self.operator_in_last_two() {
                return;
            }
        }

        self.expression.push_str(if double { "00" } else { "0" });
    }

    /// Append a decimal point, at most one per operand.
    pub fn push_dot(&mut self) {
        if self.result_displayed {
            self.expression = "0.".to_string();
            self.result_displayed = false;
            return;
        }

        // The poisoned marker behaves like the default value.
        if self.expression == self.config.error_text {
            self.expression = self.config.default_value.clone();
        }

        if self.current_operand().contains('.') {
            return;
        }

        // An operand cannot open with a bare point.
        if self.ends_with_operator() {
            self.expression.push_str("0.");
        } else {
            self.expression.push('.');
        }
    }

    /// Append a digit, replacing the default or poisoned expression outright.
    pub fn push_digit(&mut self, d: char) {
        if self.result_displayed
            || self.expression == self.config.default_value
            || self.expression == self.config.error_text
        {
            self.expression = d.to_string();
            self.result_displayed = false;
        } else {
            self.expression.push(d);
        }
    }

    /// The operand currently being typed: everything after the last operator.
    fn current_operand(&self) -> &str {
        OPERATOR_CHAR
            .split(&self.expression)
            .last()
            .unwrap_or_default()
    }

    fn ends_with_operator(&self) -> bool {
        self.expression
            .chars()
            .last()
            .is_some_and(Operator::is_symbol)
    }

    /// Whether either of the last two characters is an operator.
    fn operator_in_last_two(&self) -> bool {
        self.expression
            .chars()
            .rev()
            .take(2)
            .any(Operator::is_symbol)
    }
}

//! Input tokens for the expression engine.
//!
//! A front end maps each physical control to exactly one token and feeds it to
//! the engine. The enum abstracts over the different input classes a keypad
//! produces.

/// A binary arithmetic operator on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operator symbols, in keypad order. Used to build the operator
    /// character-class matcher.
    pub const SYMBOLS: [char; 4] = ['+', '-', '*', '/'];

    /// The single-character symbol appended to the expression.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parse an operator from its symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Check whether a character is one of the operator symbols.
    pub fn is_symbol(c: char) -> bool {
        Self::SYMBOLS.contains(&c)
    }
}

/// One discrete unit of user input, routed to exactly one engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// Clear the expression back to its default ("AC").
    Clear,
    /// Evaluate the current expression ("=").
    Equals,
    /// Append or replace a trailing operator.
    Operator(Operator),
    /// The single-zero key.
    Zero,
    /// The double-zero key.
    DoubleZero,
    /// The decimal point key.
    Dot,
    /// A digit key.
    Digit(char),
}

impl Token {
    /// Map a raw control value to a token.
    ///
    /// Mirrors the dispatcher contract: named controls map to their token,
    /// and any otherwise-unrecognized single digit falls through to `Digit`.
    /// Everything else is `None` and left to the caller.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "AC" | "C" | "clear" => Some(Self::Clear),
            "=" | "equals" => Some(Self::Equals),
            "0" => Some(Self::Zero),
            "00" => Some(Self::DoubleZero),
            "." => Some(Self::Dot),
            _ => {
                let mut chars = value.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if let Some(op) = Operator::from_symbol(c) {
                    Some(Self::Operator(op))
                } else if c.is_ascii_digit() {
                    Some(Self::Digit(c))
                } else {
                    None
                }
            }
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

//! User actions and the operators they carry.
//!
//! Every click or keystroke becomes exactly one [`Action`]. Unary and
//! binary operators are separate variants so dispatch is an exhaustive
//! match rather than a comparison on operator symbols.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing actions from raw input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Digit out of range: {0} (expected 0-9)")]
    DigitOutOfRange(u8),
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Every digit, indexed by value.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Returns `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    /// Digit for an ASCII character `'0'..='9'`.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(InputError::DigitOutOfRange(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Binary operators held by the engine while awaiting a right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Symbol shown in the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "/",
        }
    }

    /// IEEE-754 evaluation; division by zero yields infinity or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

/// Operators applied immediately to the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Square,
    /// The keypad's `%` key: divides by 100.
    Percent,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Square => "x²",
            Self::Percent => "%",
        }
    }

    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Square => value * value,
            Self::Percent => value / 100.0,
        }
    }
}

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Digit(Digit),
    Decimal,
    Binary(BinaryOp),
    Unary(UnaryOp),
    Equals,
    Clear,
    Backspace,
}

impl Action {
    /// Digit action for a value 0-9.
    pub fn digit(value: u8) -> Result<Self, InputError> {
        Digit::try_from(value).map(Action::Digit)
    }

    /// Keypad label for this action.
    pub fn label(&self) -> String {
        match self {
            Action::Digit(d) => d.as_char().to_string(),
            Action::Decimal => ".".to_string(),
            Action::Binary(op) => op.symbol().to_string(),
            Action::Unary(op) => op.symbol().to_string(),
            Action::Equals => "=".to_string(),
            Action::Clear => "C".to_string(),
            Action::Backspace => "⌫".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_rejects_values_above_nine() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert_eq!(Action::digit(12), Err(InputError::DigitOutOfRange(12)));
    }

    #[test]
    fn digit_from_char_reads_ascii_digits() {
        assert_eq!(Digit::from_char('7').map(Digit::as_char), Some('7'));
        assert!(Digit::from_char('x').is_none());
    }

    #[test]
    fn digit_serializes_as_number() {
        let json = serde_json::to_string(&Action::digit(4).unwrap()).unwrap();
        assert_eq!(json, r#"{"Digit":4}"#);

        let bad: Result<Action, _> = serde_json::from_str(r#"{"Digit":11}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn binary_ops_follow_float_semantics() {
        assert_eq!(BinaryOp::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(BinaryOp::Subtract.apply(3.0, 4.0), -1.0);
        assert_eq!(BinaryOp::Multiply.apply(7.0, 2.0), 14.0);
        assert_eq!(BinaryOp::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert!(BinaryOp::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn unary_ops_apply_immediately() {
        assert_eq!(UnaryOp::Square.apply(5.0), 25.0);
        assert_eq!(UnaryOp::Percent.apply(50.0), 0.5);
    }

    #[test]
    fn labels_use_keypad_symbols() {
        assert_eq!(Action::Binary(BinaryOp::Multiply).label(), "×");
        assert_eq!(Action::Unary(UnaryOp::Square).to_string(), "x²");
        assert_eq!(Action::Clear.label(), "C");
    }
}

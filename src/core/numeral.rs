//! The number being typed.
//!
//! An [`Entry`] is either a structured [`Numeral`] (sign, integer digits,
//! fractional digits, decimal point flag) or a [`Literal`](Entry::Literal)
//! holding computed text outside the numeral grammar, such as `Infinity`,
//! `NaN` or `1e+21`. Editing a numeral is structural; editing a literal is
//! textual, after which the text is classified again.

use super::action::Digit;
use super::format::{format_number, parse_number};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal numeral as typed on the keypad.
///
/// Digit runs are kept verbatim, so leading zeros (`-05`) and the
/// transient trailing-point form (`0.`) are representable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numeral {
    pub(crate) negative: bool,
    pub(crate) integer_digits: String,
    pub(crate) fractional_digits: String,
    pub(crate) has_decimal_point: bool,
}

impl Numeral {
    /// The numeral `0`.
    pub fn zero() -> Self {
        Self::from_digit(Digit::ZERO)
    }

    /// A single-digit numeral.
    pub fn from_digit(digit: Digit) -> Self {
        Self {
            negative: false,
            integer_digits: digit.as_char().to_string(),
            fractional_digits: String::new(),
            has_decimal_point: false,
        }
    }

    /// Parse text of the form `[-]digits[.digits]`.
    ///
    /// Returns `None` for anything else, including exponent forms.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (integer, fraction) = match body.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (body, None),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) {
            return None;
        }
        if let Some(fraction) = fraction {
            if !all_digits(fraction) {
                return None;
            }
        }

        Some(Self {
            negative,
            integer_digits: integer.to_string(),
            fractional_digits: fraction.unwrap_or_default().to_string(),
            has_decimal_point: fraction.is_some(),
        })
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn integer_digits(&self) -> &str {
        &self.integer_digits
    }

    pub fn fractional_digits(&self) -> &str {
        &self.fractional_digits
    }

    pub fn has_decimal_point(&self) -> bool {
        self.has_decimal_point
    }

    /// Length of the text form.
    pub fn len(&self) -> usize {
        usize::from(self.negative)
            + self.integer_digits.len()
            + usize::from(self.has_decimal_point)
            + self.fractional_digits.len()
    }

    /// Always false for a well-formed numeral.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_digit(&mut self, digit: Digit) {
        if self.has_decimal_point {
            self.fractional_digits.push(digit.as_char());
        } else {
            self.integer_digits.push(digit.as_char());
        }
    }

    /// Drop the last character of the text form.
    fn pop(&mut self) {
        if !self.fractional_digits.is_empty() {
            self.fractional_digits.pop();
        } else if self.has_decimal_point {
            self.has_decimal_point = false;
        } else {
            self.integer_digits.pop();
        }
    }

    /// Numeric value of the numeral.
    pub fn value(&self) -> f64 {
        parse_number(&self.to_string()).unwrap_or(0.0)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer_digits)?;
        if self.has_decimal_point {
            f.write_str(".")?;
            f.write_str(&self.fractional_digits)?;
        }
        Ok(())
    }
}

/// The value in the primary display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    /// A structured decimal numeral.
    Numeral(Numeral),
    /// Computed text outside the numeral grammar.
    Literal(String),
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl Entry {
    pub fn zero() -> Self {
        Entry::Numeral(Numeral::zero())
    }

    pub fn from_digit(digit: Digit) -> Self {
        Entry::Numeral(Numeral::from_digit(digit))
    }

    /// The transient `0.` form typed after a fresh decimal press.
    pub fn zero_point() -> Self {
        let mut numeral = Numeral::zero();
        numeral.has_decimal_point = true;
        Entry::Numeral(numeral)
    }

    /// Classify display text as a numeral or a literal.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        match Numeral::parse(&text) {
            Some(numeral) => Entry::Numeral(numeral),
            None => Entry::Literal(text),
        }
    }

    /// The canonical text for a computed value.
    pub fn from_value(value: f64) -> Self {
        Self::from_text(format_number(value))
    }

    /// True only for the exact text `0`.
    pub fn is_zero(&self) -> bool {
        matches!(
            self,
            Entry::Numeral(n) if !n.negative && !n.has_decimal_point && n.integer_digits == "0"
        )
    }

    pub fn has_decimal_point(&self) -> bool {
        match self {
            Entry::Numeral(n) => n.has_decimal_point,
            Entry::Literal(text) => text.contains('.'),
        }
    }

    /// Length of the text form.
    pub fn len(&self) -> usize {
        match self {
            Entry::Numeral(n) => n.len(),
            Entry::Literal(text) => text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric value, or `None` when the text does not read as a number.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Entry::Numeral(n) => Some(n.value()),
            Entry::Literal(text) => parse_number(text),
        }
    }

    /// Append a digit to the text.
    pub fn push_digit(&mut self, digit: Digit) {
        match self {
            Entry::Numeral(n) => n.push_digit(digit),
            Entry::Literal(text) => {
                let mut text = std::mem::take(text);
                text.push(digit.as_char());
                *self = Entry::from_text(text);
            }
        }
    }

    /// Append a decimal point. Callers check [`has_decimal_point`](Self::has_decimal_point) first.
    pub fn push_decimal_point(&mut self) {
        match self {
            Entry::Numeral(n) => n.has_decimal_point = true,
            Entry::Literal(text) => {
                let mut text = std::mem::take(text);
                text.push('.');
                *self = Entry::from_text(text);
            }
        }
    }

    /// Remove the last character, collapsing to `0` when a single digit
    /// (or a negative single digit) remains.
    pub fn backspace(&mut self) {
        let len = self.len();
        if len <= 1 || (len == 2 && self.to_string().starts_with('-')) {
            *self = Entry::zero();
            return;
        }
        match self {
            Entry::Numeral(n) => n.pop(),
            Entry::Literal(text) => {
                let mut text = std::mem::take(text);
                text.pop();
                *self = Entry::from_text(text);
            }
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Numeral(n) => n.fmt(f),
            Entry::Literal(text) => f.write_str(text),
        }
    }
}

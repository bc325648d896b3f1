//! Keyboard key to action mapping.

use crate::core::{Action, BinaryOp, Digit, UnaryOp};

/// Map a `KeyboardEvent.key` value to an action.
///
/// `*` is multiply; `Enter` and `=` both evaluate. Unmapped keys yield
/// `None`. There is no key for squaring.
///
/// # Example
///
/// ```rust
/// use reckon::core::{Action, BinaryOp};
/// use reckon::input::key_to_action;
///
/// assert_eq!(key_to_action("*"), Some(Action::Binary(BinaryOp::Multiply)));
/// assert_eq!(key_to_action("Enter"), Some(Action::Equals));
/// assert_eq!(key_to_action("Tab"), None);
/// ```
pub fn key_to_action(key: &str) -> Option<Action> {
    let action = match key {
        "." => Action::Decimal,
        "+" => Action::Binary(BinaryOp::Add),
        "-" => Action::Binary(BinaryOp::Subtract),
        "*" => Action::Binary(BinaryOp::Multiply),
        "/" => Action::Binary(BinaryOp::Divide),
        "%" => Action::Unary(UnaryOp::Percent),
        "Enter" | "=" => Action::Equals,
        "Escape" => Action::Clear,
        "Backspace" => Action::Backspace,
        _ => return single_digit(key).map(Action::Digit),
    };
    Some(action)
}

fn single_digit(key: &str) -> Option<Digit> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::from_char(c),
        _ => None,
    }
}

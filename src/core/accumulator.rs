//! Input accumulator: digits, decimal point, backspace and clear.
//!
//! Each function is pure: it takes the current state and returns the next
//! one, or the reason the press was ignored.

use super::action::Digit;
use super::numeral::Entry;
use super::state::CalcState;
use super::transition::{InputPolicy, Rejection};

/// Type a digit.
///
/// A fresh number starts when the display shows exactly `0` or the reset
/// flag is set; otherwise the digit is appended.
pub fn input_digit(
    state: &CalcState,
    digit: Digit,
    policy: &InputPolicy,
) -> Result<CalcState, Rejection> {
    let mut next = state.clone();
    if next.current.is_zero() || next.reset_input {
        next.current = Entry::from_digit(digit);
        next.reset_input = false;
    } else {
        policy.check_append(&next.current)?;
        next.current.push_digit(digit);
    }
    Ok(next)
}

/// Type a decimal point.
pub fn input_decimal(state: &CalcState, policy: &InputPolicy) -> Result<CalcState, Rejection> {
    let mut next = state.clone();
    if next.reset_input {
        next.current = Entry::zero_point();
        next.reset_input = false;
        return Ok(next);
    }
    if next.current.has_decimal_point() {
        return Err(Rejection::DuplicateDecimalPoint);
    }
    policy.check_append(&next.current)?;
    next.current.push_decimal_point();
    Ok(next)
}

/// Remove the last character of the current value. The reset flag is kept.
pub fn backspace(state: &CalcState) -> CalcState {
    let mut next = state.clone();
    next.current.backspace();
    next
}

/// Back to the initial state.
pub fn clear(_state: &CalcState) -> CalcState {
    CalcState::default()
}

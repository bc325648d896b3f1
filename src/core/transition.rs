//! The pure transition function.
//!
//! [`transition`] dispatches one [`Action`] against a [`CalcState`] and
//! returns the next state together with whether the action took effect.
//! Ignored actions return the input state unchanged.

use super::accumulator;
use super::action::Action;
use super::engine;
use super::numeral::Entry;
use super::state::CalcState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action was ignored.
///
/// Rejections are never shown to the user; the display simply does not
/// change.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("No operator is pending")]
    NoPendingOperator,

    #[error("Operand is not a number")]
    NonNumericOperand,

    #[error("Current value already has a decimal point")]
    DuplicateDecimalPoint,

    #[error("Entry already holds {limit} characters")]
    EntryFull { limit: usize },
}

/// Whether an action took effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied => None,
            Outcome::Ignored(rejection) => Some(rejection),
        }
    }
}

/// Result of a single transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub state: CalcState,
    pub outcome: Outcome,
}

impl Step {
    fn from_result(previous: &CalcState, result: Result<CalcState, Rejection>) -> Self {
        match result {
            Ok(state) => Step {
                state,
                outcome: Outcome::Applied,
            },
            Err(rejection) => Step {
                state: previous.clone(),
                outcome: Outcome::Ignored(rejection),
            },
        }
    }
}

/// Limits on typed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPolicy {
    /// Maximum text length reachable by appending; `None` is unlimited.
    pub max_entry_len: Option<usize>,
}

impl InputPolicy {
    pub(crate) fn check_append(&self, entry: &Entry) -> Result<(), Rejection> {
        match self.max_entry_len {
            Some(limit) if entry.len() >= limit => Err(Rejection::EntryFull { limit }),
            _ => Ok(()),
        }
    }
}

/// Apply one action to a state.
///
/// # Example
///
/// ```rust
/// use reckon::core::{transition, Action, BinaryOp, CalcState, InputPolicy};
///
/// let policy = InputPolicy::default();
/// let actions = [
///     Action::digit(3).unwrap(),
///     Action::Binary(BinaryOp::Add),
///     Action::digit(4).unwrap(),
///     Action::Binary(BinaryOp::Multiply),
///     Action::digit(2).unwrap(),
///     Action::Equals,
/// ];
///
/// let state = actions.iter().fold(CalcState::new(), |state, action| {
///     transition(&state, *action, &policy).state
/// });
/// assert_eq!(state.display().primary, "14");
/// ```
pub fn transition(state: &CalcState, action: Action, policy: &InputPolicy) -> Step {
    let result = match action {
        Action::Digit(digit) => accumulator::input_digit(state, digit, policy),
        Action::Decimal => accumulator::input_decimal(state, policy),
        Action::Backspace => Ok(accumulator::backspace(state)),
        Action::Clear => Ok(accumulator::clear(state)),
        Action::Binary(op) => Ok(engine::select_operator(state, op)),
        Action::Unary(op) => engine::apply_unary(state, op),
        Action::Equals => engine::calculate(state),
    };
    Step::from_result(state, result)
}

/// [`transition`] with the default (unlimited) input policy.
pub fn apply(state: &CalcState, action: Action) -> Step {
    transition(state, action, &InputPolicy::default())
}

//! The calculator state record and its observable phase.

use super::action::BinaryOp;
use super::numeral::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary operator waiting for its right operand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pending {
    /// Left operand captured when the operator was chosen.
    pub left: Entry,
    pub op: BinaryOp,
}

/// Complete calculator state.
///
/// The left operand and operator live together in [`Pending`], so a
/// pending operator always has an operand and vice versa.
///
/// # Example
///
/// ```rust
/// use reckon::core::{CalcState, Phase};
///
/// let state = CalcState::default();
/// assert_eq!(state.current.to_string(), "0");
/// assert_eq!(state.phase(), Phase::Idle);
/// assert!(!state.reset_input);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcState {
    /// The value being typed or last computed.
    pub current: Entry,
    pub pending: Option<Pending>,
    /// When set, the next digit or decimal press starts a fresh number.
    pub reset_input: bool,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.pending {
            Some(_) => Phase::PendingOperator,
            None => Phase::Idle,
        }
    }

    /// Produce the two display strings for this state.
    pub fn display(&self) -> DisplaySnapshot {
        let history = match &self.pending {
            Some(pending) => format!("{} {}", pending.left, pending.op.symbol()),
            None => String::new(),
        };
        DisplaySnapshot {
            primary: self.current.to_string(),
            history,
        }
    }
}

/// Observable phase of the operator engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No operator pending.
    Idle,
    /// An operator was chosen and awaits its right operand.
    PendingOperator,
}

impl Phase {
    /// Stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::PendingOperator => "PendingOperator",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the presentation layer renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Current value, verbatim.
    pub primary: String,
    /// `"<left> <op>"` while an operator is pending, else empty.
    pub history: String,
}

//! Invariant violations found in a state record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which entry of the state a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Current,
    PendingLeft,
}

impl Slot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::PendingLeft => "pending left operand",
        }
    }
}

/// Errors found when checking a state record's invariants
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvariantViolation {
    #[error("The {} entry is empty", .0.name())]
    EmptyEntry(Slot),

    #[error("The {} entry has no integer digits", .0.name())]
    MissingIntegerDigits(Slot),

    #[error("The {} entry contains non-digit characters: {text:?}", .slot.name())]
    InvalidDigits { slot: Slot, text: String },

    #[error("The {} entry has fractional digits but no decimal point", .0.name())]
    FractionWithoutPoint(Slot),

    #[error("The {} entry holds numeral text as a literal: {text:?}", .slot.name())]
    UnclassifiedLiteral { slot: Slot, text: String },
}

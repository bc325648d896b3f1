//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Numerals and number text conversion
//! - Actions and operators
//! - The state record and the pure transition function
//! - Immutable transition logging
//!
//! Nothing in this module performs I/O or logging.

mod accumulator;
mod action;
mod engine;
mod format;
mod history;
mod numeral;
mod state;
mod transition;

pub use accumulator::{backspace, clear, input_decimal, input_digit};
pub use action::{Action, BinaryOp, Digit, InputError, UnaryOp};
pub use engine::{apply_unary, calculate, select_operator};
pub use format::{format_number, parse_number};
pub use history::{ActionRecord, TransitionLog};
pub use numeral::{Entry, Numeral};
pub use state::{CalcState, DisplaySnapshot, Pending, Phase};
pub use transition::{apply, transition, InputPolicy, Outcome, Rejection, Step};

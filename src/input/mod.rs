//! Mapping raw user input to actions.
//!
//! Keyboard keys and keypad clicks both resolve to the same
//! [`Action`](crate::core::Action) values, so the calculator never needs to
//! know where an action came from.

mod keyboard;
mod keypad;

pub use keyboard::key_to_action;
pub use keypad::{label_to_action, ButtonDef, Keypad};

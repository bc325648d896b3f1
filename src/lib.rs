//! Reckon: a pure functional keypad calculator core
//!
//! Reckon follows the "pure core, imperative shell" layout. The core is a
//! small state machine that accumulates typed digits, holds at most one
//! pending binary operator and evaluates it with IEEE-754 arithmetic. The
//! shell owns that state, forwards display snapshots to a presentation
//! layer and logs what happened.
//!
//! # Core Concepts
//!
//! - **Entry**: The number being typed, as a structured numeral or computed literal text
//! - **Action**: One tagged value per click or keystroke
//! - **Transition**: A pure function from state and action to the next state
//! - **Calculator**: The owning controller that refreshes the display
//!
//! # Example
//!
//! ```rust
//! use reckon::core::{apply, Action, BinaryOp, CalcState, UnaryOp};
//!
//! let state = CalcState::new();
//! let state = apply(&state, Action::digit(5).unwrap()).state;
//! let state = apply(&state, Action::Unary(UnaryOp::Square)).state;
//! assert_eq!(state.display().primary, "25");
//!
//! let state = apply(&state, Action::Binary(BinaryOp::Divide)).state;
//! let state = apply(&state, Action::digit(0).unwrap()).state;
//! let state = apply(&state, Action::Equals).state;
//! assert_eq!(state.display().primary, "Infinity");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod input;
pub mod shell;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use config::{CalculatorConfig, ConfigError};
pub use core::{Action, BinaryOp, CalcState, DisplaySnapshot, Outcome, UnaryOp};
pub use shell::{Calculator, DisplaySink};

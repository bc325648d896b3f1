//! Validation-based invariant enforcement for state records.
//!
//! States produced by [`transition`](crate::core::transition) are well
//! formed by construction. States arriving from outside (deserialized from
//! a host, or seeded through the builder) are checked here using
//! Stillwater's `Validation` type, which accumulates ALL violations instead
//! of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use reckon::core::CalcState;
//! use reckon::enforcement::check_state;
//!
//! assert!(check_state(&CalcState::default()).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_state, validate_state};
pub use violations::{InvariantViolation, Slot};

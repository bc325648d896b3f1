//! Imperative shell around the pure core.
//!
//! The [`Calculator`] owns the single state record, runs each action
//! through [`transition`](crate::core::transition), hands display
//! snapshots to a [`DisplaySink`] and emits `tracing` events. Nothing in
//! here decides calculator semantics.

mod calculator;
mod display;

pub use calculator::Calculator;
pub use display::{Detached, DisplaySink, RecordingDisplay};

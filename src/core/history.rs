//! Transition log for a running session.
//!
//! [`TransitionLog::record`] returns a new log with the record appended,
//! leaving the original untouched. [`TransitionLog::push`] appends in place
//! and is what a long-running owner should use, since `record` copies every
//! earlier record. Both drop the oldest record once a capacity is reached.

use super::action::Action;
use super::state::Phase;
use super::transition::{Outcome, Rejection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched action.
///
/// # Example
///
/// ```rust
/// use reckon::core::{Action, ActionRecord, Outcome, Phase};
/// use chrono::Utc;
///
/// let record = ActionRecord {
///     action: Action::digit(5).unwrap(),
///     outcome: Outcome::Applied,
///     from: Phase::Idle,
///     to: Phase::Idle,
///     display: "5".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(record.outcome.is_applied());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action: Action,
    pub outcome: Outcome,
    /// Phase before the action
    pub from: Phase,
    /// Phase after the action
    pub to: Phase,
    /// Primary display text after the action
    pub display: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded, log of dispatched actions.
///
/// # Example
///
/// ```rust
/// use reckon::core::{Action, ActionRecord, BinaryOp, Outcome, Phase, TransitionLog};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(ActionRecord {
///     action: Action::Binary(BinaryOp::Add),
///     outcome: Outcome::Applied,
///     from: Phase::Idle,
///     to: Phase::PendingOperator,
///     display: "3".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.get_path(), vec![Phase::Idle, Phase::PendingOperator]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<ActionRecord>,
    capacity: Option<usize>,
}

impl TransitionLog {
    /// Create a new empty, unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log keeping at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Record an action, returning a new log.
    ///
    /// The existing log is not modified. This copies the current records;
    /// use [`push`](Self::push) when the log is owned.
    pub fn record(&self, record: ActionRecord) -> Self {
        let mut next = self.clone();
        next.push(record);
        next
    }

    /// Append a record in place, dropping the oldest past capacity.
    pub fn push(&mut self, record: ActionRecord) {
        self.records.push(record);
        if let Some(capacity) = self.capacity {
            let excess = self.records.len().saturating_sub(capacity);
            self.records.drain(..excess);
        }
    }

    /// Phases traversed: the first record's starting phase, then the
    /// phase after each record.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// Time between the first and last record.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Rejections in the order they happened.
    pub fn rejections(&self) -> impl Iterator<Item = (&Action, &Rejection)> + '_ {
        self.records
            .iter()
            .filter_map(|record| match &record.outcome {
                Outcome::Ignored(rejection) => Some((&record.action, rejection)),
                Outcome::Applied => None,
            })
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

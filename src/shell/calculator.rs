//! The owning calculator controller.

use crate::config::CalculatorConfig;
use crate::core::{
    transition, Action, ActionRecord, CalcState, DisplaySnapshot, InputPolicy, Outcome, Phase,
    TransitionLog,
};
use crate::input::{key_to_action, label_to_action};
use crate::shell::display::{Detached, DisplaySink};
use chrono::Utc;
use tracing::{debug, trace};

/// Calculator that owns its state and drives a display.
///
/// Each dispatched action runs the pure [`transition`] and stores the
/// result. Applied actions refresh the display; ignored actions leave it
/// untouched.
///
/// # Example
///
/// ```rust
/// use reckon::shell::{Calculator, RecordingDisplay};
///
/// let mut calc = Calculator::with_display(RecordingDisplay::new());
/// for key in ["1", "2", "+", "3"] {
///     calc.press_key(key);
/// }
///
/// let shown = calc.display().latest().unwrap();
/// assert_eq!(shown.primary, "3");
/// assert_eq!(shown.history, "12 +");
/// ```
#[derive(Debug)]
pub struct Calculator<D: DisplaySink = Detached> {
    state: CalcState,
    policy: InputPolicy,
    log: Option<TransitionLog>,
    display: D,
}

impl Calculator<Detached> {
    /// Create a calculator with no display attached.
    pub fn new() -> Self {
        Self::with_display(Detached)
    }
}

impl Default for Calculator<Detached> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DisplaySink> Calculator<D> {
    /// Create a calculator in the initial state and render it once.
    pub fn with_display(display: D) -> Self {
        Self::from_parts(CalcState::default(), &CalculatorConfig::default(), display)
    }

    pub(crate) fn from_parts(state: CalcState, config: &CalculatorConfig, display: D) -> Self {
        let log = config.record_transitions.then(|| match config.log_capacity {
            Some(capacity) => TransitionLog::with_capacity(capacity),
            None => TransitionLog::new(),
        });
        let mut calculator = Self {
            state,
            policy: config.input_policy(),
            log,
            display,
        };
        let snapshot = calculator.snapshot();
        calculator.display.refresh(&snapshot);
        debug!(
            display = %snapshot.primary,
            max_entry_len = ?calculator.policy.max_entry_len,
            recording = calculator.log.is_some(),
            "Calculator ready"
        );
        calculator
    }

    /// Dispatch one action.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let from = self.state.phase();
        let step = transition(&self.state, action, &self.policy);
        self.state = step.state;
        let to = self.state.phase();

        match &step.outcome {
            Outcome::Applied => {
                let snapshot = self.state.display();
                self.display.refresh(&snapshot);
                debug!(
                    action = %action,
                    from = from.name(),
                    to = to.name(),
                    display = %snapshot.primary,
                    history = %snapshot.history,
                    "Applied action"
                );
            }
            Outcome::Ignored(reason) => {
                trace!(action = %action, phase = from.name(), reason = %reason, "Ignored action");
            }
        }

        if let Some(log) = &mut self.log {
            log.push(ActionRecord {
                action,
                outcome: step.outcome.clone(),
                from,
                to,
                display: self.state.current.to_string(),
                timestamp: Utc::now(),
            });
        }

        step.outcome
    }

    /// Dispatch a sequence of actions, returning how many were applied.
    pub fn dispatch_all<I>(&mut self, actions: I) -> usize
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .map(|action| self.dispatch(action))
            .filter(Outcome::is_applied)
            .count()
    }

    /// Handle a keyboard key. Returns `None` for unmapped keys.
    pub fn press_key(&mut self, key: &str) -> Option<Outcome> {
        let Some(action) = key_to_action(key) else {
            trace!(key, "Unmapped key");
            return None;
        };
        Some(self.dispatch(action))
    }

    /// Handle a click on the keypad button with this label.
    pub fn press_button(&mut self, label: &str) -> Option<Outcome> {
        let Some(action) = label_to_action(label) else {
            trace!(label, "Unknown button label");
            return None;
        };
        Some(self.dispatch(action))
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// What the display currently shows.
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.state.display()
    }

    pub fn policy(&self) -> &InputPolicy {
        &self.policy
    }

    /// The transition log, if recording was enabled.
    pub fn log(&self) -> Option<&TransitionLog> {
        self.log.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }
}

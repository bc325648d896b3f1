//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::core::CalcState;
use crate::enforcement::validate_state;
use crate::shell::{Calculator, Detached, DisplaySink};

/// Builder for constructing calculators with a fluent API.
pub struct CalculatorBuilder<D: DisplaySink = Detached> {
    config: CalculatorConfig,
    state: Option<CalcState>,
    display: D,
}

impl CalculatorBuilder<Detached> {
    /// Create a new builder with default configuration and no display.
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            state: None,
            display: Detached,
        }
    }
}

impl Default for CalculatorBuilder<Detached> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DisplaySink> CalculatorBuilder<D> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit how long typed input may grow.
    pub fn max_entry_len(mut self, limit: usize) -> Self {
        self.config.max_entry_len = Some(limit);
        self
    }

    /// Keep a transition log.
    pub fn record_transitions(mut self, enabled: bool) -> Self {
        self.config.record_transitions = enabled;
        self
    }

    /// Bound the transition log. Implies recording.
    pub fn log_capacity(mut self, capacity: usize) -> Self {
        self.config.record_transitions = true;
        self.config.log_capacity = Some(capacity);
        self
    }

    /// Start from a given state instead of the initial one.
    /// The state is checked when building.
    pub fn state(mut self, state: CalcState) -> Self {
        self.state = Some(state);
        self
    }

    /// Attach a display.
    pub fn display<D2: DisplaySink>(self, display: D2) -> CalculatorBuilder<D2> {
        CalculatorBuilder {
            config: self.config,
            state: self.state,
            display,
        }
    }

    /// Build the calculator.
    /// Returns an error if the configuration or seed state is invalid.
    pub fn build(self) -> Result<Calculator<D>, BuildError> {
        self.config.validate()?;

        let state = match self.state {
            Some(state) => {
                validate_state(&state).map_err(BuildError::InvalidState)?;
                state
            }
            None => CalcState::default(),
        };

        Ok(Calculator::from_parts(state, &self.config, self.display))
    }
}

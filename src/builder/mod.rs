//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for creating machine
//! configurations with minimal boilerplate, as an alternative to writing the
//! JSON wire format or the config structs by hand.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{MachineConfig, StateDef};
use std::collections::BTreeMap;

/// Builder for constructing machine configurations with a fluent API.
///
/// States are created on first mention: declaring a transition whose source
/// state was never named with [`state`](ConfigBuilder::state) registers it
/// with an otherwise empty transition table. Like every construction path,
/// the builder performs no referential validation; pair the result with
/// [`MachineConfig::validate`] to fail fast on dangling references.
///
/// # Example
///
/// ```rust
/// use turnstile::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("idle")
///     .transition("idle", "start", "running")
///     .transition("running", "stop", "idle")
///     .state("stalled")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.states.len(), 3);
/// ```
#[derive(Debug)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: BTreeMap<String, StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: BTreeMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with an empty transition table if new.
    pub fn state(mut self, id: impl Into<String>) -> Self {
        self.states.entry(id.into()).or_default();
        self
    }

    /// Declare an event-driven transition, registering the source state if
    /// it was not declared yet.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required pieces are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

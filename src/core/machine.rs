//! The state machine engine.

use super::config::{ConfigError, MachineConfig};
use super::history::StepHistory;
use std::mem;
use thiserror::Error;

/// Errors raised by transition operations.
///
/// Both variants leave the machine unchanged: a failed move never mutates the
/// current state or the history slots.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// Direct jump to a state the configuration does not define
    #[error("State '{0}' does not exist")]
    UnknownState(String),

    /// Event not defined in the current state's transition table
    #[error("Event '{event}' cannot be triggered from state '{state}'")]
    EventNotDefined { state: String, event: String },
}

/// The FSM engine.
///
/// Owns a configuration, the current state identifier, and one step of
/// undo/redo history. All operations are synchronous; the engine holds no
/// locks and expects external serialization if shared across threads.
///
/// # Example
///
/// ```rust
/// use turnstile::Machine;
///
/// let mut machine = Machine::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// machine.trigger("stop").unwrap();
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    config: MachineConfig,
    current: String,
    history: StepHistory,
}

impl Machine {
    /// Create a machine from a configuration.
    ///
    /// The current state becomes the configured initial state. No referential
    /// validation is performed: a dangling `initial` or transition target
    /// surfaces as a [`TransitionError`] when the machine is driven. Use
    /// [`MachineConfig::validate`] first to fail fast instead.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial.clone();
        Self {
            config,
            current,
            history: StepHistory::new(),
        }
    }

    /// Create a machine from the JSON wire format of its configuration.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        MachineConfig::from_json(source).map(Self::new)
    }

    /// The active state identifier. No side effects.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The owned configuration.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Jump directly to a state, bypassing the transition tables.
    ///
    /// On success the state being left fills the undo slot. The redo slot is
    /// left untouched, so a redo made available by an earlier `undo` survives
    /// an unrelated direct jump.
    ///
    /// # Errors
    ///
    /// [`TransitionError::UnknownState`] if `target` is not a configured
    /// state; the machine is unchanged.
    pub fn change_state(&mut self, target: &str) -> Result<(), TransitionError> {
        if !self.config.contains_state(target) {
            return Err(TransitionError::UnknownState(target.to_string()));
        }
        let left = mem::replace(&mut self.current, target.to_string());
        self.history.remember(left);
        Ok(())
    }

    /// Fire an event, moving along the current state's transition table.
    ///
    /// On success the state being left fills the undo slot; the redo slot is
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`TransitionError::EventNotDefined`] if the current state defines no
    /// transition for `event`. A current state missing from the states map
    /// (possible when the configuration was never validated) reports the same
    /// way. The machine is unchanged on error.
    pub fn trigger(&mut self, event: &str) -> Result<(), TransitionError> {
        let target = self
            .config
            .state(&self.current)
            .and_then(|state| state.target(event))
            .ok_or_else(|| TransitionError::EventNotDefined {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();
        let left = mem::replace(&mut self.current, target);
        self.history.remember(left);
        Ok(())
    }

    /// Return to the initial state and clear both history slots.
    pub fn reset(&mut self) {
        self.history.clear();
        self.current = self.config.initial.clone();
    }

    /// List state identifiers, in the states map's defined order
    /// (lexicographic by identifier).
    ///
    /// With `None` or an empty event identifier, lists every configured
    /// state. Otherwise lists exactly the states whose transition table
    /// contains the event. No side effects; an empty `Vec` if nothing
    /// matches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::{machine_config, Machine};
    ///
    /// let machine = Machine::new(machine_config! {
    ///     initial: "draft",
    ///     states: {
    ///         "draft" => { "submit" => "review" },
    ///         "review" => { "approve" => "published", "reject" => "draft" },
    ///         "published" => {},
    ///     }
    /// });
    ///
    /// assert_eq!(machine.states(None), vec!["draft", "published", "review"]);
    /// assert_eq!(machine.states(Some("submit")), vec!["draft"]);
    /// assert!(machine.states(Some("archive")).is_empty());
    /// ```
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None | Some("") => self.config.states.keys().map(String::as_str).collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, state)| state.handles(event))
                .map(|(id, _)| id.as_str())
                .collect(),
        }
    }

    /// Undo the latest state change.
    ///
    /// Returns `false` when nothing is undoable; this is a normal condition,
    /// not an error. On success the undone-from state becomes redoable and
    /// the undo slot drains, so a second immediate `undo` returns `false`.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.current) {
            Some(restored) => {
                self.current = restored;
                true
            }
            None => false,
        }
    }

    /// Redo the latest undone change.
    ///
    /// Returns `false` when nothing is redoable. On success the state being
    /// left refills the undo slot, so one further `undo` is available.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.current) {
            Some(restored) => {
                self.current = restored;
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available. No side effects.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available. No side effects.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Clear both history slots without changing the current state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

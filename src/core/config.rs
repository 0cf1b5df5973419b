//! Declarative machine configuration.
//!
//! A configuration is plain data: the identifier of the initial state and a
//! map from state identifier to state definition, where each definition is a
//! table of event-driven transitions. The JSON encoding of these types is the
//! wire format consumers hand to [`crate::core::Machine`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied (empty or blank input)
    #[error("A machine requires a configuration")]
    Missing,

    /// The configuration source could not be parsed
    #[error("Configuration is not valid: {0}")]
    Invalid(String),

    /// The initial state names no entry in the states map
    #[error("Initial state '{0}' is not defined in the configuration")]
    UnknownInitial(String),

    /// A transition targets a state with no entry in the states map
    #[error("Transition '{event}' from state '{from}' targets undefined state '{to}'")]
    DanglingTarget {
        from: String,
        event: String,
        to: String,
    },
}

/// Definition of a single state: its outgoing event-driven transitions.
///
/// A state with no outgoing transitions has an empty table; in JSON it may be
/// written as `{}` since the `transitions` field defaults when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event identifier to target state identifier
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDef {
    /// Target state for an event, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state defines a transition for an event.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Declarative description of a state machine.
///
/// Construction performs no referential validation: an `initial` or a
/// transition target that names no configured state surfaces as a lookup
/// failure when the machine is driven, not here. Callers who want fail-fast
/// configurations opt in via [`MachineConfig::validate`].
///
/// # Example
///
/// ```rust
/// use turnstile::MachineConfig;
///
/// let config = MachineConfig::from_json(
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
/// assert_eq!(config.initial, "idle");
/// assert!(config.contains_state("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Identifier of the starting state
    pub initial: String,
    /// State identifier to state definition
    pub states: BTreeMap<String, StateDef>,
}

impl MachineConfig {
    /// Load a configuration from its JSON wire format.
    ///
    /// Blank input means no configuration was supplied and yields
    /// [`ConfigError::Missing`]; anything else that fails to parse yields
    /// [`ConfigError::Invalid`].
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Err(ConfigError::Missing);
        }
        serde_json::from_str(source).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Check whether a state identifier is defined.
    pub fn contains_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Look up a state definition.
    pub fn state(&self, id: &str) -> Option<&StateDef> {
        self.states.get(id)
    }

    /// Verify referential integrity: the initial state exists and every
    /// transition targets an existing state.
    ///
    /// Never called implicitly. The engine tolerates dangling references and
    /// reports them as lookup failures at use time; this check is for callers
    /// who prefer to reject a malformed configuration up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.contains_state(&self.initial) {
            return Err(ConfigError::UnknownInitial(self.initial.clone()));
        }
        for (id, state) in &self.states {
            for (event, target) in &state.transitions {
                if !self.contains_state(target) {
                    return Err(ConfigError::DanglingTarget {
                        from: id.clone(),
                        event: event.clone(),
                        to: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> MachineConfig {
        MachineConfig::from_json(
            r#"{
                "initial": "idle",
                "states": {
                    "idle": { "transitions": { "start": "running" } },
                    "running": { "transitions": { "stop": "idle" } },
                    "done": {}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn from_json_parses_wire_format() {
        let config = sample_config();

        assert_eq!(config.initial, "idle");
        assert_eq!(config.states.len(), 3);
        assert_eq!(config.state("idle").unwrap().target("start"), Some("running"));
    }

    #[test]
    fn blank_input_is_a_missing_configuration() {
        assert!(matches!(
            MachineConfig::from_json(""),
            Err(ConfigError::Missing)
        ));
        assert!(matches!(
            MachineConfig::from_json("  \n\t"),
            Err(ConfigError::Missing)
        ));
    }

    #[test]
    fn malformed_input_is_invalid() {
        assert!(matches!(
            MachineConfig::from_json("{ not json"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            MachineConfig::from_json(r#"{"states": {}}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn state_without_transitions_deserializes_from_empty_object() {
        let config = sample_config();
        let done = config.state("done").unwrap();

        assert!(done.transitions.is_empty());
        assert!(!done.handles("start"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = sample_config();

        let json = serde_json::to_string(&config).unwrap();
        let reparsed = MachineConfig::from_json(&json).unwrap();

        assert_eq!(config, reparsed);
    }

    #[test]
    fn validate_accepts_closed_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn validate_flags_unknown_initial() {
        let mut config = sample_config();
        config.initial = "missing".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownInitial(state)) if state == "missing"
        ));
    }

    #[test]
    fn validate_flags_dangling_target() {
        let mut config = sample_config();
        config
            .states
            .get_mut("done")
            .unwrap()
            .transitions
            .insert("restart".to_string(), "nowhere".to_string());

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DanglingTarget { from, event, to })
                if from == "done" && event == "restart" && to == "nowhere"
        ));
    }

    #[test]
    fn target_and_handles_agree() {
        let config = sample_config();
        let idle = config.state("idle").unwrap();

        assert!(idle.handles("start"));
        assert_eq!(idle.target("start"), Some("running"));
        assert!(!idle.handles("stop"));
        assert_eq!(idle.target("stop"), None);
    }
}

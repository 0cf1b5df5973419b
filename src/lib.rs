//! Turnstile: a declarative finite state machine library
//!
//! Turnstile models a state machine as plain data: a configuration names an
//! initial state and, for every state, a table of event-driven transitions.
//! The engine tracks a single current state and applies transitions, keeping
//! one step of history so the latest change can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig` is the declarative description of the
//!   machine, loadable from JSON
//! - **Machine**: the engine; owns the current state and applies event-driven
//!   (`trigger`) or direct (`change_state`) moves
//! - **History**: a single-level undo slot and redo slot, drained and refilled
//!   by `undo`/`redo`
//!
//! # Example
//!
//! ```rust
//! use turnstile::{ConfigBuilder, Machine};
//!
//! let config = ConfigBuilder::new()
//!     .initial("idle")
//!     .transition("idle", "start", "running")
//!     .transition("running", "stop", "idle")
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(config);
//! assert_eq!(machine.state(), "idle");
//!
//! machine.trigger("start").unwrap();
//! assert_eq!(machine.state(), "running");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "idle");
//!
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "running");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{ConfigError, Machine, MachineConfig, StateDef, StepHistory, TransitionError};

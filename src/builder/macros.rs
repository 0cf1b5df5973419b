//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a declarative
/// literal mirroring the JSON wire format.
///
/// # Example
///
/// ```
/// use turnstile::{machine_config, Machine};
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle" },
///         "stalled" => {},
///     }
/// };
///
/// let machine = Machine::new(config);
/// assert_eq!(machine.state(), "idle");
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut states = ::std::collections::BTreeMap::new();
        $(
            #[allow(unused_mut)]
            let mut transitions = ::std::collections::BTreeMap::new();
            $(
                transitions.insert(
                    ::std::string::String::from($event),
                    ::std::string::String::from($target),
                );
            )*
            states.insert(
                ::std::string::String::from($state),
                $crate::core::StateDef { transitions },
            );
        )*
        $crate::core::MachineConfig {
            initial: ::std::string::String::from($initial),
            states,
        }
    }};
}

//! Turnstile Gate State Machine
//!
//! This example demonstrates the classic coin-operated turnstile driven
//! entirely by events.
//!
//! Key concepts:
//! - Declarative configuration via the machine_config! macro
//! - Event-driven transitions with trigger()
//! - Rejected events leave the machine where it was
//! - Single-step undo/redo of the latest change
//!
//! Run with: cargo run --example turnstile_gate

use turnstile::{machine_config, Machine};

fn main() {
    println!("=== Turnstile Gate State Machine ===\n");

    let mut machine = Machine::new(machine_config! {
        initial: "locked",
        states: {
            "locked" => { "coin" => "unlocked" },
            "unlocked" => { "push" => "locked" },
        }
    });

    println!("Initial state: {}\n", machine.state());

    println!("Pushing a locked turnstile does nothing:");
    match machine.trigger("push") {
        Ok(()) => println!("  unexpected success"),
        Err(err) => println!("  rejected: {err}"),
    }
    println!("  state is still: {}\n", machine.state());

    println!("Inserting a coin unlocks the gate:");
    machine.trigger("coin").unwrap();
    println!("  state: {}\n", machine.state());

    println!("Pushing through locks it again:");
    machine.trigger("push").unwrap();
    println!("  state: {}\n", machine.state());

    println!("Undo steps back exactly one change:");
    println!("  undo -> {} (state: {})", machine.undo(), machine.state());
    println!("  undo -> {} (state: {})\n", machine.undo(), machine.state());

    println!("Redo re-applies the undone change:");
    println!("  redo -> {} (state: {})\n", machine.redo(), machine.state());

    println!("States that handle the 'coin' event: {:?}", machine.states(Some("coin")));
    println!("All states: {:?}", machine.states(None));

    println!("\n=== Example Complete ===");
}

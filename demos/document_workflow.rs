//! Document Workflow State Machine
//!
//! This example demonstrates a review workflow built with the fluent
//! ConfigBuilder, mixing event-driven moves with direct jumps.
//!
//! Key concepts:
//! - Fluent configuration construction
//! - Opt-in referential validation before driving the machine
//! - Direct jumps with change_state()
//! - Querying which states handle an event
//!
//! Run with: cargo run --example document_workflow

use turnstile::{ConfigBuilder, Machine};

fn main() {
    println!("=== Document Workflow State Machine ===\n");

    let config = ConfigBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .transition("published", "retract", "draft")
        .build()
        .unwrap();

    config.validate().unwrap();
    println!("Configuration validated: every transition targets a real state\n");

    let mut machine = Machine::new(config);
    println!("Initial state: {}\n", machine.state());

    println!("Walking the happy path:");
    machine.trigger("submit").unwrap();
    println!("  submit  -> {}", machine.state());
    machine.trigger("approve").unwrap();
    println!("  approve -> {}\n", machine.state());

    println!("An editor pulls the document straight back to draft:");
    machine.change_state("draft").unwrap();
    println!("  state: {}\n", machine.state());

    println!("That jump is undoable like any other change:");
    machine.undo();
    println!("  after undo: {}\n", machine.state());

    println!("Which states handle 'reject'? {:?}", machine.states(Some("reject")));
    println!("Which states handle 'retract'? {:?}\n", machine.states(Some("retract")));

    println!("Reset returns to draft and forgets all history:");
    machine.reset();
    println!("  state: {}, undo available: {}", machine.state(), machine.can_undo());

    println!("\n=== Example Complete ===");
}

//! Definition File Walkthrough
//!
//! This example loads a chain from the line-based definition format and
//! runs it until it reaches an absorbing state.
//!
//! Key concepts:
//! - `N` and `A` definition lines
//! - Seeded runs through `ProcessConfig`
//! - Bounded runs with `Process::run`
//! - Reset back to the start state
//!
//! Run with: cargo run --example definition_run

use costchain::builder::ProcessBuilder;
use costchain::process::ProcessConfig;

const DEFINITION: &str = "\
# queue with a retry loop
N 4
A 0 1 0.7 1.0
A 0 0 0.3 0.5
A 1 2 0.8 4.0
A 1 0 0.2 2.5
A 2 3 1.0 0.0
";

fn main() {
    println!("=== Definition File Walkthrough ===\n");

    let mut process = ProcessBuilder::from_definition(DEFINITION)
        .unwrap()
        .config(ProcessConfig::default().with_seed(2024).with_history(true))
        .build()
        .unwrap();

    println!("Loaded {} states", process.num_states());
    for state in process.states() {
        println!(
            "  state {} -> {} transition(s), terminal: {}",
            state.id(),
            state.num_transitions(),
            state.is_terminal()
        );
    }

    let summary = process.run(50).unwrap();

    println!("\nRun finished:");
    println!("  steps taken:   {}", summary.steps);
    println!("  final state:   {}", summary.final_state);
    println!("  total cost:    {:.2}", summary.total_cost);
    println!("  reached end:   {}", summary.terminated);
    println!("  path:          {:?}", process.history().path());

    process.reset();
    println!(
        "\nAfter reset: state {}, cost {:.2}",
        process.current_state_id(),
        process.total_cost()
    );

    println!("\n=== Example Complete ===");
}

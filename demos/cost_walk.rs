//! Cost Walk
//!
//! This example declares a small chain with the `chain!` macro and steps
//! through it one transition at a time.
//!
//! Key concepts:
//! - Declarative topology with `chain!`
//! - Deterministic draws with `SequenceRandom`
//! - Per-step records and accumulated cost
//!
//! Run with: cargo run --example cost_walk

use costchain::chain;
use costchain::random::SequenceRandom;

fn main() {
    println!("=== Cost Walk ===\n");

    let mut process = chain! {
        states: 3;
        0 => 1 : 0.5 @ 3.0,
        0 => 0 : 0.5 @ 1.0,
        1 => 2 : 0.25 @ 10.0,
        1 => 0 : 0.75 @ 2.0,
    }
    .build_with_random(SequenceRandom::new(vec![0.9, 0.2, 0.6, 0.1, 0.1]))
    .unwrap();

    println!("Start in state {}\n", process.current_state_id());

    while !process.is_terminal().unwrap() {
        let Some(record) = process.step().unwrap() else {
            break;
        };
        println!(
            "  {} -> {}  draw {:.2}  cost {:>5.2}  total {:>6.2}",
            record.from,
            record.to,
            record.draw,
            record.cost,
            process.total_cost()
        );
    }

    println!("\nReached terminal state {}", process.current_state_id());
    println!("Total cost: {:.2}", process.total_cost());

    println!("\n=== Example Complete ===");
}

//! Async Effect Hooks Example
//!
//! Demonstrates attaching hooks to futures. The hooks run on the task that
//! awaits the future; nothing is spawned on their behalf.
//!
//! Run with: cargo run --example async_effects

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ripple::effect::prelude::*;

async fn fetch_price(symbol: &str) -> Result<f64, String> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    match symbol {
        "AAA" => Ok(101.5),
        "BBB" => Ok(42.0),
        other => Err(format!("unknown symbol {}", other)),
    }
}

#[tokio::main]
async fn main() {
    println!("Async Effect Hooks");
    println!("==================");

    let failures = Arc::new(AtomicUsize::new(0));

    for symbol in ["AAA", "ZZZ", "BBB"] {
        let counter = Arc::clone(&failures);
        let price = run_with_error_effect_async(
            move |e: &String| {
                counter.fetch_add(1, Ordering::SeqCst);
                eprintln!("  [warn] {}", e);
            },
            run_with_success_effect_async(
                |p: &f64| println!("  [log] {} = {:.2}", symbol, p),
                fetch_price(symbol),
            ),
        )
        .await;
        println!("{} -> {:?}", symbol, price);
    }

    // Hooked futures are ordinary futures and can be spawned like any other
    let handle = tokio::spawn(run_with_outcome_effect_async(
        |o: &Outcome<f64, String>| println!("  [trace] spawned lookup ok = {}", o.is_ok()),
        fetch_price("AAA"),
    ));
    let spawned = handle.await;
    println!("spawned -> {:?}", spawned);

    println!("\nFailures observed: {}", failures.load(Ordering::SeqCst));
}

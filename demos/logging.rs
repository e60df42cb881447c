//! Logging Example
//!
//! Demonstrates hanging logging off computations with effect hooks.
//! Shows patterns including:
//! - A generic `log` helper built on a success hook
//! - Logging a projection of a value instead of the value itself
//! - Reusable error and outcome hooks
//!
//! Run with: cargo run --example logging

use std::fmt::Display;

use ripple::effect::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u64,
    name: String,
    email: String,
}

#[derive(Debug)]
enum LookupError {
    NotFound(u64),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::NotFound(id) => write!(f, "user {} not found", id),
        }
    }
}

fn log<T: Display, E>(f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    run_with_success_effect(|x: &T| println!("  [log] {}", x), f)
}

fn add(x: i32, y: i32) -> Result<i32, LookupError> {
    log(|| Ok(x + y))
}

fn find_user(id: u64) -> Result<User, LookupError> {
    match id {
        1 => Ok(User {
            id,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }),
        _ => Err(LookupError::NotFound(id)),
    }
}

// ==================== Success Hooks ====================

fn example_success_hook() {
    println!("\n=== Example 1: Success Hook ===");

    let sum = add(1, 2);
    println!("add(1, 2) returned {:?}", sum.map_err(|e| e.to_string()));
}

// ==================== Projected Values ====================

fn example_projection() {
    println!("\n=== Example 2: Logging a Projection ===");

    // Log only the id, never the email
    let user = run_with_success_effect_map(
        |user: &User| user.id,
        |id| println!("  [audit] loaded user {}", id),
        || find_user(1),
    );
    println!("Caller still gets the full user: {:?}", user.map(|u| u.name));
}

// ==================== Reusable Hooks ====================

fn example_reusable_hooks() {
    println!("\n=== Example 3: Reusable Hooks ===");

    let on_error = build_error_effect(|e: &LookupError| eprintln!("  [warn] {}", e));
    let on_outcome = build_outcome_effect(|o: &Outcome<User, LookupError>| {
        println!("  [trace] lookup {}", if o.is_ok() { "hit" } else { "miss" })
    });

    for id in [1, 2, 3] {
        let result = on_error.run(|| on_outcome.run(|| find_user(id)));
        println!("find_user({}) -> ok = {}", id, result.is_ok());
    }
}

fn main() {
    println!("Logging Examples");
    println!("================");

    example_success_hook();
    example_projection();
    example_reusable_hooks();

    println!("\n=== All examples completed successfully! ===");
}

//! # Ripple
//!
//! > *Effects ripple outward; the value stays where it was.*
//!
//! Side-effect hooks around fallible computations.
//!
//! ## Philosophy
//!
//! Logging, metrics and tracing want to see what a computation produced, but
//! they should not be tangled into the computation itself, and they must never
//! change its result. **Ripple** keeps the two apart:
//! - the **computation** is a plain `FnOnce() -> Result<T, E>`;
//! - the **effect** is a callback that observes the outcome by reference;
//! - the caller gets back exactly what the computation returned.
//!
//! ## Quick Example
//!
//! ```rust
//! use ripple::effect::build_success_effect;
//! use std::cell::RefCell;
//!
//! let printed = RefCell::new(String::new());
//! let log = build_success_effect(|x: &i32| printed.borrow_mut().push_str(&x.to_string()));
//!
//! // The business logic knows nothing about logging
//! fn add(x: i32, y: i32) -> Result<i32, String> {
//!     Ok(x + y)
//! }
//!
//! let result = log.run(|| add(1, 2));
//! assert_eq!(result, Ok(3));
//! assert_eq!(*printed.borrow(), "3");
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing`: ready-made outcome logging through the `tracing` crate
//!   ([`effect::tracing`](crate::effect)).

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod effect;
pub mod testing;

// Re-exports
pub use effect::{
    build_error_effect, build_outcome_effect, build_success_effect, build_success_effect_map,
    run_with_error_effect, run_with_outcome_effect, run_with_success_effect,
    run_with_success_effect_map, Outcome,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::effect::prelude::*;
}

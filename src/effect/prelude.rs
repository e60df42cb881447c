//! Prelude module for convenient imports.
//!
//! ```rust
//! use ripple::effect::prelude::*;
//!
//! let hook = build_outcome_effect(|o: &Outcome<i32, String>| assert!(o.is_ok()));
//! assert_eq!(hook.run(|| Ok(2 + 2)), Ok(4));
//! ```

// Base combinators
pub use crate::effect::run::{
    run_with_error_effect, run_with_outcome_effect, run_with_success_effect,
    run_with_success_effect_map, Outcome,
};

// Builders
pub use crate::effect::builder::{
    build_error_effect, build_outcome_effect, build_success_effect, build_success_effect_map,
    ErrorEffect, MappedSuccessEffect, OutcomeEffect, SuccessEffect,
};

// Async
pub use crate::effect::future::{
    run_with_error_effect_async, run_with_outcome_effect_async, run_with_success_effect_async,
    run_with_success_effect_map_async,
};

// Tracing (when tracing feature is enabled)
#[cfg(feature = "tracing")]
pub use crate::effect::tracing::{run_traced, traced, Traced};

//! Side-effect hooks around fallible computations.
//!
//! A computation here is any `FnOnce() -> Result<T, E>`. The combinators in
//! this module run it, hand a borrow of the outcome to a callback at a fixed
//! point, and return the outcome untouched:
//!
//! | combinator | callback runs | callback sees |
//! |------------|---------------|---------------|
//! | [`run_with_success_effect`] | on `Ok` | `&T` |
//! | [`run_with_success_effect_map`] | on `Ok` | `transform(&T)` |
//! | [`run_with_error_effect`] | on `Err` | `&E` |
//! | [`run_with_outcome_effect`] | always | `&Result<T, E>` |
//!
//! Each has a builder ([`build_success_effect`] and friends) that binds the
//! callback once and wraps any number of computations afterwards, and an async
//! form in [`future`] for computations that are futures.
//!
//! # Example
//!
//! ```rust
//! use ripple::effect::prelude::*;
//! use std::cell::RefCell;
//!
//! #[derive(Debug, PartialEq)]
//! struct IllegalState(String);
//!
//! let log = RefCell::new(Vec::new());
//! let failing = || Err::<i32, _>(IllegalState("boom".to_string()));
//!
//! let result = run_with_error_effect(|e: &IllegalState| log.borrow_mut().push(e.0.clone()), failing);
//! assert_eq!(result, Err(IllegalState("boom".to_string())));
//! assert_eq!(*log.borrow(), vec!["boom".to_string()]);
//!
//! let result = run_with_success_effect(|_: &i32| log.borrow_mut().push("never".into()), failing);
//! assert_eq!(result, Err(IllegalState("boom".to_string())));
//! assert_eq!(log.borrow().len(), 1);
//! ```
//!
//! # Callbacks that fail
//!
//! Callbacks return `()`, so the only way one can fail is by panicking. The
//! combinators do not catch panics: the panic unwinds out of the call and the
//! computation's outcome, already produced, is dropped with it. Keep business
//! logic out of callbacks.

pub mod builder;
pub mod future;
pub mod prelude;
pub mod run;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use builder::{
    build_error_effect, build_outcome_effect, build_success_effect, build_success_effect_map,
    ErrorEffect, MappedSuccessEffect, OutcomeEffect, SuccessEffect,
};
pub use run::{
    run_with_error_effect, run_with_outcome_effect, run_with_success_effect,
    run_with_success_effect_map, Outcome,
};

#[cfg(feature = "tracing")]
pub use self::tracing::{run_traced, traced, Traced};

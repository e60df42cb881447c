//! Async counterparts of the base combinators.
//!
//! The computation is a future resolving to an [`Outcome`]. The hooks are
//! attached with the `futures` inspect adapters, so the future is polled on the
//! caller's task exactly as if it were awaited directly; nothing is spawned.
//!
//! ```rust
//! use ripple::effect::future::run_with_error_effect_async;
//!
//! async fn fetch(id: u32) -> Result<String, String> {
//!     Err(format!("user {} not found", id))
//! }
//!
//! # tokio_test::block_on(async {
//! let mut errors = Vec::new();
//! let result = run_with_error_effect_async(|e: &String| errors.push(e.clone()), fetch(7)).await;
//!
//! assert_eq!(result, Err("user 7 not found".to_string()));
//! assert_eq!(errors, vec!["user 7 not found".to_string()]);
//! # });
//! ```

use std::future::Future;

use futures::{FutureExt, TryFutureExt};

use crate::effect::run::Outcome;

/// Await `compute` and, if it succeeds, call `action` with the value.
pub async fn run_with_success_effect_async<T, E, A, F>(action: A, compute: F) -> Outcome<T, E>
where
    A: FnOnce(&T),
    F: Future<Output = Outcome<T, E>>,
{
    compute.inspect_ok(action).await
}

/// Await `compute` and, if it succeeds, call `action` with `transform(&value)`.
///
/// The untransformed value is returned.
pub async fn run_with_success_effect_map_async<T, R, E, M, A, F>(
    transform: M,
    action: A,
    compute: F,
) -> Outcome<T, E>
where
    M: FnOnce(&T) -> R,
    A: FnOnce(R),
    F: Future<Output = Outcome<T, E>>,
{
    compute.inspect_ok(|value| action(transform(value))).await
}

/// Await `compute` and, if it fails, call `action` with the error before
/// returning it.
pub async fn run_with_error_effect_async<T, E, A, F>(action: A, compute: F) -> Outcome<T, E>
where
    A: FnOnce(&E),
    F: Future<Output = Outcome<T, E>>,
{
    compute.inspect_err(action).await
}

/// Await `compute` and call `action` with its outcome, whichever way it went.
///
/// # Example
///
/// ```rust
/// use ripple::effect::future::run_with_outcome_effect_async;
/// use ripple::effect::Outcome;
///
/// # tokio_test::block_on(async {
/// let mut seen = None;
/// let result = run_with_outcome_effect_async(
///     |o: &Outcome<u8, ()>| seen = Some(o.is_ok()),
///     async { Ok(5) },
/// )
/// .await;
///
/// assert_eq!(result, Ok(5));
/// assert_eq!(seen, Some(true));
/// # });
/// ```
pub async fn run_with_outcome_effect_async<T, E, A, F>(action: A, compute: F) -> Outcome<T, E>
where
    A: FnOnce(&Outcome<T, E>),
    F: Future<Output = Outcome<T, E>>,
{
    compute.inspect(action).await
}

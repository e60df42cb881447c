//! Tracing support for effect hooks.
//!
//! Logging the result of a computation is the most common side effect, so
//! this module provides it ready-made on top of [`run_with_outcome_effect`].
//! Feature-gated behind `#[cfg(feature = "tracing")]`.
//!
//! Successful outcomes are logged at `DEBUG`, failures at `WARN`. The
//! computation itself runs inside a `debug` span carrying the label, so any
//! events it emits are attributed to it as well.

use std::borrow::Cow;
use std::fmt::Debug;

use crate::effect::run::{run_with_outcome_effect, Outcome};

fn log_outcome<T: Debug, E: Debug>(outcome: &Outcome<T, E>) {
    match outcome {
        Ok(value) => tracing::debug!(?value, "computation succeeded"),
        Err(error) => tracing::warn!(?error, "computation failed"),
    }
}

/// Run `compute` inside a span labelled `label` and log its outcome.
///
/// The outcome is returned unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use ripple::effect::tracing::run_traced;
///
/// let total = run_traced("sum_order", || Ok::<_, String>(19 + 23));
/// assert_eq!(total, Ok(42));
/// ```
pub fn run_traced<T, E, C>(label: &str, compute: C) -> Outcome<T, E>
where
    T: Debug,
    E: Debug,
    C: FnOnce() -> Outcome<T, E>,
{
    let span = tracing::debug_span!("effect", label = %label);
    let _enter = span.enter();
    run_with_outcome_effect(log_outcome, compute)
}

/// A reusable [`run_traced`] with its label bound.
///
/// Created by [`traced`].
#[derive(Debug, Clone)]
pub struct Traced {
    label: Cow<'static, str>,
}

impl Traced {
    /// The label attached to every span this wrapper opens.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run `compute` inside this wrapper's span and log its outcome.
    pub fn run<T, E, C>(&self, compute: C) -> Outcome<T, E>
    where
        T: Debug,
        E: Debug,
        C: FnOnce() -> Outcome<T, E>,
    {
        run_traced(&self.label, compute)
    }
}

/// Bind `label` into a reusable tracing wrapper.
///
/// ```rust,ignore
/// use ripple::effect::tracing::traced;
///
/// let db = traced("db");
/// let user = db.run(|| Ok::<_, String>("ada"));
/// let missing = db.run(|| Err::<&str, _>("no such user".to_string()));
/// ```
pub fn traced(label: impl Into<Cow<'static, str>>) -> Traced {
    Traced {
        label: label.into(),
    }
}

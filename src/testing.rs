//! Testing utilities for code that hangs side effects off its computations.
//!
//! The question a test usually wants answered is "which callbacks ran, and
//! with what?". [`Recorder`] answers it: hand out its recording callbacks in
//! place of a logger or metrics sink, then inspect what was captured.
//!
//! # Examples
//!
//! ## Recording callbacks
//!
//! ```rust
//! use ripple::effect::run_with_success_effect;
//! use ripple::testing::Recorder;
//!
//! let recorder = Recorder::new();
//! let result = run_with_success_effect(recorder.record(), || Ok::<_, String>(1 + 2));
//!
//! assert_eq!(result, Ok(3));
//! assert_eq!(recorder.entries(), vec![3]);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use ripple::effect::{run_with_error_effect, run_with_success_effect};
//! use ripple::testing::Recorder;
//! use ripple::{assert_not_recorded, assert_recorded};
//!
//! let errors = Recorder::new();
//! let _ = run_with_error_effect(errors.record_with(|e: &String| e.len()), || {
//!     Err::<(), _>("boom".to_string())
//! });
//! assert_recorded!(errors, [4]);
//!
//! let values: Recorder<i32> = Recorder::new();
//! let _ = run_with_success_effect(values.record(), || Err::<i32, _>("boom"));
//! assert_not_recorded!(values);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Captures what side-effect callbacks were called with.
///
/// Clones share the same storage, and the recording callbacks are `Send +
/// Sync`, so a recorder can observe hooks running on other threads.
///
/// # Example
///
/// ```rust
/// use ripple::effect::build_outcome_effect;
/// use ripple::testing::Recorder;
///
/// let outcomes = Recorder::new();
/// let hook = build_outcome_effect(outcomes.record());
///
/// let _ = hook.run(|| Ok::<u8, &str>(1));
/// let _ = hook.run(|| Err::<u8, &str>("bad"));
///
/// assert_eq!(outcomes.entries(), vec![Ok(1), Err("bad")]);
/// ```
pub struct Recorder<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        // A panicking callback must not hide what was recorded before it.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an entry directly.
    pub fn push(&self, entry: T) {
        self.lock().push(entry);
    }

    /// A callback that records a projection of whatever it is called with.
    ///
    /// Useful for errors that are not `Clone`, or when only part of a value
    /// matters to the test.
    pub fn record_with<U, F>(&self, project: F) -> impl Fn(&U) + Clone + Send + Sync
    where
        U: ?Sized,
        F: Fn(&U) -> T + Clone + Send + Sync,
        T: Send,
    {
        let entries = Arc::clone(&self.entries);
        move |input: &U| {
            let entry = project(input);
            entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(entry);
        }
    }

    /// Number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every recorded entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Take every recorded entry, leaving the recorder empty.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.lock())
    }
}

impl<T: Clone + Send> Recorder<T> {
    /// A callback that records a clone of whatever it is called with.
    pub fn record(&self) -> impl Fn(&T) + Clone + Send + Sync {
        self.record_with(T::clone)
    }

    /// A snapshot of every entry recorded so far, in call order.
    pub fn entries(&self) -> Vec<T> {
        self.lock().clone()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Recorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recorder")
            .field("entries", &*self.lock())
            .finish()
    }
}

/// Assert that a recorder captured exactly the given entries, in order.
///
/// # Example
///
/// ```rust
/// use ripple::assert_recorded;
/// use ripple::testing::Recorder;
///
/// let recorder = Recorder::new();
/// recorder.push("first");
/// recorder.push("second");
/// assert_recorded!(recorder, ["first", "second"]);
/// ```
#[macro_export]
macro_rules! assert_recorded {
    ($recorder:expr, $expected:expr) => {
        match (&$recorder.entries(), &$expected) {
            (entries, expected) => {
                if entries.len() != expected.len()
                    || entries.iter().zip(expected.iter()).any(|(a, b)| a != b)
                {
                    panic!(
                        "Expected recorded side effects {:?}, got {:?}",
                        expected, entries
                    );
                }
            }
        }
    };
}

/// Assert that a recorder captured nothing.
///
/// # Example
///
/// ```rust
/// use ripple::assert_not_recorded;
/// use ripple::testing::Recorder;
///
/// let recorder: Recorder<i32> = Recorder::new();
/// assert_not_recorded!(recorder);
/// ```
#[macro_export]
macro_rules! assert_not_recorded {
    ($recorder:expr) => {
        match $recorder.entries() {
            entries if entries.is_empty() => {}
            entries => {
                panic!("Expected no side effects, got {:?}", entries);
            }
        }
    };
}

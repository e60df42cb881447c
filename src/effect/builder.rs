//! Reusable effect wrappers.
//!
//! A builder binds a callback once and can then wrap any number of
//! computations. Each builder's `run` behaves exactly like the matching base
//! combinator in [`crate::effect::run`] with the callback pre-applied.
//!
//! ```rust
//! use ripple::effect::build_success_effect;
//! use std::cell::RefCell;
//!
//! let log = RefCell::new(Vec::new());
//! let logged = build_success_effect(|x: &i32| log.borrow_mut().push(*x));
//!
//! fn add(x: i32, y: i32) -> Result<i32, String> {
//!     Ok(x + y)
//! }
//!
//! assert_eq!(logged.run(|| add(1, 2)), Ok(3));
//! assert_eq!(logged.run(|| add(10, 20)), Ok(30));
//! assert_eq!(*log.borrow(), vec![3, 30]);
//! ```
//!
//! Builders carry nothing but the callback, so they are `Copy`, `Send` and
//! `Sync` exactly when the callback is.

use std::fmt;
use std::marker::PhantomData;

use crate::effect::run::{
    run_with_error_effect, run_with_outcome_effect, run_with_success_effect,
    run_with_success_effect_map, Outcome,
};

/// Calls its action with the value of every successful computation it wraps.
///
/// Created by [`build_success_effect`].
pub struct SuccessEffect<T, A> {
    action: A,
    _marker: PhantomData<fn(&T)>,
}

impl<T, A> SuccessEffect<T, A>
where
    A: Fn(&T),
{
    /// Wrap `action` into a reusable success hook.
    pub fn new(action: A) -> Self {
        SuccessEffect {
            action,
            _marker: PhantomData,
        }
    }

    /// Run `compute`, calling the bound action with its value on success.
    pub fn run<E, C>(&self, compute: C) -> Outcome<T, E>
    where
        C: FnOnce() -> Outcome<T, E>,
    {
        run_with_success_effect(&self.action, compute)
    }

    /// Turn this builder into a plain function over computations of type `C`.
    pub fn into_fn<E, C>(self) -> impl Fn(C) -> Outcome<T, E>
    where
        C: FnOnce() -> Outcome<T, E>,
    {
        move |compute| self.run(compute)
    }
}

/// Calls its action with a projection of every successful value.
///
/// Created by [`build_success_effect_map`].
pub struct MappedSuccessEffect<T, R, M, A> {
    transform: M,
    action: A,
    _marker: PhantomData<fn(&T) -> R>,
}

impl<T, R, M, A> MappedSuccessEffect<T, R, M, A>
where
    M: Fn(&T) -> R,
    A: Fn(R),
{
    /// Wrap `transform` and `action` into a reusable success hook.
    pub fn new(transform: M, action: A) -> Self {
        MappedSuccessEffect {
            transform,
            action,
            _marker: PhantomData,
        }
    }

    /// Run `compute`; on success pass `transform(&value)` to the bound action
    /// and return the untransformed value.
    pub fn run<E, C>(&self, compute: C) -> Outcome<T, E>
    where
        C: FnOnce() -> Outcome<T, E>,
    {
        run_with_success_effect_map(&self.transform, &self.action, compute)
    }

    /// Turn this builder into a plain function over computations of type `C`.
    pub fn into_fn<E, C>(self) -> impl Fn(C) -> Outcome<T, E>
    where
        C: FnOnce() -> Outcome<T, E>,
    {
        move |compute| self.run(compute)
    }
}

/// Calls its action with the error of every failed computation it wraps.
///
/// Created by [`build_error_effect`].
pub struct ErrorEffect<E, A> {
    action: A,
    _marker: PhantomData<fn(&E)>,
}

impl<E, A> ErrorEffect<E, A>
where
    A: Fn(&E),
{
    /// Wrap `action` into a reusable error hook.
    pub fn new(action: A) -> Self {
        ErrorEffect {
            action,
            _marker: PhantomData,
        }
    }

    /// Run `compute`, calling the bound action with its error on failure.
    ///
    /// The value type is free per call: one error hook can wrap computations
    /// producing different values as long as they share an error type.
    pub fn run<T, C>(&self, compute: C) -> Outcome<T, E>
    where
        C: FnOnce() -> Outcome<T, E>,
    {
        run_with_error_effect(&self.action, compute)
    }

    /// Turn this builder into a plain function over computations of type `C`.
    pub fn into_fn<T, C>(self) -> impl Fn(C) -> Outcome<T, E>
    where
        C: FnOnce() -> Outcome<T, E>,
    {
        move |compute| self.run(compute)
    }
}

/// Calls its action with the outcome of every computation it wraps.
///
/// Created by [`build_outcome_effect`].
pub struct OutcomeEffect<T, E, A> {
    action: A,
    _marker: PhantomData<fn(&Outcome<T, E>)>,
}

impl<T, E, A> OutcomeEffect<T, E, A>
where
    A: Fn(&Outcome<T, E>),
{
    /// Wrap `action` into a reusable outcome hook.
    pub fn new(action: A) -> Self {
        OutcomeEffect {
            action,
            _marker: PhantomData,
        }
    }

    /// Run `compute`, calling the bound action with its outcome.
    pub fn run<C>(&self, compute: C) -> Outcome<T, E>
    where
        C: FnOnce() -> Outcome<T, E>,
    {
        run_with_outcome_effect(&self.action, compute)
    }

    /// Turn this builder into a plain function over computations of type `C`.
    pub fn into_fn<C>(self) -> impl Fn(C) -> Outcome<T, E>
    where
        C: FnOnce() -> Outcome<T, E>,
    {
        move |compute| self.run(compute)
    }
}

/// Bind `action` as a success hook.
///
/// See [`run_with_success_effect`] for the semantics of each call.
pub fn build_success_effect<T, A>(action: A) -> SuccessEffect<T, A>
where
    A: Fn(&T),
{
    SuccessEffect::new(action)
}

/// Bind `transform` and `action` as a projecting success hook.
///
/// See [`run_with_success_effect_map`] for the semantics of each call.
///
/// # Example
///
/// ```rust
/// use ripple::effect::build_success_effect_map;
/// use std::cell::RefCell;
///
/// let ids = RefCell::new(Vec::new());
/// let audit = build_success_effect_map(|user: &(u64, String)| user.0, |id| ids.borrow_mut().push(id));
///
/// let user = audit.run(|| Ok::<_, String>((7, "ada".to_string())));
/// assert_eq!(user, Ok((7, "ada".to_string())));
/// assert_eq!(*ids.borrow(), vec![7]);
/// ```
pub fn build_success_effect_map<T, R, M, A>(
    transform: M,
    action: A,
) -> MappedSuccessEffect<T, R, M, A>
where
    M: Fn(&T) -> R,
    A: Fn(R),
{
    MappedSuccessEffect::new(transform, action)
}

/// Bind `action` as an error hook.
///
/// See [`run_with_error_effect`] for the semantics of each call.
///
/// # Example
///
/// ```rust
/// use ripple::effect::build_error_effect;
/// use std::cell::Cell;
///
/// let failures = Cell::new(0);
/// let count_failures = build_error_effect(|_: &String| failures.set(failures.get() + 1));
///
/// assert_eq!(count_failures.run(|| Ok(1)), Ok(1));
/// assert_eq!(count_failures.run(|| Ok("two")), Ok("two"));
/// assert_eq!(count_failures.run::<(), _>(|| Err("three".to_string())), Err("three".to_string()));
/// assert_eq!(failures.get(), 1);
/// ```
pub fn build_error_effect<E, A>(action: A) -> ErrorEffect<E, A>
where
    A: Fn(&E),
{
    ErrorEffect::new(action)
}

/// Bind `action` as an outcome hook.
///
/// See [`run_with_outcome_effect`] for the semantics of each call.
pub fn build_outcome_effect<T, E, A>(action: A) -> OutcomeEffect<T, E, A>
where
    A: Fn(&Outcome<T, E>),
{
    OutcomeEffect::new(action)
}

// The marker only records which types the callback accepts, so none of these
// impls should require anything of `T`, `R` or `E`.

impl<T, A: Clone> Clone for SuccessEffect<T, A> {
    fn clone(&self) -> Self {
        SuccessEffect {
            action: self.action.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, A: Copy> Copy for SuccessEffect<T, A> {}

impl<T, A> fmt::Debug for SuccessEffect<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuccessEffect").finish_non_exhaustive()
    }
}

impl<T, R, M: Clone, A: Clone> Clone for MappedSuccessEffect<T, R, M, A> {
    fn clone(&self) -> Self {
        MappedSuccessEffect {
            transform: self.transform.clone(),
            action: self.action.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, R, M: Copy, A: Copy> Copy for MappedSuccessEffect<T, R, M, A> {}

impl<T, R, M, A> fmt::Debug for MappedSuccessEffect<T, R, M, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedSuccessEffect").finish_non_exhaustive()
    }
}

impl<E, A: Clone> Clone for ErrorEffect<E, A> {
    fn clone(&self) -> Self {
        ErrorEffect {
            action: self.action.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E, A: Copy> Copy for ErrorEffect<E, A> {}

impl<E, A> fmt::Debug for ErrorEffect<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorEffect").finish_non_exhaustive()
    }
}

impl<T, E, A: Clone> Clone for OutcomeEffect<T, E, A> {
    fn clone(&self) -> Self {
        OutcomeEffect {
            action: self.action.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, E, A: Copy> Copy for OutcomeEffect<T, E, A> {}

impl<T, E, A> fmt::Debug for OutcomeEffect<T, E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutcomeEffect").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn success_builder_reused_across_computations() {
        let seen = RefCell::new(Vec::new());
        let hook = build_success_effect(|x: &i32| seen.borrow_mut().push(*x));

        assert_eq!(hook.run(|| Ok::<_, ()>(1)), Ok(1));
        assert_eq!(hook.run(|| Err::<i32, _>("skip")), Err("skip"));
        assert_eq!(hook.run(|| Ok::<_, ()>(3)), Ok(3));
        assert_eq!(*seen.borrow(), vec![1, 3]);
    }

    #[test]
    fn mapped_builder_returns_original_value() {
        let seen = RefCell::new(Vec::new());
        let hook = build_success_effect_map(|s: &String| s.len(), |n| seen.borrow_mut().push(n));

        assert_eq!(hook.run(|| Ok::<_, ()>("abc".to_string())), Ok("abc".to_string()));
        assert_eq!(hook.run(|| Ok::<_, ()>(String::new())), Ok(String::new()));
        assert_eq!(*seen.borrow(), vec![3, 0]);
    }

    #[test]
    fn error_builder_only_sees_failures() {
        let seen = RefCell::new(Vec::new());
        let hook = build_error_effect(|e: &String| seen.borrow_mut().push(e.clone()));

        assert_eq!(hook.run(|| Ok(1)), Ok(1));
        assert_eq!(hook.run::<i32, _>(|| Err("first".into())), Err("first".to_string()));
        assert_eq!(hook.run::<String, _>(|| Err("second".into())), Err("second".to_string()));
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn outcome_builder_sees_every_call() {
        let calls = Cell::new(0);
        let hook = build_outcome_effect(|_: &Outcome<u8, ()>| calls.set(calls.get() + 1));

        for i in 0..5u8 {
            let expected = if i % 2 == 0 { Ok(i) } else { Err(()) };
            assert_eq!(hook.run(|| expected), expected);
        }
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn into_fn_behaves_like_run() {
        let seen = RefCell::new(Vec::new());
        let log = build_success_effect(|x: &i32| seen.borrow_mut().push(*x))
            .into_fn::<(), fn() -> Result<i32, ()>>();

        fn three() -> Result<i32, ()> {
            Ok(3)
        }
        fn four() -> Result<i32, ()> {
            Ok(4)
        }

        assert_eq!(log(three), Ok(3));
        assert_eq!(log(four), Ok(4));
        assert_eq!(*seen.borrow(), vec![3, 4]);
    }

    #[test]
    fn builders_are_copy_when_action_is() {
        let calls = Cell::new(0);
        let hook = build_error_effect(|_: &()| calls.set(calls.get() + 1));
        let copy = hook;

        let _ = hook.run::<(), _>(|| Err(()));
        let _ = copy.run::<(), _>(|| Err(()));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn builder_shared_across_threads() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let hook = Arc::new(build_success_effect(move |_: &usize| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let hook = Arc::clone(&hook);
                std::thread::spawn(move || hook.run(|| Ok::<_, ()>(i)))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(i));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn debug_does_not_require_debug_callback() {
        let hook = build_outcome_effect(|_: &Outcome<(), ()>| {});
        assert_eq!(format!("{:?}", hook), "OutcomeEffect { .. }");
    }
}

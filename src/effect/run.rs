//! Base combinators: run a computation, observe its outcome, hand it back.
//!
//! Every function here is outcome-transparent. Whatever `compute` returns,
//! value or error, is what the caller gets back; the callback only ever sees
//! a borrow of it.

/// The outcome of a computation: `Ok` on success, `Err` on failure.
pub type Outcome<T, E> = Result<T, E>;

/// Run `compute` and, if it succeeds, call `action` with the value.
///
/// On failure the error is returned immediately and `action` is never called.
/// `action` should hold no business logic and should not panic; see the
/// crate docs for what happens when it does.
///
/// # Example
///
/// ```rust
/// use ripple::effect::run_with_success_effect;
/// use std::convert::Infallible;
///
/// let mut seen = Vec::new();
/// let result = run_with_success_effect(|x: &i32| seen.push(*x), || Ok::<_, Infallible>(1 + 2));
///
/// assert_eq!(result, Ok(3));
/// assert_eq!(seen, vec![3]);
/// ```
#[inline]
pub fn run_with_success_effect<T, E, A, C>(action: A, compute: C) -> Outcome<T, E>
where
    A: FnOnce(&T),
    C: FnOnce() -> Outcome<T, E>,
{
    compute().inspect(action)
}

/// Like [`run_with_success_effect`], but `action` receives a projection of the
/// value rather than the value itself.
///
/// `transform` derives whatever the callback wants to observe (a length, an id,
/// a summary string). The original value is what gets returned. Neither
/// `transform` nor `action` runs on failure.
///
/// # Example
///
/// ```rust
/// use ripple::effect::run_with_success_effect_map;
///
/// let mut lengths = Vec::new();
/// let result = run_with_success_effect_map(
///     |items: &Vec<&str>| items.len(),
///     |len| lengths.push(len),
///     || Ok::<_, String>(vec!["a", "b", "c"]),
/// );
///
/// assert_eq!(result, Ok(vec!["a", "b", "c"]));
/// assert_eq!(lengths, vec![3]);
/// ```
#[inline]
pub fn run_with_success_effect_map<T, R, E, M, A, C>(
    transform: M,
    action: A,
    compute: C,
) -> Outcome<T, E>
where
    M: FnOnce(&T) -> R,
    A: FnOnce(R),
    C: FnOnce() -> Outcome<T, E>,
{
    run_with_success_effect(|value| action(transform(value)), compute)
}

/// Run `compute` and, if it fails, call `action` with the error before
/// returning it.
///
/// The error is handed back unchanged. On success `action` is never called.
///
/// # Example
///
/// ```rust
/// use ripple::effect::run_with_error_effect;
///
/// let mut errors = Vec::new();
/// let result: Result<i32, String> =
///     run_with_error_effect(|e: &String| errors.push(e.clone()), || Err("boom".to_string()));
///
/// assert_eq!(result, Err("boom".to_string()));
/// assert_eq!(errors, vec!["boom".to_string()]);
/// ```
#[inline]
pub fn run_with_error_effect<T, E, A, C>(action: A, compute: C) -> Outcome<T, E>
where
    A: FnOnce(&E),
    C: FnOnce() -> Outcome<T, E>,
{
    compute().inspect_err(action)
}

/// Run `compute` and call `action` with the full outcome, whichever way it
/// went.
///
/// `action` runs exactly once per call. The outcome is returned as-is after
/// it returns.
///
/// # Example
///
/// ```rust
/// use ripple::effect::{run_with_outcome_effect, Outcome};
///
/// let mut log = Vec::new();
/// let record = |outcome: &Outcome<i32, String>| log.push(format!("{:?}", outcome));
///
/// let result = run_with_outcome_effect(record, || Err("nope".to_string()));
///
/// assert_eq!(result, Err("nope".to_string()));
/// assert_eq!(log, vec![r#"Err("nope")"#.to_string()]);
/// ```
#[inline]
pub fn run_with_outcome_effect<T, E, A, C>(action: A, compute: C) -> Outcome<T, E>
where
    A: FnOnce(&Outcome<T, E>),
    C: FnOnce() -> Outcome<T, E>,
{
    let outcome = compute();
    action(&outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    struct IllegalState(&'static str);

    #[test]
    fn test_success_effect_sees_value() {
        let seen = RefCell::new(Vec::new());
        let result = run_with_success_effect(
            |x: &i32| seen.borrow_mut().push(*x),
            || Ok::<_, IllegalState>(1 + 2),
        );

        assert_eq!(result, Ok(3));
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn test_success_effect_skipped_on_failure() {
        let calls = Cell::new(0);
        let result: Outcome<i32, _> = run_with_success_effect(
            |_: &i32| calls.set(calls.get() + 1),
            || Err(IllegalState("boom")),
        );

        assert_eq!(result, Err(IllegalState("boom")));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_success_effect_map_returns_original() {
        let seen = RefCell::new(Vec::new());
        let result = run_with_success_effect_map(
            |s: &String| s.to_uppercase(),
            |upper| seen.borrow_mut().push(upper),
            || Ok::<_, IllegalState>("quiet".to_string()),
        );

        assert_eq!(result, Ok("quiet".to_string()));
        assert_eq!(*seen.borrow(), vec!["QUIET".to_string()]);
    }

    #[test]
    fn test_success_effect_map_skips_transform_on_failure() {
        let result: Outcome<String, _> = run_with_success_effect_map(
            |_: &String| -> usize { panic!("transform should not run") },
            |_| panic!("action should not run"),
            || Err(IllegalState("boom")),
        );

        assert_eq!(result, Err(IllegalState("boom")));
    }

    #[test]
    fn test_error_effect_sees_error() {
        let seen = RefCell::new(Vec::new());
        let result: Outcome<i32, _> = run_with_error_effect(
            |e: &IllegalState| seen.borrow_mut().push(e.0),
            || Err(IllegalState("boom")),
        );

        assert_eq!(result, Err(IllegalState("boom")));
        assert_eq!(*seen.borrow(), vec!["boom"]);
    }

    #[test]
    fn test_error_effect_skipped_on_success() {
        let result = run_with_error_effect(
            |_: &IllegalState| panic!("action should not run"),
            || Ok(42),
        );

        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_outcome_effect_runs_once_either_way() {
        let calls = Cell::new(0);
        let count = |_: &Outcome<i32, IllegalState>| calls.set(calls.get() + 1);

        assert_eq!(run_with_outcome_effect(count, || Ok(7)), Ok(7));
        assert_eq!(
            run_with_outcome_effect(count, || Err(IllegalState("boom"))),
            Err(IllegalState("boom"))
        );
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_outcome_effect_sees_matching_outcome() {
        let seen = RefCell::new(None);
        let _ = run_with_outcome_effect(
            |o: &Outcome<i32, IllegalState>| *seen.borrow_mut() = Some(o.clone()),
            || Err(IllegalState("boom")),
        );

        assert_eq!(*seen.borrow(), Some(Err(IllegalState("boom"))));
    }

    #[test]
    fn test_compute_runs_before_action() {
        let order = RefCell::new(Vec::new());
        let _ = run_with_outcome_effect(
            |_: &Outcome<(), ()>| order.borrow_mut().push("action"),
            || {
                order.borrow_mut().push("compute");
                Ok(())
            },
        );

        assert_eq!(*order.borrow(), vec!["compute", "action"]);
    }

    #[test]
    #[should_panic(expected = "callback failed")]
    fn test_panicking_callback_unwinds() {
        let _ = run_with_success_effect(
            |_: &i32| panic!("callback failed"),
            || Ok::<_, ()>(1),
        );
    }

    #[test]
    fn test_non_clone_values_pass_through() {
        struct Token(u32);

        let result =
            run_with_success_effect(|t: &Token| assert_eq!(t.0, 9), || Ok::<_, ()>(Token(9)));
        assert_eq!(result.map(|t| t.0), Ok(9));
    }
}

use counted_flow::{ApplyOrTakeAction, FlowError};
use std::cell::Cell;

#[derive(Debug, PartialEq)]
struct Ambiguous;

#[test]
fn test_empty_returns_fallback_without_applying() {
    let applied = Cell::new(false);

    let value = ApplyOrTakeAction::apply(|s: &String| {
        applied.set(true);
        s.clone()
    })
    .if_single_element(Vec::<String>::new())
    .or_else(|| "default".to_string());

    assert_eq!(value, "default");
    assert!(!applied.get());
}

#[test]
fn test_single_returns_transform_without_fallback() {
    let fell_back = Cell::new(false);

    let value = ApplyOrTakeAction::apply(|s: &String| s.len())
        .if_single_element(vec!["exactly".to_string()])
        .or_else(|| {
            fell_back.set(true);
            0
        });

    assert_eq!(value, 7);
    assert!(!fell_back.get());
}

#[test]
fn test_multiple_returns_fallback_value() {
    let applied = Cell::new(0);

    let value = ApplyOrTakeAction::apply(|x: &i32| {
        applied.set(applied.get() + 1);
        *x
    })
    .if_single_element(vec![4, 5])
    .or_else(|| -1);

    assert_eq!(value, -1);
    assert_eq!(applied.get(), 0);
}

#[test]
fn test_fallback_runs_once_per_element_for_many() {
    let fallback_calls = Cell::new(0);

    let value = ApplyOrTakeAction::apply(|x: &i32| *x)
        .if_single_element(vec![1, 2, 3, 4])
        .or_else_optional(|| {
            fallback_calls.set(fallback_calls.get() + 1);
            fallback_calls.get()
        });

    assert_eq!(value, Some(1));
    assert_eq!(fallback_calls.get(), 4);
}

#[test]
fn test_or_else_optional_matches_or_else() {
    for input in [vec![], vec![3], vec![3, 4]] {
        let via_optional = ApplyOrTakeAction::apply(|x: &i32| x * 2)
            .if_single_element(input.clone())
            .or_else_optional(|| 0);
        let via_or_else = ApplyOrTakeAction::apply(|x: &i32| x * 2)
            .if_single_element(input)
            .or_else(|| 0);

        assert_eq!(via_optional, Some(via_or_else));
    }
}

#[test]
fn test_or_throw_semantics() {
    let constructed = Cell::new(0);

    let err = ApplyOrTakeAction::apply(|x: &i32| *x)
        .if_single_element(vec![1, 2, 3])
        .or_throw(|| {
            constructed.set(constructed.get() + 1);
            Ambiguous
        })
        .unwrap_err();
    assert_eq!(err, Ambiguous);
    assert_eq!(constructed.get(), 1);

    constructed.set(0);
    let ok = ApplyOrTakeAction::apply(|x: &i32| x * 3)
        .if_single_element(vec![5])
        .or_throw(|| {
            constructed.set(constructed.get() + 1);
            Ambiguous
        });
    assert_eq!(ok, Ok(15));
    assert_eq!(constructed.get(), 0);
}

#[test]
fn test_or_throw_with_flow_error() {
    let err = ApplyOrTakeAction::apply(|s: &&str| s.to_string())
        .if_single_element(Vec::<&str>::new())
        .or_throw(|| FlowError::FallbackError {
            message: "nothing to pick".to_string(),
        })
        .unwrap_err();

    assert_eq!(err.to_string(), "Fallback action failed: nothing to pick");
}

#[test]
fn test_missing_stage_arguments() {
    let no_apply: Option<fn(&i32) -> i32> = None;
    assert!(matches!(
        ApplyOrTakeAction::try_apply(no_apply),
        Err(FlowError::InvalidArgument { ref parameter }) if parameter == "apply_fn"
    ));

    let no_fallback: Option<fn() -> i32> = None;
    let err = ApplyOrTakeAction::try_apply(Some(|x: &i32| *x))
        .unwrap()
        .if_single_element(vec![1, 2])
        .try_or_else(no_fallback)
        .unwrap_err();
    assert!(matches!(err, FlowError::InvalidArgument { ref parameter } if parameter == "fallback"));
}

#[test]
fn test_failing_fallback_ends_the_pass() {
    let fallback_calls = Cell::new(0);

    let result: Result<u32, String> = ApplyOrTakeAction::apply(|x: &u32| *x)
        .if_single_element(vec![7, 8, 9])
        .or_try_else(|| {
            fallback_calls.set(fallback_calls.get() + 1);
            Err("no single value".to_string())
        });

    assert_eq!(result, Err("no single value".to_string()));
    assert_eq!(fallback_calls.get(), 1);
}

//! Unit tests for the normalizer

use std::cell::Cell;
use std::rc::Rc;

use core_types::{SymbolValue, TypeTag, Value};
use normalizer::{normalize, normalize_with, Descriptor};

// ============================================================================
// Tag matching
// ============================================================================

#[test]
fn test_compares_a_tag_and_the_type_of_a_value() {
    let result = normalize(&TypeTag::String.into(), Value::string("test string"), vec![]);
    assert_eq!(result, Some(Value::string("test string")));
}

#[test]
fn test_returns_none_if_value_does_not_match_tag() {
    let result = normalize(&TypeTag::String.into(), Value::number(1.0), vec![]);
    assert_eq!(result, None);
}

#[test]
fn test_every_tag_accepts_its_own_type() {
    let sym = SymbolValue::new(Some("s"));
    let f = Value::thunk(|| Value::Undefined);
    let cases: Vec<(TypeTag, Value)> = vec![
        (TypeTag::Object, Value::object()),
        (TypeTag::Number, Value::number(1.5)),
        (TypeTag::String, Value::string("v")),
        (TypeTag::Symbol, Value::symbol(sym)),
        (TypeTag::Boolean, Value::boolean(false)),
        (TypeTag::Date, Value::date_from_millis(10.0)),
        (TypeTag::Function, f),
        (TypeTag::Undefined, Value::Undefined),
    ];
    for (tag, value) in cases {
        let result = normalize(&tag.into(), value.clone(), vec![]);
        assert_eq!(result, Some(value), "tag {} rejected its own type", tag);
    }
}

#[test]
fn test_null_satisfies_the_object_tag() {
    let result = normalize(&TypeTag::Object.into(), Value::Null, vec![]);
    assert_eq!(result, Some(Value::Null));
}

#[test]
fn test_undefined_success_is_distinguishable_from_failure() {
    let hit = normalize(&TypeTag::Undefined.into(), Value::Undefined, vec![]);
    assert_eq!(hit, Some(Value::Undefined));

    let miss = normalize(&TypeTag::Undefined.into(), Value::number(1.0), vec![]);
    assert_eq!(miss, None);
}

// ============================================================================
// Descriptor lists
// ============================================================================

#[test]
fn test_supports_lists_for_the_descriptor() {
    let list = Descriptor::list(vec![TypeTag::String.into()]);
    let result = normalize(&list, Value::string("test string"), vec![]);
    assert_eq!(result, Some(Value::string("test string")));
}

#[test]
fn test_compares_each_alternative_with_the_value() {
    let list = Descriptor::list(vec![
        TypeTag::Number.into(),
        TypeTag::String.into(),
        TypeTag::Object.into(),
    ]);
    let result = normalize(&list, Value::string("test string"), vec![]);
    assert_eq!(result, Some(Value::string("test string")));
}

#[test]
fn test_returns_none_if_no_alternative_matches() {
    let list = Descriptor::list(vec![TypeTag::String.into(), TypeTag::Undefined.into()]);
    let result = normalize(&list, Value::number(1.0), vec![]);
    assert_eq!(result, None);
}

#[test]
fn test_list_short_circuits_left_to_right() {
    let calls = Rc::new(Cell::new(0u32));
    let first = {
        let calls = Rc::clone(&calls);
        Descriptor::predicate(move |_context, _value| {
            calls.set(calls.get() + 1);
            true
        })
    };
    let second = {
        let calls = Rc::clone(&calls);
        Descriptor::predicate(move |_context, _value| {
            calls.set(calls.get() + 100);
            true
        })
    };
    let list = Descriptor::list(vec![first, second]);
    let result = normalize(&list, Value::number(1.0), vec![]);
    assert_eq!(result, Some(Value::number(1.0)));
    // Only the first alternative ran
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_nested_lists_are_tried_depth_first() {
    let inner = Descriptor::list(vec![TypeTag::Boolean.into(), TypeTag::Number.into()]);
    let outer = Descriptor::list(vec![TypeTag::String.into(), inner]);
    let result = normalize(&outer, Value::number(2.0), vec![]);
    assert_eq!(result, Some(Value::number(2.0)));
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_truthy_predicate_returns_the_value_itself() {
    let always = Descriptor::predicate(|_context, _value| true);
    let result = normalize(&always, Value::number(1.0), vec![]);
    assert_eq!(result, Some(Value::number(1.0)));
}

#[test]
fn test_falsy_predicate_returns_none() {
    let never = Descriptor::predicate(|_context, _value| false);
    let result = normalize(&never, Value::number(1.0), vec![]);
    assert_eq!(result, None);
}

#[test]
fn test_predicate_is_called_with_the_candidate() {
    let seen = Rc::new(Cell::new(false));
    let pred = {
        let seen = Rc::clone(&seen);
        Descriptor::predicate(move |_context, value| {
            seen.set(true);
            value.as_number() == Some(1.0)
        })
    };
    let result = normalize(&pred, Value::number(1.0), vec![]);
    assert_eq!(result, Some(Value::number(1.0)));
    assert!(seen.get());
}

#[test]
fn test_predicate_receives_the_forwarded_context() {
    let context = Value::string("the context");
    let pred = Descriptor::predicate(|context, _value| {
        context.as_string().as_deref() == Some("the context")
    });
    let result = normalize_with(&context, &pred, Value::number(1.0), vec![]);
    assert_eq!(result, Some(Value::number(1.0)));

    // Without normalize_with the context is undefined and the predicate fails
    assert_eq!(normalize(&pred, Value::number(1.0), vec![]), None);
}

#[test]
fn test_predicate_sees_the_thunk_evaluated_value() {
    let pred = Descriptor::predicate(|_context, value| value.is_string());
    let thunk = Value::thunk(|| Value::string("from thunk"));
    let result = normalize(&pred, thunk, vec![]);
    assert_eq!(result, Some(Value::string("from thunk")));
}

#[test]
fn test_predicate_can_accept_a_bigint() {
    use num_bigint::BigInt;
    let pred = Descriptor::predicate(|_context, value| value.is_bigint());
    let result = normalize(&pred, Value::bigint(BigInt::from(9)), vec![]);
    assert_eq!(result, Some(Value::bigint(BigInt::from(9))));
}

// ============================================================================
// Thunks
// ============================================================================

#[test]
fn test_calls_the_value_if_it_is_a_function() {
    let called = Rc::new(Cell::new(false));
    let thunk = {
        let called = Rc::clone(&called);
        Value::function(move |_context, _args| {
            called.set(true);
            Value::string("test string")
        })
    };
    let result = normalize(&TypeTag::String.into(), thunk, vec![]);
    assert_eq!(result, Some(Value::string("test string")));
    assert!(called.get());
}

#[test]
fn test_extra_args_are_forwarded_to_the_thunk() {
    let identity = Value::function(|_context, args| {
        args.into_iter().next().unwrap_or(Value::Undefined)
    });
    let result = normalize(
        &TypeTag::String.into(),
        identity,
        vec![Value::string("extra")],
    );
    assert_eq!(result, Some(Value::string("extra")));
}

#[test]
fn test_thunk_receives_the_forwarded_context() {
    let thunk = Value::function(|context, _args| context);
    let context = Value::string("bound");
    let result = normalize_with(&context, &TypeTag::String.into(), thunk, vec![]);
    assert_eq!(result, Some(Value::string("bound")));
}

#[test]
fn test_thunk_result_still_has_to_match() {
    let thunk = Value::thunk(|| Value::number(1.0));
    assert_eq!(normalize(&TypeTag::String.into(), thunk, vec![]), None);
}

#[test]
fn test_function_tag_does_not_evaluate_the_value() {
    let called = Rc::new(Cell::new(false));
    let f = {
        let called = Rc::clone(&called);
        Value::function(move |_context, _args| {
            called.set(true);
            Value::Undefined
        })
    };
    let result = normalize(&TypeTag::Function.into(), f.clone(), vec![]);
    assert_eq!(result, Some(f));
    assert!(!called.get());
}

#[test]
fn test_function_tag_inside_a_list_still_evaluates_the_thunk() {
    // The function-tag exception is a top-level check only, so a list
    // containing the function tag sees the thunk's result, not the thunk.
    let list = Descriptor::list(vec![TypeTag::Function.into(), TypeTag::String.into()]);
    let thunk = Value::thunk(|| Value::string("evaluated"));
    let result = normalize(&list, thunk, vec![]);
    assert_eq!(result, Some(Value::string("evaluated")));
}

// ============================================================================
// Builtin coercers
// ============================================================================

#[test]
fn test_string_tag_stringifies_plain_objects() {
    let result = normalize(&TypeTag::String.into(), Value::object(), vec![]);
    assert_eq!(result, Some(Value::string("[object Object]")));
}

#[test]
fn test_string_tag_unboxes_boxed_strings() {
    let result = normalize(&TypeTag::String.into(), Value::boxed_string("inner"), vec![]);
    assert_eq!(result, Some(Value::string("inner")));
}

#[test]
fn test_string_tag_rejects_null_and_undefined() {
    assert_eq!(normalize(&TypeTag::String.into(), Value::Null, vec![]), None);
    assert_eq!(
        normalize(&TypeTag::String.into(), Value::Undefined, vec![]),
        None
    );
}

#[test]
fn test_number_tag_unboxes_boxed_numbers() {
    let result = normalize(&TypeTag::Number.into(), Value::boxed_number(5.0), vec![]);
    assert_eq!(result, Some(Value::number(5.0)));
}

#[test]
fn test_number_tag_accepts_nan_and_infinities() {
    let nan = normalize(&TypeTag::Number.into(), Value::number(f64::NAN), vec![]).unwrap();
    assert!(nan.as_number().unwrap().is_nan());

    let inf = normalize(&TypeTag::Number.into(), Value::number(f64::INFINITY), vec![]);
    assert_eq!(inf, Some(Value::number(f64::INFINITY)));
}

#[test]
fn test_number_tag_accepts_a_date_through_its_timestamp() {
    let result = normalize(&TypeTag::Number.into(), Value::date_from_millis(40.0), vec![]);
    assert_eq!(result, Some(Value::number(40.0)));
}

#[test]
fn test_boolean_tag_unboxes_boxed_booleans() {
    let result = normalize(&TypeTag::Boolean.into(), Value::boxed_boolean(true), vec![]);
    assert_eq!(result, Some(Value::boolean(true)));
}

#[test]
fn test_boolean_tag_rejects_truthiness_conversions() {
    // No ToBoolean: a non-boolean never becomes one
    assert_eq!(normalize(&TypeTag::Boolean.into(), Value::number(1.0), vec![]), None);
    assert_eq!(normalize(&TypeTag::Boolean.into(), Value::string("true"), vec![]), None);
}

#[test]
fn test_date_tag_builds_a_date_from_epoch_millis() {
    let result = normalize(&TypeTag::Date.into(), Value::number(1.0), vec![]).unwrap();
    let date = result.as_date().unwrap();
    assert!(date.is_valid());
    assert_eq!(date.time_value(), 1.0);
}

#[test]
fn test_date_tag_rejects_nan_and_infinity() {
    assert_eq!(normalize(&TypeTag::Date.into(), Value::number(f64::NAN), vec![]), None);
    assert_eq!(
        normalize(&TypeTag::Date.into(), Value::number(f64::INFINITY), vec![]),
        None
    );
}

#[test]
fn test_date_tag_rejects_invalid_dates() {
    let invalid = Value::date_from_millis(f64::NAN);
    assert_eq!(normalize(&TypeTag::Date.into(), invalid, vec![]), None);
}

#[test]
fn test_date_tag_accepts_boxed_timestamps() {
    let result = normalize(&TypeTag::Date.into(), Value::boxed_number(2000.0), vec![]).unwrap();
    assert_eq!(result.as_date().unwrap().time_value(), 2000.0);
}

#[test]
fn test_symbol_tag_does_not_unwrap() {
    let boxed = Value::boxed(Value::symbol(SymbolValue::new(None)));
    assert_eq!(normalize(&TypeTag::Symbol.into(), boxed, vec![]), None);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_successful_coercion_is_idempotent() {
    let once = normalize(&TypeTag::Number.into(), Value::boxed_number(5.0), vec![]).unwrap();
    let twice = normalize(&TypeTag::Number.into(), once.clone(), vec![]).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_date_coercion_is_idempotent() {
    let once = normalize(&TypeTag::Date.into(), Value::number(1.0), vec![]).unwrap();
    let twice = normalize(&TypeTag::Date.into(), once.clone(), vec![]).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_string_coercion_is_idempotent() {
    let once = normalize(&TypeTag::String.into(), Value::object(), vec![]).unwrap();
    let twice = normalize(&TypeTag::String.into(), once.clone(), vec![]).unwrap();
    assert_eq!(once, Value::string("[object Object]"));
    assert_eq!(once, twice);
}

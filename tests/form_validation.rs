//! End-to-end scenarios: a registration form validated field by field, with
//! every problem reported at once.

use accrue::prelude::*;
use accrue::nonempty;
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldError {
    Missing(&'static str),
    TooShort { field: &'static str, min: usize },
    NotANumber(String),
    OutOfRange { field: &'static str, value: i64 },
}

#[derive(Debug, PartialEq)]
struct Registration {
    username: String,
    password: String,
    age: u8,
    tags: Vec<String>,
}

fn required(field: &'static str, raw: &str) -> Validation<FieldError, String> {
    if raw.trim().is_empty() {
        Validation::failure(FieldError::Missing(field))
    } else {
        Validation::success(raw.trim().to_string())
    }
}

fn min_len(field: &'static str, min: usize) -> impl Fn(String) -> Validation<FieldError, String> {
    move |value| {
        if value.chars().count() >= min {
            Validation::success(value)
        } else {
            Validation::failure(FieldError::TooShort { field, min })
        }
    }
}

fn age(raw: &str) -> Validation<FieldError, u8> {
    Validation::from_result(raw.parse::<i64>().map_err(|_| FieldError::NotANumber(raw.to_string())))
        .flat_map(|n| {
            u8::try_from(n)
                .ok()
                .filter(|a| *a >= 13)
                .map(Validation::success)
                .unwrap_or_else(|| Validation::failure(FieldError::OutOfRange { field: "age", value: n }))
        })
}

fn tags(raw: &[&str]) -> Validation<FieldError, Vec<String>> {
    sequence(map_inputs(raw.iter().copied(), |t| {
        required("tag", t).flat_map(min_len("tag", 2))
    }))
}

fn register(
    username: &str,
    password: &str,
    raw_age: &str,
    raw_tags: &[&str],
) -> Validation<FieldError, Registration> {
    map4(
        required("username", username).flat_map(min_len("username", 3)),
        required("password", password).flat_map(min_len("password", 8)),
        age(raw_age),
        tags(raw_tags),
        |username, password, age, tags| Registration {
            username,
            password,
            age,
            tags,
        },
    )
}

#[test]
fn test_valid_registration() {
    let result = register("ada", "correct horse", "36", &["rust", "math"]);
    assert_eq!(
        result.into_value(),
        Some(Registration {
            username: "ada".to_string(),
            password: "correct horse".to_string(),
            age: 36,
            tags: vec!["rust".to_string(), "math".to_string()],
        })
    );
}

#[test]
fn test_every_field_error_is_reported_in_form_order() {
    let result = register("", "short", "abc", &["ok", "x", " "]);
    assert_eq!(
        result.into_errors(),
        Some(nonempty![
            FieldError::Missing("username"),
            FieldError::TooShort {
                field: "password",
                min: 8
            },
            FieldError::NotANumber("abc".to_string()),
            FieldError::TooShort {
                field: "tag",
                min: 2
            },
            FieldError::Missing("tag"),
        ])
    );
}

#[test]
fn test_dependent_checks_short_circuit_within_a_field() {
    // "   " fails `required`, so `min_len` never adds a second error for it
    let result = register("   ", "correct horse", "300", &[]);
    assert_eq!(
        result.into_errors(),
        Some(nonempty![
            FieldError::Missing("username"),
            FieldError::OutOfRange {
                field: "age",
                value: 300
            },
        ])
    );
}

#[test]
fn test_fallbacks_are_lazy() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        18
    };

    assert_eq!(age("40").get_or_else(fallback), 40);
    assert_eq!(calls.get(), 0);

    assert_eq!(age("7").get_or_else(fallback), 18);
    assert_eq!(calls.get(), 1);

    let recovered = age("oops").or_else(|| age("21"));
    assert_eq!(recovered.into_value(), Some(21));
}

#[test]
fn test_tuple_validation_matches_map3() {
    let via_tuple = Validation::all((
        required("username", "bob"),
        age("12"),
        tags(&["a"]),
    ));
    let via_map3 = map3(
        required("username", "bob"),
        age("12"),
        tags(&["a"]),
        |u, a, t| (u, a, t),
    );

    assert_eq!(via_tuple, via_map3);
    assert_eq!(via_tuple.errors().map(|e| e.len()), Some(2));
}

#[test]
fn test_side_effects_only_on_matching_variant() {
    let mut log = Vec::new();

    let ok = required("username", "eve");
    let bad = required("username", "");

    ok.if_success(|name| log.push(format!("hello {}", name)));
    ok.if_failure(|errors| log.push(format!("{} problems", errors.len())));
    bad.if_success(|name| log.push(format!("hello {}", name)));
    bad.if_failure(|errors| log.push(format!("{} problems", errors.len())));

    assert_eq!(log, vec!["hello eve".to_string(), "1 problems".to_string()]);
}

#[test]
fn test_errors_can_be_rendered_for_display() {
    let messages = register("", "", "x", &[])
        .map_errors(|e| match e {
            FieldError::Missing(field) => format!("{} is required", field),
            FieldError::TooShort { field, min } => format!("{} needs {} characters", field, min),
            FieldError::NotANumber(raw) => format!("'{}' is not a number", raw),
            FieldError::OutOfRange { field, value } => format!("{} {} is out of range", field, value),
        })
        .into_result()
        .map_err(NonEmptyVec::into_vec);

    assert_eq!(
        messages,
        Err(vec![
            "username is required".to_string(),
            "password is required".to_string(),
            "'x' is not a number".to_string(),
        ])
    );
}

//! Tests showing how the testing macros read in validator test suites.

use accrue::prelude::*;
use accrue::{assert_failure, assert_success, assert_validation_errors};

#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
    age: i32,
}

fn validate_email(email: &str) -> Validation<String, String> {
    if email.contains('@') && email.contains('.') {
        Validation::success(email.to_string())
    } else {
        Validation::failure("Email must contain @ and .".to_string())
    }
}

fn validate_age(age: i32) -> Validation<String, i32> {
    if age >= 18 {
        Validation::success(age)
    } else {
        Validation::failure("Must be 18 or older".to_string())
    }
}

fn validate_user(email: &str, age: i32) -> Validation<String, User> {
    map2(validate_email(email), validate_age(age), |email, age| User {
        email,
        age,
    })
}

#[test]
fn test_valid_user_passes() {
    let user = assert_success!(validate_user("user@example.com", 25));
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.age, 25);
}

#[test]
fn test_invalid_email_fails() {
    let errors = assert_failure!(validate_email("invalid"));
    assert_eq!(errors.head(), "Email must contain @ and .");
}

#[test]
fn test_invalid_user_reports_every_field() {
    assert_validation_errors!(
        validate_user("invalid", 15),
        vec![
            "Email must contain @ and .".to_string(),
            "Must be 18 or older".to_string(),
        ]
    );
}

#[test]
fn test_batch_of_users() {
    let users = sequence(vec![
        validate_user("a@example.com", 30),
        validate_user("b@example", 40),
        validate_user("c@example.com", 10),
    ]);

    assert_validation_errors!(
        users,
        vec![
            "Email must contain @ and .".to_string(),
            "Must be 18 or older".to_string(),
        ]
    );
}

#![cfg(feature = "serde")]

use accrue::{validate, Errors, Validated};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct FieldError {
    field: String,
    message: String,
}

#[test]
fn invalid_serializes_as_tagged_error_list() {
    let result = validate(|scope| {
        scope.ensure(
            false,
            FieldError {
                field: "email".to_string(),
                message: "must contain @".to_string(),
            },
        );
        Ok(())
    });

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Invalid": [{ "field": "email", "message": "must contain @" }]
        })
    );
}

#[test]
fn valid_serializes_as_tagged_value() {
    let result = Validated::<String, _>::valid(42);
    assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"Valid":42}"#);
}

#[test]
fn errors_deserialize_from_plain_list() {
    let errors: Errors<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
    assert_eq!(errors.as_slice(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn empty_error_list_is_rejected() {
    let result: Result<Validated<String, i32>, _> = serde_json::from_str(r#"{"Invalid":[]}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

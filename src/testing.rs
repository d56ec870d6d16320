//! Assertion helpers for code that returns `Validated`
//!
//! ```rust
//! use accrue::{assert_errors, assert_invalid, assert_valid, Validated};
//!
//! assert_valid!(Validated::<&str, _>::valid(42));
//! assert_invalid!(Validated::<_, i32>::invalid("error"));
//! assert_errors!(Validated::<_, i32>::invalid("error"), ["error"]);
//! ```
//!
//! With the `proptest` feature, `Validated<E, A>` and `Errors<E>` also
//! implement `proptest::arbitrary::Arbitrary`.

/// Assert that a validation is valid, evaluating to the valid value.
///
/// Panics with the recorded errors otherwise.
///
/// ```rust
/// use accrue::{assert_valid, Validated};
///
/// let value = assert_valid!(Validated::<&str, _>::valid(7));
/// assert_eq!(value, 7);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validated::Valid(value) => value,
            $crate::Validated::Invalid(errors) => {
                panic!("Expected Valid, got Invalid: {:?}", errors);
            }
        }
    };
}

/// Assert that a validation is invalid, evaluating to its errors.
///
/// Panics with the valid value otherwise.
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validated::Invalid(errors) => errors,
            $crate::Validated::Valid(value) => {
                panic!("Expected Invalid, got Valid: {:?}", value);
            }
        }
    };
}

/// Assert that a validation is invalid with exactly these errors, in order.
///
/// `$expected` is anything a slice of errors can be compared to: an array,
/// a `Vec`, or a slice.
///
/// ```rust
/// use accrue::{assert_errors, Errors, Validated};
///
/// let val = Validated::<_, i32>::invalid_all(Errors::new("e1", vec!["e2"]));
/// assert_errors!(val, ["e1", "e2"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validated::Invalid(errors) => {
                assert_eq!(errors.as_slice(), &$expected[..]);
            }
            $crate::Validated::Valid(value) => {
                panic!(
                    "Expected Invalid with errors {:?}, got Valid: {:?}",
                    $expected, value
                );
            }
        }
    };
}

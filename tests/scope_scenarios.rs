//! End-to-end scenarios for scoped validation of nested records.

use accrue::prelude::*;
use accrue::{assert_errors, assert_valid};

#[derive(Debug, Clone, PartialEq)]
enum FieldError {
    Blank(&'static str),
    Missing(&'static str),
    TooLong { field: &'static str, max: usize },
    BadCode(String),
}

/// A fixed-length numeric code, e.g. a postal or verification code.
#[derive(Debug, Clone, PartialEq)]
struct Code(String);

impl Code {
    const LEN: usize = 5;

    fn parse(raw: &str) -> Validated<FieldError, Code> {
        validate_with_result(|scope| {
            scope.demand(
                raw.chars().all(|c| c.is_ascii_digit()),
                FieldError::BadCode(format!("{raw:?} is not numeric")),
            )?;
            scope.demand(
                raw.len() == Self::LEN,
                FieldError::BadCode(format!("{raw:?} must have {} digits", Self::LEN)),
            )?;
            Ok(Code(raw.to_string()))
        })
    }
}

struct RawAddress<'a> {
    street: &'a str,
    code: &'a str,
}

struct RawCustomer<'a> {
    name: &'a str,
    nickname: Option<&'a str>,
    address: Option<RawAddress<'a>>,
}

#[derive(Debug, PartialEq)]
struct Address {
    street: String,
    code: Code,
}

#[derive(Debug, PartialEq)]
struct Customer {
    name: String,
    nickname: Option<String>,
    address: Address,
}

fn validate_address(raw: &RawAddress<'_>) -> Validated<FieldError, Address> {
    validate_with_result(|scope| {
        scope.ensure(!raw.street.trim().is_empty(), FieldError::Blank("street"));
        let code = scope.ensure_value(Code::parse(raw.code));
        let code = scope.demand_some(code, FieldError::Missing("code"))?;
        Ok(Address {
            street: raw.street.trim().to_string(),
            code,
        })
    })
}

fn validate_customer(raw: &RawCustomer<'_>) -> Validated<FieldError, Customer> {
    validate_with_result(|scope| {
        let name = raw.name.trim().ensure_in(
            scope,
            |n| !n.is_empty(),
            |_| FieldError::Blank("name"),
        );
        let nickname = raw.nickname.ensure_if_present(
            scope,
            |n| n.len() <= 12,
            |_| FieldError::TooLong {
                field: "nickname",
                max: 12,
            },
        );
        let address = scope.demand_some(raw.address.as_ref(), FieldError::Missing("address"))?;
        let address = scope.demand_value(validate_address(address))?;
        Ok(Customer {
            name: name.to_string(),
            nickname: nickname.map(str::to_string),
            address,
        })
    })
}

#[test]
fn valid_customer_produces_value() {
    let raw = RawCustomer {
        name: " Ada ",
        nickname: None,
        address: Some(RawAddress {
            street: "1 Analytical Way",
            code: "12345",
        }),
    };

    let customer = assert_valid!(validate_customer(&raw));
    assert_eq!(customer.name, "Ada");
    assert_eq!(customer.address.code, Code("12345".to_string()));
}

#[test]
fn independent_field_errors_accumulate_before_abort() {
    let raw = RawCustomer {
        name: "   ",
        nickname: Some("a-very-long-nickname"),
        address: None,
    };

    assert_errors!(
        validate_customer(&raw),
        [
            FieldError::Blank("name"),
            FieldError::TooLong {
                field: "nickname",
                max: 12
            },
            FieldError::Missing("address"),
        ]
    );
}

#[test]
fn nested_errors_are_embedded_in_order() {
    let raw = RawCustomer {
        name: "",
        nickname: None,
        address: Some(RawAddress {
            street: "",
            code: "12a",
        }),
    };

    assert_errors!(
        validate_customer(&raw),
        [
            FieldError::Blank("name"),
            FieldError::Blank("street"),
            FieldError::BadCode("\"12a\" is not numeric".to_string()),
            FieldError::Missing("code"),
        ]
    );
}

#[test]
fn code_checks_short_circuit() {
    assert_errors!(
        Code::parse("x"),
        [FieldError::BadCode("\"x\" is not numeric".to_string())]
    );
    assert_errors!(
        Code::parse("123"),
        [FieldError::BadCode("\"123\" must have 5 digits".to_string())]
    );
}

#[test]
fn demand_value_with_no_prior_errors_reports_child_exactly() {
    let child = Validated::<_, u32>::invalid_all(Errors::new("c1", vec!["c2", "c3"]));
    let result = validate_with_result(|scope| {
        let n = scope.demand_value(child.clone())?;
        scope.ensure(false, "never reached");
        Ok(n)
    });
    assert_eq!(result, child);
}

#[test]
fn validate_converts_to_result_for_question_mark() {
    fn handler(port: u32) -> Result<u32, Errors<String>> {
        validate(|scope| {
            scope.ensure(port > 0, "port must be positive".to_string());
            scope.ensure(port < 65536, "port must fit in 16 bits".to_string());
            Ok(())
        })
        .into_result()?;
        Ok(port)
    }

    assert_eq!(handler(8080), Ok(8080));
    let err = handler(0).unwrap_err();
    assert_eq!(err.to_string(), "port must be positive");
}

#[test]
fn scope_results_compose_with_algebra() {
    let names = ["ok", "", "fine", ""];
    let checked: Validated<String, Vec<&str>> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            validate_with_result(|scope| {
                scope.ensure(!name.is_empty(), format!("name #{i} is blank"));
                Ok(*name)
            })
        })
        .collect();

    assert_errors!(
        checked,
        ["name #1 is blank".to_string(), "name #3 is blank".to_string()]
    );
}

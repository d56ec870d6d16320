//! Signup form validation with a scoped check block.
//!
//! Run with `cargo run --example signup_form --features tracing`.
//! Set `RUST_LOG=accrue=trace` to see scope events.

use accrue::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum SignupError {
    InvalidEmail { value: String },
    PasswordTooShort { min_length: usize },
    PasswordMismatch,
    MissingAge,
    AgeTooYoung { age: u8, minimum: u8 },
    InvalidInviteCode { value: String, reason: &'static str },
}

/// A six-digit invite code.
#[derive(Debug, Clone, PartialEq)]
struct InviteCode(String);

impl InviteCode {
    const DIGITS: usize = 6;

    fn parse(raw: &str) -> Validated<SignupError, InviteCode> {
        let invalid = |reason| SignupError::InvalidInviteCode {
            value: raw.to_string(),
            reason,
        };
        validate_with_result(|scope| {
            scope.demand(raw.len() == Self::DIGITS, invalid("must be 6 characters"))?;
            scope.demand(
                raw.bytes().all(|b| b.is_ascii_digit()),
                invalid("must be numeric"),
            )?;
            Ok(InviteCode(raw.to_string()))
        })
    }
}

struct SignupForm {
    email: String,
    password: String,
    password_confirm: String,
    age: Option<u8>,
    invite_code: Option<String>,
}

#[derive(Debug)]
struct Signup {
    email: String,
    age: u8,
    invite: Option<InviteCode>,
}

fn validate_signup(form: &SignupForm) -> Validated<SignupError, Signup> {
    validate_with_result(|scope| {
        let email = form.email.trim().ensure_in(
            scope,
            |e| e.contains('@') && e.contains('.'),
            |e| SignupError::InvalidEmail {
                value: e.to_string(),
            },
        );

        if scope.ensure(
            form.password.len() >= 8,
            SignupError::PasswordTooShort { min_length: 8 },
        ) {
            scope.ensure(
                form.password == form.password_confirm,
                SignupError::PasswordMismatch,
            );
        }

        let invite = form
            .invite_code
            .as_deref()
            .and_then(|raw| scope.ensure_value(InviteCode::parse(raw)));

        let age = scope.demand_some(form.age, SignupError::MissingAge)?;
        scope.demand(age >= 18, SignupError::AgeTooYoung { age, minimum: 18 })?;

        Ok(Signup {
            email: email.to_string(),
            age,
            invite,
        })
    })
}

fn report(label: &str, form: &SignupForm) {
    println!("{label}");
    match validate_signup(form) {
        Validated::Valid(signup) => println!(
            "  ok: {} (age {}, invite {:?})",
            signup.email, signup.age, signup.invite
        ),
        Validated::Invalid(errors) => {
            println!("  {} error(s):", errors.len());
            for (i, err) in errors.iter().enumerate() {
                println!("  {}. {:?}", i + 1, err);
            }
        }
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    report(
        "Valid form",
        &SignupForm {
            email: "user@example.com".to_string(),
            password: "secure123".to_string(),
            password_confirm: "secure123".to_string(),
            age: Some(25),
            invite_code: Some("123456".to_string()),
        },
    );

    report(
        "Every field wrong",
        &SignupForm {
            email: "not-an-email".to_string(),
            password: "weak".to_string(),
            password_confirm: "different".to_string(),
            age: Some(15),
            invite_code: Some("12ab".to_string()),
        },
    );

    report(
        "Missing age stops the pass",
        &SignupForm {
            email: "valid@example.com".to_string(),
            password: "long enough".to_string(),
            password_confirm: "not the same".to_string(),
            age: None,
            invite_code: None,
        },
    );
}

//! # Accrue
//!
//! Validation results that report **every** violation at once.
//!
//! Accrue has two layers:
//!
//! - [`Validated<E, A>`]: either `Valid(value)` or `Invalid(errors)` with a
//!   non-empty, ordered [`Errors<E>`]. Combinators such as
//!   [`zip_with`](Validated::zip_with) and [`traverse::sequence`] accumulate
//!   the errors of independent validations instead of stopping at the first.
//! - [`ValidationScope<E>`]: a block of checks that mixes two disciplines.
//!   `ensure` records a failure and keeps going; `demand` records it and
//!   aborts the rest of the block. Either way, every recorded error is
//!   reported.
//!
//! ## Quick Example
//!
//! ```rust
//! use accrue::{validate_with_result, Errors, Validated};
//!
//! struct Signup<'a> {
//!     email: &'a str,
//!     password: &'a str,
//!     age: Option<u8>,
//! }
//!
//! fn check(form: &Signup<'_>) -> Validated<String, u8> {
//!     validate_with_result(|scope| {
//!         scope.ensure(form.email.contains('@'), "email must contain @".to_string());
//!         scope.ensure(form.password.len() >= 8, "password is too short".to_string());
//!         let age = scope.demand_some(form.age, "age is required".to_string())?;
//!         scope.ensure(age >= 18, "must be 18 or older".to_string());
//!         Ok(age)
//!     })
//! }
//!
//! let bad = Signup { email: "nobody", password: "hunter2", age: None };
//! assert_eq!(
//!     check(&bad),
//!     Validated::invalid_all(Errors::new(
//!         "email must contain @".to_string(),
//!         vec!["password is too short".to_string(), "age is required".to_string()],
//!     ))
//! );
//!
//! let good = Signup { email: "a@b.c", password: "correct horse", age: Some(30) };
//! assert_eq!(check(&good), Validated::Valid(30));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug`/`trace` events when a scope finishes invalid or
//!   a block is aborted.
//! - `serde`: `Serialize`/`Deserialize` for [`Validated`] and [`Errors`].
//! - `proptest`: `Arbitrary` for [`Validated`] and [`Errors`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod errors;
pub mod scope;
pub mod semigroup;
pub mod testing;
pub mod traverse;
pub mod validated;

// Re-exports
pub use errors::Errors;
pub use scope::{
    validate, validate_with_result, Abort, CheckExt, Checked, OptionCheckExt, ValidationScope,
};
pub use semigroup::Semigroup;
pub use traverse::{sequence, traverse, ValidateAll};
pub use validated::Validated;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::Errors;
    pub use crate::scope::{
        validate, validate_with_result, Abort, CheckExt, Checked, OptionCheckExt, ValidationScope,
    };
    pub use crate::semigroup::Semigroup;
    pub use crate::traverse::{sequence, traverse, ValidateAll};
    pub use crate::validate_all;
    pub use crate::validated::Validated;
}

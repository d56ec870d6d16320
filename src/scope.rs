//! Scoped validation: accumulating and short-circuiting checks in one pass
//!
//! A [`ValidationScope`] collects errors while a block of checks runs. Two
//! families of checks write to the same ordered error list:
//!
//! - **Accumulating** (`ensure*`, `attach`, `ensure_value`, `report`): on
//!   failure, record one error and keep going.
//! - **Short-circuiting** (`demand*`, `demand_value`, `fail`): on failure,
//!   record the error and return `Err(Abort)`. Propagating it with `?` skips
//!   the rest of the block.
//!
//! Aborting never discards anything: the errors recorded before the abort,
//! and the one that caused it, are all reported. The entry points
//! [`validate`] and [`validate_with_result`] are the only place an [`Abort`]
//! is consumed; it never reaches their callers.
//!
//! # Examples
//!
//! ```
//! use accrue::{validate, Errors, Validated};
//!
//! let name = "";
//! let age: Option<u32> = None;
//!
//! let result = validate(|scope| {
//!     scope.ensure(!name.is_empty(), "name is blank");
//!     let age = scope.demand_some(age, "age is missing")?;
//!     scope.ensure(age >= 18, "must be an adult");
//!     Ok(())
//! });
//!
//! assert_eq!(
//!     result,
//!     Validated::invalid_all(Errors::new("name is blank", vec!["age is missing"]))
//! );
//! ```
//!
//! Nested records are validated by feeding a child's result back into the
//! parent scope:
//!
//! ```
//! use accrue::{validate_with_result, Validated};
//!
//! fn parse_port(raw: &str) -> Validated<String, u16> {
//!     Validated::from_result(raw.parse().map_err(|_| format!("bad port {raw:?}")))
//! }
//!
//! let result = validate_with_result(|scope| {
//!     let host = "localhost";
//!     scope.ensure(!host.is_empty(), "host is blank".to_string());
//!     let port = scope.demand_value(parse_port("80"))?;
//!     Ok((host, port))
//! });
//!
//! assert_eq!(result, Validated::Valid(("localhost", 80)));
//! ```

use crate::{Errors, Validated};

/// Signal that a short-circuiting check failed and the current block must stop.
///
/// `Abort` carries no payload: the error that caused it has already been
/// recorded in the scope. It can only be created by a [`ValidationScope`].
///
/// An `Abort` is only meaningful to the scope that produced it. A helper
/// returning `Checked<T>` must take the caller's `&mut ValidationScope<E>`
/// rather than run a scope of its own; a helper with its own scope should
/// return a [`Validated`] for the caller to absorb with
/// [`demand_value`](ValidationScope::demand_value). Forwarding another
/// scope's `Abort` out of a block that recorded no errors panics.
///
/// ```
/// use accrue::{validate, Checked, ValidationScope};
///
/// fn check_port(scope: &mut ValidationScope<String>, port: u32) -> Checked<u16> {
///     scope.demand(port <= 65535, format!("{port} is out of range"))?;
///     Ok(port as u16)
/// }
///
/// let result = validate(|scope| {
///     check_port(scope, 70000)?;
///     Ok(())
/// });
/// assert_eq!(result.errors().map(|e| e.len()), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abort {
    _private: (),
}

impl Abort {
    fn new() -> Self {
        Abort { _private: () }
    }
}

/// The outcome of a validation block, or of a single short-circuiting check.
pub type Checked<T = ()> = Result<T, Abort>;

/// Mutable, single-use error accumulator for one validation pass.
///
/// Usually created by [`validate`] or [`validate_with_result`], which hand a
/// `&mut ValidationScope` to the block. A scope can also be driven by hand
/// and finalized with [`build`](Self::build) or
/// [`build_with`](Self::build_with); both consume it.
#[derive(Debug)]
pub struct ValidationScope<E> {
    errors: Vec<E>,
}

impl<E> ValidationScope<E> {
    /// Create an empty scope.
    pub fn new() -> Self {
        ValidationScope { errors: Vec::new() }
    }

    // Accumulating checks

    /// Record `error` if `condition` is false. Returns `condition`.
    pub fn ensure(&mut self, condition: bool, error: E) -> bool {
        if !condition {
            self.errors.push(error);
        }
        condition
    }

    /// Evaluate `predicate`; if it fails, record the error built by `error`.
    ///
    /// Returns whether the predicate passed. `error` only runs on failure.
    pub fn ensure_with<P, F>(&mut self, predicate: P, error: F) -> bool
    where
        P: FnOnce() -> bool,
        F: FnOnce() -> E,
    {
        let passed = predicate();
        if !passed {
            self.errors.push(error());
        }
        passed
    }

    /// Record `error` if `value` is `None`, and hand the option back.
    ///
    /// Checking continues either way; code that needs the value afterwards
    /// has to handle the `None` case itself.
    pub fn ensure_some<T>(&mut self, value: Option<T>, error: E) -> Option<T> {
        if value.is_none() {
            self.errors.push(error);
        }
        value
    }

    /// Record an error unconditionally and continue.
    pub fn report(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Absorb a child validation's errors, returning the child unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{validate, Errors, Validated};
    ///
    /// let result = validate(|scope| {
    ///     scope.ensure(false, "P1");
    ///     scope.attach(Validated::<_, ()>::invalid_all(Errors::new("C1", vec!["C2"])));
    ///     Ok(())
    /// });
    /// assert_eq!(result, Validated::invalid_all(Errors::new("P1", vec!["C1", "C2"])));
    /// ```
    pub fn attach<A>(&mut self, validation: Validated<E, A>) -> Validated<E, A>
    where
        E: Clone,
    {
        if let Validated::Invalid(errors) = &validation {
            self.errors.extend(errors.iter().cloned());
        }
        validation
    }

    /// Absorb a child validation's errors and unwrap its value.
    ///
    /// Yields `None` when the child is invalid; checking continues.
    pub fn ensure_value<A>(&mut self, validation: Validated<E, A>) -> Option<A> {
        match validation {
            Validated::Valid(value) => Some(value),
            Validated::Invalid(errors) => {
                self.errors.extend(errors);
                None
            }
        }
    }

    // Short-circuiting checks

    /// Record `error` and abort if `condition` is false.
    pub fn demand(&mut self, condition: bool, error: E) -> Checked {
        if condition {
            Ok(())
        } else {
            Err(self.fail(error))
        }
    }

    /// Evaluate `predicate`; on failure record the error built by `error`
    /// and abort.
    pub fn demand_with<P, F>(&mut self, predicate: P, error: F) -> Checked
    where
        P: FnOnce() -> bool,
        F: FnOnce() -> E,
    {
        if predicate() {
            Ok(())
        } else {
            Err(self.fail(error()))
        }
    }

    /// Unwrap `value`, or record `error` and abort if it is `None`.
    pub fn demand_some<T>(&mut self, value: Option<T>, error: E) -> Checked<T> {
        match value {
            Some(value) => Ok(value),
            None => Err(self.fail(error)),
        }
    }

    /// Unwrap a child validation, or absorb all of its errors and abort.
    pub fn demand_value<A>(&mut self, validation: Validated<E, A>) -> Checked<A> {
        match validation {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(errors) => {
                self.errors.extend(errors);
                Err(Abort::new())
            }
        }
    }

    /// Record an error unconditionally and return the abort signal.
    ///
    /// ```
    /// use accrue::{validate, Validated};
    ///
    /// let result = validate(|scope| {
    ///     if "v2" != "v1" {
    ///         return Err(scope.fail("unsupported version"));
    ///     }
    ///     Ok(())
    /// });
    /// assert_eq!(result, Validated::invalid("unsupported version"));
    /// ```
    pub fn fail(&mut self, error: E) -> Abort {
        self.errors.push(error);
        Abort::new()
    }

    // Inspection

    /// Errors recorded so far, oldest first.
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Number of errors recorded so far.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether any check has failed so far.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    // Finalization

    /// Finish the pass: `Valid(())` if nothing failed, otherwise every error.
    pub fn build(self) -> Validated<E, ()> {
        self.build_with(())
    }

    /// Finish the pass with a produced value.
    ///
    /// The value is discarded if any error was recorded.
    pub fn build_with<A>(self, value: A) -> Validated<E, A> {
        match Errors::from_vec(self.errors) {
            None => Validated::Valid(value),
            Some(errors) => Validated::Invalid(errors),
        }
    }

    fn finish<A>(self, outcome: Checked<A>) -> Validated<E, A> {
        match outcome {
            Ok(value) => {
                #[cfg(feature = "tracing")]
                {
                    if self.has_errors() {
                        tracing::debug!(
                            errors = self.error_count(),
                            aborted = false,
                            "validation failed"
                        );
                    }
                }
                self.build_with(value)
            }
            Err(Abort { .. }) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    errors = self.error_count(),
                    aborted = true,
                    "validation failed"
                );
                match Errors::from_vec(self.errors) {
                    Some(errors) => Validated::Invalid(errors),
                    // Every Abort is minted right after an error is recorded in the
                    // scope that minted it, so this means a signal from another scope
                    // was forwarded into this block.
                    None => panic!("validation block aborted without recording an error"),
                }
            }
        }
    }
}

impl<E> Default for ValidationScope<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a block of checks that produces no value.
///
/// Returns `Valid(())` if no check failed, whether the block ran to the end
/// or was aborted; otherwise `Invalid` with every recorded error.
///
/// # Examples
///
/// ```
/// use accrue::{validate, Errors, Validated};
///
/// let result = validate(|scope| {
///     scope.ensure(false, "A");
///     scope.demand(false, "B")?;
///     scope.ensure(false, "C");
///     Ok(())
/// });
/// assert_eq!(result, Validated::invalid_all(Errors::new("A", vec!["B"])));
/// ```
pub fn validate<E, F>(block: F) -> Validated<E, ()>
where
    F: FnOnce(&mut ValidationScope<E>) -> Checked,
{
    validate_with_result(block)
}

/// Run a block of checks that produces a value as its last action.
///
/// Returns `Valid(value)` only when no check failed. If errors were recorded
/// the value is discarded; if the block aborted, no value was produced.
///
/// # Examples
///
/// ```
/// use accrue::{validate_with_result, Validated};
///
/// let result = validate_with_result::<&str, _, _>(|scope| {
///     scope.ensure(true, "unused");
///     Ok(42)
/// });
/// assert_eq!(result, Validated::Valid(42));
/// ```
pub fn validate_with_result<E, A, F>(block: F) -> Validated<E, A>
where
    F: FnOnce(&mut ValidationScope<E>) -> Checked<A>,
{
    let mut scope = ValidationScope::new();
    let outcome = block(&mut scope);
    #[cfg(feature = "tracing")]
    {
        if outcome.is_err() {
            tracing::trace!(
                recorded = scope.error_count(),
                "short-circuit check aborted validation block"
            );
        }
    }
    scope.finish(outcome)
}

/// Fluent checks on an already available value.
///
/// Blanket-implemented for every sized type. Each method runs a predicate
/// over the value, records an error through `scope` on failure, and hands
/// the value back for further chaining.
///
/// # Examples
///
/// ```
/// use accrue::{validate_with_result, CheckExt, Validated};
///
/// let result = validate_with_result(|scope| {
///     let name = "  ".trim()
///         .ensure_in(scope, |n| !n.is_empty(), |_| "name is blank".to_string());
///     let age = 17u8
///         .demand_in(scope, |a| *a >= 18, |a| format!("{a} is under 18"))?;
///     Ok((name, age))
/// });
/// assert_eq!(
///     result.errors().map(|e| e.as_slice().to_vec()),
///     Some(vec!["name is blank".to_string(), "17 is under 18".to_string()])
/// );
/// ```
pub trait CheckExt: Sized {
    /// Accumulating check: record `error(&self)` if `predicate` fails,
    /// then return `self` either way.
    fn ensure_in<E, P, F>(self, scope: &mut ValidationScope<E>, predicate: P, error: F) -> Self
    where
        P: FnOnce(&Self) -> bool,
        F: FnOnce(&Self) -> E,
    {
        if !predicate(&self) {
            scope.report(error(&self));
        }
        self
    }

    /// Short-circuiting check: record `error(&self)` and abort if
    /// `predicate` fails, otherwise return `self`.
    fn demand_in<E, P, F>(
        self,
        scope: &mut ValidationScope<E>,
        predicate: P,
        error: F,
    ) -> Checked<Self>
    where
        P: FnOnce(&Self) -> bool,
        F: FnOnce(&Self) -> E,
    {
        if predicate(&self) {
            Ok(self)
        } else {
            Err(scope.fail(error(&self)))
        }
    }
}

impl<T> CheckExt for T {}

/// Fluent accumulating check on an optional value.
///
/// `None` passes vacuously: absence is never flagged here and must be
/// checked separately with [`ValidationScope::ensure_some`] or
/// [`ValidationScope::demand_some`].
pub trait OptionCheckExt<T> {
    /// Run `predicate` on the contained value, if any, recording `error` on
    /// failure. Returns the option unchanged.
    fn ensure_if_present<E, P, F>(
        self,
        scope: &mut ValidationScope<E>,
        predicate: P,
        error: F,
    ) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E;
}

impl<T> OptionCheckExt<T> for Option<T> {
    fn ensure_if_present<E, P, F>(
        self,
        scope: &mut ValidationScope<E>,
        predicate: P,
        error: F,
    ) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        if let Some(value) = &self {
            if !predicate(value) {
                scope.report(error(value));
            }
        }
        self
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn abort_is_traced_not_reported_as_fault() {
        let result = validate(|scope| {
            scope.ensure(false, "first");
            scope.demand(false, "second")?;
            Ok(())
        });

        assert!(result.is_invalid());
        assert!(logs_contain("short-circuit check aborted validation block"));
        assert!(logs_contain("aborted=true"));
        assert!(!logs_contain("ERROR"));
        assert!(!logs_contain("WARN"));
    }

    #[traced_test]
    #[test]
    fn completed_invalid_pass_is_logged_with_count() {
        let result = validate(|scope| {
            scope.ensure(false, "a");
            scope.ensure(false, "b");
            Ok(())
        });

        assert_eq!(result.errors().map(|e| e.len()), Some(2));
        assert!(logs_contain("validation failed"));
        assert!(logs_contain("errors=2"));
        assert!(logs_contain("aborted=false"));
    }

    #[traced_test]
    #[test]
    fn valid_pass_logs_nothing() {
        let result = validate::<&str, _>(|scope| {
            scope.ensure(true, "fine");
            Ok(())
        });

        assert_eq!(result, Validated::Valid(()));
        assert!(!logs_contain("validation failed"));
    }
}

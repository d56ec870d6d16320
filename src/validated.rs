//! Validation results that accumulate errors
//!
//! This module provides `Validated<E, A>`, a result type that either holds a
//! valid value or a non-empty, ordered list of errors. Unlike `Result`, it is
//! designed to *accumulate* errors when independent validations are combined,
//! so a caller can report every violation at once.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use accrue::Validated;
//!
//! let ok = Validated::<&str, _>::valid(42);
//! let bad = Validated::<_, i32>::invalid("error");
//!
//! assert!(ok.is_valid());
//! assert!(bad.is_invalid());
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use accrue::{Errors, Validated};
//!
//! let name = Validated::<_, String>::invalid("name is blank");
//! let age = Validated::<_, u8>::invalid("age is missing");
//!
//! let person = name.zip_with(age, |name, age| (name, age));
//! assert_eq!(
//!     person,
//!     Validated::Invalid(Errors::new("name is blank", vec!["age is missing"]))
//! );
//! ```
//!
//! ## Dependent validation
//!
//! `and_then` does not accumulate: once the receiver is invalid, the next
//! step is never evaluated.
//!
//! ```
//! use accrue::Validated;
//!
//! let parsed: Validated<String, i32> =
//!     Validated::from_result("12".parse::<i32>().map_err(|e| e.to_string()));
//! let checked = parsed.and_then(|n| {
//!     if n > 0 {
//!         Validated::valid(n)
//!     } else {
//!         Validated::invalid("must be positive".to_string())
//!     }
//! });
//! assert_eq!(checked, Validated::Valid(12));
//! ```

use std::convert::Infallible;

use crate::{Errors, Semigroup};

/// Either a valid value or the errors that prevented it.
///
/// # Type Parameters
///
/// * `E` - The error element type. No bounds are required.
/// * `A` - The type of the valid value.
///
/// The `Invalid` arm holds an [`Errors<E>`], which is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<E, A> {
    /// The value passed every check.
    Valid(A),
    /// One or more checks failed, in the order they were detected.
    Invalid(Errors<E>),
}

impl<E, A> Validated<E, A> {
    /// Create a valid result.
    #[inline]
    pub fn valid(value: A) -> Self {
        Validated::Valid(value)
    }

    /// Create an invalid result carrying a single error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Validated::Invalid(Errors::single(error))
    }

    /// Create an invalid result carrying an existing error sequence.
    #[inline]
    pub fn invalid_all(errors: Errors<E>) -> Self {
        Validated::Invalid(errors)
    }

    /// Create a validation from a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let v = Validated::from_result(Err::<i32, _>("boom"));
    /// assert_eq!(v, Validated::invalid("boom"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::invalid(error),
        }
    }

    /// Convert into a `Result`, keeping every error.
    ///
    /// `Errors<E>` implements `std::error::Error` when `E` does, so the result
    /// can be propagated with `?`.
    #[inline]
    pub fn into_result(self) -> Result<A, Errors<E>> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(errors) => Err(errors),
        }
    }

    /// `true` for `Valid`. Always the complement of [`is_invalid`](Self::is_invalid).
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// `true` for `Invalid`.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrow the value, if valid.
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Validated::Valid(value) => Some(value),
            Validated::Invalid(_) => None,
        }
    }

    /// Borrow the errors, if invalid.
    #[inline]
    pub fn errors(&self) -> Option<&Errors<E>> {
        match self {
            Validated::Valid(_) => None,
            Validated::Invalid(errors) => Some(errors),
        }
    }

    /// Convert `&Validated<E, A>` into `Validated<&E, &A>`.
    pub fn as_ref(&self) -> Validated<&E, &A> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(errors) => Validated::Invalid(errors.as_ref()),
        }
    }

    /// Transform the valid value; errors pass through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// assert_eq!(Validated::<&str, _>::valid(5).map(|x| x * 2), Validated::Valid(10));
    /// assert_eq!(Validated::<_, i32>::invalid("e").map(|x| x * 2), Validated::invalid("e"));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Transform the whole error sequence of an invalid result.
    ///
    /// The dual of [`map`](Self::map): a valid result is returned unchanged.
    #[inline]
    pub fn map_errors<F, G>(self, f: G) -> Validated<F, A>
    where
        G: FnOnce(Errors<E>) -> Errors<F>,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(errors) => Validated::Invalid(f(errors)),
        }
    }

    /// Transform each error of an invalid result.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{Errors, Validated};
    ///
    /// let v = Validated::<_, ()>::invalid_all(Errors::new("a", vec!["bc"]));
    /// assert_eq!(
    ///     v.map_error(str::len),
    ///     Validated::invalid_all(Errors::new(1, vec![2]))
    /// );
    /// ```
    #[inline]
    pub fn map_error<F, G>(self, f: G) -> Validated<F, A>
    where
        G: FnMut(E) -> F,
    {
        self.map_errors(|errors| errors.map(f))
    }

    /// Chain a dependent validation.
    ///
    /// `f` only runs when the receiver is valid. An invalid receiver returns
    /// its own errors as-is: nothing is accumulated across the boundary,
    /// because the second step is never evaluated.
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> Validated<E, B>,
    {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Combine two independent validations.
    ///
    /// Both valid: `f` is applied to both values. Exactly one invalid: that
    /// side is returned unchanged. Both invalid: the errors are concatenated,
    /// left before right.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{Errors, Validated};
    ///
    /// let left = Validated::<_, i32>::invalid("e1");
    /// let right = Validated::<_, i32>::invalid_all(Errors::new("e2", vec!["e3"]));
    /// assert_eq!(
    ///     left.zip_with(right, |a, b| a + b),
    ///     Validated::invalid_all(Errors::new("e1", vec!["e2", "e3"]))
    /// );
    /// ```
    pub fn zip_with<B, C, F>(self, other: Validated<E, B>, f: F) -> Validated<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid(f(a, b)),
            (Validated::Invalid(left), Validated::Invalid(right)) => {
                Validated::Invalid(left.combine(right))
            }
            (Validated::Invalid(errors), Validated::Valid(_)) => Validated::Invalid(errors),
            (Validated::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
        }
    }

    /// Combine two validations into a pair, accumulating errors like
    /// [`zip_with`](Self::zip_with).
    #[inline]
    pub fn and<B>(self, other: Validated<E, B>) -> Validated<E, (A, B)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Keep this value and discard the other's, still accumulating errors
    /// from both sides.
    #[inline]
    pub fn zip_left<B>(self, other: Validated<E, B>) -> Validated<E, A> {
        self.zip_with(other, |a, _| a)
    }

    /// Combine three independent validations, left to right.
    pub fn zip3<B, C, D, F>(
        self,
        second: Validated<E, B>,
        third: Validated<E, C>,
        f: F,
    ) -> Validated<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.and(second).zip_with(third, |(a, b), c| f(a, b, c))
    }

    /// Total case analysis; exactly one of the two functions runs.
    #[inline]
    pub fn fold<R, V, I>(self, on_valid: V, on_invalid: I) -> R
    where
        V: FnOnce(A) -> R,
        I: FnOnce(Errors<E>) -> R,
    {
        match self {
            Validated::Valid(value) => on_valid(value),
            Validated::Invalid(errors) => on_invalid(errors),
        }
    }

    /// The valid value, or `default`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Validated::Valid(value) => value,
            Validated::Invalid(_) => default,
        }
    }

    /// The valid value, or one computed from the errors.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> A
    where
        F: FnOnce(Errors<E>) -> A,
    {
        self.fold(|value| value, f)
    }

    /// The valid value, or `A::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> A
    where
        A: Default,
    {
        self.unwrap_or_else(|_| A::default())
    }

    /// The valid value as an `Option`, discarding errors.
    #[inline]
    pub fn ok(self) -> Option<A> {
        match self {
            Validated::Valid(value) => Some(value),
            Validated::Invalid(_) => None,
        }
    }

    /// Turn any invalid result into a valid one by synthesizing a value
    /// from its errors.
    ///
    /// The returned validation can no longer be invalid, which the
    /// `Infallible` error type records. Recovering an already valid result
    /// leaves it untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let v = Validated::<_, usize>::invalid("bad").recover(|errors| errors.len());
    /// assert_eq!(v.into_valid(), 1);
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Validated<Infallible, A>
    where
        F: FnOnce(Errors<E>) -> A,
    {
        Validated::Valid(self.unwrap_or_else(f))
    }

    /// Return this result if valid; otherwise evaluate and return `fallback`.
    ///
    /// `fallback` is never invoked for a valid receiver.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(_) => fallback(),
        }
    }
}

impl<A> Validated<Infallible, A> {
    /// Extract the value of a validation that cannot fail.
    #[inline]
    pub fn into_valid(self) -> A {
        match self {
            Validated::Valid(value) => value,
            Validated::Invalid(errors) => match *errors.first() {},
        }
    }
}

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    fn from(result: Result<A, E>) -> Self {
        Validated::from_result(result)
    }
}

impl<E, A> From<Validated<E, A>> for Result<A, Errors<E>> {
    fn from(validated: Validated<E, A>) -> Self {
        validated.into_result()
    }
}

#[cfg(feature = "proptest")]
impl<E, A> proptest::arbitrary::Arbitrary for Validated<E, A>
where
    E: proptest::arbitrary::Arbitrary + 'static,
    A: proptest::arbitrary::Arbitrary + 'static,
{
    type Parameters = (A::Parameters, E::Parameters);
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        let (value_params, error_params) = args;
        prop_oneof![
            any_with::<A>(value_params).prop_map(Validated::Valid),
            any_with::<Errors<E>>(error_params).prop_map(Validated::Invalid),
        ]
        .boxed()
    }
}

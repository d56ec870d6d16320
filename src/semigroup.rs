//! Semigroup trait for associative operations
//!
//! Error accumulation in this crate is concatenation: when two independent
//! validations both fail, the result carries the errors of the left operand
//! followed by those of the right. `Semigroup` names that operation so the
//! combinators can be written once against it.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use accrue::{Errors, Semigroup};
//!
//! let left = Errors::single("first");
//! let right = Errors::new("second", vec!["third"]);
//! assert_eq!(left.combine(right).as_slice(), &["first", "second", "third"]);
//! ```

/// A type that supports an associative binary operation.
///
/// `combine` takes both operands by value; clone beforehand if the originals
/// are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively.
    fn combine(self, other: Self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Errors;

    #[test]
    fn test_errors_associativity() {
        let a = Errors::single("a");
        let b = Errors::new("b", vec!["c"]);
        let c = Errors::single("d");

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}

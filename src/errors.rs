//! Non-empty, ordered error sequences
//!
//! This module provides the `Errors<E>` type carried by [`Validated::Invalid`].
//! An invalid result always reports at least one error, so the sequence is
//! non-empty by construction: there is no way to build an empty `Errors`.
//!
//! Errors keep the order in which they were recorded (first detected, first
//! reported) and are never deduplicated.
//!
//! # Examples
//!
//! ```
//! use accrue::Errors;
//!
//! let mut errors = Errors::single("name is blank");
//! errors.push("age is negative");
//!
//! assert_eq!(errors.first(), &"name is blank");
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.to_string(), "name is blank; age is negative");
//! ```
//!
//! [`Validated::Invalid`]: crate::Validated::Invalid

use std::error::Error as StdError;
use std::fmt;
use std::ops::Deref;

use crate::Semigroup;

/// An ordered sequence of errors holding at least one element.
///
/// Read access goes through `Deref<Target = [E]>`, so every slice method
/// (`iter`, `contains`, indexing, ...) is available directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Errors<E> {
    items: Vec<E>,
}

impl<E> Errors<E> {
    /// Create a sequence holding exactly one error.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Errors;
    ///
    /// let errors = Errors::single(42);
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn single(error: E) -> Self {
        Self { items: vec![error] }
    }

    /// Create a sequence from a first error followed by any number of others.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Errors;
    ///
    /// let errors = Errors::new("a", vec!["b", "c"]);
    /// assert_eq!(errors.as_slice(), &["a", "b", "c"]);
    /// ```
    pub fn new(first: E, rest: Vec<E>) -> Self {
        let mut items = Vec::with_capacity(rest.len() + 1);
        items.push(first);
        items.extend(rest);
        Self { items }
    }

    /// Try to build a sequence from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Errors;
    ///
    /// assert!(Errors::from_vec(vec!["x"]).is_some());
    /// assert!(Errors::from_vec(Vec::<&str>::new()).is_none());
    /// ```
    pub fn from_vec(items: Vec<E>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// The first recorded error.
    pub fn first(&self) -> &E {
        &self.items[0]
    }

    /// The most recently recorded error.
    pub fn last(&self) -> &E {
        &self.items[self.items.len() - 1]
    }

    /// Number of errors. Always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present to satisfy `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrow the errors as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Borrow every error, keeping the sequence non-empty.
    pub fn as_ref(&self) -> Errors<&E> {
        Errors {
            items: self.items.iter().collect(),
        }
    }

    /// Record one more error at the end.
    pub fn push(&mut self, error: E) {
        self.items.push(error);
    }

    /// Move every error of `other` to the end of this sequence.
    pub fn append(&mut self, other: Errors<E>) {
        self.items.extend(other.items);
    }

    /// Transform every error, keeping order.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Errors;
    ///
    /// let codes = Errors::new("E1", vec!["E22"]).map(str::len);
    /// assert_eq!(codes.as_slice(), &[2, 3]);
    /// ```
    pub fn map<F, G>(self, f: G) -> Errors<F>
    where
        G: FnMut(E) -> F,
    {
        Errors {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Convert into the underlying `Vec`.
    pub fn into_vec(self) -> Vec<E> {
        self.items
    }
}

impl<E> Deref for Errors<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.items
    }
}

impl<E> Semigroup for Errors<E> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.append(other);
        self
    }
}

impl<E> IntoIterator for Errors<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Errors<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E> Extend<E> for Errors<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<E> From<Errors<E>> for Vec<E> {
    fn from(errors: Errors<E>) -> Self {
        errors.items
    }
}

impl<E: fmt::Display> fmt::Display for Errors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.items.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for error in iter {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for Errors<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.first())
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for Errors<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for Errors<E> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<E>::deserialize(deserializer)?;
        Errors::from_vec(items)
            .ok_or_else(|| serde::de::Error::custom("error sequence must not be empty"))
    }
}

#[cfg(feature = "proptest")]
impl<E> proptest::arbitrary::Arbitrary for Errors<E>
where
    E: proptest::arbitrary::Arbitrary + 'static,
{
    type Parameters = E::Parameters;
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        prop::collection::vec(any_with::<E>(args), 1..8)
            .prop_map(|items| Errors { items })
            .boxed()
    }
}

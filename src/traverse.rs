//! Sequence and traverse for collections of validations
//!
//! - **`sequence`**: `impl IntoIterator<Item = Validated<E, A>>` → `Validated<E, Vec<A>>`
//! - **`traverse`**: apply a validating function to each element, then sequence
//! - **`validate_all!`**: fixed-arity, heterogeneous check that every argument is valid
//! - **`ValidateAll`**: combine a tuple of validations into a validation of a tuple
//!
//! All of them accumulate: the result is valid only if every input is valid,
//! and otherwise carries every failing input's errors in their original order.
//!
//! # Examples
//!
//! ```
//! use accrue::{traverse::traverse, Errors, Validated};
//!
//! fn parse_port(s: &str) -> Validated<String, u16> {
//!     Validated::from_result(s.parse().map_err(|_| format!("bad port: {}", s)))
//! }
//!
//! assert_eq!(traverse(["80", "443"], parse_port), Validated::Valid(vec![80, 443]));
//! assert_eq!(
//!     traverse(["80", "x", "y"], parse_port),
//!     Validated::invalid_all(Errors::new(
//!         "bad port: x".to_string(),
//!         vec!["bad port: y".to_string()]
//!     ))
//! );
//! ```

use crate::Validated;

/// Turn a collection of validations into a validation of a collection.
///
/// Left fold from `Valid(vec![])` using [`Validated::zip_with`], so the
/// accumulation rules of `zip_with` apply across the whole collection.
/// Valid elements contribute nothing to the error list. An empty input
/// yields `Valid(vec![])`.
///
/// # Examples
///
/// ```
/// use accrue::{traverse::sequence, Errors, Validated};
///
/// let vals = vec![
///     Validated::valid(1),
///     Validated::invalid("x"),
///     Validated::valid(3),
///     Validated::invalid("y"),
/// ];
/// assert_eq!(sequence(vals), Validated::invalid_all(Errors::new("x", vec!["y"])));
/// ```
pub fn sequence<E, A, I>(iter: I) -> Validated<E, Vec<A>>
where
    I: IntoIterator<Item = Validated<E, A>>,
{
    iter.into_iter()
        .fold(Validated::Valid(Vec::new()), |acc, next| {
            acc.zip_with(next, |mut values, value| {
                values.push(value);
                values
            })
        })
}

/// Validate every element with `f`, then [`sequence`] the results.
pub fn traverse<T, E, A, I, F>(iter: I, f: F) -> Validated<E, Vec<A>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Validated<E, A>,
{
    sequence(iter.into_iter().map(f))
}

impl<E, A> FromIterator<Validated<E, A>> for Validated<E, Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Validated<E, A>>>(iter: I) -> Self {
        sequence(iter)
    }
}

impl<E, A> Validated<E, A> {
    /// Associated form of [`sequence`].
    #[inline]
    pub fn sequence<I>(validations: I) -> Validated<E, Vec<A>>
    where
        I: IntoIterator<Item = Validated<E, A>>,
    {
        sequence(validations)
    }
}

impl<E> Validated<E, ()> {
    /// Combine a tuple of validations. See [`ValidateAll`].
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validated;
    ///
    /// let result = Validated::all((
    ///     Validated::<&str, _>::valid("ada"),
    ///     Validated::valid(36),
    /// ));
    /// assert_eq!(result, Validated::Valid(("ada", 36)));
    /// ```
    pub fn all<V>(validations: V) -> Validated<E, V::Output>
    where
        V: ValidateAll<E>,
    {
        validations.validate_all()
    }
}

/// Tuples of validations that can be combined into a validation of a tuple.
///
/// Implemented for tuples of 1 to 8 validations sharing one error type.
pub trait ValidateAll<E> {
    /// The tuple of values when every validation is valid.
    type Output;

    /// Combine all validations, accumulating errors left to right.
    fn validate_all(self) -> Validated<E, Self::Output>;
}

// Zips the remaining validations onto `acc`, flattening into one tuple as it goes.
macro_rules! zip_flat {
    ($acc:ident; [$($done:ident),*]; ) => {
        $acc
    };
    ($acc:ident; [$($done:ident),*]; $next:ident $(, $rest:ident)*) => {{
        let $acc = $acc.zip_with($next, |($($done,)*), $next| ($($done,)* $next,));
        zip_flat!($acc; [$($done,)* $next]; $($rest),*)
    }};
}

macro_rules! impl_validate_all {
    ($first:ident $(, $rest:ident)*) => {
        impl<E, $first $(, $rest)*> ValidateAll<E>
            for (Validated<E, $first>, $(Validated<E, $rest>,)*)
        {
            type Output = ($first, $($rest,)*);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validated<E, Self::Output> {
                let ($first, $($rest,)*) = self;
                let acc = $first.map(|$first| ($first,));
                zip_flat!(acc; [$first]; $($rest),*)
            }
        }
    };
}

impl_validate_all!(T1);
impl_validate_all!(T1, T2);
impl_validate_all!(T1, T2, T3);
impl_validate_all!(T1, T2, T3, T4);
impl_validate_all!(T1, T2, T3, T4, T5);
impl_validate_all!(T1, T2, T3, T4, T5, T6);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7, T8);

/// Check that every argument is valid, discarding their values.
///
/// Arguments may have different value types but must share the error type.
/// Evaluates to `Validated<E, ()>`: `Valid(())` when every argument is
/// valid, otherwise the errors of every invalid argument, in argument order.
///
/// # Examples
///
/// ```
/// use accrue::{validate_all, Errors, Validated};
///
/// let name = Validated::<_, String>::invalid("name is blank");
/// let age = Validated::<&str, _>::valid(30u8);
/// let email = Validated::<_, String>::invalid("email is malformed");
///
/// assert_eq!(
///     validate_all!(name, age, email),
///     Validated::invalid_all(Errors::new("name is blank", vec!["email is malformed"]))
/// );
/// ```
#[macro_export]
macro_rules! validate_all {
    ($($validation:expr),+ $(,)?) => {
        $crate::Validated::valid(())
            $(.zip_left($crate::Validated::map($validation, |_| ())))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Errors;

    fn parse(s: &str) -> Validated<String, i32> {
        Validated::from_result(s.parse().map_err(|_| format!("not a number: {}", s)))
    }

    #[test]
    fn test_sequence_all_valid() {
        let result = sequence(vec![Validated::<&str, _>::valid(1), Validated::valid(2)]);
        assert_eq!(result, Validated::Valid(vec![1, 2]));
    }

    #[test]
    fn test_sequence_collects_every_error_in_order() {
        let result = sequence(vec![
            Validated::valid(1),
            Validated::invalid("x"),
            Validated::valid(3),
            Validated::invalid("y"),
        ]);
        assert_eq!(result, Validated::invalid_all(Errors::new("x", vec!["y"])));
    }

    #[test]
    fn test_sequence_empty() {
        let result = sequence(Vec::<Validated<&str, i32>>::new());
        assert_eq!(result, Validated::Valid(vec![]));
    }

    #[test]
    fn test_sequence_keeps_multi_error_elements_together() {
        let result = sequence(vec![
            Validated::<_, i32>::invalid_all(Errors::new("a1", vec!["a2"])),
            Validated::invalid("b"),
        ]);
        assert_eq!(
            result,
            Validated::invalid_all(Errors::new("a1", vec!["a2", "b"]))
        );
    }

    #[test]
    fn test_traverse() {
        assert_eq!(traverse(["1", "2"], parse), Validated::Valid(vec![1, 2]));
        assert_eq!(
            traverse(["1", "a", "b"], parse),
            Validated::invalid_all(Errors::new(
                "not a number: a".to_string(),
                vec!["not a number: b".to_string()]
            ))
        );
    }

    #[test]
    fn test_collect() {
        let result: Validated<String, Vec<i32>> = ["4", "5"].into_iter().map(parse).collect();
        assert_eq!(result, Validated::Valid(vec![4, 5]));
    }

    #[test]
    fn test_validate_all_tuple() {
        let result = (
            Validated::<&str, _>::valid(1),
            Validated::valid("two"),
            Validated::valid(3.0),
        )
            .validate_all();
        assert_eq!(result, Validated::Valid((1, "two", 3.0)));

        let result = (
            Validated::<_, i32>::invalid("e1"),
            Validated::valid("two"),
            Validated::<_, f64>::invalid("e3"),
            Validated::valid('4'),
        )
            .validate_all();
        assert_eq!(
            result,
            Validated::invalid_all(Errors::new("e1", vec!["e3"]))
        );
    }

    #[test]
    fn test_all_associated_fn() {
        let ok = Validated::all((Validated::<&str, _>::valid("ada"), Validated::valid(36)));
        assert_eq!(ok, Validated::Valid(("ada", 36)));

        let bad = Validated::all((
            Validated::<_, u8>::invalid("name is blank"),
            Validated::valid(36),
            Validated::<_, bool>::invalid("terms not accepted"),
        ));
        assert_eq!(
            bad,
            Validated::invalid_all(Errors::new("name is blank", vec!["terms not accepted"]))
        );
    }

    #[test]
    fn test_validate_all_single() {
        assert_eq!(
            (Validated::<&str, _>::valid(1),).validate_all(),
            Validated::Valid((1,))
        );
    }

    #[test]
    fn test_validate_all_macro() {
        let ok = crate::validate_all!(
            Validated::<&str, _>::valid(1),
            Validated::<&str, _>::valid("x"),
        );
        assert_eq!(ok, Validated::Valid(()));

        let bad = crate::validate_all!(
            Validated::<_, i32>::invalid("a"),
            Validated::<_, &str>::valid("fine"),
            Validated::<_, ()>::invalid_all(Errors::new("b", vec!["c"]))
        );
        assert_eq!(
            bad,
            Validated::invalid_all(Errors::new("a", vec!["b", "c"]))
        );
    }
}

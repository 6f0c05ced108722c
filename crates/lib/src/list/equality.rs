//! Pluggable element equality.
//!
//! Search and removal operations (`index_of`, `contains`, `remove`,
//! `remove_all`, ...) compare elements through an [`Equality`] strategy
//! rather than calling `==` directly, so a list can match elements by a key
//! or any other relation without changing the element type.

use std::fmt;

/// A strategy for deciding whether two elements are equal.
///
/// # Examples
///
/// ```
/// use ordered_list::{OrderedList, by_key};
///
/// let mut names = OrderedList::with_equality(by_key(|s: &String| s.to_lowercase()));
/// names.add("Alice".to_string());
/// names.add("Bob".to_string());
///
/// assert_eq!(names.index_of(&"BOB".to_string()), Some(1));
/// ```
pub trait Equality<T> {
    /// Returns true if `a` and `b` are considered the same value.
    fn equal(&self, a: &T, b: &T) -> bool;
}

/// Default strategy: the element type's own `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeEq;

impl<T: PartialEq> Equality<T> for NativeEq {
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Equality decided by a caller-supplied predicate.
#[derive(Clone, Copy)]
pub struct EqBy<F>(pub F);

impl<F> fmt::Debug for EqBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EqBy(..)")
    }
}

impl<T, F> Equality<T> for EqBy<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn equal(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Equality of a projected key: `a` equals `b` when `key(a) == key(b)`.
pub fn by_key<T, K, F>(key: F) -> EqBy<impl Fn(&T, &T) -> bool + Clone>
where
    F: Fn(&T) -> K + Clone,
    K: PartialEq,
{
    EqBy(move |a: &T, b: &T| key(a) == key(b))
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Orderings for [`TreeSet`][crate::TreeSet].
//!
//! A [`Comparator`] orders values of its [`Key`][Comparator::Key] type.
//! A tree set of `T` sorts its elements by the key each one
//! [borrows][std::borrow::Borrow] as, which is how a set of map entries
//! ends up ordered by the entries' keys alone.

use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};
use std::marker::PhantomData;

/// A total order over `Self::Key`.
pub trait Comparator {
    /// The type this comparator orders.
    type Key: ?Sized;

    /// Compare `a` to `b`.
    fn compare(&self, a: &Self::Key, b: &Self::Key) -> Ordering;
}

/// A zero-sized comparator that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
pub struct OrdComparator<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> OrdComparator<T> {
    /// Construct the natural ordering comparator.
    #[must_use]
    pub const fn new() -> Self {
        OrdComparator(PhantomData)
    }
}

impl<T: ?Sized> Default for OrdComparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for OrdComparator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OrdComparator<T> {}

impl<T: ?Sized> Debug for OrdComparator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str("OrdComparator")
    }
}

impl<T: ?Sized + Ord> Comparator for OrdComparator<T> {
    type Key = T;

    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparator built from a closure. See [`by`].
pub struct FnComparator<T: ?Sized, F> {
    f: F,
    phantom: PhantomData<fn(&T)>,
}

/// Build a comparator from a closure.
///
/// # Examples
///
/// ```
/// # use setmap::{compare, TreeSet};
/// let mut set = TreeSet::with_comparator(compare::by(|a: &str, b: &str| b.len().cmp(&a.len())));
/// set.insert("a");
/// set.insert("abc");
/// set.insert("ab");
/// assert_eq!(vec![&"abc", &"ab", &"a"], set.iter().collect::<Vec<_>>());
/// ```
pub fn by<T, F>(f: F) -> FnComparator<T, F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    FnComparator {
        f,
        phantom: PhantomData,
    }
}

impl<T: ?Sized, F: Clone> Clone for FnComparator<T, F> {
    fn clone(&self) -> Self {
        FnComparator {
            f: self.f.clone(),
            phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Debug for FnComparator<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str("FnComparator")
    }
}

impl<T, F> Comparator for FnComparator<T, F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    type Key = T;

    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b)
    }
}

/// Reverses the order of the comparator it wraps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

impl<C: Comparator> Comparator for Reverse<C> {
    type Key = C::Key;

    fn compare(&self, a: &Self::Key, b: &Self::Key) -> Ordering {
        self.0.compare(b, a)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The contracts every set flavour fulfils.
//!
//! Each concrete set has inherent methods of the same names, so these
//! traits only need to be in scope when writing code that is generic
//! over the flavour, such as [`Map`][crate::Map].

use crate::error::Result;

/// A collection of unique elements.
///
/// `Q` is the type elements are looked up by. For the hash flavours this
/// is anything the element type [borrows][std::borrow::Borrow] as; for
/// [`TreeSet`][crate::TreeSet] it is the key type of its comparator.
pub trait Set<T, Q: ?Sized = T> {
    /// A borrowing iterator over the elements.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// A traversal that can remove the element it last returned.
    type Cursor<'a>: Cursor<T>
    where
        Self: 'a,
        T: 'a;

    /// Add an element, unless an equal one is already present.
    ///
    /// Returns whether the element was added. If it wasn't, the set is
    /// left unchanged and `value` is dropped.
    fn insert(&mut self, value: T) -> bool;

    /// Remove the element equal to `pattern`, reporting whether there
    /// was one.
    fn remove(&mut self, pattern: &Q) -> bool {
        self.take(pattern).is_some()
    }

    /// Remove and return the element equal to `pattern`.
    fn take(&mut self, pattern: &Q) -> Option<T>;

    /// Test whether an element equal to `pattern` is present.
    fn contains(&self, pattern: &Q) -> bool {
        self.get(pattern).is_some()
    }

    /// Get the stored element equal to `pattern`.
    fn get(&self, pattern: &Q) -> Option<&T>;

    /// Get mutable access to the stored element equal to `pattern`.
    ///
    /// It is a logic error to change the element in a way that changes
    /// how it hashes, compares for equality or orders. The behaviour
    /// resulting from such a logic error is unspecified but will not be
    /// undefined behaviour.
    fn get_mut(&mut self, pattern: &Q) -> Option<&mut T>;

    /// The number of elements.
    fn len(&self) -> usize;

    /// Test whether the set holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard every element.
    fn clear(&mut self);

    /// Iterate over the elements in the set's own order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Start a removal-capable traversal.
    fn cursor(&mut self) -> Self::Cursor<'_>;

    /// Remove every element `f` rejects, reporting whether any were
    /// removed.
    fn retain<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor();
        let mut removed = false;
        while let Ok(value) = cursor.advance() {
            if !f(value) {
                removed |= cursor.remove().is_ok();
            }
        }
        removed
    }
}

/// A [`Set`] whose elements are kept in ascending order.
pub trait SortedSet<T, Q: ?Sized = T>: Set<T, Q> {
    /// The least element.
    ///
    /// Fails with [`Error::NoSuchElement`][crate::Error::NoSuchElement]
    /// on an empty set.
    fn first(&self) -> Result<&T>;

    /// The greatest element.
    ///
    /// Fails with [`Error::NoSuchElement`][crate::Error::NoSuchElement]
    /// on an empty set.
    fn last(&self) -> Result<&T>;

    /// The greatest element less than or equal to `key`.
    fn floor(&self, key: &Q) -> Option<&T>;

    /// The least element greater than or equal to `key`.
    fn ceiling(&self, key: &Q) -> Option<&T>;

    /// A new set holding copies of the elements in `from..to`.
    fn sub_set(&self, from: &Q, to: &Q) -> Self
    where
        Self: Sized,
        T: Clone;
}

/// A one-pass traversal over a set that can remove the element it most
/// recently returned.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate setmap;
/// # use setmap::{Cursor, Error};
/// let mut set = treeset![1, 2, 3];
/// let mut cursor = set.cursor();
/// assert_eq!(Err(Error::IllegalState), cursor.remove());
/// assert_eq!(Ok(&1), cursor.advance());
/// assert_eq!(Ok(1), cursor.remove());
/// assert_eq!(Err(Error::IllegalState), cursor.remove());
/// assert_eq!(Ok(&2), cursor.advance());
/// assert_eq!(vec![&2, &3], set.iter().collect::<Vec<_>>());
/// ```
pub trait Cursor<T> {
    /// Test whether [`advance`][Cursor::advance] would yield an element.
    fn has_next(&self) -> bool;

    /// Move to the next element and return it.
    ///
    /// Fails with [`Error::NoSuchElement`][crate::Error::NoSuchElement]
    /// once the traversal is exhausted.
    fn advance(&mut self) -> Result<&T>;

    /// Remove the element the last [`advance`][Cursor::advance]
    /// returned.
    ///
    /// Fails with [`Error::IllegalState`][crate::Error::IllegalState]
    /// if nothing has been returned yet, or if the element has already
    /// been removed. The set is unchanged when this fails.
    fn remove(&mut self) -> Result<T>;
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An ordered set.
//!
//! An ordered set implemented as a plain [binary search tree] [1].
//!
//! The tree is never rebalanced, so its shape follows insertion order:
//! operations are O(log n) on randomly ordered input but degrade to
//! O(n) when values arrive already sorted. [`height`][TreeSet::height]
//! and [`width`][TreeSet::width] report the shape.
//!
//! Values come out from lowest to highest according to the set's
//! [`Comparator`]. By default that is the values' own [`Ord`]
//! implementation; [`TreeSet::with_comparator`] takes any other.
//!
//! [1]: https://en.wikipedia.org/wiki/Binary_search_tree

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};
use std::iter::{FromIterator, FusedIterator};

use tracing::trace;

use super::compare::{Comparator, OrdComparator};
use crate::error::{self, Result};
use crate::nodes::arena::Handle;
use crate::nodes::bst::{self, Search, Tree};
use crate::set::{self, Set, SortedSet};
use crate::util::LastReturned;

/// Construct a set from a sequence of values.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate setmap;
/// # use setmap::treeset::TreeSet;
/// # fn main() {
/// let expected: TreeSet<i32> = TreeSet::from(vec![1, 2, 3]);
/// assert_eq!(treeset![1, 2, 3], expected);
/// # }
/// ```
#[macro_export]
macro_rules! treeset {
    () => { $crate::treeset::TreeSet::new() };

    ( $($x:expr),* ) => {{
        let mut l = $crate::treeset::TreeSet::new();
        $(
            l.insert($x);
        )*
            l
    }};

    ( $($x:expr ,)* ) => {{
        let mut l = $crate::treeset::TreeSet::new();
        $(
            l.insert($x);
        )*
            l
    }};
}

/// An ordered set.
///
/// See the [module documentation][crate::treeset] for details.
pub struct TreeSet<A, C = OrdComparator<A>> {
    tree: Tree<A>,
    comparator: C,
}

impl<A> TreeSet<A, OrdComparator<A>> {
    /// Construct an empty set ordered by `A`'s [`Ord`] implementation.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        TreeSet {
            tree: Tree::new(),
            comparator: OrdComparator::new(),
        }
    }
}

impl<A, C> TreeSet<A, C> {
    /// Construct an empty set ordered by `comparator`.
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        TreeSet {
            tree: Tree::new(),
            comparator,
        }
    }

    /// Get the comparator the set is ordered by.
    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Test whether a set is empty.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the size of a set.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Get the number of nodes on the longest path from the root to a
    /// leaf. An empty set has height 0.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// assert_eq!(2, treeset![2, 1, 3].height());
    /// assert_eq!(3, treeset![1, 2, 3].height());
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Get the number of leaves in the tree.
    ///
    /// Time: O(n)
    #[must_use]
    pub fn width(&self) -> usize {
        self.tree.width()
    }

    /// Discard all elements from the set.
    ///
    /// Time: O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Create an iterator over the contents of the set, lowest first.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            it: self.tree.iter(),
        }
    }

    /// Start an in-order traversal that can remove the values it
    /// visits.
    pub fn cursor(&mut self) -> Cursor<'_, A, C> {
        Cursor {
            next: self.tree.first(),
            last: LastReturned::NotStarted,
            set: self,
        }
    }
}

impl<A, C> TreeSet<A, C>
where
    C: Comparator,
    A: Borrow<C::Key>,
{
    fn find(&self, key: &C::Key) -> Option<Handle> {
        let comparator = &self.comparator;
        self.tree
            .find(|node| comparator.compare(key, node.borrow()))
    }

    /// Test if a value is part of a set.
    ///
    /// Time: O(log n) average
    #[must_use]
    pub fn contains(&self, key: &C::Key) -> bool {
        self.find(key).is_some()
    }

    /// Get the stored value comparing equal to `key`.
    ///
    /// Time: O(log n) average
    #[must_use]
    pub fn get(&self, key: &C::Key) -> Option<&A> {
        self.find(key).map(|handle| self.tree.get(handle))
    }

    /// Get mutable access to the stored value comparing equal to `key`.
    ///
    /// It is a logic error to change the value in a way that changes
    /// where it sorts.
    pub fn get_mut(&mut self, key: &C::Key) -> Option<&mut A> {
        let handle = self.find(key)?;
        Some(self.tree.get_mut(handle))
    }

    /// Insert a value into a set, unless one comparing equal is
    /// already present.
    ///
    /// Returns `true` if the value was inserted. The new value becomes
    /// a leaf; nothing already in the tree moves.
    ///
    /// Time: O(log n) average
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let mut set = treeset![456];
    /// assert!(set.insert(123));
    /// assert!(!set.insert(456));
    /// assert_eq!(vec![&123, &456], set.iter().collect::<Vec<_>>());
    /// ```
    pub fn insert(&mut self, a: A) -> bool {
        let comparator = &self.comparator;
        let key = a.borrow();
        match self.tree.search(|node| comparator.compare(key, node.borrow())) {
            Search::Found(_) => false,
            Search::Vacant(vacancy) => {
                self.tree.attach(vacancy, a);
                true
            }
        }
    }

    /// Remove a value from a set if it exists, reporting whether it
    /// did.
    ///
    /// Time: O(log n) average
    pub fn remove(&mut self, key: &C::Key) -> bool {
        self.take(key).is_some()
    }

    /// Remove a value from a set if it exists, returning it.
    ///
    /// Time: O(log n) average
    pub fn take(&mut self, key: &C::Key) -> Option<A> {
        let handle = self.find(key)?;
        Some(self.tree.remove(handle))
    }

    /// Remove the values which don't satisfy a predicate, reporting
    /// whether any were removed.
    ///
    /// Time: O(n log n) average
    pub fn retain<F>(&mut self, f: F) -> bool
    where
        F: FnMut(&A) -> bool,
    {
        <Self as Set<A, C::Key>>::retain(self, f)
    }

    /// Get the smallest value in a set.
    ///
    /// Fails with [`Error::NoSuchElement`][crate::Error::NoSuchElement]
    /// if the set is empty.
    ///
    /// Time: O(log n) average
    pub fn first(&self) -> Result<&A> {
        self.tree
            .first()
            .map(|handle| self.tree.get(handle))
            .ok_or(error::Error::NoSuchElement)
    }

    /// Get the largest value in a set.
    ///
    /// Fails with [`Error::NoSuchElement`][crate::Error::NoSuchElement]
    /// if the set is empty.
    ///
    /// Time: O(log n) average
    pub fn last(&self) -> Result<&A> {
        self.tree
            .last()
            .map(|handle| self.tree.get(handle))
            .ok_or(error::Error::NoSuchElement)
    }

    /// Get the largest value in the set that is less than or equal to
    /// `key`.
    ///
    /// Time: O(log n) average
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let set = treeset![1, 3, 5, 7, 9];
    /// assert_eq!(Some(&5), set.floor(&5));
    /// assert_eq!(Some(&5), set.floor(&6));
    /// assert_eq!(None, set.floor(&0));
    /// ```
    #[must_use]
    pub fn floor(&self, key: &C::Key) -> Option<&A> {
        let comparator = &self.comparator;
        self.tree
            .floor(|node| comparator.compare(key, node.borrow()))
            .map(|handle| self.tree.get(handle))
    }

    /// Get the smallest value in the set that is greater than or equal
    /// to `key`.
    ///
    /// Time: O(log n) average
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let set = treeset![1, 3, 5, 7, 9];
    /// assert_eq!(Some(&5), set.ceiling(&5));
    /// assert_eq!(Some(&7), set.ceiling(&6));
    /// assert_eq!(None, set.ceiling(&10));
    /// ```
    #[must_use]
    pub fn ceiling(&self, key: &C::Key) -> Option<&A> {
        self.ceiling_handle(key).map(|handle| self.tree.get(handle))
    }

    fn ceiling_handle(&self, key: &C::Key) -> Option<Handle> {
        let comparator = &self.comparator;
        self.tree
            .ceiling(|node| comparator.compare(key, node.borrow()))
    }

    /// Create an iterator over the values from `from` inclusive up to
    /// `to` exclusive, lowest first.
    ///
    /// The iterator is empty unless `from` sorts strictly before `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let set = treeset![1, 3, 5, 7, 9];
    /// assert_eq!(vec![&3, &5], set.range(&2, &7).collect::<Vec<_>>());
    /// assert_eq!(0, set.range(&7, &2).count());
    /// ```
    #[must_use]
    pub fn range(&self, from: &C::Key, to: &C::Key) -> RangedIter<'_, A> {
        if self.comparator.compare(from, to) != Ordering::Less {
            return RangedIter {
                it: self.tree.walk(None, None),
            };
        }
        RangedIter {
            it: self
                .tree
                .walk(self.ceiling_handle(from), self.ceiling_handle(to)),
        }
    }

    /// Construct a new set holding copies of the values from `from`
    /// inclusive up to `to` exclusive, ordered by a copy of this set's
    /// comparator.
    ///
    /// Time: O(n log n) average
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let set = treeset![3, -10, 20, 1, 10, 8, 100, 17];
    /// assert_eq!(treeset![10, 17], set.sub_set(&10, &20));
    /// ```
    #[must_use]
    pub fn sub_set(&self, from: &C::Key, to: &C::Key) -> Self
    where
        A: Clone,
        C: Clone,
    {
        let values: Vec<&A> = self.range(from, to).collect();
        trace!(copied = values.len(), of = self.len(), "extracting sub set");
        let mut out = TreeSet::with_comparator(self.comparator.clone());
        // Medians first, so the copy comes out balanced.
        let mut spans = vec![(0, values.len())];
        while let Some((low, high)) = spans.pop() {
            if low < high {
                let middle = low + (high - low) / 2;
                out.insert(values[middle].clone());
                spans.push((middle + 1, high));
                spans.push((low, middle));
            }
        }
        out
    }

    /// Test whether a set is a subset of another set, meaning that all
    /// values in our set must also be in the other set.
    ///
    /// Time: O(n log n) average
    #[must_use]
    pub fn is_subset<C2>(&self, other: &TreeSet<A, C2>) -> bool
    where
        C2: Comparator<Key = C::Key>,
    {
        self.len() <= other.len() && self.iter().all(|a| other.contains(a.borrow()))
    }

    /// Panic unless the values are in strictly ascending order and the
    /// tree's links are consistent.
    #[cfg(any(test, feature = "debug"))]
    pub fn check_sane(&self) {
        let comparator = &self.comparator;
        self.tree
            .check_sane(|a, b| comparator.compare(a.borrow(), b.borrow()));
    }
}

impl<A, C> Set<A, C::Key> for TreeSet<A, C>
where
    C: Comparator,
    A: Borrow<C::Key>,
{
    type Iter<'a> = Iter<'a, A> where Self: 'a, A: 'a;
    type Cursor<'a> = Cursor<'a, A, C> where Self: 'a, A: 'a;

    fn insert(&mut self, value: A) -> bool {
        TreeSet::insert(self, value)
    }

    fn take(&mut self, pattern: &C::Key) -> Option<A> {
        TreeSet::take(self, pattern)
    }

    fn get(&self, pattern: &C::Key) -> Option<&A> {
        TreeSet::get(self, pattern)
    }

    fn get_mut(&mut self, pattern: &C::Key) -> Option<&mut A> {
        TreeSet::get_mut(self, pattern)
    }

    fn len(&self) -> usize {
        TreeSet::len(self)
    }

    fn clear(&mut self) {
        TreeSet::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        TreeSet::iter(self)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        TreeSet::cursor(self)
    }
}

impl<A, C> SortedSet<A, C::Key> for TreeSet<A, C>
where
    C: Comparator + Clone,
    A: Borrow<C::Key>,
{
    fn first(&self) -> Result<&A> {
        TreeSet::first(self)
    }

    fn last(&self) -> Result<&A> {
        TreeSet::last(self)
    }

    fn floor(&self, key: &C::Key) -> Option<&A> {
        TreeSet::floor(self, key)
    }

    fn ceiling(&self, key: &C::Key) -> Option<&A> {
        TreeSet::ceiling(self, key)
    }

    fn sub_set(&self, from: &C::Key, to: &C::Key) -> Self
    where
        A: Clone,
    {
        TreeSet::sub_set(self, from, to)
    }
}

// Core traits

impl<A: Clone, C: Clone> Clone for TreeSet<A, C> {
    /// Clone a set. The copy has the same shape as the original.
    ///
    /// Time: O(n)
    fn clone(&self) -> Self {
        TreeSet {
            tree: self.tree.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<A, C, C2> PartialEq<TreeSet<A, C2>> for TreeSet<A, C>
where
    C: Comparator,
    C2: Comparator<Key = C::Key>,
    A: Borrow<C::Key>,
{
    fn eq(&self, other: &TreeSet<A, C2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<A, C> Eq for TreeSet<A, C>
where
    C: Comparator,
    A: Borrow<C::Key>,
{
}

impl<A, C: Default> Default for TreeSet<A, C> {
    fn default() -> Self {
        TreeSet::with_comparator(C::default())
    }
}

impl<A, C, R> Extend<R> for TreeSet<A, C>
where
    C: Comparator,
    A: Borrow<C::Key> + From<R>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = R>,
    {
        for value in iter {
            self.insert(From::from(value));
        }
    }
}

impl<A: Debug, C> Debug for TreeSet<A, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Iterators

/// An iterator over the elements of a set, lowest first.
pub struct Iter<'a, A> {
    it: bst::Iter<'a, A>,
}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Iter {
            it: self.it.clone(),
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back()
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}

/// A ranged iterator over the elements of a set.
///
/// The only difference from `Iter` is that this one doesn't implement
/// `ExactSizeIterator` because we can't know the size of the range
/// without walking it.
pub struct RangedIter<'a, A> {
    it: bst::Walk<'a, A>,
}

impl<'a, A> Iterator for RangedIter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
}

impl<'a, A> FusedIterator for RangedIter<'a, A> {}

/// A consuming iterator over the elements of a set, lowest first.
pub struct ConsumingIter<A> {
    it: bst::Drain<A>,
}

impl<A> Iterator for ConsumingIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<A> DoubleEndedIterator for ConsumingIter<A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back()
    }
}

impl<A> ExactSizeIterator for ConsumingIter<A> {}

impl<A> FusedIterator for ConsumingIter<A> {}

/// A removal-capable in-order traversal over a set.
pub struct Cursor<'a, A, C> {
    set: &'a mut TreeSet<A, C>,
    next: Option<Handle>,
    last: LastReturned<Handle>,
}

impl<'a, A, C> set::Cursor<A> for Cursor<'a, A, C> {
    fn has_next(&self) -> bool {
        self.next.is_some()
    }

    fn advance(&mut self) -> Result<&A> {
        let handle = self.next.ok_or(error::Error::NoSuchElement)?;
        self.next = self.set.tree.successor(handle);
        self.last = LastReturned::Removable(handle);
        Ok(self.set.tree.get(handle))
    }

    // Removing a node with two children frees its predecessor, which
    // has already been visited, so `next` is never invalidated.
    fn remove(&mut self) -> Result<A> {
        let handle = self.last.take()?;
        Ok(self.set.tree.remove(handle))
    }
}

// Iterator conversions

impl<A, C, R> FromIterator<R> for TreeSet<A, C>
where
    C: Comparator + Default,
    A: Borrow<C::Key> + From<R>,
{
    fn from_iter<T>(i: T) -> Self
    where
        T: IntoIterator<Item = R>,
    {
        let mut out = Self::default();
        out.extend(i);
        out
    }
}

impl<'a, A, C> IntoIterator for &'a TreeSet<A, C> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, C> IntoIterator for TreeSet<A, C> {
    type Item = A;
    type IntoIter = ConsumingIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        ConsumingIter {
            it: self.tree.into_iter(),
        }
    }
}

// Conversions

impl<A, C, const N: usize> From<[A; N]> for TreeSet<A, C>
where
    C: Comparator + Default,
    A: Borrow<C::Key>,
{
    fn from(arr: [A; N]) -> Self {
        IntoIterator::into_iter(arr).collect()
    }
}

impl<'a, A, C> From<&'a [A]> for TreeSet<A, C>
where
    C: Comparator + Default,
    A: Borrow<C::Key> + Clone,
{
    fn from(slice: &'a [A]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<A, C> From<Vec<A>> for TreeSet<A, C>
where
    C: Comparator + Default,
    A: Borrow<C::Key>,
{
    fn from(vec: Vec<A>) -> Self {
        vec.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::ord::compare::{self, Reverse};
    use crate::proptest::tree_set;
    use crate::set::Cursor as _;
    use ::proptest::num::i16;
    use ::proptest::{collection, proptest};
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;
    use std::collections::BTreeSet;

    assert_impl_all!(TreeSet<i32>: Send, Sync);
    assert_covariant!(TreeSet<T> in T);

    fn original() -> TreeSet<i32> {
        treeset![3, -10, 20, 1, 10, 8, 100, 17]
    }

    fn contents<A: Clone, C>(set: &TreeSet<A, C>) -> Vec<A> {
        set.iter().cloned().collect()
    }

    #[test]
    fn iterates_in_order() {
        let set = original();
        assert_eq!(vec![-10, 1, 3, 8, 10, 17, 20, 100], contents(&set));
        assert_eq!(
            vec![100, 20, 17, 10, 8, 3, 1, -10],
            set.iter().rev().copied().collect::<Vec<_>>()
        );
        set.check_sane();
    }

    #[test]
    fn floor_and_ceiling() {
        let set = original();
        assert_eq!(Some(&10), set.floor(&11));
        assert_eq!(Some(&17), set.ceiling(&11));
        assert_eq!(Some(&10), set.floor(&10));
        assert_eq!(Some(&10), set.ceiling(&10));
        assert_eq!(None, set.floor(&-11));
        assert_eq!(None, set.ceiling(&101));
        assert_eq!(Some(&100), set.floor(&1000));
        assert_eq!(Some(&-10), set.ceiling(&-1000));
    }

    #[test]
    fn first_and_last() {
        let set = original();
        assert_eq!(Ok(&-10), set.first());
        assert_eq!(Ok(&100), set.last());
        let empty = TreeSet::<i32>::new();
        assert_eq!(Err(Error::NoSuchElement), empty.first());
        assert_eq!(Err(Error::NoSuchElement), empty.last());
    }

    #[test]
    fn sub_set_is_half_open() {
        let set = original();
        let sub = set.sub_set(&10, &20);
        assert_eq!(vec![10, 17], contents(&sub));
        sub.check_sane();
        assert!(set.sub_set(&20, &10).is_empty());
        assert!(set.sub_set(&10, &10).is_empty());
        assert_eq!(contents(&set), contents(&set.sub_set(&-100, &1000)));
        assert_eq!(8, set.len());
    }

    #[test]
    fn sub_set_of_a_sorted_run_is_balanced() {
        let set: TreeSet<i32> = (0..15).collect();
        assert_eq!(15, set.height());
        let sub = set.sub_set(&0, &15);
        assert_eq!(4, sub.height());
        assert_eq!(8, sub.width());
    }

    #[test]
    fn removal_of_every_shape() {
        let mut set = original();
        // Leaf.
        assert!(set.remove(&17));
        // One child.
        assert!(set.remove(&-10));
        // Two children.
        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert_eq!(vec![1, 8, 10, 20, 100], contents(&set));
        set.check_sane();
    }

    #[test]
    fn cursor_removal_discipline() {
        let mut set = original();
        let mut cursor = set.cursor();
        assert_eq!(Err(Error::IllegalState), cursor.remove());
        assert_eq!(Ok(&-10), cursor.advance());
        assert_eq!(Ok(&1), cursor.advance());
        assert_eq!(Ok(&3), cursor.advance());
        assert_eq!(Ok(3), cursor.remove());
        assert_eq!(Err(Error::IllegalState), cursor.remove());
        assert_eq!(Ok(&8), cursor.advance());
        assert_eq!(Ok(&10), cursor.advance());
        assert_eq!(Ok(10), cursor.remove());
        assert_eq!(vec![-10, 1, 8, 17, 20, 100], contents(&set));
        set.check_sane();
    }

    #[test]
    fn cursor_can_empty_the_set() {
        let mut set = original();
        let mut cursor = set.cursor();
        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(*cursor.advance().unwrap());
            cursor.remove().unwrap();
        }
        assert_eq!(Err(Error::NoSuchElement), cursor.advance().copied());
        assert_eq!(vec![-10, 1, 3, 8, 10, 17, 20, 100], seen);
        assert!(set.is_empty());
    }

    #[test]
    fn custom_comparators() {
        let mut set: TreeSet<i32, _> = TreeSet::with_comparator(Reverse(OrdComparator::new()));
        set.extend([1, 3, 2]);
        assert_eq!(vec![3, 2, 1], contents(&set));
        assert_eq!(Some(&2), set.floor(&2));
        assert_eq!(Some(&1), set.floor(&0));
        assert_eq!(vec![&3, &2], set.range(&4, &1).collect::<Vec<_>>());

        let mut by_len = TreeSet::with_comparator(compare::by(|a: &str, b: &str| {
            a.len().cmp(&b.len())
        }));
        assert!(by_len.insert("one"));
        assert!(!by_len.insert("two"));
        assert_eq!(Some(&"one"), by_len.get("six"));
        assert!(by_len.contains("abc"));
    }

    #[test]
    fn equality_is_set_equality() {
        assert_eq!(treeset![1, 2, 3], treeset![3, 2, 1]);
        assert_ne!(treeset![1, 2, 3], treeset![1, 2]);
        assert!(treeset![1, 2].is_subset(&treeset![1, 2, 3]));
    }

    #[test]
    fn proper_formatting() {
        assert_eq!("{1, 2}", format!("{:?}", treeset![2, 1]));
    }

    proptest! {
        #[test]
        fn proptest_a_set(ref s in tree_set(".*", 10..100)) {
            assert!(s.len() < 100);
            assert!(s.len() >= 10);
        }

        #[test]
        fn matches_btree_set(
            ref ops in collection::vec((::proptest::bool::ANY, i16::ANY), 0..500)
        ) {
            let mut set = TreeSet::new();
            let mut model = BTreeSet::new();
            for (insert, value) in ops {
                if *insert {
                    assert_eq!(model.insert(*value), set.insert(*value));
                } else {
                    assert_eq!(model.remove(value), set.remove(value));
                }
            }
            set.check_sane();
            assert_eq!(model.iter().collect::<Vec<_>>(), set.iter().collect::<Vec<_>>());
            assert_eq!(model.first(), set.first().ok());
            assert_eq!(model.last(), set.last().ok());
        }

        #[test]
        fn floor_ceiling_and_range_match_btree_set(
            ref input in collection::btree_set(i16::ANY, 0..200),
            probe in i16::ANY,
            upper in i16::ANY,
        ) {
            let set: TreeSet<i16> = input.iter().copied().collect();
            assert_eq!(input.range(..=probe).next_back(), set.floor(&probe));
            assert_eq!(input.range(probe..).next(), set.ceiling(&probe));
            let expected: Vec<_> = if probe < upper {
                input.range(probe..upper).collect()
            } else {
                Vec::new()
            };
            assert_eq!(expected, set.range(&probe, &upper).collect::<Vec<_>>());
            let sub = set.sub_set(&probe, &upper);
            sub.check_sane();
            assert_eq!(expected, sub.iter().collect::<Vec<_>>());
        }

        #[test]
        fn retain_matches_btree_set(ref input in collection::btree_set(i16::ANY, 0..300)) {
            let mut set: TreeSet<i16> = input.iter().copied().collect();
            let mut model = input.clone();
            model.retain(|v| v % 3 != 0);
            assert_eq!(model.len() != input.len(), set.retain(|v| v % 3 != 0));
            assert_eq!(model.into_iter().collect::<Vec<_>>(), contents(&set));
            set.check_sane();
        }
    }
}

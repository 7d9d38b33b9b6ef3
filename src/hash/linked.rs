// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An insertion-ordered set.
//!
//! A [`LinkedHashSet`] iterates over its values in the order they were
//! first inserted, while still offering O(1) average lookups and
//! removals. Values live in a doubly linked list; a hash table indexes
//! the list nodes, so unlinking one never has to walk the list.
//!
//! Inserting a value that's already present does not move it: its
//! position is that of the insertion which added it. Removing it and
//! inserting it again sends it to the back.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{Debug, Error, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

use crate::config::HashConfig;
use crate::error::{self, Result};
use crate::nodes::arena::Handle;
use crate::nodes::list::{self, List};
use crate::nodes::table::{hash_key, RawTable};
use crate::set::{self, Set};
use crate::util::LastReturned;

/// Construct an insertion-ordered set from a sequence of values.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate setmap;
/// # fn main() {
/// let set = linkedhashset![3, 1, 2, 1];
/// assert_eq!(vec![&3, &1, &2], set.iter().collect::<Vec<_>>());
/// # }
/// ```
#[macro_export]
macro_rules! linkedhashset {
    () => { $crate::linkedhashset::LinkedHashSet::new() };

    ( $($x:expr),* ) => {{
        let mut l = $crate::linkedhashset::LinkedHashSet::new();
        $(
            l.insert($x);
        )*
            l
    }};

    ( $($x:expr ,)* ) => {{
        let mut l = $crate::linkedhashset::LinkedHashSet::new();
        $(
            l.insert($x);
        )*
            l
    }};
}

/// A hash set that remembers insertion order.
///
/// See the [module documentation][crate::linkedhashset] for details.
pub struct LinkedHashSet<A, S = RandomState> {
    hasher: S,
    order: List<A>,
    index: RawTable<Handle>,
}

impl<A> LinkedHashSet<A, RandomState> {
    /// Construct an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A, S> LinkedHashSet<A, S> {
    /// Construct an empty set using the provided hasher.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        LinkedHashSet {
            hasher,
            order: List::new(),
            index: RawTable::new(&HashConfig::new()),
        }
    }

    /// Construct an empty set with the given index sizing and hasher.
    pub fn with_config(config: HashConfig, hasher: S) -> Result<Self> {
        config.validate()?;
        Ok(LinkedHashSet {
            hasher,
            order: List::new(),
            index: RawTable::new(&config),
        })
    }

    /// Construct an empty set using the same hasher and load factor as
    /// the current set.
    #[must_use]
    pub fn new_from<A2>(&self) -> LinkedHashSet<A2, S>
    where
        S: Clone,
    {
        LinkedHashSet {
            hasher: self.hasher.clone(),
            order: List::new(),
            index: RawTable::new(&HashConfig::new().load_factor(self.index.load_factor())),
        }
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
        self.order.len()
    }

    /// Get the number of buckets in the index.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    /// Get the load factor of the index.
    #[must_use]
    pub fn load_factor(&self) -> f32 {
        self.index.load_factor()
    }

    /// Get a reference to the set's [`BuildHasher`][BuildHasher].
    #[must_use]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Discard all elements from the set.
    ///
    /// Time: O(n)
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    /// Get the oldest value in the set.
    ///
    /// Time: O(1)
    #[must_use]
    pub fn front(&self) -> Option<&A> {
        self.iter().next()
    }

    /// Get the newest value in the set.
    ///
    /// Time: O(1)
    #[must_use]
    pub fn back(&self) -> Option<&A> {
        self.iter().next_back()
    }

    /// Get an iterator over the values in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let mut set = linkedhashset!["b", "a", "c"];
    /// set.remove("b");
    /// set.insert("b");
    /// assert_eq!(vec![&"a", &"c", &"b"], set.iter().collect::<Vec<_>>());
    /// assert_eq!(vec![&"b", &"c", &"a"], set.iter().rev().collect::<Vec<_>>());
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            it: self.order.iter(),
        }
    }

    /// Start a traversal in insertion order that can remove the values
    /// it visits.
    pub fn cursor(&mut self) -> Cursor<'_, A, S> {
        Cursor {
            next: self.order.head(),
            last: LastReturned::NotStarted,
            set: self,
        }
    }
}

impl<A, S> LinkedHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher,
{
    fn locate<BA>(&self, a: &BA) -> Option<Handle>
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        let order = &self.order;
        self.index
            .find(hash_key(&self.hasher, a), |handle| {
                order.get(*handle).borrow() == a
            })
            .copied()
    }

    /// Test if a value is part of a set.
    ///
    /// Time: O(1) average
    #[must_use]
    pub fn contains<BA>(&self, a: &BA) -> bool
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        self.locate(a).is_some()
    }

    /// Get the stored value equal to `a`.
    ///
    /// Time: O(1) average
    #[must_use]
    pub fn get<BA>(&self, a: &BA) -> Option<&A>
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        self.locate(a).map(|handle| self.order.get(handle))
    }

    /// Get mutable access to the stored value equal to `a`.
    ///
    /// It is a logic error to change the value in a way that changes
    /// its hash or what it is equal to.
    pub fn get_mut<BA>(&mut self, a: &BA) -> Option<&mut A>
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        let handle = self.locate(a)?;
        Some(self.order.get_mut(handle))
    }

    /// Append a value to the set, unless an equal value is already
    /// present.
    ///
    /// Returns `true` if the value was inserted. An existing equal value
    /// keeps both its identity and its position.
    ///
    /// Time: O(1) amortised
    pub fn insert(&mut self, a: A) -> bool {
        let hash = hash_key(&self.hasher, &a);
        let order = &self.order;
        if self
            .index
            .find(hash, |handle| *order.get(*handle) == a)
            .is_some()
        {
            return false;
        }
        let handle = self.order.push_back(a);
        self.index.insert_unique(hash, handle);
        true
    }

    /// Remove a value from a set if it exists, reporting whether it
    /// did.
    ///
    /// Time: O(1) average
    pub fn remove<BA>(&mut self, a: &BA) -> bool
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        self.take(a).is_some()
    }

    /// Remove a value from a set if it exists, returning it.
    ///
    /// Time: O(1) average
    pub fn take<BA>(&mut self, a: &BA) -> Option<A>
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        let order = &self.order;
        let handle = self
            .index
            .remove(hash_key(&self.hasher, a), |handle| {
                order.get(*handle).borrow() == a
            })?;
        Some(self.order.unlink(handle))
    }

    /// Remove the values which don't satisfy a predicate, keeping the
    /// order of the rest. Reports whether any were removed.
    ///
    /// Time: O(n)
    pub fn retain<F>(&mut self, f: F) -> bool
    where
        F: FnMut(&A) -> bool,
    {
        <Self as Set<A>>::retain(self, f)
    }

    /// Remove and return the oldest value.
    ///
    /// Time: O(1) average
    pub fn pop_front(&mut self) -> Option<A> {
        let head = self.order.head()?;
        let hash = hash_key(&self.hasher, self.order.get(head));
        self.index.remove(hash, |handle| *handle == head);
        Some(self.order.unlink(head))
    }

    /// Panic unless the index and the order list hold exactly the same
    /// values.
    #[cfg(any(test, feature = "debug"))]
    pub fn check_sane(&self) {
        self.order.check_sane();
        self.index.check_sane();
        assert_eq!(
            self.order.len(),
            self.index.len(),
            "index and order list disagree on length"
        );
        for handle in self.order.handles() {
            let hash = hash_key(&self.hasher, self.order.get(handle));
            assert!(
                self.index.find(hash, |indexed| *indexed == handle).is_some(),
                "value missing from index"
            );
        }
    }
}

impl<A, Q, S> Set<A, Q> for LinkedHashSet<A, S>
where
    A: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Iter<'a> = Iter<'a, A> where Self: 'a, A: 'a;
    type Cursor<'a> = Cursor<'a, A, S> where Self: 'a, A: 'a;

    fn insert(&mut self, value: A) -> bool {
        LinkedHashSet::insert(self, value)
    }

    fn take(&mut self, pattern: &Q) -> Option<A> {
        LinkedHashSet::take(self, pattern)
    }

    fn get(&self, pattern: &Q) -> Option<&A> {
        LinkedHashSet::get(self, pattern)
    }

    fn get_mut(&mut self, pattern: &Q) -> Option<&mut A> {
        LinkedHashSet::get_mut(self, pattern)
    }

    fn len(&self) -> usize {
        LinkedHashSet::len(self)
    }

    fn clear(&mut self) {
        LinkedHashSet::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedHashSet::iter(self)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        LinkedHashSet::cursor(self)
    }
}

// Core traits

impl<A: Clone, S: Clone> Clone for LinkedHashSet<A, S> {
    /// Clone a set.
    ///
    /// Time: O(n)
    fn clone(&self) -> Self {
        LinkedHashSet {
            hasher: self.hasher.clone(),
            order: self.order.clone(),
            index: self.index.clone(),
        }
    }
}

impl<A, S1, S2> PartialEq<LinkedHashSet<A, S2>> for LinkedHashSet<A, S1>
where
    A: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    /// Set equality: insertion order is not taken into account.
    fn eq(&self, other: &LinkedHashSet<A, S2>) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<A, S> Eq for LinkedHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher,
{
}

impl<A, S> Default for LinkedHashSet<A, S>
where
    S: Default,
{
    fn default() -> Self {
        LinkedHashSet::with_hasher(S::default())
    }
}

impl<A, S, R> Extend<R> for LinkedHashSet<A, S>
where
    A: Hash + Eq + From<R>,
    S: BuildHasher,
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

impl<A: Debug, S> Debug for LinkedHashSet<A, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Iterators

/// An iterator over the elements of a set, oldest first.
pub struct Iter<'a, A> {
    it: list::Iter<'a, A>,
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

/// A consuming iterator over the elements of a set, oldest first.
pub struct ConsumingIter<A> {
    it: list::Drain<A>,
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

impl<A> ExactSizeIterator for ConsumingIter<A> {}

impl<A> FusedIterator for ConsumingIter<A> {}

/// A removal-capable traversal over a set in insertion order.
pub struct Cursor<'a, A, S> {
    set: &'a mut LinkedHashSet<A, S>,
    next: Option<Handle>,
    last: LastReturned<Handle>,
}

impl<'a, A, S> set::Cursor<A> for Cursor<'a, A, S>
where
    A: Hash,
    S: BuildHasher,
{
    fn has_next(&self) -> bool {
        self.next.is_some()
    }

    fn advance(&mut self) -> Result<&A> {
        let handle = self.next.ok_or(error::Error::NoSuchElement)?;
        self.next = self.set.order.next(handle);
        self.last = LastReturned::Removable(handle);
        Ok(self.set.order.get(handle))
    }

    fn remove(&mut self) -> Result<A> {
        let handle = self.last.take()?;
        let hash = hash_key(&self.set.hasher, self.set.order.get(handle));
        self.set.index.remove(hash, |indexed| *indexed == handle);
        Ok(self.set.order.unlink(handle))
    }
}

// Iterator conversions

impl<A, RA, S> FromIterator<RA> for LinkedHashSet<A, S>
where
    A: Hash + Eq + From<RA>,
    S: BuildHasher + Default,
{
    fn from_iter<T>(i: T) -> Self
    where
        T: IntoIterator<Item = RA>,
    {
        let mut set = Self::default();
        set.extend(i);
        set
    }
}

impl<'a, A, S> IntoIterator for &'a LinkedHashSet<A, S> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, S> IntoIterator for LinkedHashSet<A, S> {
    type Item = A;
    type IntoIter = ConsumingIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        ConsumingIter {
            it: self.order.into_iter(),
        }
    }
}

// Conversions

impl<A, S, const N: usize> From<[A; N]> for LinkedHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(arr: [A; N]) -> Self {
        IntoIterator::into_iter(arr).collect()
    }
}

impl<'a, A, S> From<&'a [A]> for LinkedHashSet<A, S>
where
    A: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from(slice: &'a [A]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<A, S> From<Vec<A>> for LinkedHashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(vec: Vec<A>) -> Self {
        vec.into_iter().collect()
    }
}

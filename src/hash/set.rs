// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An unordered set.
//!
//! A hash set using [open hashing] [1]: an array of buckets, each a
//! small vector of the elements whose hash selects it.
//!
//! Lookups are O(1) on average. When inserting would push the number
//! of elements past the table's load factor, the bucket array is
//! doubled and every element is refiled before the insertion goes
//! ahead, so an insert is O(1) amortised.
//!
//! Values will have a predictable order based on the hasher
//! being used. Unless otherwise specified, this will be the standard
//! [`RandomState`][std::collections::hash_map::RandomState] hasher.
//!
//! [1]: https://en.wikipedia.org/wiki/Hash_table#Separate_chaining

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{Debug, Error, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

use crate::config::HashConfig;
use crate::error::Result;
use crate::nodes::table::{self, hash_key, RawCursor, RawTable};
use crate::set::{self, Set};

/// Construct a set from a sequence of values.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate setmap;
/// # use setmap::HashSet;
/// # fn main() {
/// let expected: HashSet<i32> = HashSet::from(vec![1, 2, 3]);
/// assert_eq!(hashset![1, 2, 3], expected);
/// # }
/// ```
#[macro_export]
macro_rules! hashset {
    () => { $crate::hashset::HashSet::new() };

    ( $($x:expr),* ) => {{
        let mut l = $crate::hashset::HashSet::new();
        $(
            l.insert($x);
        )*
            l
    }};

    ( $($x:expr ,)* ) => {{
        let mut l = $crate::hashset::HashSet::new();
        $(
            l.insert($x);
        )*
            l
    }};
}

/// An unordered set.
///
/// See the [module documentation][crate::hashset] for details.
pub struct HashSet<A, S = RandomState> {
    hasher: S,
    table: RawTable<A>,
}

impl<A> HashSet<A, RandomState> {
    /// Construct an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A, S> HashSet<A, S> {
    /// Construct an empty hash set using the provided hasher.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        HashSet {
            hasher,
            table: RawTable::new(&HashConfig::new()),
        }
    }

    /// Construct an empty hash set with the given sizing and hasher.
    ///
    /// Fails if the configuration asks for no buckets, or for a load
    /// factor that isn't a finite number of at least 1/1024.
    pub fn with_config(config: HashConfig, hasher: S) -> Result<Self> {
        config.validate()?;
        Ok(HashSet {
            hasher,
            table: RawTable::new(&config),
        })
    }

    /// Construct an empty hash set using the same hasher and load factor
    /// as the current hash set.
    #[must_use]
    pub fn new_from<A2>(&self) -> HashSet<A2, S>
    where
        S: Clone,
    {
        HashSet {
            hasher: self.hasher.clone(),
            table: RawTable::new(&HashConfig::new().load_factor(self.table.load_factor())),
        }
    }

    /// Test whether a set is empty.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// # use setmap::hashset::HashSet;
    /// assert!(
    ///   !hashset![1, 2, 3].is_empty()
    /// );
    /// assert!(
    ///   HashSet::<i32>::new().is_empty()
    /// );
    /// ```
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
        self.table.len()
    }

    /// Get the number of buckets.
    ///
    /// This starts out at the configured capacity and doubles each time
    /// the set outgrows its load factor.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Get the fraction of [`capacity`][HashSet::capacity] the set may
    /// fill before it grows.
    #[inline]
    #[must_use]
    pub fn load_factor(&self) -> f32 {
        self.table.load_factor()
    }

    /// Get a reference to the set's [`BuildHasher`][BuildHasher].
    #[must_use]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Discard all elements from the set.
    ///
    /// The bucket array keeps its current size.
    ///
    /// Time: O(n)
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Get an iterator over the values in a hash set.
    ///
    /// Values come out bucket by bucket, and within a bucket in the
    /// order they were filed. No other ordering guarantee is offered.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            it: self.table.iter(),
        }
    }

    /// Start a traversal that can remove the values it visits.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// # use setmap::Cursor;
    /// let mut set = hashset![1, 2, 3, 4];
    /// let mut cursor = set.cursor();
    /// while let Ok(value) = cursor.advance() {
    ///     if value % 2 == 0 {
    ///         cursor.remove().unwrap();
    ///     }
    /// }
    /// assert_eq!(hashset![1, 3], set);
    /// ```
    pub fn cursor(&mut self) -> Cursor<'_, A, S> {
        Cursor {
            set: self,
            raw: RawCursor::new(),
        }
    }
}

impl<A, S> HashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher,
{
    fn test_eq<S2: BuildHasher>(&self, other: &HashSet<A, S2>) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
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
        self.get(a).is_some()
    }

    /// Get the stored value equal to `a`.
    ///
    /// This returns the set's own instance, which matters when equality
    /// only looks at part of the value.
    ///
    /// Time: O(1) average
    #[must_use]
    pub fn get<BA>(&self, a: &BA) -> Option<&A>
    where
        BA: Hash + Eq + ?Sized,
        A: Borrow<BA>,
    {
        self.table
            .find(hash_key(&self.hasher, a), |value| value.borrow() == a)
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
        self.table
            .find_mut(hash_key(&self.hasher, a), |value| value.borrow() == a)
    }

    /// Insert a value into a set, unless an equal value is already
    /// present.
    ///
    /// Returns `true` if the value was inserted. If it wasn't, the set
    /// is unchanged and the existing value is kept.
    ///
    /// Time: O(1) amortised
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let mut set = hashset![123];
    /// assert!(set.insert(456));
    /// assert!(!set.insert(123));
    /// assert_eq!(2, set.len());
    /// ```
    pub fn insert(&mut self, a: A) -> bool {
        let hash = hash_key(&self.hasher, &a);
        if self.table.find(hash, |value| *value == a).is_some() {
            return false;
        }
        self.table.insert_unique(hash, a);
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
        self.table
            .remove(hash_key(&self.hasher, a), |value| value.borrow() == a)
    }

    /// Remove the values which don't satisfy a predicate, reporting
    /// whether any were removed.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let mut set = hashset![1, 2, 3];
    /// assert!(set.retain(|v| *v > 1));
    /// assert!(!set.retain(|v| *v > 1));
    /// assert_eq!(hashset![2, 3], set);
    /// ```
    pub fn retain<F>(&mut self, f: F) -> bool
    where
        F: FnMut(&A) -> bool,
    {
        <Self as Set<A>>::retain(self, f)
    }

    /// Test whether a set is a subset of another set, meaning that
    /// all values in our set must also be in the other set.
    ///
    /// Time: O(n)
    #[must_use]
    pub fn is_subset<S2: BuildHasher>(&self, other: &HashSet<A, S2>) -> bool {
        self.iter().all(|a| other.contains(a))
    }

    /// Panic unless every value is filed under the bucket its hash
    /// selects.
    #[cfg(any(test, feature = "debug"))]
    pub fn check_sane(&self) {
        self.table.check_sane();
        for (_, slot) in self.table.slots() {
            assert_eq!(
                slot.hash,
                hash_key(&self.hasher, &slot.value),
                "cached hash is stale"
            );
        }
    }
}

impl<A, Q, S> Set<A, Q> for HashSet<A, S>
where
    A: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Iter<'a> = Iter<'a, A> where Self: 'a, A: 'a;
    type Cursor<'a> = Cursor<'a, A, S> where Self: 'a, A: 'a;

    fn insert(&mut self, value: A) -> bool {
        HashSet::insert(self, value)
    }

    fn take(&mut self, pattern: &Q) -> Option<A> {
        HashSet::take(self, pattern)
    }

    fn get(&self, pattern: &Q) -> Option<&A> {
        HashSet::get(self, pattern)
    }

    fn get_mut(&mut self, pattern: &Q) -> Option<&mut A> {
        HashSet::get_mut(self, pattern)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        HashSet::cursor(self)
    }
}

// Core traits

impl<A: Clone, S: Clone> Clone for HashSet<A, S> {
    /// Clone a set.
    ///
    /// Time: O(n)
    #[inline]
    fn clone(&self) -> Self {
        HashSet {
            hasher: self.hasher.clone(),
            table: self.table.clone(),
        }
    }
}

impl<A, S1, S2> PartialEq<HashSet<A, S2>> for HashSet<A, S1>
where
    A: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &HashSet<A, S2>) -> bool {
        self.test_eq(other)
    }
}

impl<A, S> Eq for HashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher,
{
}

impl<A, S> Default for HashSet<A, S>
where
    S: Default,
{
    fn default() -> Self {
        HashSet::with_hasher(S::default())
    }
}

impl<A, S, R> Extend<R> for HashSet<A, S>
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

impl<A: Debug, S> Debug for HashSet<A, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Iterators

/// An iterator over the elements of a set.
pub struct Iter<'a, A> {
    it: table::Iter<'a, A>,
}

// We impl Clone instead of deriving it, because we want Clone even if A isn't.
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

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}

impl<'a, A> FusedIterator for Iter<'a, A> {}

/// A consuming iterator over the elements of a set.
pub struct ConsumingIter<A> {
    it: table::Drain<A>,
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

/// A removal-capable traversal over a set, in the same order as
/// [`Iter`].
pub struct Cursor<'a, A, S> {
    set: &'a mut HashSet<A, S>,
    raw: RawCursor,
}

impl<'a, A, S> set::Cursor<A> for Cursor<'a, A, S> {
    fn has_next(&self) -> bool {
        self.raw.has_next(&self.set.table)
    }

    fn advance(&mut self) -> Result<&A> {
        self.raw.advance(&self.set.table)
    }

    fn remove(&mut self) -> Result<A> {
        self.raw.remove(&mut self.set.table)
    }
}

// Iterator conversions

impl<A, RA, S> FromIterator<RA> for HashSet<A, S>
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

impl<'a, A, S> IntoIterator for &'a HashSet<A, S> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, S> IntoIterator for HashSet<A, S> {
    type Item = A;
    type IntoIter = ConsumingIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        ConsumingIter {
            it: self.table.into_iter(),
        }
    }
}

// Conversions

impl<A, S, const N: usize> From<[A; N]> for HashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(arr: [A; N]) -> Self {
        IntoIterator::into_iter(arr).collect()
    }
}

impl<'a, A, S> From<&'a [A]> for HashSet<A, S>
where
    A: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from(slice: &'a [A]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<A, S> From<Vec<A>> for HashSet<A, S>
where
    A: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(vec: Vec<A>) -> Self {
        vec.into_iter().collect()
    }
}

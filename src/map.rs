// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps built on top of sets.
//!
//! A [`Map`] is a set of [`Entry`] values which compare, hash and sort
//! by their key alone. Any set flavour that can look entries up by key
//! can back a map, and the map inherits its behaviour: a
//! [`HashMap`] is unordered, a [`LinkedHashMap`] remembers insertion
//! order and a [`TreeMap`] keeps its keys sorted.
//!
//! Overwriting the value of an existing key changes the stored entry in
//! place, so it never moves in the backing set's order.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::hash_map::RandomState;
use std::fmt::{Debug, Error, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::mem;

use crate::hash::linked::LinkedHashSet;
use crate::hash::set::HashSet;
use crate::ord::compare::{Comparator, OrdComparator};
use crate::ord::set::TreeSet;
use crate::set::Set;

/// Construct a hash map from a sequence of key/value pairs.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate setmap;
/// # use setmap::HashMap;
/// # fn main() {
/// let expected: HashMap<i32, i32> = HashMap::from(vec![(1, 11), (2, 22), (3, 33)]);
/// assert_eq!(
///   hashmap!{
///     1 => 11,
///     2 => 22,
///     3 => 33
///   },
///   expected
/// );
/// # }
/// ```
#[macro_export]
macro_rules! hashmap {
    () => { $crate::map::HashMap::new() };

    ( $( $key:expr => $value:expr ),* ) => {{
        let mut map = $crate::map::HashMap::new();
        $({
            map.put($key, $value);
        })*;
        map
    }};

    ( $( $key:expr => $value:expr ,)* ) => {{
        let mut map = $crate::map::HashMap::new();
        $({
            map.put($key, $value);
        })*;
        map
    }};
}

/// Construct an insertion-ordered map from a sequence of key/value
/// pairs.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate setmap;
/// # fn main() {
/// let map = linkedhashmap!{"b" => 2, "a" => 1};
/// assert_eq!(vec![&"b", &"a"], map.keys().collect::<Vec<_>>());
/// # }
/// ```
#[macro_export]
macro_rules! linkedhashmap {
    () => { $crate::map::LinkedHashMap::new() };

    ( $( $key:expr => $value:expr ),* ) => {{
        let mut map = $crate::map::LinkedHashMap::new();
        $({
            map.put($key, $value);
        })*;
        map
    }};

    ( $( $key:expr => $value:expr ,)* ) => {{
        let mut map = $crate::map::LinkedHashMap::new();
        $({
            map.put($key, $value);
        })*;
        map
    }};
}

/// Construct a sorted map from a sequence of key/value pairs.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate setmap;
/// # fn main() {
/// let map = treemap!{2 => "two", 1 => "one"};
/// assert_eq!(vec![&1, &2], map.keys().collect::<Vec<_>>());
/// # }
/// ```
#[macro_export]
macro_rules! treemap {
    () => { $crate::map::TreeMap::new() };

    ( $( $key:expr => $value:expr ),* ) => {{
        let mut map = $crate::map::TreeMap::new();
        $({
            map.put($key, $value);
        })*;
        map
    }};

    ( $( $key:expr => $value:expr ,)* ) => {{
        let mut map = $crate::map::TreeMap::new();
        $({
            map.put($key, $value);
        })*;
        map
    }};
}

/// A key paired with a value.
///
/// Equality, hashing and ordering look at the key only, and an entry
/// [borrows][Borrow] as its key, so a set of entries can be searched
/// with a bare key.
#[derive(Clone)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Pair a key with a value.
    #[must_use]
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    /// Get the key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Get the value.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Get mutable access to the value.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replace the value, returning the old one.
    pub fn set_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Split the entry into its key and value.
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Borrow<K> for Entry<K, V> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

impl<K: PartialOrd, V> PartialOrd for Entry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, V> Ord for Entry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: Hash, V> Hash for Entry<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state)
    }
}

impl<K: Debug, V: Debug> Debug for Entry<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{:?}={:?}", self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}

/// A set of [`Entry`] values that can back a [`Map`].
///
/// Besides looking entries up by key, the set knows how to make an
/// empty set of bare keys of its own flavour: same hasher, same
/// comparator. [`Map::key_set`] fills one of those.
pub trait EntrySet<K, V>: Set<Entry<K, V>, K> {
    /// The flavour of set [`Map::key_set`] returns.
    type KeySet: Set<K>;

    /// Make an empty key set ordered or hashed the way this set is.
    fn empty_key_set(&self) -> Self::KeySet;
}

impl<K, V, S> EntrySet<K, V> for HashSet<Entry<K, V>, S>
where
    K: Hash + Eq,
    S: BuildHasher + Clone,
{
    type KeySet = HashSet<K, S>;

    fn empty_key_set(&self) -> Self::KeySet {
        self.new_from()
    }
}

impl<K, V, S> EntrySet<K, V> for LinkedHashSet<Entry<K, V>, S>
where
    K: Hash + Eq,
    S: BuildHasher + Clone,
{
    type KeySet = LinkedHashSet<K, S>;

    fn empty_key_set(&self) -> Self::KeySet {
        self.new_from()
    }
}

impl<K, V, C> EntrySet<K, V> for TreeSet<Entry<K, V>, C>
where
    C: Comparator<Key = K> + Clone,
{
    type KeySet = TreeSet<K, C>;

    fn empty_key_set(&self) -> Self::KeySet {
        TreeSet::with_comparator(self.comparator().clone())
    }
}

/// An unordered map.
pub type HashMap<K, V, S = RandomState> = Map<K, V, HashSet<Entry<K, V>, S>>;

/// A map that remembers the order keys were first inserted in.
pub type LinkedHashMap<K, V, S = RandomState> = Map<K, V, LinkedHashSet<Entry<K, V>, S>>;

/// A map whose keys are kept sorted.
pub type TreeMap<K, V, C = OrdComparator<K>> = Map<K, V, TreeSet<Entry<K, V>, C>>;

/// A map over any [`EntrySet`].
///
/// See the [module documentation][self] for details.
pub struct Map<K, V, S> {
    entries: S,
    phantom: PhantomData<Entry<K, V>>,
}

impl<K, V> Map<K, V, HashSet<Entry<K, V>, RandomState>> {
    /// Construct an empty hash map.
    #[must_use]
    pub fn new() -> Self {
        Map::with_set(HashSet::new())
    }
}

impl<K, V> Map<K, V, LinkedHashSet<Entry<K, V>, RandomState>> {
    /// Construct an empty insertion-ordered map.
    #[must_use]
    pub fn new() -> Self {
        Map::with_set(LinkedHashSet::new())
    }
}

impl<K, V> Map<K, V, TreeSet<Entry<K, V>, OrdComparator<K>>> {
    /// Construct an empty map sorted by `K`'s [`Ord`] implementation.
    #[must_use]
    pub fn new() -> Self {
        Map::with_set(TreeSet::with_comparator(OrdComparator::new()))
    }
}

impl<K, V, S> Map<K, V, S> {
    /// Construct a map backed by `entries`.
    ///
    /// The set is normally empty. If it isn't, its entries become the
    /// map's contents.
    ///
    /// # Examples
    ///
    /// ```
    /// # use setmap::{compare, Map, TreeMap, TreeSet};
    /// let mut map: TreeMap<i32, &str, _> = Map::with_set(TreeSet::with_comparator(
    ///     compare::Reverse(compare::OrdComparator::new()),
    /// ));
    /// map.put(1, "one");
    /// map.put(2, "two");
    /// assert_eq!(vec![&2, &1], map.keys().collect::<Vec<_>>());
    /// ```
    #[must_use]
    pub fn with_set(entries: S) -> Self {
        Map {
            entries,
            phantom: PhantomData,
        }
    }

    /// Get the backing set.
    ///
    /// This is the map itself seen as a set of entries, not a copy.
    #[must_use]
    pub fn entry_set(&self) -> &S {
        &self.entries
    }

    /// Get mutable access to the backing set. Changes made through it
    /// are changes to the map.
    pub fn entry_set_mut(&mut self) -> &mut S {
        &mut self.entries
    }

    /// Discard the map, keeping its backing set.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.entries
    }
}

impl<K, V, S> Map<K, V, S>
where
    S: EntrySet<K, V>,
{
    /// Test whether a map is empty.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of entries in a map.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Discard every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the value for a key from a map.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let map = hashmap!{123 => "lol"};
    /// assert_eq!(Some(&"lol"), map.get(&123));
    /// assert_eq!(None, map.get(&321));
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(Entry::value)
    }

    /// Get mutable access to the value for a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key).map(Entry::value_mut)
    }

    /// Test for the presence of a key in a map.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    /// Test for the presence of a value in a map.
    ///
    /// Values aren't indexed, so this looks at every entry.
    ///
    /// Time: O(n)
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|entry| entry.value() == value)
    }

    /// Map a key to a value, returning the value the key was mapped to
    /// before, if any.
    ///
    /// An existing entry has its value replaced in place and keeps its
    /// position; otherwise a new entry is added.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let mut map = linkedhashmap!{1 => "a", 2 => "b"};
    /// assert_eq!(Some("a"), map.put(1, "c"));
    /// assert_eq!(None, map.put(3, "d"));
    /// assert_eq!(vec![&"c", &"b", &"d"], map.values());
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.entries.get_mut(&key) {
            return Some(entry.set_value(value));
        }
        self.entries.insert(Entry::new(key, value));
        None
    }

    /// Remove a key from a map, returning the value it was mapped to.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.take(key).map(|entry| entry.value)
    }

    /// Remove the entries which don't satisfy a predicate, reporting
    /// whether any were removed.
    pub fn retain<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|entry| f(&entry.key, &entry.value))
    }

    /// Make a set of the map's keys, of the backing set's flavour.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setmap;
    /// let map = treemap!{2 => "b", 1 => "a"};
    /// assert_eq!(treeset![1, 2], map.key_set());
    /// ```
    #[must_use]
    pub fn key_set(&self) -> S::KeySet
    where
        K: Clone,
    {
        let mut keys = self.entries.empty_key_set();
        for entry in self.entries.iter() {
            keys.insert(entry.key.clone());
        }
        keys
    }

    /// Get every value, in the backing set's order. Equal values all
    /// appear.
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.entries.iter().map(Entry::value).collect()
    }

    /// Get an iterator over the key/value pairs of a map.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            it: self.entries.iter(),
        }
    }

    /// Get an iterator over a map's keys.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V, S> {
        Keys {
            it: self.entries.iter(),
        }
    }
}

// Core traits

impl<K, V, S: Clone> Clone for Map<K, V, S> {
    fn clone(&self) -> Self {
        Map::with_set(self.entries.clone())
    }
}

impl<K, V, S: Default> Default for Map<K, V, S> {
    fn default() -> Self {
        Map::with_set(S::default())
    }
}

impl<K, V, S1, S2> PartialEq<Map<K, V, S2>> for Map<K, V, S1>
where
    V: PartialEq,
    S1: EntrySet<K, V>,
    S2: EntrySet<K, V>,
{
    fn eq(&self, other: &Map<K, V, S2>) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for Map<K, V, S>
where
    V: Eq,
    S: EntrySet<K, V>,
{
}

impl<K, V, S> Debug for Map<K, V, S>
where
    K: Debug,
    V: Debug,
    S: EntrySet<K, V>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut d = f.debug_map();
        for (k, v) in self {
            d.entry(k, v);
        }
        d.finish()
    }
}

impl<K, V, S, RK, RV> Extend<(RK, RV)> for Map<K, V, S>
where
    S: EntrySet<K, V>,
    K: From<RK>,
    V: From<RV>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (RK, RV)>,
    {
        for (key, value) in iter {
            self.put(From::from(key), From::from(value));
        }
    }
}

// Iterators

/// An iterator over the key/value pairs of a map.
pub struct Iter<'a, K, V, S>
where
    S: EntrySet<K, V> + 'a,
    K: 'a,
    V: 'a,
{
    it: S::Iter<'a>,
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    S: EntrySet<K, V> + 'a,
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// An iterator over the keys of a map.
pub struct Keys<'a, K, V, S>
where
    S: EntrySet<K, V> + 'a,
    K: 'a,
    V: 'a,
{
    it: S::Iter<'a>,
}

impl<'a, K, V, S> Iterator for Keys<'a, K, V, S>
where
    S: EntrySet<K, V> + 'a,
    K: 'a,
    V: 'a,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(Entry::key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// A consuming iterator over the key/value pairs of a map.
pub struct ConsumingIter<I> {
    it: I,
}

impl<K, V, I> Iterator for ConsumingIter<I>
where
    I: Iterator<Item = Entry<K, V>>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(Entry::into_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K, V, I> FusedIterator for ConsumingIter<I> where I: FusedIterator<Item = Entry<K, V>> {}

// Iterator conversions

impl<K, V, S, RK, RV> FromIterator<(RK, RV)> for Map<K, V, S>
where
    S: EntrySet<K, V> + Default,
    K: From<RK>,
    V: From<RV>,
{
    fn from_iter<T>(i: T) -> Self
    where
        T: IntoIterator<Item = (RK, RV)>,
    {
        let mut map = Self::default();
        map.extend(i);
        map
    }
}

impl<'a, K, V, S> IntoIterator for &'a Map<K, V, S>
where
    S: EntrySet<K, V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for Map<K, V, S>
where
    S: IntoIterator<Item = Entry<K, V>>,
{
    type Item = (K, V);
    type IntoIter = ConsumingIter<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        ConsumingIter {
            it: self.entries.into_iter(),
        }
    }
}

// Conversions

impl<K, V, S, const N: usize> From<[(K, V); N]> for Map<K, V, S>
where
    S: EntrySet<K, V> + Default,
{
    fn from(arr: [(K, V); N]) -> Self {
        IntoIterator::into_iter(arr).collect()
    }
}

impl<K, V, S> From<Vec<(K, V)>> for Map<K, V, S>
where
    S: EntrySet<K, V> + Default,
{
    fn from(vec: Vec<(K, V)>) -> Self {
        vec.into_iter().collect()
    }
}

impl<'a, K, V, S> From<&'a [(K, V)]> for Map<K, V, S>
where
    S: EntrySet<K, V> + Default,
    K: Clone,
    V: Clone,
{
    fn from(slice: &'a [(K, V)]) -> Self {
        slice.iter().cloned().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::proptest::{hash_map, tree_map};
    use crate::test::LolHasher;
    use ::proptest::num::{i16, usize};
    use ::proptest::{collection, proptest};
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;
    use std::collections::{self, BTreeMap};
    use std::hash::BuildHasherDefault;

    assert_impl_all!(HashMap<i32, String>: Send, Sync);
    assert_impl_all!(TreeMap<i32, String>: Send, Sync);

    type LolMap<K, V> = HashMap<K, V, BuildHasherDefault<LolHasher>>;

    fn squares<S>(mut map: Map<i32, i32, S>) -> Map<i32, i32, S>
    where
        S: EntrySet<i32, i32>,
    {
        for key in [10, -2, 12, -3] {
            assert_eq!(None, map.put(key, key * key));
        }
        map
    }

    fn check_squares<S>(map: &mut Map<i32, i32, S>)
    where
        S: EntrySet<i32, i32>,
    {
        assert_eq!(4, map.len());
        assert_eq!(Some(&144), map.get(&12));
        assert_eq!(Some(&4), map.get(&-2));
        assert_eq!(None, map.get(&2));
        assert!(map.contains_key(&-3));
        assert!(!map.contains_key(&3));
        assert!(map.contains_value(&9));
        assert!(!map.contains_value(&-9));
        assert_eq!(Some(100), map.put(10, -100));
        assert_eq!(4, map.len());
        assert_eq!(Some(&-100), map.get(&10));
        assert!(map.contains_value(&-100));
        assert!(!map.contains_value(&100));
        assert_eq!(Some(144), map.remove(&12));
        assert_eq!(None, map.remove(&12));
        assert_eq!(3, map.len());
        assert_eq!(3, map.key_set().len());
    }

    #[test]
    fn hash_map_squares() {
        let mut map = squares(HashMap::new());
        check_squares(&mut map);
        map.entry_set().check_sane();
    }

    #[test]
    fn linked_hash_map_squares() {
        let mut map = squares(LinkedHashMap::new());
        assert_eq!(vec![&10, &-2, &12, &-3], map.keys().collect::<Vec<_>>());
        check_squares(&mut map);
        assert_eq!(vec![&10, &-2, &-3], map.keys().collect::<Vec<_>>());
        assert_eq!(vec![&-100, &4, &9], map.values());
        map.entry_set().check_sane();
    }

    #[test]
    fn tree_map_squares() {
        let mut map = squares(TreeMap::new());
        assert_eq!(vec![&-3, &-2, &10, &12], map.keys().collect::<Vec<_>>());
        check_squares(&mut map);
        let keys = map.key_set();
        assert_eq!(Ok(&-3), keys.first());
        assert_eq!(Some(&-2), keys.floor(&0));
        assert_eq!(Ok(&-3), map.entry_set().first().map(Entry::key));
        map.entry_set().check_sane();
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut map = linkedhashmap! {"a" => 1, "b" => 2, "c" => 3};
        assert_eq!(Some(1), map.put("a", 10));
        assert_eq!(
            vec![(&"a", &10), (&"b", &2), (&"c", &3)],
            map.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn values_tolerate_duplicates() {
        let map = treemap! {1 => "x", 2 => "x", 3 => "y"};
        assert_eq!(vec![&"x", &"x", &"y"], map.values());
    }

    #[test]
    fn entry_set_is_a_live_view() {
        let mut map = hashmap! {1 => "one", 2 => "two"};
        assert!(map.entry_set_mut().remove(&1));
        assert!(!map.contains_key(&1));
        map.entry_set_mut().insert(Entry::new(3, "three"));
        assert_eq!(Some(&"three"), map.get(&3));
        assert_eq!(2, map.len());
    }

    #[test]
    fn get_mut_and_retain() {
        let mut map = treemap! {1 => 1, 2 => 2, 3 => 3, 4 => 4};
        if let Some(value) = map.get_mut(&2) {
            *value = 20;
        }
        assert!(map.retain(|key, value| key % 2 == 0 || *value > 2));
        assert_eq!(treemap! {2 => 20, 3 => 3, 4 => 4}, map);
        assert!(!map.retain(|_, _| true));
    }

    #[test]
    fn equality_across_flavours() {
        let hashed: HashMap<i32, i32> = (0..10).map(|i| (i, i * 2)).collect();
        let sorted: TreeMap<i32, i32> = (0..10).rev().map(|i| (i, i * 2)).collect();
        assert!(hashed == sorted);
        let mut other = sorted.clone();
        other.put(3, 0);
        assert!(hashed != other);
    }

    #[test]
    fn into_iter_and_formatting() {
        let map = treemap! {2 => "b", 1 => "a"};
        assert_eq!("{1: \"a\", 2: \"b\"}", format!("{:?}", map));
        assert_eq!(vec![(1, "a"), (2, "b")], map.into_iter().collect::<Vec<_>>());
        assert_eq!("1=2", format!("{:?}", Entry::new(1, 2)));
    }

    #[test]
    fn collisions_in_the_backing_set() {
        let mut map: LolMap<i16, i16> = Default::default();
        for i in 0..100 {
            map.put(i, i);
        }
        for i in 0..100 {
            assert_eq!(Some(i), map.put(i, -i));
        }
        assert_eq!(100, map.len());
        assert_eq!(Some(&-42), map.get(&42));
        map.entry_set().check_sane();
    }

    proptest! {
        #[test]
        fn proptest_a_map(ref m in hash_map(i16::ANY, ".*", 10..100)) {
            assert!(m.len() < 100);
            assert!(m.len() >= 10);
        }

        #[test]
        fn key_set_round_trip(ref m in tree_map(i16::ANY, i16::ANY, 0..100)) {
            let keys = m.key_set();
            assert_eq!(m.len(), keys.len());
            assert_eq!(m.len(), m.entry_set().len());
            for key in keys.iter() {
                assert!(m.contains_key(key));
            }
        }

        #[test]
        fn overwrite_returns_previous(
            ref input in collection::vec((i16::ANY, i16::ANY), 0..200),
            k in i16::ANY,
            v1 in i16::ANY,
            v2 in i16::ANY,
        ) {
            let mut map: HashMap<i16, i16> = input.iter().copied().collect();
            map.put(k, v1);
            let len = map.len();
            assert_eq!(Some(v1), map.put(k, v2));
            assert_eq!(len, map.len());
            assert_eq!(Some(&v2), map.get(&k));
        }

        #[test]
        fn matches_std_maps(ref ops in collection::vec((usize::ANY, i16::ANY, i16::ANY), 0..300)) {
            let mut hashed: LolMap<i16, i16> = Default::default();
            let mut sorted: TreeMap<i16, i16> = TreeMap::new();
            let mut hash_model = collections::HashMap::new();
            let mut tree_model = BTreeMap::new();
            for (op, key, value) in ops {
                if op % 3 == 0 {
                    assert_eq!(hash_model.remove(key), hashed.remove(key));
                    assert_eq!(tree_model.remove(key), sorted.remove(key));
                } else {
                    assert_eq!(hash_model.insert(*key, *value), hashed.put(*key, *value));
                    assert_eq!(tree_model.insert(*key, *value), sorted.put(*key, *value));
                }
            }
            assert_eq!(hash_model.len(), hashed.len());
            assert_eq!(
                tree_model.iter().collect::<Vec<_>>(),
                sorted.iter().collect::<Vec<_>>()
            );
            hashed.entry_set().check_sane();
            sorted.entry_set().check_sane();
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Open hashing over an array of buckets.
//!
//! The table knows nothing about how its entries hash or compare:
//! callers pass the hash in and supply an equality predicate, which
//! lets the same table index either whole elements or handles into
//! some other structure.

use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::{mem, slice, vec};

use tracing::debug;

use crate::config::{HashConfig, BUCKET_CAPACITY};
use crate::error::{Error, Result};
use crate::util::LastReturned;

pub(crate) fn hash_key<K: Hash + ?Sized, S: BuildHasher>(bh: &S, key: &K) -> u64 {
    bh.hash_one(key)
}

#[derive(Clone)]
pub(crate) struct Slot<E> {
    pub(crate) hash: u64,
    pub(crate) value: E,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Position {
    bucket: usize,
    slot: usize,
}

#[derive(Clone)]
pub(crate) struct RawTable<E> {
    buckets: Vec<Vec<Slot<E>>>,
    load_factor: f32,
    len: usize,
}

fn empty_buckets<E>(capacity: usize) -> Vec<Vec<Slot<E>>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

impl<E> RawTable<E> {
    /// The configuration must already have been validated.
    pub(crate) fn new(config: &HashConfig) -> Self {
        RawTable {
            buckets: empty_buckets(config.initial_capacity()),
            load_factor: config.factor(),
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub(crate) fn load_factor(&self) -> f32 {
        self.load_factor
    }

    #[inline]
    fn index(hash: u64, capacity: usize) -> usize {
        (hash % capacity as u64) as usize
    }

    pub(crate) fn find<F>(&self, hash: u64, mut eq: F) -> Option<&E>
    where
        F: FnMut(&E) -> bool,
    {
        self.buckets[Self::index(hash, self.capacity())]
            .iter()
            .find(|slot| slot.hash == hash && eq(&slot.value))
            .map(|slot| &slot.value)
    }

    pub(crate) fn find_mut<F>(&mut self, hash: u64, mut eq: F) -> Option<&mut E>
    where
        F: FnMut(&E) -> bool,
    {
        let index = Self::index(hash, self.capacity());
        self.buckets[index]
            .iter_mut()
            .find(|slot| slot.hash == hash && eq(&slot.value))
            .map(|slot| &mut slot.value)
    }

    /// Place a value the caller has established is not yet present,
    /// growing the table first if the new length would exceed the load
    /// factor.
    pub(crate) fn insert_unique(&mut self, hash: u64, value: E) {
        self.reserve_one();
        let index = Self::index(hash, self.capacity());
        let bucket = &mut self.buckets[index];
        if bucket.capacity() == 0 {
            bucket.reserve_exact(BUCKET_CAPACITY);
        }
        bucket.push(Slot { hash, value });
        self.len += 1;
    }

    fn reserve_one(&mut self) {
        let needed = (self.len + 1) as f64;
        let mut capacity = self.capacity();
        while needed > capacity as f64 * f64::from(self.load_factor) {
            capacity = match capacity.checked_mul(2) {
                Some(doubled) => doubled,
                None => panic!("hash table capacity overflow"),
            };
        }
        if capacity != self.capacity() {
            self.resize(capacity);
        }
    }

    fn resize(&mut self, capacity: usize) {
        debug!(
            from = self.capacity(),
            to = capacity,
            len = self.len,
            "growing hash table"
        );
        let old = mem::replace(&mut self.buckets, empty_buckets(capacity));
        for slot in old.into_iter().flatten() {
            let bucket = &mut self.buckets[Self::index(slot.hash, capacity)];
            if bucket.capacity() == 0 {
                bucket.reserve_exact(BUCKET_CAPACITY);
            }
            bucket.push(slot);
        }
    }

    pub(crate) fn remove<F>(&mut self, hash: u64, mut eq: F) -> Option<E>
    where
        F: FnMut(&E) -> bool,
    {
        let index = Self::index(hash, self.capacity());
        let bucket = &mut self.buckets[index];
        let position = bucket
            .iter()
            .position(|slot| slot.hash == hash && eq(&slot.value))?;
        self.len -= 1;
        Some(bucket.remove(position).value)
    }

    pub(crate) fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// The first occupied position at or after `from`.
    fn seek(&self, from: Position) -> Option<Position> {
        let mut position = from;
        while position.bucket < self.buckets.len() {
            if position.slot < self.buckets[position.bucket].len() {
                return Some(position);
            }
            position.bucket += 1;
            position.slot = 0;
        }
        None
    }

    fn remove_at(&mut self, position: Position) -> E {
        self.len -= 1;
        self.buckets[position.bucket].remove(position.slot).value
    }

    pub(crate) fn iter(&self) -> Iter<'_, E> {
        Iter {
            buckets: self.buckets.iter(),
            current: Default::default(),
            remaining: self.len,
        }
    }

    /// Every slot along with the bucket it is filed under.
    #[cfg(any(test, feature = "debug"))]
    pub(crate) fn slots(&self) -> impl Iterator<Item = (usize, &Slot<E>)> {
        self.buckets
            .iter()
            .enumerate()
            .flat_map(|(index, bucket)| bucket.iter().map(move |slot| (index, slot)))
    }

    /// Panic unless every slot sits in the bucket its hash selects and
    /// the recorded length matches.
    #[cfg(any(test, feature = "debug"))]
    pub(crate) fn check_sane(&self) {
        let mut count = 0;
        for (index, slot) in self.slots() {
            assert_eq!(
                index,
                Self::index(slot.hash, self.capacity()),
                "slot filed under the wrong bucket"
            );
            count += 1;
        }
        assert_eq!(count, self.len, "recorded length is wrong");
        assert!(
            self.len as f64 <= self.capacity() as f64 * f64::from(self.load_factor),
            "table exceeds its load factor"
        );
    }
}

impl<E> IntoIterator for RawTable<E> {
    type Item = E;
    type IntoIter = Drain<E>;

    fn into_iter(self) -> Self::IntoIter {
        Drain {
            remaining: self.len,
            buckets: self.buckets.into_iter(),
            current: Vec::new().into_iter(),
        }
    }
}

/// Traversal state for a removal-capable walk over a [`RawTable`].
///
/// The cursor doesn't hold on to the table itself, so the owner can
/// lend it whichever table it is walking on each call.
pub(crate) struct RawCursor {
    next: Position,
    last: LastReturned<Position>,
}

impl RawCursor {
    pub(crate) fn new() -> Self {
        RawCursor {
            next: Position { bucket: 0, slot: 0 },
            last: LastReturned::NotStarted,
        }
    }

    pub(crate) fn has_next<E>(&self, table: &RawTable<E>) -> bool {
        table.seek(self.next).is_some()
    }

    pub(crate) fn advance<'a, E>(&mut self, table: &'a RawTable<E>) -> Result<&'a E> {
        let position = table.seek(self.next).ok_or(Error::NoSuchElement)?;
        self.next = Position {
            bucket: position.bucket,
            slot: position.slot + 1,
        };
        self.last = LastReturned::Removable(position);
        Ok(&table.buckets[position.bucket][position.slot].value)
    }

    pub(crate) fn remove<E>(&mut self, table: &mut RawTable<E>) -> Result<E> {
        let position = self.last.take()?;
        // The rest of the bucket shifts down one slot.
        if self.next.bucket == position.bucket && self.next.slot > position.slot {
            self.next.slot -= 1;
        }
        Ok(table.remove_at(position))
    }
}

pub(crate) struct Iter<'a, E> {
    buckets: slice::Iter<'a, Vec<Slot<E>>>,
    current: slice::Iter<'a, Slot<E>>,
    remaining: usize,
}

// We impl Clone instead of deriving it, because we want Clone even if E isn't.
impl<'a, E> Clone for Iter<'a, E> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.current.next() {
                self.remaining -= 1;
                return Some(&slot.value);
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> ExactSizeIterator for Iter<'a, E> {}

impl<'a, E> FusedIterator for Iter<'a, E> {}

pub(crate) struct Drain<E> {
    buckets: vec::IntoIter<Vec<Slot<E>>>,
    current: vec::IntoIter<Slot<E>>,
    remaining: usize,
}

impl<E> Iterator for Drain<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.current.next() {
                self.remaining -= 1;
                return Some(slot.value);
            }
            self.current = self.buckets.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Drain<E> {}

impl<E> FusedIterator for Drain<E> {}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(capacity: usize, load_factor: f32) -> RawTable<u64> {
        RawTable::new(&HashConfig::new().capacity(capacity).load_factor(load_factor))
    }

    fn insert(table: &mut RawTable<u64>, value: u64) {
        if table.find(value, |v| *v == value).is_none() {
            table.insert_unique(value, value);
        }
    }

    #[test]
    fn grows_before_exceeding_load_factor() {
        let mut table = table(4, 0.75);
        for value in 0..3 {
            insert(&mut table, value);
        }
        assert_eq!(4, table.capacity());
        insert(&mut table, 3);
        assert_eq!(8, table.capacity());
        table.check_sane();
    }

    #[test]
    fn grows_repeatedly_for_tiny_load_factors() {
        let mut table = table(1, 0.25);
        insert(&mut table, 42);
        assert_eq!(4, table.capacity());
        table.check_sane();
    }

    #[test]
    fn collisions_share_a_bucket() {
        let mut table = table(4, 10.0);
        for value in [1, 5, 9, 13] {
            insert(&mut table, value);
        }
        assert_eq!(4, table.capacity());
        assert_eq!(
            vec![(1, 1), (1, 5), (1, 9), (1, 13)],
            table
                .slots()
                .map(|(index, slot)| (index, slot.value))
                .collect::<Vec<_>>()
        );
        assert_eq!(Some(9), table.remove(9, |v| *v == 9));
        assert_eq!(None, table.remove(9, |v| *v == 9));
        assert_eq!(Some(&13), table.find(13, |v| *v == 13));
        table.check_sane();
    }

    #[test]
    fn cursor_removes_within_a_bucket() {
        let mut table = table(4, 10.0);
        for value in [1, 5, 9, 2] {
            insert(&mut table, value);
        }
        let mut cursor = RawCursor::new();
        let mut seen = Vec::new();
        while cursor.has_next(&table) {
            let value = *cursor.advance(&table).unwrap();
            seen.push(value);
            if value % 2 == 1 {
                assert_eq!(Ok(value), cursor.remove(&mut table));
            }
        }
        assert_eq!(vec![1, 5, 9, 2], seen);
        assert_eq!(Err(Error::NoSuchElement), cursor.advance(&table).copied());
        assert_eq!(vec![&2], table.iter().collect::<Vec<_>>());
        table.check_sane();
    }

    #[test]
    fn drain_yields_everything() {
        let mut table = table(2, 0.75);
        for value in 0..100 {
            insert(&mut table, value);
        }
        let mut drained: Vec<u64> = table.into_iter().collect();
        drained.sort_unstable();
        assert_eq!((0..100).collect::<Vec<_>>(), drained);
    }
}

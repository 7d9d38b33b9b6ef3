// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tuning for hash tables.

use crate::error::{Error, Result};

/// The number of buckets a hash table starts out with
// Value of 2 chosen to improve test coverage, specifically
// so that growth is triggered by almost every test.
#[cfg(feature = "small-chunks")]
pub(crate) const DEFAULT_CAPACITY: usize = 2;
#[cfg(not(feature = "small-chunks"))]
pub(crate) const DEFAULT_CAPACITY: usize = 16;

/// The fraction of the bucket count a hash table may fill before it grows
pub(crate) const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// The initial allocation of a freshly created bucket
pub(crate) const BUCKET_CAPACITY: usize = 3;

/// The smallest load factor accepted: at most 1024 buckets per element
pub(crate) const MIN_LOAD_FACTOR: f32 = 1.0 / 1024.0;

/// Sizing parameters for the hash based sets.
///
/// # Examples
///
/// ```
/// # use setmap::{HashConfig, HashSet};
/// # use std::collections::hash_map::RandomState;
/// let config = HashConfig::new().capacity(4).load_factor(0.5);
/// let mut set: HashSet<i32> = HashSet::with_config(config, RandomState::new()).unwrap();
/// set.insert(1);
/// set.insert(2);
/// set.insert(3);
/// assert_eq!(8, set.capacity());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HashConfig {
    capacity: usize,
    load_factor: f32,
}

impl HashConfig {
    /// The default configuration: 16 buckets (2 with the `small-chunks`
    /// feature), load factor 0.75.
    #[must_use]
    pub fn new() -> Self {
        HashConfig {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Set the initial number of buckets.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the load factor at which the table doubles.
    #[must_use]
    pub fn load_factor(mut self, load_factor: f32) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if !self.load_factor.is_finite() || self.load_factor < MIN_LOAD_FACTOR {
            return Err(Error::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }

    pub(crate) fn initial_capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn factor(&self) -> f32 {
        self.load_factor
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::new()
    }
}

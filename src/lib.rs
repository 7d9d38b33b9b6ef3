// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # Sets, and maps made of sets
//!
//! This crate offers three set flavours sharing one [`Set`] contract,
//! and a [`Map`] that turns any of them into a key/value map.
//!
//! | Type | Order | Lookup |
//! | --- | --- | --- |
//! | [`HashSet`] | none | O(1) average |
//! | [`LinkedHashSet`] | insertion | O(1) average |
//! | [`TreeSet`] | sorted | O(log n) average, O(n) worst |
//!
//! ## Hash sets
//!
//! [`HashSet`] files its values into an array of buckets picked by
//! hash. When the number of values would exceed the bucket count times
//! the load factor, the bucket array doubles and every value is refiled.
//! Both numbers can be chosen up front with a [`HashConfig`].
//!
//! [`LinkedHashSet`] threads a doubly linked list through the same
//! kind of table, so it iterates in the order values were first
//! inserted.
//!
//! ## Tree sets
//!
//! [`TreeSet`] is a binary search tree ordered by a
//! [`Comparator`][compare::Comparator]: the values' own [`Ord`] by
//! default, or any other through [`compare::by`]. It answers
//! [`floor`][SortedSet::floor] and [`ceiling`][SortedSet::ceiling]
//! queries and copies out half-open ranges with
//! [`sub_set`][SortedSet::sub_set].
//!
//! The tree never rebalances. Its shape is whatever the insertion order
//! makes it, which [`TreeSet::height`] and [`TreeSet::width`] report.
//!
//! ## Maps
//!
//! A [`Map`] stores [`Entry`] values in a set. Entries compare, hash and
//! sort by key only, so the backing set does all the work. The
//! [`HashMap`], [`LinkedHashMap`] and [`TreeMap`] aliases pick the
//! backing flavour; [`Map::with_set`] takes any other [`EntrySet`].
//!
//! ```
//! # #[macro_use] extern crate setmap;
//! let mut map = treemap!{3 => "c", 1 => "a"};
//! assert_eq!(None, map.put(2, "b"));
//! assert_eq!(Some("c"), map.put(3, "C"));
//! assert_eq!(vec![&"a", &"b", &"C"], map.values());
//! assert_eq!(treeset![1, 2, 3], map.key_set());
//! ```
//!
//! ## Cursors
//!
//! Every set hands out a [`Cursor`]: a single pass over the set that
//! can remove the value it most recently returned. Removing before
//! advancing, or twice for the same value, is an
//! [`Error::IllegalState`], and the set is left as it was.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! | ------- | ----------- |
//! | [`proptest`](https://crates.io/crates/proptest) | Strategies for all these collection types under `setmap::proptest` |
//! | [`serde`](https://crates.io/crates/serde) | [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) implementations for all these collection types |
//! | [`arbitrary`](https://crates.io/crates/arbitrary/) | [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html) implementations for all these collection types |
//! | `debug` | `check_sane` invariant checkers on every collection |
//! | `small-chunks` | Start hash tables with two buckets, to exercise growth |

#![forbid(rust_2018_idioms)]
#![deny(unsafe_code, nonstandard_style)]
#![warn(unreachable_pub, missing_docs)]

#[macro_use]
mod util;

mod config;
mod error;
mod nodes;
mod set;

mod hash {
    pub(crate) mod linked;
    pub(crate) mod set;
}

mod ord {
    pub(crate) mod compare;
    pub(crate) mod set;
}

pub mod map;

#[cfg(feature = "serde")]
#[doc(hidden)]
pub mod ser;

#[cfg(feature = "arbitrary")]
#[doc(hidden)]
pub mod arbitrary;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub mod hashset {
    //! An unordered set.
    pub use crate::hash::set::*;
}

pub mod linkedhashset {
    //! An insertion-ordered set.
    pub use crate::hash::linked::*;
}

pub mod treeset {
    //! An ordered set.
    pub use crate::ord::set::*;
}

pub mod compare {
    //! Orderings for [`TreeSet`][crate::TreeSet].
    pub use crate::ord::compare::*;
}

pub use crate::config::HashConfig;
pub use crate::error::{Error, Result};
pub use crate::hash::linked::LinkedHashSet;
pub use crate::hash::set::HashSet;
pub use crate::map::{Entry, EntrySet, HashMap, LinkedHashMap, Map, TreeMap};
pub use crate::ord::set::TreeSet;
pub use crate::set::{Cursor, Set, SortedSet};

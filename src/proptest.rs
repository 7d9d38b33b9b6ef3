// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Proptest strategies.
//!
//! These are only available when using the `proptest` feature flag.

use crate::{HashMap, HashSet, LinkedHashSet, TreeMap, TreeSet};
use ::proptest::collection::vec;
use ::proptest::strategy::{BoxedStrategy, Strategy};
use std::hash::Hash;
use std::ops::Range;

/// A strategy for a [`HashSet`] of a given size.
///
/// # Examples
///
/// ```rust,no_run
/// # use ::proptest::proptest;
/// proptest! {
///     #[test]
///     fn proptest_a_set(ref s in setmap::proptest::hash_set(".*", 10..100)) {
///         assert!(s.len() < 100);
///         assert!(s.len() >= 10);
///     }
/// }
/// ```
pub fn hash_set<A: Strategy + 'static>(
    element: A,
    size: Range<usize>,
) -> BoxedStrategy<HashSet<<A as Strategy>::Value>>
where
    <A as Strategy>::Value: Hash + Eq,
{
    vec(element, size.clone())
        .prop_map(HashSet::from)
        .prop_filter("HashSet minimum size".to_owned(), move |s| {
            s.len() >= size.start
        })
        .boxed()
}

/// A strategy for a [`LinkedHashSet`] of a given size.
pub fn linked_hash_set<A: Strategy + 'static>(
    element: A,
    size: Range<usize>,
) -> BoxedStrategy<LinkedHashSet<<A as Strategy>::Value>>
where
    <A as Strategy>::Value: Hash + Eq,
{
    vec(element, size.clone())
        .prop_map(LinkedHashSet::from)
        .prop_filter("LinkedHashSet minimum size".to_owned(), move |s| {
            s.len() >= size.start
        })
        .boxed()
}

/// A strategy for a [`TreeSet`] of a given size.
pub fn tree_set<A: Strategy + 'static>(
    element: A,
    size: Range<usize>,
) -> BoxedStrategy<TreeSet<<A as Strategy>::Value>>
where
    <A as Strategy>::Value: Ord,
{
    vec(element, size.clone())
        .prop_map(TreeSet::from)
        .prop_filter("TreeSet minimum size".to_owned(), move |s| {
            s.len() >= size.start
        })
        .boxed()
}

/// A strategy for a [`HashMap`] of a given size.
pub fn hash_map<K: Strategy + 'static, V: Strategy + 'static>(
    key: K,
    value: V,
    size: Range<usize>,
) -> BoxedStrategy<HashMap<<K as Strategy>::Value, <V as Strategy>::Value>>
where
    <K as Strategy>::Value: Hash + Eq,
{
    vec((key, value), size.clone())
        .prop_map(HashMap::from)
        .prop_filter("HashMap minimum size".to_owned(), move |m| {
            m.len() >= size.start
        })
        .boxed()
}

/// A strategy for a [`TreeMap`] of a given size.
pub fn tree_map<K: Strategy + 'static, V: Strategy + 'static>(
    key: K,
    value: V,
    size: Range<usize>,
) -> BoxedStrategy<TreeMap<<K as Strategy>::Value, <V as Strategy>::Value>>
where
    <K as Strategy>::Value: Ord,
{
    vec((key, value), size.clone())
        .prop_map(TreeMap::from)
        .prop_filter("TreeMap minimum size".to_owned(), move |m| {
            m.len() >= size.start
        })
        .boxed()
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use arbitrary::{size_hint, Arbitrary, Result, Unstructured};
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use crate::map::{EntrySet, Map};
use crate::ord::compare::Comparator;
use crate::{HashSet, LinkedHashSet, TreeSet};

fn collection_size_hint(depth: usize) -> (usize, Option<usize>) {
    size_hint::recursion_guard(depth, |depth| {
        size_hint::and(<usize as Arbitrary>::size_hint(depth), (0, None))
    })
}

impl<'a, A, S> Arbitrary<'a> for HashSet<A, S>
where
    A: Arbitrary<'a> + Hash + Eq,
    S: BuildHasher + Default + 'static,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary_iter()?.collect()
    }

    fn arbitrary_take_rest(u: Unstructured<'a>) -> Result<Self> {
        u.arbitrary_take_rest_iter()?.collect()
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        collection_size_hint(depth)
    }
}

impl<'a, A, S> Arbitrary<'a> for LinkedHashSet<A, S>
where
    A: Arbitrary<'a> + Hash + Eq,
    S: BuildHasher + Default + 'static,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary_iter()?.collect()
    }

    fn arbitrary_take_rest(u: Unstructured<'a>) -> Result<Self> {
        u.arbitrary_take_rest_iter()?.collect()
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        collection_size_hint(depth)
    }
}

impl<'a, A, C> Arbitrary<'a> for TreeSet<A, C>
where
    A: Arbitrary<'a> + Borrow<C::Key>,
    C: Comparator + Default + 'static,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary_iter()?.collect()
    }

    fn arbitrary_take_rest(u: Unstructured<'a>) -> Result<Self> {
        u.arbitrary_take_rest_iter()?.collect()
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        collection_size_hint(depth)
    }
}

impl<'a, K, V, S> Arbitrary<'a> for Map<K, V, S>
where
    K: Arbitrary<'a>,
    V: Arbitrary<'a>,
    S: EntrySet<K, V> + Default + 'static,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary_iter::<(K, V)>()?.collect()
    }

    fn arbitrary_take_rest(u: Unstructured<'a>) -> Result<Self> {
        u.arbitrary_take_rest_iter::<(K, V)>()?.collect()
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        collection_size_hint(depth)
    }
}

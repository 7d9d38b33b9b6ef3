// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A doubly linked list whose nodes live in an [`Arena`].
//!
//! Handles stay valid until the node they name is unlinked, so another
//! structure can index straight into the middle of the list.

use std::iter::FusedIterator;

use super::arena::{Arena, Handle};

#[derive(Clone)]
struct Link<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

#[derive(Clone)]
pub(crate) struct List<T> {
    links: Arena<Link<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
}

impl<T> List<T> {
    pub(crate) const fn new() -> Self {
        List {
            links: Arena::new(),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<Handle> {
        self.head
    }

    #[inline]
    pub(crate) fn next(&self, handle: Handle) -> Option<Handle> {
        self.links.get(handle).next
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.links.get(handle).value
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.links.get_mut(handle).value
    }

    pub(crate) fn push_back(&mut self, value: T) -> Handle {
        let handle = self.links.alloc(Link {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.links.get_mut(tail).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        handle
    }

    pub(crate) fn unlink(&mut self, handle: Handle) -> T {
        let link = self.links.take(handle);
        match link.prev {
            Some(prev) => self.links.get_mut(prev).next = link.next,
            None => self.head = link.next,
        }
        match link.next {
            Some(next) => self.links.get_mut(next).prev = link.prev,
            None => self.tail = link.prev,
        }
        link.value
    }

    pub(crate) fn clear(&mut self) {
        self.links.clear();
        self.head = None;
        self.tail = None;
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Every handle from front to back.
    #[cfg(any(test, feature = "debug"))]
    pub(crate) fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        std::iter::successors(self.head, move |handle| self.next(*handle))
    }

    #[cfg(any(test, feature = "debug"))]
    pub(crate) fn check_sane(&self) {
        let mut prev = None;
        let mut count = 0;
        for handle in self.handles() {
            assert_eq!(prev, self.links.get(handle).prev, "broken back link");
            prev = Some(handle);
            count += 1;
        }
        assert_eq!(prev, self.tail, "tail is not the last node");
        assert_eq!(count, self.len(), "unreachable nodes in list");
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = Drain<T>;

    fn into_iter(self) -> Self::IntoIter {
        Drain { list: self }
    }
}

pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.list.links.get(self.front?);
        self.front = link.next;
        self.remaining -= 1;
        Some(&link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.list.links.get(self.back?);
        self.back = link.prev;
        self.remaining -= 1;
        Some(&link.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

pub(crate) struct Drain<T> {
    list: List<T>,
}

impl<T> Iterator for Drain<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.list.head?;
        Some(self.list.unlink(head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for Drain<T> {}

impl<T> FusedIterator for Drain<T> {}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unlink_from_every_position() {
        let mut list = List::new();
        let handles: Vec<Handle> = (0..5).map(|i| list.push_back(i)).collect();
        assert_eq!(2, list.unlink(handles[2]));
        assert_eq!(0, list.unlink(handles[0]));
        assert_eq!(4, list.unlink(handles[4]));
        list.check_sane();
        assert_eq!(vec![&1, &3], list.iter().collect::<Vec<_>>());
        assert_eq!(vec![&3, &1], list.iter().rev().collect::<Vec<_>>());
        list.push_back(5);
        list.check_sane();
        assert_eq!(vec![1, 3, 5], list.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn iterators_meet_in_the_middle() {
        let mut list = List::new();
        for i in 0..4 {
            list.push_back(i);
        }
        let mut it = list.iter();
        assert_eq!(Some(&0), it.next());
        assert_eq!(Some(&3), it.next_back());
        assert_eq!(Some(&1), it.next());
        assert_eq!(Some(&2), it.next_back());
        assert_eq!(None, it.next());
        assert_eq!(None, it.next_back());
    }
}

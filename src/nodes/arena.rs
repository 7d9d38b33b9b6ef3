// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Slot storage for linked node structures.
//!
//! Nodes refer to each other by [`Handle`] rather than by pointer, so a
//! parent link or a `prev` link is just a number and ownership of every
//! node stays with the arena.

use std::num::NonZeroU32;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZeroU32);

impl Handle {
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "Handle::from_index: index > Handle::MAX");
        match NonZeroU32::new((index + 1) as u32) {
            Some(raw) => Handle(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(element);
            handle
        } else {
            self.slots.push(Some(element));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match self.slots[handle.to_index()].as_ref() {
            Some(element) => element,
            None => panic!("Arena::get: stale handle"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match self.slots[handle.to_index()].as_mut() {
            Some(element) => element,
            None => panic!("Arena::get_mut: stale handle"),
        }
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        match self.slots[handle.to_index()].take() {
            Some(element) => {
                self.free.push(handle);
                element
            }
            None => panic!("Arena::take: stale handle"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ::proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Handle, Option<Handle>);

    #[test]
    fn recycles_freed_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        assert_eq!('a', arena.take(a));
        let c = arena.alloc('c');
        assert_eq!(a, c);
        assert_eq!(2, arena.len());
        assert_eq!('b', *arena.get(b));
        assert_eq!('c', *arena.get(c));
    }

    #[test]
    #[should_panic(expected = "stale handle")]
    fn stale_handle_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.take(a);
        arena.get(a);
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Set(usize, u32),
        Take(usize),
        Clear,
    }

    fn operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Set(which, value)),
            5 => any::<usize>().prop_map(Operation::Take),
            1 => Just(Operation::Clear),
        ]
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in ::proptest::collection::vec(operation(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena = Arena::new();
            for operation in operations {
                match operation {
                    Operation::Alloc(value) => model.push((arena.alloc(value), value)),
                    Operation::Set(which, value) if !model.is_empty() => {
                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Operation::Take(which) if !model.is_empty() => {
                        let index = which % model.len();
                        let (handle, value) = model.swap_remove(index);
                        prop_assert_eq!(value, arena.take(handle));
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                    _ => {}
                }
                prop_assert_eq!(model.len(), arena.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(value, *arena.get(handle));
                }
            }
        }
    }
}

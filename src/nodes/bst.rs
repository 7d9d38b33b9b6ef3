// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An unbalanced binary search tree.
//!
//! Nothing here knows how values are ordered: every search takes a
//! closure reporting how the wanted value compares to the node it is
//! shown. No rotations are ever performed, so the shape of the tree is
//! entirely determined by insertion order.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::mem;

use tracing::trace;

use super::arena::{Arena, Handle};
use crate::util::Side;

#[derive(Clone)]
struct Node<T> {
    value: T,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

/// Outcome of a descent from the root.
pub(crate) enum Search {
    Found(Handle),
    /// Where the value would be attached: `None` for an empty tree.
    Vacant(Option<(Handle, Side)>),
}

#[derive(Clone)]
pub(crate) struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
}

impl<T> Tree<T> {
    pub(crate) const fn new() -> Self {
        Tree {
            nodes: Arena::new(),
            root: None,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.nodes.get(handle).value
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.nodes.get_mut(handle).value
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Descend towards the value `cmp` is looking for. `cmp` reports
    /// how the wanted value compares to the node's value.
    pub(crate) fn search<F>(&self, mut cmp: F) -> Search
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut current = self.root;
        let mut vacancy = None;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match cmp(&node.value) {
                Ordering::Equal => return Search::Found(handle),
                Ordering::Greater => {
                    vacancy = Some((handle, Side::Right));
                    current = node.right;
                }
                Ordering::Less => {
                    vacancy = Some((handle, Side::Left));
                    current = node.left;
                }
            }
        }
        Search::Vacant(vacancy)
    }

    pub(crate) fn find<F>(&self, cmp: F) -> Option<Handle>
    where
        F: FnMut(&T) -> Ordering,
    {
        match self.search(cmp) {
            Search::Found(handle) => Some(handle),
            Search::Vacant(_) => None,
        }
    }

    /// Hang a new leaf in the spot a failed [`search`][Tree::search] found.
    pub(crate) fn attach(&mut self, vacancy: Option<(Handle, Side)>, value: T) -> Handle {
        let handle = self.nodes.alloc(Node {
            value,
            parent: vacancy.map(|(parent, _)| parent),
            left: None,
            right: None,
        });
        match vacancy {
            None => self.root = Some(handle),
            Some((parent, Side::Left)) => self.nodes.get_mut(parent).left = Some(handle),
            Some((parent, Side::Right)) => self.nodes.get_mut(parent).right = Some(handle),
        }
        handle
    }

    /// Remove the value held at `handle`.
    ///
    /// A node with two children keeps its place in the tree: it takes
    /// over its in-order predecessor's value and the predecessor node,
    /// which has no right child, is spliced out instead. Handles to
    /// every node other than the predecessor stay valid.
    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let node = self.nodes.get(handle);
        match (node.left, node.right) {
            (Some(left), Some(_)) => {
                let predecessor = self.rightmost(left);
                trace!("removing a node with two children");
                let replacement = self.splice_out(predecessor);
                mem::replace(&mut self.nodes.get_mut(handle).value, replacement)
            }
            _ => self.splice_out(handle),
        }
    }

    /// Unlink a node with at most one child, handing the child to the
    /// node's parent.
    fn splice_out(&mut self, handle: Handle) -> T {
        let node = self.nodes.take(handle);
        debug_assert!(node.left.is_none() || node.right.is_none());
        let child = node.left.or(node.right);
        match node.parent {
            None => self.root = child,
            Some(parent) => {
                let parent = self.nodes.get_mut(parent);
                if parent.left == Some(handle) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }
        if let Some(child) = child {
            self.nodes.get_mut(child).parent = node.parent;
        }
        node.value
    }

    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.rightmost(root))
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right {
            handle = right;
        }
        handle
    }

    /// The next node in order: the leftmost node of the right subtree,
    /// or else the nearest ancestor we are in the left subtree of.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.nodes.get(handle).right {
            return Some(self.leftmost(right));
        }
        let mut child = handle;
        let mut parent = self.nodes.get(handle).parent;
        while let Some(ancestor) = parent {
            let node = self.nodes.get(ancestor);
            if node.left == Some(child) {
                return Some(ancestor);
            }
            child = ancestor;
            parent = node.parent;
        }
        None
    }

    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.nodes.get(handle).left {
            return Some(self.rightmost(left));
        }
        let mut child = handle;
        let mut parent = self.nodes.get(handle).parent;
        while let Some(ancestor) = parent {
            let node = self.nodes.get(ancestor);
            if node.right == Some(child) {
                return Some(ancestor);
            }
            child = ancestor;
            parent = node.parent;
        }
        None
    }

    /// The greatest node not exceeding the key `cmp` compares against.
    pub(crate) fn floor<F>(&self, mut cmp: F) -> Option<Handle>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut current = self.root;
        let mut best = None;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match cmp(&node.value) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => current = node.left,
                Ordering::Greater => {
                    best = Some(handle);
                    current = node.right;
                }
            }
        }
        best
    }

    /// The least node not less than the key `cmp` compares against.
    pub(crate) fn ceiling<F>(&self, mut cmp: F) -> Option<Handle>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut current = self.root;
        let mut best = None;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match cmp(&node.value) {
                Ordering::Equal => return Some(handle),
                Ordering::Greater => current = node.right,
                Ordering::Less => {
                    best = Some(handle);
                    current = node.left;
                }
            }
        }
        best
    }

    /// Every node with its depth, root at depth 1.
    fn depths(&self) -> impl Iterator<Item = (Handle, usize)> + '_ {
        let mut stack: Vec<(Handle, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        std::iter::from_fn(move || {
            let (handle, depth) = stack.pop()?;
            let node = self.nodes.get(handle);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
            Some((handle, depth))
        })
    }

    /// The number of nodes on the longest root to leaf path.
    pub(crate) fn height(&self) -> usize {
        self.depths().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// The number of leaves.
    pub(crate) fn width(&self) -> usize {
        self.depths()
            .filter(|(handle, _)| {
                let node = self.nodes.get(*handle);
                node.left.is_none() && node.right.is_none()
            })
            .count()
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            front: self.first(),
            back: self.last(),
            remaining: self.len(),
        }
    }

    /// Walk in order from `start` up to but not including `end`.
    pub(crate) fn walk(&self, start: Option<Handle>, end: Option<Handle>) -> Walk<'_, T> {
        Walk {
            tree: self,
            next: start,
            end,
        }
    }

    /// Panic unless the in-order sequence is strictly ascending under
    /// `cmp` and every parent link agrees with its child link.
    #[cfg(any(test, feature = "debug"))]
    pub(crate) fn check_sane<F>(&self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if let Some(root) = self.root {
            assert_eq!(None, self.nodes.get(root).parent, "root has a parent");
        }
        let mut count = 0;
        for (handle, _) in self.depths() {
            let node = self.nodes.get(handle);
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(Some(handle), self.nodes.get(child).parent, "broken parent link");
            }
            count += 1;
        }
        assert_eq!(count, self.len(), "unreachable nodes in tree");
        let mut previous: Option<&T> = None;
        for value in self.iter() {
            if let Some(previous) = previous {
                assert_eq!(
                    Ordering::Less,
                    cmp(previous, value),
                    "in-order sequence is not ascending"
                );
            }
            previous = Some(value);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = Drain<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut order = Vec::with_capacity(self.len());
        let mut next = self.first();
        while let Some(handle) = next {
            order.push(handle);
            next = self.successor(handle);
        }
        Drain {
            nodes: self.nodes,
            order: order.into_iter(),
        }
    }
}

pub(crate) struct Iter<'a, T> {
    tree: &'a Tree<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
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
        let handle = self.front?;
        self.front = self.tree.successor(handle);
        self.remaining -= 1;
        Some(self.tree.get(handle))
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
        let handle = self.back?;
        self.back = self.tree.predecessor(handle);
        self.remaining -= 1;
        Some(self.tree.get(handle))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

pub(crate) struct Walk<'a, T> {
    tree: &'a Tree<T>,
    next: Option<Handle>,
    end: Option<Handle>,
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        if Some(handle) == self.end {
            self.next = None;
            return None;
        }
        self.next = self.tree.successor(handle);
        Some(self.tree.get(handle))
    }
}

impl<'a, T> FusedIterator for Walk<'a, T> {}

pub(crate) struct Drain<T> {
    nodes: Arena<Node<T>>,
    order: std::vec::IntoIter<Handle>,
}

impl<T> Iterator for Drain<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.order.next()?;
        Some(self.nodes.take(handle).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let handle = self.order.next_back()?;
        Some(self.nodes.take(handle).value)
    }
}

impl<T> ExactSizeIterator for Drain<T> {}

impl<T> FusedIterator for Drain<T> {}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn insert(tree: &mut Tree<i32>, value: i32) -> bool {
        match tree.search(|node| value.cmp(node)) {
            Search::Found(_) => false,
            Search::Vacant(vacancy) => {
                tree.attach(vacancy, value);
                true
            }
        }
    }

    fn tree(values: &[i32]) -> Tree<i32> {
        let mut tree = Tree::new();
        for value in values {
            insert(&mut tree, *value);
        }
        tree
    }

    fn values(tree: &Tree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn junction_removal_recycles_the_node() {
        let mut tree = tree(&[50, 30, 70, 20, 40, 35]);
        let junction = tree.find(|node| 30.cmp(node)).unwrap();
        let kept = tree.find(|node| 40.cmp(node)).unwrap();
        assert_eq!(30, tree.remove(junction));
        assert_eq!(20, *tree.get(junction));
        assert_eq!(40, *tree.get(kept));
        assert_eq!(vec![20, 35, 40, 50, 70], values(&tree));
        tree.check_sane(i32::cmp);
    }

    #[test]
    fn removing_the_root_down_to_empty() {
        let mut tree = tree(&[5, 3, 8, 1, 4, 7, 9]);
        while let Some(root) = tree.root {
            tree.remove(root);
            tree.check_sane(i32::cmp);
        }
        assert_eq!(0, tree.len());
        assert_eq!(None, tree.first());
    }

    #[test]
    fn successor_and_predecessor_walk_the_whole_tree() {
        let tree = tree(&[3, -10, 20, 1, 10, 8, 100, 17]);
        assert_eq!(vec![-10, 1, 3, 8, 10, 17, 20, 100], values(&tree));
        assert_eq!(
            vec![100, 20, 17, 10, 8, 3, 1, -10],
            tree.iter().rev().copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn shape_diagnostics() {
        assert_eq!((0, 0), (Tree::<i32>::new().height(), Tree::<i32>::new().width()));
        let balanced = tree(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!((3, 4), (balanced.height(), balanced.width()));
        let degenerate = tree(&[1, 2, 3, 4, 5]);
        assert_eq!((5, 1), (degenerate.height(), degenerate.width()));
    }

    #[test]
    fn walk_stops_at_end() {
        let tree = tree(&[3, -10, 20, 1, 10, 8, 100, 17]);
        let start = tree.ceiling(|node| 2.cmp(node));
        let end = tree.ceiling(|node| 17.cmp(node));
        assert_eq!(
            vec![3, 8, 10],
            tree.walk(start, end).copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn drain_is_in_order() {
        let tree = tree(&[3, -10, 20, 1]);
        assert_eq!(vec![-10, 1, 3, 20], tree.into_iter().collect::<Vec<_>>());
    }
}

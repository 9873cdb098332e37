use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::iter::FusedIterator;

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::CapacityError;

/// The unbalanced order-statistic BST backing `RankTree`.
#[derive(Clone)]
pub(crate) struct RawRankTree<T> {
    /// Arena storing all tree nodes; its length is the element count.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<T> RawRankTree<T> {
    /// Maximum number of elements a tree can hold.
    pub(crate) const MAX_LEN: usize = Arena::<Node<T>>::MAX_LEN;

    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node at once.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the node count of the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut height = 0;
        let mut stack: Vec<(Handle, usize)> = Vec::new();
        stack.push((root, 1));
        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Returns the smallest element.
    pub(crate) fn first(&self) -> Option<&T> {
        self.walk_spine(Side::Left)
    }

    /// Returns the largest element.
    pub(crate) fn last(&self) -> Option<&T> {
        self.walk_spine(Side::Right)
    }

    fn walk_spine(&self, side: Side) -> Option<&T> {
        let mut node = self.nodes.get(self.root?);
        while let Some(child) = node.child(side) {
            node = self.nodes.get(child);
        }
        Some(node.value())
    }

    /// Gets the element at zero-based position `rank` in sorted order.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&T> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root?;
        let mut remaining = rank;

        loop {
            let node = self.nodes.get(current);
            let left_size = node.left_size();
            let next = match remaining.cmp(&left_size) {
                Equal => return Some(node.value()),
                Less => node.left(),
                Greater => {
                    remaining -= left_size + 1;
                    node.right()
                }
            };
            debug_assert!(
                next.is_some(),
                "get_by_rank: left_size invariant violated - rank {rank} not found (len: {})",
                self.len()
            );
            current = next?;
        }
    }

    /// Returns an in-order iterator.
    pub(crate) fn iter(&self) -> RawIter<'_, T> {
        let mut iter = RawIter {
            nodes: &self.nodes,
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root);
        iter
    }
}

impl<T: Ord> RawRankTree<T> {
    /// Inserts `value`, failing only when the arena is full.
    ///
    /// Capacity is checked before the descent so a failed insertion leaves
    /// every `left_size` untouched.
    pub(crate) fn try_insert(&mut self, value: T) -> Result<(), CapacityError> {
        if self.nodes.is_full() {
            return Err(CapacityError { max_len: Self::MAX_LEN });
        }

        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(value)));
            return Ok(());
        };

        loop {
            let node = self.nodes.get_mut(current);
            let side = node.route_insert(&value);
            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let leaf = self.nodes.alloc(Node::new(value));
                    self.nodes.get_mut(current).attach(side, leaf);
                    return Ok(());
                }
            }
        }
    }

    /// Finds the node holding `key`: the first-inserted one when duplicates exist.
    fn search<Q>(&self, key: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;
        loop {
            let node = self.nodes.get(current);
            current = match key.cmp(node.value().borrow()) {
                Equal => return Some(node),
                Less => node.left()?,
                Greater => node.right()?,
            };
        }
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Returns the rank of `key`, or `None` if it was never inserted.
    ///
    /// On an exact match the matched node's `left_size` is the answer, so with
    /// duplicates the result counts every later copy as smaller.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;
        let mut rank = 0;

        loop {
            let node = self.nodes.get(current);
            current = match key.cmp(node.value().borrow()) {
                Equal => return Some(rank + node.left_size()),
                Less => node.left()?,
                Greater => {
                    // The node itself and its whole left subtree precede `key`.
                    rank += node.left_size() + 1;
                    node.right()?
                }
            };
        }
    }
}

/// In-order traversal driven by an explicit stack of pending ancestors.
pub(crate) struct RawIter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<T> RawIter<'_, T> {
    fn push_left_spine(&mut self, mut next: Option<Handle>) {
        while let Some(handle) = next {
            self.stack.push(handle);
            next = self.nodes.get(handle).left();
        }
    }
}

impl<'a, T> Iterator for RawIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let handle = self.stack.pop()?;
        let nodes = self.nodes;
        let node = nodes.get(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RawIter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for RawIter<'_, T> {}

impl<T> Clone for RawIter<'_, T> {
    fn clone(&self) -> Self {
        RawIter {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::manual_assert, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use proptest::prelude::*;

    impl<T: Ord + core::fmt::Debug> RawRankTree<T> {
        /// Validates ordering and `left_size` for every node. Panics with a
        /// descriptive message if any are violated.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();
            let counted = match self.root {
                Some(root) => self.validate_node(root, None, None, &mut errors),
                None => 0,
            };
            if counted != self.len() {
                errors.push(alloc::format!("reachable nodes: {counted}, len: {}", self.len()));
            }
            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        /// Returns the number of nodes under `handle`. Every value must be
        /// `> lower` and `<= upper`.
        fn validate_node(&self, handle: Handle, lower: Option<&T>, upper: Option<&T>, errors: &mut Vec<String>) -> usize {
            let node = self.nodes.get(handle);
            let value = node.value();
            if lower.is_some_and(|lower| value <= lower) {
                errors.push(alloc::format!("{value:?} is not greater than ancestor {lower:?}"));
            }
            if upper.is_some_and(|upper| value > upper) {
                errors.push(alloc::format!("{value:?} is greater than ancestor {upper:?}"));
            }

            let left = node.left().map_or(0, |child| self.validate_node(child, lower, Some(value), errors));
            let right = node.right().map_or(0, |child| self.validate_node(child, Some(value), upper, errors));
            if left != node.left_size() {
                errors.push(alloc::format!("{value:?}: left_size {} but {left} nodes on the left", node.left_size()));
            }
            left + right + 1
        }
    }

    fn tree_from(values: &[i32]) -> RawRankTree<i32> {
        let mut tree = RawRankTree::new();
        for &value in values {
            tree.try_insert(value).unwrap();
        }
        tree
    }

    #[test]
    fn empty_tree_rank_operations() {
        let tree: RawRankTree<i32> = RawRankTree::new();
        tree.validate_invariants();

        assert_eq!(tree.height(), 0);
        assert!(tree.first().is_none());
        assert!(tree.last().is_none());
        assert!(tree.get_by_rank(0).is_none());
        assert!(tree.rank_of(&0).is_none());
        assert_eq!(tree.iter().len(), 0);
    }

    #[test]
    fn left_sizes_after_mixed_insertions() {
        let tree = tree_from(&[5, 1, 4, 4, 5, 9, 7, 13, 3]);
        tree.validate_invariants();

        // Root 5 sees 1, 4, 4, 5, 3 pass to its left.
        let root = tree.nodes.get(tree.root.unwrap());
        assert_eq!(*root.value(), 5);
        assert_eq!(root.left_size(), 5);

        assert_eq!(tree.rank_of(&1), Some(0));
        assert_eq!(tree.rank_of(&3), Some(1));
        assert_eq!(tree.rank_of(&4), Some(3));
        assert_eq!(tree.rank_of(&5), Some(5));
        assert_eq!(tree.rank_of(&13), Some(8));
        assert_eq!(tree.rank_of(&6), None);
    }

    #[test]
    fn duplicates_stack_down_the_left() {
        let tree = tree_from(&[2, 2, 2]);
        tree.validate_invariants();

        assert_eq!(tree.height(), 3);
        assert_eq!(tree.rank_of(&2), Some(2));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 2, 2]);
    }

    #[test]
    fn failed_insert_leaves_counts_untouched() {
        // Bit-reversed order keeps the tree shallow while filling the arena.
        let mut tree: RawRankTree<u16> = RawRankTree::new();
        for index in 0..RawRankTree::<u16>::MAX_LEN {
            tree.try_insert((index as u16).reverse_bits()).unwrap();
        }
        let newest = ((RawRankTree::<u16>::MAX_LEN - 1) as u16).reverse_bits();
        let before = tree.rank_of(&newest);
        assert!(before.is_some());

        let err = tree.try_insert(0).unwrap_err();
        assert_eq!(err.max_len(), RawRankTree::<u16>::MAX_LEN);
        assert_eq!(tree.len(), RawRankTree::<u16>::MAX_LEN);
        assert_eq!(tree.rank_of(&newest), before);
        tree.validate_invariants();
    }

    proptest! {
        #[test]
        fn tree_invariants_maintained_after_insertions(values in prop::collection::vec(-50i32..50, 0..500)) {
            let tree = tree_from(&values);
            tree.validate_invariants();
        }

        #[test]
        fn get_by_rank_correctness(values in prop::collection::vec(-50i32..50, 1..300)) {
            let tree = tree_from(&values);
            let mut expected = values.clone();
            expected.sort_unstable();

            for (rank, value) in expected.iter().enumerate() {
                prop_assert_eq!(tree.get_by_rank(rank), Some(value));
            }
            prop_assert!(tree.get_by_rank(expected.len()).is_none());
        }

        #[test]
        fn rank_of_counts_every_copy_but_the_first(values in prop::collection::vec(-50i32..50, 1..300)) {
            let tree = tree_from(&values);
            let mut sorted = values.clone();
            sorted.sort_unstable();

            for value in &values {
                let at_or_below = sorted.partition_point(|other| other <= value);
                prop_assert_eq!(tree.rank_of(value), Some(at_or_below - 1));
            }
            prop_assert!(tree.rank_of(&50).is_none());
        }

        #[test]
        fn iter_is_sorted(values in prop::collection::vec(any::<i32>(), 0..300)) {
            let tree = tree_from(&values);
            let mut expected = values.clone();
            expected.sort_unstable();

            let iter = tree.iter();
            prop_assert_eq!(iter.len(), expected.len());
            prop_assert_eq!(iter.copied().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn height_bounds(values in prop::collection::vec(any::<i32>(), 0..300)) {
            let tree = tree_from(&values);
            prop_assert!(tree.height() <= tree.len());
            prop_assert_eq!(tree.height() == 0, tree.is_empty());
        }
    }
}

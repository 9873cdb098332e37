use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::raw::{RawIter, RawRankTree};

mod capacity;
mod order_statistic;

/// An order-statistics binary search tree.
///
/// Values are kept in a plain (never rebalanced) binary search tree in which
/// every node also counts the nodes in its left subtree. That count lets
/// [`rank_of`](RankTree::rank_of) and [`get_by_rank`](RankTree::get_by_rank)
/// run in time proportional to the depth of the tree: O(log n) on average for
/// randomly ordered input, O(n) for adversarial input such as an already
/// sorted sequence.
///
/// Duplicates are allowed. An equal value always descends to the left of the
/// node it matches, so the copies of a value form a chain below the first one
/// inserted.
///
/// Elements can only be added. The tree is discarded as a whole with
/// [`clear`](RankTree::clear) or by dropping it. Neither operation recurses,
/// whatever the tree's shape.
///
/// It is a logic error for a value to be modified in such a way that its
/// ordering relative to any other value, as determined by the [`Ord`] trait,
/// changes while it is in the tree. The resulting behavior is not specified but
/// is confined to that tree and does not cause undefined behavior.
///
/// # Examples
///
/// ```
/// use rank_tree::RankTree;
///
/// let mut tree = RankTree::new();
/// for value in [5, 1, 4, 4, 5, 9, 7, 13, 3] {
///     tree.insert(value);
/// }
///
/// assert_eq!(tree.len(), 9);
/// assert_eq!(tree.rank_of(&1), Some(0));
/// assert_eq!(tree.rank_of(&3), Some(1));
/// assert_eq!(tree.rank_of(&4), Some(3));
///
/// // Values that were never inserted have no rank.
/// assert_eq!(tree.rank_of(&999), None);
/// ```
pub struct RankTree<T> {
    raw: RawRankTree<T>,
}

/// An iterator over the values of a `RankTree` in ascending order.
///
/// Equal values are yielded together, most recently inserted first.
///
/// This `struct` is created by the [`iter`] method on [`RankTree`].
///
/// # Examples
///
/// ```
/// use rank_tree::RankTree;
///
/// let tree = RankTree::from([3, 1, 2]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.len(), 2);
/// ```
///
/// [`iter`]: RankTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: RawIter<'a, T>,
}

impl<T> RankTree<T> {
    /// Makes a new, empty `RankTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let mut tree: RankTree<i32> = RankTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        RankTree { raw: RawRankTree::new() }
    }

    /// Returns the number of values in the tree, duplicates included.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let tree = RankTree::from([1, 1, 2]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty tree has height 0. Because the tree is never rebalanced, sorted
    /// input produces a height equal to [`len`](RankTree::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let balanced = RankTree::from([2, 1, 3]);
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let chain = RankTree::from([1, 2, 3]);
    /// assert_eq!(chain.height(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Removes every value, keeping the allocated node storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let mut tree = RankTree::from([1, 2]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.rank_of(&1), None);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the smallest value, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let tree = RankTree::from([4, 2, 8]);
    /// assert_eq!(tree.first(), Some(&2));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns the largest value, or `None` if the tree is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Gets an iterator that visits the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let tree = RankTree::from([3, 1, 2, 1]);
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, [1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.raw.iter() }
    }
}

impl<T: Ord> RankTree<T> {
    /// Adds a value to the tree.
    ///
    /// Duplicates are kept: inserting a value that is already present adds
    /// another copy.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds [`RankTree::MAX_LEN`] values. Use
    /// [`try_insert`](RankTree::try_insert) to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let mut tree = RankTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn insert(&mut self, value: T) {
        if let Err(err) = self.raw.try_insert(value) {
            panic!("`RankTree::insert()` - {err}");
        }
    }

    /// Returns `true` if the tree contains a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let tree = RankTree::from([1, 2, 3]);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&4));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(value)
    }
}

impl<T: Clone> Clone for RankTree<T> {
    fn clone(&self) -> Self {
        RankTree { raw: self.raw.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for RankTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for RankTree<T> {
    fn default() -> Self {
        RankTree::new()
    }
}

impl<T: Ord> FromIterator<T> for RankTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RankTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RankTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for RankTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for RankTree<T> {
    /// Builds a tree by inserting the array's values in order.
    ///
    /// Unlike a sorted collection, the order matters: it decides the tree's
    /// shape and how duplicates rank.
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let tree = RankTree::from([1, 2, 3, 4]);
    /// assert_eq!(tree.rank_of(&3), Some(2));
    /// ```
    fn from(arr: [T; N]) -> Self {
        RankTree::from_iter(arr)
    }
}

impl<'a, T> IntoIterator for &'a RankTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug_lists_values_in_order() {
        let tree = RankTree::from([3, 1, 2]);
        assert_eq!(format!("{tree:?}"), "[1, 2, 3]");
        assert_eq!(format!("{:?}", tree.iter()), "[1, 2, 3]");
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = RankTree::from([5, 3, 8]);
        let snapshot = tree.clone();
        tree.insert(1);

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.rank_of(&5), Some(1));
        assert_eq!(tree.rank_of(&5), Some(2));
    }

    #[test]
    fn extend_by_reference() {
        let mut tree: RankTree<i32> = RankTree::new();
        tree.extend(&[4, 2, 4]);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 4, 4]);
    }

    #[test]
    fn borrowed_lookups() {
        let tree: RankTree<alloc::string::String> = ["pear", "apple", "fig"].into_iter().map(Into::into).collect();
        assert!(tree.contains("fig"));
        assert_eq!(tree.rank_of("pear"), Some(2));
        assert_eq!(tree.rank_of("kiwi"), None);
    }

    #[test]
    #[should_panic(expected = "`RankTree::insert()` - tree is at maximum capacity")]
    #[allow(clippy::cast_possible_truncation)]
    fn insert_past_max_len_panics() {
        let mut tree = RankTree::new();
        // Bit-reversed order keeps the tree shallow while filling it.
        for index in 0..=RankTree::<u16>::MAX_LEN {
            tree.insert((index as u16).reverse_bits());
        }
    }
}

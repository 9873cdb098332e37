use core::borrow::Borrow;
use core::ops::Index;

use super::RankTree;
use crate::Rank;

impl<T: Ord> RankTree<T> {
    /// Returns the rank of `value`, or `None` if it was never inserted.
    ///
    /// The rank is the number of values ordered before `value`. When `value`
    /// has been inserted more than once, the rank is taken at the first copy
    /// inserted and every later copy counts as preceding it, so the result is
    /// one less than the number of values `<=` `value`.
    ///
    /// `None` is distinct from a rank of 0 and is returned for any value on an
    /// empty tree.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let tree = RankTree::from([10, 20, 20, 5]);
    ///
    /// assert_eq!(tree.rank_of(&5), Some(0));
    /// assert_eq!(tree.rank_of(&10), Some(1));
    /// assert_eq!(tree.rank_of(&20), Some(3));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(value)
    }
}

impl<T> RankTree<T> {
    /// Returns the value at position `rank` in sorted order.
    ///
    /// The rank is zero-based and equal values occupy consecutive positions.
    /// Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let tree = RankTree::from([30, 10, 20, 10]);
    /// assert_eq!(tree.get_by_rank(0), Some(&10));
    /// assert_eq!(tree.get_by_rank(1), Some(&10));
    /// assert_eq!(tree.get_by_rank(3), Some(&30));
    /// assert!(tree.get_by_rank(4).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.raw.get_by_rank(rank)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use rank_tree::{Rank, RankTree};
///
/// let tree = RankTree::from([10, 20, 30]);
/// assert_eq!(tree[Rank(1)], 20);
/// ```
impl<T> Index<Rank> for RankTree<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}

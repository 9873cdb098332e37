use super::RankTree;
use crate::CapacityError;
use crate::raw::RawRankTree;

impl<T> RankTree<T> {
    /// The largest number of values a tree can hold.
    pub const MAX_LEN: usize = RawRankTree::<T>::MAX_LEN;

    /// Creates an empty tree with node storage for at least `capacity` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let tree: RankTree<i32> = RankTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RankTree {
            raw: RawRankTree::with_capacity(capacity),
        }
    }

    /// Returns how many values the tree can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}

impl<T: Ord> RankTree<T> {
    /// Adds a value to the tree, or reports that the tree is full.
    ///
    /// On error the tree is unchanged: no node counts are updated and `value`
    /// is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the tree already holds
    /// [`RankTree::MAX_LEN`] values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::RankTree;
    ///
    /// let mut tree = RankTree::new();
    /// assert!(tree.try_insert(7).is_ok());
    /// assert_eq!(tree.rank_of(&7), Some(0));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), CapacityError> {
        self.raw.try_insert(value)
    }
}

use thiserror::Error;

/// The tree already holds as many elements as its node storage can address.
///
/// Returned by [`RankTree::try_insert`](crate::RankTree::try_insert); the tree
/// is left unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("tree is at maximum capacity ({max_len} elements)")]
pub struct CapacityError {
    pub(crate) max_len: usize,
}

impl CapacityError {
    /// Returns the element limit that was reached.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }
}

/// A zero-based position in the sorted order of a [`RankTree`](crate::RankTree).
///
/// Equal values occupy consecutive positions.
///
/// # Examples
///
/// ```
/// use rank_tree::{Rank, RankTree};
///
/// let tree = RankTree::from([30, 10, 20]);
///
/// assert_eq!(tree[Rank(0)], 10);
/// assert_eq!(tree[Rank(2)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

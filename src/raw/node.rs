use super::handle::Handle;
use super::size::Size;

/// A single inserted value and its links.
///
/// Values in the left subtree compare `<=` to `value`, values in the right
/// subtree compare `>`. Equal values therefore always descend to the left.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    value: T,
    // Number of nodes in the left subtree, kept current by every insertion.
    left_size: Size,
    left: Option<Handle>,
    right: Option<Handle>,
}

/// The side of a node a value descends to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<T> Node<T> {
    /// Creates a childless node.
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            left_size: Size::ZERO,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the number of nodes in the left subtree.
    #[inline]
    pub(crate) const fn left_size(&self) -> usize {
        self.left_size.to_usize()
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Attaches `child` on `side`.
    ///
    /// The slot must be empty; nodes are never re-linked.
    pub(crate) fn attach(&mut self, side: Side, child: Handle) {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        debug_assert!(slot.is_none(), "`Node::attach()` - {side:?} child already present");
        *slot = Some(child);
    }

    /// Records one more node below on the left.
    #[inline]
    pub(crate) fn count_left_descent(&mut self) {
        self.left_size = self.left_size.incremented();
    }
}

impl<T: Ord> Node<T> {
    /// Returns the side `value` belongs on, counting it if that side is the left.
    ///
    /// Used while descending to insert, so every node on the path sees the new
    /// value exactly once.
    pub(crate) fn route_insert(&mut self, value: &T) -> Side {
        if *value <= self.value {
            self.count_left_descent();
            Side::Left
        } else {
            Side::Right
        }
    }
}

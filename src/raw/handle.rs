use core::num::NonZero;

// Narrow handles under test so the storage limit is reachable in unit tests.
#[cfg(test)]
pub(super) type RawHandle = u16;
#[cfg(not(test))]
pub(super) type RawHandle = u32;

/// Index of a node slot in the tree's arena.
///
/// The index is stored plus one in a `NonZero`, which gives `Option<Handle>`
/// (an absent child) the same width as `Handle`. The top encoding is never
/// produced, so `MAX` stays `RawHandle::MAX - 1`.
///
/// Node handles only span `0..Handle::MAX`: the arena stops one short so that
/// [`Size`](super::size::Size), which shares this encoding, can still count a
/// full tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// Largest slot index a handle can address.
    pub(crate) const MAX: usize = RawHandle::MAX as usize - 1;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        let Some(encoded) = NonZero::new(index as RawHandle + 1) else {
            unreachable!()
        };
        Self(encoded)
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        self.0.get() as usize - 1
    }
}

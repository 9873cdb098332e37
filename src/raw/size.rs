use super::handle::Handle;

/// A compact node count, the same width as a [`Handle`].
///
/// A subtree can never hold more nodes than the arena can address, so the
/// handle encoding doubles as the count encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(Handle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ZERO: Self = Self::from_usize(0);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        Self(Handle::from_index(size))
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.to_index()
    }

    /// Returns the count plus one.
    ///
    /// # Panics
    ///
    /// Panics if the result would exceed [`Size::MAX`].
    #[inline]
    #[must_use]
    pub(crate) const fn incremented(self) -> Self {
        Self::from_usize(self.to_usize() + 1)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Size, Option<Size>);
    assert_eq_size!(Size, Handle);

    #[test]
    #[should_panic(expected = "`Size::from_usize()` - `size` > `Size::MAX`!")]
    fn size_past_max_panics() {
        let _ = Size::from_usize(Size::MAX + 1);
    }

    #[test]
    #[should_panic(expected = "`Size::from_usize()` - `size` > `Size::MAX`!")]
    fn increment_past_max_panics() {
        let _ = Size::from_usize(Size::MAX).incremented();
    }

    #[test]
    fn increment_counts_up_from_zero() {
        let mut size = Size::ZERO;
        for expected in 1..=100 {
            size = size.incremented();
            assert_eq!(size.to_usize(), expected);
        }
    }

    proptest! {
        #[test]
        fn size_survives_encoding(size in 0..=Size::MAX) {
            prop_assert_eq!(Size::from_usize(size).to_usize(), size);
        }
    }
}

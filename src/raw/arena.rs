use alloc::vec::Vec;

use super::handle::Handle;

/// Append-only slot storage addressed by [`Handle`].
///
/// Tree nodes are never removed individually, so there is no free list: a
/// handle stays valid until [`Arena::clear`].
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    /// Maximum number of elements an arena can hold.
    pub(crate) const MAX_LEN: usize = Handle::MAX;

    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(Self::MAX_LEN)),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) const fn is_full(&self) -> bool {
        self.slots.len() >= Self::MAX_LEN
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // The last node takes index `MAX_LEN - 1`; `Handle::MAX` is left for `Size`.
        assert!(
            !self.is_full(),
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Self::MAX_LEN
        );
        self.slots.push(element);
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots.get(handle.to_index()).expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots.get_mut(handle.to_index()).expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::RingDequeError;

/// Fixed-size block of slots, each either vacant or holding one live element.
///
/// This is the only place that knows how elements are laid out in memory. The
/// ring arithmetic lives in `RingDeque`; here a slot is just a physical offset.
/// Dropping the block drops every live element it still holds.
#[derive(Debug)]
pub(crate) struct Slots<T> {
    cells: Box<[Option<T>]>,
}

impl<T> Slots<T> {
    /// The null block: no capacity, no allocation.
    pub(crate) fn empty() -> Self {
        Self {
            cells: Box::new([]),
        }
    }

    /// Allocates `capacity` vacant slots.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::AllocationFailed` if the allocator refuses the block.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, RingDequeError> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(capacity)
            .map_err(|_| RingDequeError::AllocationFailed { capacity })?;
        cells.resize_with(capacity, || None);
        Ok(Self {
            cells: cells.into_boxed_slice(),
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Places `value` into a vacant slot.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not below the capacity.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn construct(&mut self, at: usize, value: T) {
        debug_assert!(self.cells[at].is_none(), "slot {at} already holds a value");
        self.cells[at] = Some(value);
    }

    /// Takes the value out of a slot, leaving it vacant.
    pub(crate) fn destroy(&mut self, at: usize) -> Option<T> {
        self.cells.get_mut(at).and_then(Option::take)
    }

    pub(crate) fn get(&self, at: usize) -> Option<&T> {
        self.cells.get(at).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        self.cells.get_mut(at).and_then(Option::as_mut)
    }

    /// Exchanges the contents of two slots, vacant or not.
    pub(crate) fn exchange(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    /// Splits the occupied ring `[head, tail)` into its two physical runs.
    ///
    /// The second run is empty unless the range wraps past the end of the block.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn runs(&self, head: usize, tail: usize) -> (&[Option<T>], &[Option<T>]) {
        if head <= tail {
            (&self.cells[head..tail], &[])
        } else {
            let (wrapped, leading) = self.cells.split_at(head);
            (leading, &wrapped[..tail])
        }
    }

    /// Mutable twin of [`Slots::runs`].
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn runs_mut(
        &mut self,
        head: usize,
        tail: usize,
    ) -> (&mut [Option<T>], &mut [Option<T>]) {
        if head <= tail {
            (&mut self.cells[head..tail], &mut [])
        } else {
            let (wrapped, leading) = self.cells.split_at_mut(head);
            (leading, &mut wrapped[..tail])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;

    #[test]
    fn test_empty_block_has_no_capacity() {
        let slots: Slots<u32> = Slots::empty();
        assert_eq!(slots.capacity(), 0);
        assert_eq!(slots.get(0), None);
    }

    #[test]
    fn test_construct_and_destroy() {
        let mut slots = Slots::try_with_capacity(4).unwrap();
        assert_eq!(slots.capacity(), 4);

        slots.construct(2, "two");
        assert_eq!(slots.get(2), Some(&"two"));
        assert_eq!(slots.get(1), None);

        assert_eq!(slots.destroy(2), Some("two"));
        assert_eq!(slots.destroy(2), None);
        assert_eq!(slots.get(2), None);
    }

    #[test]
    fn test_out_of_range_access_is_vacant() {
        let mut slots: Slots<u8> = Slots::try_with_capacity(2).unwrap();
        assert_eq!(slots.get(5), None);
        assert_eq!(slots.get_mut(5), None);
        assert_eq!(slots.destroy(5), None);
    }

    #[test]
    fn test_exchange_moves_vacancy() {
        let mut slots = Slots::try_with_capacity(3).unwrap();
        slots.construct(0, 10);
        slots.exchange(0, 2);
        assert_eq!(slots.get(0), None);
        assert_eq!(slots.get(2), Some(&10));
    }

    #[test]
    fn test_runs_contiguous_and_wrapped() {
        let mut slots = Slots::try_with_capacity(5).unwrap();
        for i in 0..5 {
            slots.construct(i, i);
        }

        let (first, second) = slots.runs(1, 4);
        assert_eq!(first, &[Some(1), Some(2), Some(3)]);
        assert!(second.is_empty());

        let (first, second) = slots.runs(3, 2);
        assert_eq!(first, &[Some(3), Some(4)]);
        assert_eq!(second, &[Some(0), Some(1)]);

        let (first, second) = slots.runs_mut(4, 1);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_drop_releases_live_values() {
        let tracker = Rc::new(());
        {
            let mut slots = Slots::try_with_capacity(3).unwrap();
            slots.construct(0, Rc::clone(&tracker));
            slots.construct(2, Rc::clone(&tracker));
            assert_eq!(Rc::strong_count(&tracker), 3);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A position in a `RingDeque`: one element slot or the one-past-end slot.
///
/// A cursor is a plain value. It owns nothing and borrows nothing; it records the
/// physical slot it names together with a snapshot of the ring it was taken
/// from (head offset, capacity, length and buffer generation). All arithmetic
/// and ordering is resolved against that snapshot, never against the live deque,
/// so two cursors taken from the same state compare and subtract consistently
/// even when the occupied range wraps past the end of the physical block.
///
/// # Validity
///
/// A cursor stays valid until its deque reallocates, is cleared, is swapped or
/// is dropped. After that it is stale: dereferencing it through
/// [`RingDeque::at`](crate::RingDeque::at) panics and
/// [`RingDeque::try_at`](crate::RingDeque::try_at) reports
/// [`RingDequeError::StaleCursor`](crate::RingDequeError::StaleCursor).
/// Pushing, popping, inserting or erasing does not renew the generation but does
/// move the head, so cursors taken before such a call name physical slots, not
/// the elements that used to live there.
///
/// # Wraparound arithmetic
///
/// Adding or subtracting an offset is cyclic over the `len + 1` positions of the
/// snapshot (every element plus one-past-end). `begin + len` is `end`,
/// `end + 1` is `begin` again, and shifting by `len + 1` is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    offset: usize,
    head: usize,
    capacity: usize,
    len: usize,
    generation: u64,
}

impl Cursor {
    pub(crate) fn new(
        offset: usize,
        head: usize,
        capacity: usize,
        len: usize,
        generation: u64,
    ) -> Self {
        Self {
            offset,
            head,
            capacity,
            len,
            generation,
        }
    }

    /// Physical slot this cursor names.
    pub(crate) fn slot(&self) -> usize {
        self.offset
    }

    /// Generation of the buffer this cursor was taken from.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Logical position relative to the head snapshot: `0` for the first element,
    /// `len` for one-past-end.
    #[must_use]
    pub fn index(&self) -> usize {
        if self.offset >= self.head {
            self.offset - self.head
        } else {
            self.offset + self.capacity - self.head
        }
    }

    /// Moves the cursor by a signed number of positions, with the same cyclic
    /// wraparound as `+` and `-`.
    #[must_use]
    pub fn offset(self, delta: isize) -> Self {
        if delta >= 0 {
            self + delta.unsigned_abs()
        } else {
            self - delta.unsigned_abs()
        }
    }

    /// Signed number of positions from `origin` to `self`.
    ///
    /// `origin.offset(cursor.distance_from(origin)) == cursor` for any two
    /// cursors of the same deque state.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance_from(self, origin: Cursor) -> isize {
        self.index() as isize - origin.index() as isize
    }

    fn span(&self) -> usize {
        self.len + 1
    }

    fn at_index(self, index: usize) -> Self {
        let offset = if self.capacity == 0 {
            0
        } else {
            (self.head + index) % self.capacity
        };
        Self { offset, ..self }
    }

    // Slots at or after the head come first; slots before it have wrapped.
    fn order_key(&self) -> (bool, usize) {
        (self.offset < self.head, self.offset)
    }
}

/// Signed number of positions from `first` to `last`.
#[must_use]
pub fn distance(first: Cursor, last: Cursor) -> isize {
    last.distance_from(first)
}

impl Add<usize> for Cursor {
    type Output = Self;

    fn add(self, shift: usize) -> Self {
        let span = self.span();
        self.at_index((self.index() + shift % span) % span)
    }
}

impl Sub<usize> for Cursor {
    type Output = Self;

    fn sub(self, shift: usize) -> Self {
        let span = self.span();
        self.at_index((self.index() + span - shift % span) % span)
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, shift: usize) {
        *self = *self + shift;
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, shift: usize) {
        *self = *self - shift;
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation && self.offset == other.offset
    }
}

impl Eq for Cursor {}

/// Logical order within one buffer generation. Cursors from different
/// generations are incomparable.
impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.generation != other.generation {
            return None;
        }
        if self.offset == other.offset {
            return Some(Ordering::Equal);
        }
        Some(self.order_key().cmp(&other.order_key()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ring of capacity 8 holding 5 elements starting at physical slot 6:
    // logical 0..5 live in slots 6, 7, 0, 1, 2 and one-past-end is slot 3.
    fn wrapped_begin() -> Cursor {
        Cursor::new(6, 6, 8, 5, 1)
    }

    #[test]
    fn test_index_across_wrap() {
        let begin = wrapped_begin();
        let indices: [usize; 6] = core::array::from_fn(|i| (begin + i).index());
        assert_eq!(indices, [0, 1, 2, 3, 4, 5]);

        let slots: [usize; 6] = core::array::from_fn(|i| (begin + i).slot());
        assert_eq!(slots, [6, 7, 0, 1, 2, 3]);
    }

    #[test]
    fn test_add_wraps_cyclically() {
        let begin = wrapped_begin();
        let end = begin + 5;
        assert_eq!(end.slot(), 3);
        assert_eq!(end + 1, begin);
        assert_eq!(begin + 6, begin);
        assert_eq!(begin + 13, begin + 1);
    }

    #[test]
    fn test_sub_wraps_cyclically() {
        let begin = wrapped_begin();
        let end = begin + 5;
        assert_eq!(end - 2, begin + 3);
        assert_eq!(begin - 1, end);
        assert_eq!(end - 6, end);
    }

    #[test]
    fn test_assign_operators() {
        let mut cursor = wrapped_begin();
        cursor += 3;
        assert_eq!(cursor.index(), 3);
        cursor -= 2;
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_ordering_follows_logical_order() {
        let begin = wrapped_begin();
        for i in 0..5 {
            for j in 0..=5 {
                let a = begin + i;
                let b = begin + j;
                assert_eq!(a.partial_cmp(&b), Some(i.cmp(&j)), "{i} vs {j}");
            }
        }
    }

    #[test]
    fn test_ordering_across_generations_is_undefined() {
        let a = Cursor::new(0, 0, 4, 2, 1);
        let b = Cursor::new(1, 0, 4, 2, 2);
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, Cursor::new(0, 0, 4, 2, 2));
    }

    #[test]
    fn test_distance_is_antisymmetric() {
        let begin = wrapped_begin();
        let a = begin + 1;
        let b = begin + 4;
        assert_eq!(distance(a, b), 3);
        assert_eq!(distance(b, a), -3);
        assert_eq!(a.offset(distance(a, b)), b);
        assert_eq!(b.offset(distance(b, a)), a);
    }

    #[test]
    fn test_null_ring_cursor_stays_put() {
        let cursor = Cursor::new(0, 0, 0, 0, 7);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor + 3, cursor);
        assert_eq!(cursor - 3, cursor);
    }
}

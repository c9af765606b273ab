use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};
use core::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::cursor::Cursor;
use crate::error::RingDequeError;
use crate::iter::{RingDequeIter, RingDequeIterMut, RingDequeRevIter};
use crate::slots::Slots;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// A double-ended queue stored in a single growable ring buffer
///
/// Elements occupy the physical slots from `head` up to (not including) `tail`,
/// wrapping modulo the capacity. The buffer is never allowed to become completely
/// full: capacity grows before any insertion that would fill the last free slot,
/// so `head == tail` always means empty.
pub struct RingDeque<T> {
    slots: Slots<T>,
    head: usize,
    tail: usize,
    generation: u64,
}

impl<T> RingDeque<T> {
    /// Creates an empty deque in the null state. Nothing is allocated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Slots::empty(),
            head: 0,
            tail: 0,
            generation: next_generation(),
        }
    }

    /// Creates an empty deque able to hold at least `capacity` elements
    /// without reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the required slot count overflows `usize` or the allocation fails.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut deque = Self::new();
        if capacity > 0 {
            deque.expand(capacity);
        }
        deque
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let capacity = self.capacity();
        if capacity == 0 {
            0
        } else {
            (self.tail + capacity - self.head) % capacity
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Total slot count of the backing block, including the slot that is
    /// always kept free.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every element and releases the backing block, returning to the
    /// null state. Outstanding cursors become stale.
    pub fn clear(&mut self) {
        trace!(
            len = self.len(),
            capacity = self.capacity(),
            "clearing ring deque"
        );
        self.slots = Slots::empty();
        self.head = 0;
        self.tail = 0;
        self.generation = next_generation();
    }

    fn inc(&self, pos: usize) -> usize {
        if pos + 1 == self.capacity() {
            0
        } else {
            pos + 1
        }
    }

    fn dec(&self, pos: usize) -> usize {
        if pos == 0 {
            self.capacity() - 1
        } else {
            pos - 1
        }
    }

    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    /// Slot count for a block that must hold `n` elements and still keep one
    /// slot free: `max(n, 1.5 * capacity) + 1`.
    fn grown_capacity(&self, n: usize) -> Result<usize, RingDequeError> {
        let capacity = self.capacity();
        let scaled = capacity.saturating_add(capacity / 2);
        n.max(scaled)
            .checked_add(1)
            .ok_or(RingDequeError::CapacityOverflow { requested: n })
    }

    /// Makes room for `n` elements. No-op while `n` is below the current capacity.
    ///
    /// The new block is fully allocated before anything moves, so a failed
    /// allocation leaves the deque untouched.
    fn try_expand(&mut self, n: usize) -> Result<(), RingDequeError> {
        if n < self.capacity() {
            return Ok(());
        }
        let new_capacity = self.grown_capacity(n)?;
        let fresh = Slots::try_with_capacity(new_capacity)?;
        self.relocate(fresh);
        Ok(())
    }

    fn expand(&mut self, n: usize) {
        if let Err(error) = self.try_expand(n) {
            panic!("{error}");
        }
    }

    /// Moves the live range into `fresh`, starting at physical slot 0.
    fn relocate(&mut self, mut fresh: Slots<T>) {
        let len = self.len();
        for index in 0..len {
            let from = self.physical(index);
            if let Some(value) = self.slots.destroy(from) {
                fresh.construct(index, value);
            }
        }
        trace!(
            old_capacity = self.capacity(),
            new_capacity = fresh.capacity(),
            len,
            "expanding ring deque"
        );
        self.slots = fresh;
        self.head = 0;
        self.tail = len;
        self.generation = next_generation();
    }

    /// Ensures room for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the required slot count overflows `usize` or the allocation fails.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(error) = self.try_reserve(additional) {
            panic!("{error}");
        }
    }

    /// Ensures room for at least `additional` more elements.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::CapacityOverflow` if the required slot count
    /// overflows `usize`, or `RingDequeError::AllocationFailed` if the allocator
    /// refuses the new block. The deque is unchanged on error.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), RingDequeError> {
        if additional == 0 {
            return Ok(());
        }
        let len = self.len();
        let required = len
            .checked_add(additional)
            .ok_or(RingDequeError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        self.try_expand(required)
    }

    /// Appends an element at the back.
    ///
    /// # Panics
    ///
    /// Panics if growing the buffer overflows `usize` or the allocation fails.
    pub fn push_back(&mut self, value: T) {
        self.expand(self.len() + 1);
        self.slots.construct(self.tail, value);
        self.tail = self.inc(self.tail);
    }

    /// Prepends an element at the front.
    ///
    /// # Panics
    ///
    /// Panics if growing the buffer overflows `usize` or the allocation fails.
    pub fn push_front(&mut self, value: T) {
        self.expand(self.len() + 1);
        let head = self.dec(self.head);
        self.slots.construct(head, value);
        self.head = head;
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[allow(clippy::expect_used)]
    pub fn pop_back(&mut self) -> T {
        assert!(!self.is_empty(), "Cannot pop from empty deque");
        self.tail = self.dec(self.tail);
        self.slots
            .destroy(self.tail)
            .expect("Slots in the live range are occupied")
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[allow(clippy::expect_used)]
    pub fn pop_front(&mut self) -> T {
        assert!(!self.is_empty(), "Cannot pop from empty deque");
        let head = self.head;
        self.head = self.inc(head);
        self.slots
            .destroy(head)
            .expect("Slots in the live range are occupied")
    }

    /// Tries to remove and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::EmptyDeque` if the deque is empty.
    pub fn try_pop_back(&mut self) -> Result<T, RingDequeError> {
        if self.is_empty() {
            return Err(RingDequeError::EmptyDeque);
        }
        Ok(self.pop_back())
    }

    /// Tries to remove and return the first element.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::EmptyDeque` if the deque is empty.
    pub fn try_pop_front(&mut self) -> Result<T, RingDequeError> {
        if self.is_empty() {
            return Err(RingDequeError::EmptyDeque);
        }
        Ok(self.pop_front())
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "Cannot access front of empty deque");
        &self[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "Cannot access front of empty deque");
        &mut self[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "Cannot access back of empty deque");
        &self[self.len() - 1]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "Cannot access back of empty deque");
        let last = self.len() - 1;
        &mut self[last]
    }

    /// Tries to return the first element.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::EmptyDeque` if the deque is empty.
    pub fn try_front(&self) -> Result<&T, RingDequeError> {
        self.get(0).ok_or(RingDequeError::EmptyDeque)
    }

    /// Tries to return the last element.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::EmptyDeque` if the deque is empty.
    pub fn try_back(&self) -> Result<&T, RingDequeError> {
        let last = self.len().checked_sub(1).ok_or(RingDequeError::EmptyDeque)?;
        self.try_get(last)
    }

    /// Gets the element at a logical index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.slots.get(self.physical(index))
    }

    /// Gets the element at a logical index mutably.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let at = self.physical(index);
        self.slots.get_mut(at)
    }

    /// Tries to get the element at a logical index.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, RingDequeError> {
        self.get(index).ok_or(RingDequeError::IndexOutOfBounds {
            index,
            length: self.len(),
        })
    }

    /// Cursor at the first element (equal to [`RingDeque::end`] when empty).
    #[must_use]
    pub fn begin(&self) -> Cursor {
        self.cursor_at_slot(self.head)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor {
        self.cursor_at_slot(self.tail)
    }

    /// Cursor at a logical index; `len()` gives the one-past-end cursor.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Cursor {
        let len = self.len();
        assert!(
            index <= len,
            "Cursor index {index} out of bounds for deque of length {len}"
        );
        if self.capacity() == 0 {
            return self.begin();
        }
        self.cursor_at_slot(self.physical(index))
    }

    fn cursor_at_slot(&self, slot: usize) -> Cursor {
        Cursor::new(
            slot,
            self.head,
            self.capacity(),
            self.len(),
            self.generation,
        )
    }

    fn check_cursor(&self, cursor: Cursor) -> Result<usize, RingDequeError> {
        if cursor.generation() != self.generation {
            return Err(RingDequeError::StaleCursor {
                cursor: cursor.generation(),
                current: self.generation,
            });
        }
        let index = self.cursor_at_slot(cursor.slot()).index();
        if index > self.len() {
            return Err(RingDequeError::VacantSlot { index });
        }
        Ok(index)
    }

    fn expect_cursor(&self, cursor: Cursor) -> usize {
        match self.check_cursor(cursor) {
            Ok(index) => index,
            Err(error) => panic!("{error}"),
        }
    }

    /// Tries to dereference a cursor.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::StaleCursor` if the cursor was taken before the
    /// last reallocation, clear or swap, and `RingDequeError::VacantSlot` if it
    /// names no live element (for example [`RingDeque::end`]).
    pub fn try_at(&self, cursor: Cursor) -> Result<&T, RingDequeError> {
        let index = self.check_cursor(cursor)?;
        self.get(index).ok_or(RingDequeError::VacantSlot { index })
    }

    /// Dereferences a cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or names no live element.
    #[must_use]
    pub fn at(&self, cursor: Cursor) -> &T {
        match self.try_at(cursor) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Dereferences a cursor mutably.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is stale or names no live element.
    pub fn at_mut(&mut self, cursor: Cursor) -> &mut T {
        let index = self.expect_cursor(cursor);
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", RingDequeError::VacantSlot { index }),
        }
    }

    /// Inserts `value` so that it lands at the logical position `pos` named at
    /// call time, and returns a cursor to it.
    ///
    /// The shorter side is shifted: at most `len / 2` elements move.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale, or if growing the buffer fails.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Cursor {
        let index = self.expect_cursor(pos);
        self.insert_at(index, value);
        self.cursor_at(index)
    }

    /// Removes the element at `pos` and returns a cursor to the position that
    /// now holds its successor (one-past-end if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale or names no live element.
    pub fn erase(&mut self, pos: Cursor) -> Cursor {
        let index = self.expect_cursor(pos);
        let len = self.len();
        assert!(
            index < len,
            "Cannot erase at position {index} of deque with length {len}"
        );
        drop(self.remove_at(index));
        self.cursor_at(index)
    }

    /// Inserts `value` at a logical index, shifting the shorter side.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`, or if growing the buffer fails.
    pub fn insert_at(&mut self, index: usize, value: T) {
        let len = self.len();
        assert!(
            index <= len,
            "Insert index {index} out of bounds for deque of length {len}"
        );
        if index <= len - index {
            self.push_front(value);
            for k in 0..index {
                let (a, b) = (self.physical(k), self.physical(k + 1));
                self.slots.exchange(a, b);
            }
        } else {
            self.push_back(value);
            for k in (index + 1..=len).rev() {
                let (a, b) = (self.physical(k), self.physical(k - 1));
                self.slots.exchange(a, b);
            }
        }
    }

    /// Removes and returns the element at a logical index, shifting the
    /// shorter side.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> T {
        let len = self.len();
        assert!(
            index < len,
            "Index {index} out of bounds for deque of length {len}"
        );
        if index <= len - index {
            for k in (1..=index).rev() {
                let (a, b) = (self.physical(k), self.physical(k - 1));
                self.slots.exchange(a, b);
            }
            self.pop_front()
        } else {
            for k in index..len - 1 {
                let (a, b) = (self.physical(k), self.physical(k + 1));
                self.slots.exchange(a, b);
            }
            self.pop_back()
        }
    }

    /// Exchanges the whole contents of two deques without touching any element.
    ///
    /// Buffer generations travel with the buffers, so a cursor taken before the
    /// swap is stale for the deque it came from.
    pub fn swap(&mut self, other: &mut Self) {
        trace!(
            len = self.len(),
            other_len = other.len(),
            "swapping ring deques"
        );
        mem::swap(self, other);
    }

    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> RingDequeIter<'_, T> {
        let (first, second) = self.slots.runs(self.head, self.tail);
        RingDequeIter::new(first, second)
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> RingDequeIterMut<'_, T> {
        let (first, second) = self.slots.runs_mut(self.head, self.tail);
        RingDequeIterMut::new(first, second)
    }

    /// Returns an iterator over the elements, back to front.
    #[must_use]
    pub fn iter_rev(&self) -> RingDequeRevIter<'_, T> {
        RingDequeRevIter::new(self.iter())
    }
}

/// Exchanges the contents of two deques.
pub fn swap<T>(a: &mut RingDeque<T>, b: &mut RingDeque<T>) {
    a.swap(b);
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    /// Reserves exactly the source length, then appends a clone of each element.
    /// If a clone panics, the partial copy is dropped and the source is untouched.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        if !self.is_empty() {
            copy.expand(self.len());
        }
        for value in self {
            copy.push_back(value.clone());
        }
        copy
    }

    /// Copy-and-swap: `self` changes only once the full copy exists.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[allow(clippy::expect_used)]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        assert!(
            index < len,
            "Index {index} out of bounds for deque of length {len}"
        );
        self.slots
            .get(self.physical(index))
            .expect("Slots in the live range are occupied")
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    #[allow(clippy::expect_used)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        assert!(
            index < len,
            "Index {index} out of bounds for deque of length {len}"
        );
        let at = self.physical(index);
        self.slots
            .get_mut(at)
            .expect("Slots in the live range are occupied")
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for value in iter {
            self.push_back(value);
        }
    }
}

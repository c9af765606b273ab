use thiserror::Error;

/// Error types for `RingDeque` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RingDequeError {
    /// Index is beyond the current deque length
    #[error("Index out of bounds: index {index} is beyond deque length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the deque
        length: usize,
    },
    /// Operation attempted on an empty deque
    #[error("Operation on empty deque")]
    EmptyDeque,
    /// Cursor was taken from a buffer that has since been reallocated, cleared or swapped away
    #[error("Stale cursor: cursor generation {cursor} does not match deque generation {current}")]
    StaleCursor {
        /// Generation stamped into the cursor
        cursor: u64,
        /// Generation of the deque the cursor was used with
        current: u64,
    },
    /// Cursor names a slot that holds no element, such as the one-past-end position
    #[error("Vacant slot: no element at logical position {index}")]
    VacantSlot {
        /// Logical position named by the cursor
        index: usize,
    },
    /// Requested capacity does not fit in `usize`
    #[error("Capacity overflow: cannot grow to hold {requested} elements")]
    CapacityOverflow {
        /// Number of elements the deque was asked to hold
        requested: usize,
    },
    /// The allocator refused the new block
    #[error("Allocation failed: could not allocate {capacity} slots")]
    AllocationFailed {
        /// Slot count of the block that could not be allocated
        capacity: usize,
    },
}

#![no_std]

//! `RingDeque`: a double-ended queue backed by a single growable ring buffer.
//!
//! `RingDeque` keeps its elements in one contiguous block of slots addressed with
//! wraparound arithmetic. Elements can be pushed and popped at both ends, indexed
//! in constant time, and inserted or erased in the middle by shifting whichever
//! side of the position is shorter.
//!
//! Positions are named by [`Cursor`] values: plain `Copy` snapshots of a slot plus
//! the ring state they were taken from. Cursors are dereferenced through the deque
//! and are checked against its buffer generation, so a cursor that outlived a
//! reallocation fails loudly instead of naming the wrong slot.
//!
//! This crate is `no_std` compatible; it needs `alloc` for the backing block.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`, `push_front()`: amortized O(1)
//! - `pop_back()`, `pop_front()`: O(1)
//! - `get()`, indexing, cursor dereference: O(1)
//! - `insert()`, `erase()`: O(min(index, len - index))
//! - `swap()`: O(1), no element is touched
//! - `clone()`: O(n)
//!
//! ## Growth Policy
//! - Capacity grows to `max(n, 1.5 * capacity) + 1` slots when `n` elements
//!   would no longer leave a free slot
//! - The buffer is never completely full, so `head == tail` always means empty
//! - Growth moves the live range to the start of the new block and renews the
//!   buffer generation
//!
//! # Deque Interface
//!
//! ```
//! # use ringdeque::RingDeque;
//! let mut deque = RingDeque::new();
//!
//! deque.push_back("frogurt");
//! deque.push_back("is");
//! deque.push_front("the");
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(*deque.front(), "the");
//! assert_eq!(*deque.back(), "is");
//! assert_eq!(deque[1], "frogurt");
//!
//! assert_eq!(deque.pop_front(), "the");
//! assert_eq!(deque.pop_back(), "is");
//!
//! // Safe variants for error handling
//! deque.pop_back();
//! assert!(deque.try_pop_back().is_err());
//! assert!(deque.try_front().is_err());
//! ```
//!
//! # Cursor Interface
//!
//! ```
//! # use ringdeque::RingDeque;
//! let mut deque: RingDeque<&str> = ["the", "frogurt", "is", "also", "cursed"]
//!     .into_iter()
//!     .collect();
//!
//! let pos = deque.insert(deque.begin() + 3, "hehmda");
//! assert_eq!(*deque.at(pos), "hehmda");
//!
//! let items: Vec<_> = deque.iter().copied().collect();
//! assert_eq!(items, ["the", "frogurt", "is", "hehmda", "also", "cursed"]);
//!
//! // Erasing returns a cursor to the successor
//! let next = deque.erase(deque.end() - 2);
//! assert_eq!(*deque.at(next), "cursed");
//! ```
//!
//! Cursor arithmetic wraps cyclically over the `len + 1` positions of the
//! snapshot: `begin + len` is `end`, and `end + 1` is `begin` again.
//!
//! ```
//! # use ringdeque::{distance, RingDeque};
//! let deque: RingDeque<u32> = (0..4).collect();
//!
//! assert_eq!(deque.begin() + 4, deque.end());
//! assert_eq!(deque.end() + 1, deque.begin());
//! assert_eq!(distance(deque.begin(), deque.end()), 4);
//! assert!(deque.begin() < deque.end() - 1);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use ringdeque::RingDeque;
//! let mut deque: RingDeque<u32> = (1..=3).collect();
//!
//! for value in &mut deque {
//!     *value *= 10;
//! }
//!
//! let forward: Vec<_> = deque.iter().copied().collect();
//! let backward: Vec<_> = deque.iter_rev().copied().collect();
//! assert_eq!(forward, [10, 20, 30]);
//! assert_eq!(backward, [30, 20, 10]);
//! ```

extern crate alloc;

mod cursor;
mod deque;
mod error;
mod iter;
mod slots;

// Re-export public types and functions
pub use cursor::{distance, Cursor};
pub use deque::{swap, RingDeque};
pub use error::RingDequeError;
pub use iter::{RingDequeIntoIter, RingDequeIter, RingDequeIterMut, RingDequeRevIter};

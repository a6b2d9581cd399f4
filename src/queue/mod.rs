//! String Queue Component
//!
//! A mutable, singly linked queue of owned strings with head and tail
//! insertion, head removal, in-place reversal and in-place stable sorting.
//!
//! # Overview
//!
//! - **Owned values**: every inserted string is copied; callers keep their buffers
//! - **O(1) ends**: the queue tracks both its head and its tail, plus a size counter
//! - **In-place relinking**: reverse and sort never allocate or release elements
//! - **Stable sort**: bottom-up merge sort, O(n log n) time and O(1) extra space
//! - **Fallible allocation**: out-of-memory during insert is reported, not aborted
//!
//! # Architecture
//!
//! ```text
//!  StringQueue { head, tail, size }
//!        │ head                              │ tail
//!        ▼                                   ▼
//!  ┌──────────┐ next ┌──────────┐ next ┌──────────┐ next
//!  │ slot 2   │─────▶│ slot 0   │─────▶│ slot 3   │─────▶ None
//!  │ "apple"  │      │ "banana" │      │ "cherry" │
//!  └──────────┘      └──────────┘      └──────────┘
//!
//!  Arena slots: [0: banana] [1: vacant → None] [2: apple] [3: cherry]
//!                               ▲ free list
//! ```
//!
//! Elements live in an index arena; links are slot indices and released
//! slots form an intrusive free list. The relinking algorithms in [`chain`]
//! only see the arena through the [`LinkStore`](traits::LinkStore) seam, so
//! they can be exercised on their own.
//!
//! # Example Usage
//!
//! ```rust
//! use strqueue::queue::StringQueue;
//!
//! # fn example() -> Result<(), strqueue::queue::QueueError> {
//! let mut queue = StringQueue::new();
//! queue.insert_tail("banana")?;
//! queue.insert_tail("apple")?;
//! queue.insert_tail("cherry")?;
//!
//! queue.sort();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["apple", "banana", "cherry"]);
//!
//! let mut buf = [0u8; 4];
//! queue.remove_head(Some(&mut buf))?;
//! assert_eq!(&buf, b"app\0");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod api;
mod arena;
pub mod buffer;
pub mod chain;
mod element;
mod error;
pub mod handle;
mod string_queue;
pub mod traits;

pub use element::{Link, NodeId};
pub use error::{QueueError, QueueResult};
pub use string_queue::{Iter, StringQueue};

#[cfg(test)]
mod tests;

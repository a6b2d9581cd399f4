//! Public API for the string queue
//!
//! External modules should import from here rather than directly from internal modules.

// Queue handle and its iterator
pub use crate::queue::string_queue::{Iter, StringQueue};

// Slot links
pub use crate::queue::element::{Link, NodeId};

// Link-rewrite algorithms and their storage seams
pub use crate::queue::chain::Chain;
pub use crate::queue::traits::{LinkStore, OrderedLinkStore};

// Bounded copy helpers
pub use crate::queue::buffer::{copy_truncated, terminated_bytes};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

//! Handle-level operation surface
//!
//! Mirrors the queue operations for callers that may not hold a queue at
//! all. An absent handle (`None`) is never an error that escapes: each
//! operation reports it through its own result (`false`, `0`, or nothing).

use crate::queue::error::{QueueError, QueueResult};
use crate::queue::string_queue::StringQueue;

/// Create a new empty queue
pub fn create() -> QueueResult<StringQueue> {
    StringQueue::try_with_capacity(0)
}

/// Release every element and then the queue itself
pub fn destroy(queue: Option<StringQueue>) {
    if let Some(mut queue) = queue {
        queue.clear();
    }
}

/// Insert a copy of `value` at the head; `false` if absent or out of memory
pub fn insert_head(queue: Option<&mut StringQueue>, value: &str) -> bool {
    report(present(queue).and_then(|q| q.insert_head(value)), "insert_head")
}

/// Insert a copy of `value` at the tail; `false` if absent or out of memory
pub fn insert_tail(queue: Option<&mut StringQueue>, value: &str) -> bool {
    report(present(queue).and_then(|q| q.insert_tail(value)), "insert_tail")
}

/// Remove the head, copying its value into `out` when given; `false` if absent or empty
pub fn remove_head(queue: Option<&mut StringQueue>, out: Option<&mut [u8]>) -> bool {
    report(present(queue).and_then(|q| q.remove_head(out)), "remove_head")
}

/// Element count; zero for an absent queue
pub fn size(queue: Option<&StringQueue>) -> usize {
    queue.map_or(0, StringQueue::size)
}

pub fn reverse(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn sort(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

fn present(queue: Option<&mut StringQueue>) -> QueueResult<&mut StringQueue> {
    queue.ok_or(QueueError::AbsentQueue)
}

fn report(result: QueueResult<()>, operation: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::debug!("{} failed: {}", operation, e);
            false
        }
    }
}

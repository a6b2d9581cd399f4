//! StringQueue: a singly linked queue of owned strings
//!
//! The queue tracks its first element, its last element and an element
//! count. Values are copied on insertion, so the queue never holds on to a
//! caller's buffer. Reverse and sort relink existing elements in place; only
//! insertion allocates and only removal releases.

use std::fmt;

use crate::queue::arena::Arena;
use crate::queue::buffer::copy_truncated;
use crate::queue::chain::{self, Chain};
use crate::queue::element::{Element, Link};
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::traits::LinkStore;

#[derive(Default)]
pub struct StringQueue {
    arena: Arena,
    head: Link,
    tail: Link,
    size: usize,
}

impl StringQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` elements before the arena grows
    pub fn try_with_capacity(capacity: usize) -> QueueResult<Self> {
        Ok(Self {
            arena: Arena::try_with_capacity(capacity)?,
            ..Self::default()
        })
    }

    /// Copy `value` into a new element linked before the current head
    pub fn insert_head(&mut self, value: &str) -> QueueResult<()> {
        let value = copy_value(value, "insert_head")?;
        let id = self
            .arena
            .store(Element::new(value, self.head), "insert_head")?;

        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.size += 1;

        log::trace!("insert_head: slot {} size {}", id, self.size);
        Ok(())
    }

    /// Copy `value` into a new element linked after the current tail
    pub fn insert_tail(&mut self, value: &str) -> QueueResult<()> {
        let value = copy_value(value, "insert_tail")?;
        let id = self.arena.store(Element::new(value, None), "insert_tail")?;

        match self.tail {
            Some(tail) => self.arena.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;

        log::trace!("insert_tail: slot {} size {}", id, self.size);
        Ok(())
    }

    /// Remove the head element
    ///
    /// When `out` is given, the removed value is copied into it as a
    /// NUL-terminated byte string of at most `out.len() - 1` bytes.
    /// Fails with [`QueueError::Empty`] without touching `out` when the queue
    /// has no elements.
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> QueueResult<()> {
        let element = self.detach_head().ok_or(QueueError::Empty)?;
        if let Some(buf) = out {
            let copied = copy_truncated(element.value().as_bytes(), buf);
            if copied < element.value().len() {
                log::trace!(
                    "remove_head: truncated {} bytes to {}",
                    element.value().len(),
                    copied
                );
            }
        }
        log::trace!("remove_head: size {}", self.size);
        Ok(())
    }

    /// Remove the head element and hand its value back
    pub fn pop_head(&mut self) -> Option<String> {
        self.detach_head().map(Element::into_value)
    }

    fn detach_head(&mut self) -> Option<Element> {
        let id = self.head?;
        let element = self.arena.release(id);

        self.head = element.next();
        self.size -= 1;
        if self.head.is_none() {
            self.tail = None;
            self.arena.reset();
        }
        Some(element)
    }

    /// Number of elements currently linked
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Value of the first element
    pub fn head(&self) -> Option<&str> {
        self.head.map(|id| self.arena.element(id).value())
    }

    /// Value of the last element
    pub fn tail(&self) -> Option<&str> {
        self.tail.map(|id| self.arena.element(id).value())
    }

    /// Values in traversal order, head first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            cursor: self.head,
            remaining: self.size,
        }
    }

    /// Reverse traversal order by relinking every element in place
    pub fn reverse(&mut self) {
        if self.size < 2 {
            return;
        }
        let current = self.chain();
        let reversed = chain::reverse(&mut self.arena, current);
        self.set_chain(reversed);
        log::trace!("reverse: size {}", self.size);
    }

    /// Sort into ascending byte-wise order, keeping equal values in insertion order
    pub fn sort(&mut self) {
        if self.size < 2 {
            return;
        }
        let current = self.chain();
        let sorted = chain::sort(&mut self.arena, current, self.size);
        self.set_chain(sorted);
        log::debug!("sort: ordered {} elements", self.size);
    }

    /// Release every element, walking from the head to the end
    pub fn clear(&mut self) {
        let mut released = 0usize;
        while self.detach_head().is_some() {
            released += 1;
        }
        if released > 0 {
            log::trace!("clear: released {} elements", released);
        }
    }

    /// Check the structural invariants of the queue
    ///
    /// Verifies that head, tail and size agree on emptiness, that walking
    /// from the head reaches the tail after exactly `size` elements without
    /// revisiting one, that the tail has no successor and that no element is
    /// stranded outside the chain.
    pub fn validate(&self) -> QueueResult<()> {
        if (self.size == 0) != self.head.is_none() || self.head.is_none() != self.tail.is_none() {
            return Err(QueueError::invariant(format!(
                "head {:?}, tail {:?} and size {} disagree on emptiness",
                self.head, self.tail, self.size
            )));
        }

        let mut count = 0usize;
        let mut last: Link = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let element = self.arena.get(id).ok_or_else(|| {
                QueueError::invariant(format!("link to missing or vacant slot {}", id))
            })?;
            count += 1;
            if count > self.size {
                return Err(QueueError::invariant(format!(
                    "more than {} elements reachable from head",
                    self.size
                )));
            }
            last = Some(id);
            cursor = element.next();
        }

        if count != self.size {
            return Err(QueueError::invariant(format!(
                "size is {} but {} elements are reachable",
                self.size, count
            )));
        }
        if last != self.tail {
            return Err(QueueError::invariant(format!(
                "traversal ends at {:?} but tail is {:?}",
                last, self.tail
            )));
        }
        if let Some(tail) = self.tail {
            if self.arena.next(tail).is_some() {
                return Err(QueueError::invariant("tail has a successor"));
            }
        }
        let occupied = self.arena.occupied();
        if occupied != self.size {
            return Err(QueueError::invariant(format!(
                "{} slots occupied for {} linked elements",
                occupied, self.size
            )));
        }
        Ok(())
    }

    fn chain(&self) -> Chain {
        Chain {
            head: self.head,
            tail: self.tail,
        }
    }

    fn set_chain(&mut self, chain: Chain) {
        self.head = chain.head;
        self.tail = chain.tail;
    }
}

/// Copy `value` into freshly owned storage, reporting allocation failure
fn copy_value(value: &str, operation: &'static str) -> QueueResult<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(value.len())
        .map_err(QueueError::allocation(operation))?;
    owned.push_str(value);
    Ok(owned)
}

impl fmt::Debug for StringQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a StringQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over queue values, head first
pub struct Iter<'a> {
    arena: &'a Arena,
    cursor: Link,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let element = self.arena.element(id);
        self.cursor = element.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(element.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

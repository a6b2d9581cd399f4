//! Slot arena that owns every element of a queue
//!
//! Elements live in a growable slot vector and are linked by index. A vacant
//! slot stores the index of the next vacant slot, forming an intrusive free
//! list, so releasing an element never allocates.

use crate::queue::element::{Element, Link, NodeId};
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::traits::{LinkStore, OrderedLinkStore};

#[derive(Debug)]
enum Slot {
    Occupied(Element),
    Vacant { next_free: Link },
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Link,
}

impl Arena {
    pub(crate) fn try_with_capacity(capacity: usize) -> QueueResult<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(QueueError::allocation("create"))?;
        Ok(Self { slots, free: None })
    }

    /// Place `element` into a slot, reusing a vacant one when possible
    ///
    /// On failure `element` is dropped and the arena is unchanged.
    pub(crate) fn store(
        &mut self,
        element: Element,
        operation: &'static str,
    ) -> QueueResult<NodeId> {
        if let Some(id) = self.free {
            let Slot::Vacant { next_free } = self.slots[id] else {
                unreachable!("free list points at occupied slot {}", id);
            };
            self.free = next_free;
            self.slots[id] = Slot::Occupied(element);
            return Ok(id);
        }

        self.slots
            .try_reserve(1)
            .map_err(QueueError::allocation(operation))?;
        self.slots.push(Slot::Occupied(element));
        Ok(self.slots.len() - 1)
    }

    /// Take the element out of `id` and put the slot on the free list
    pub(crate) fn release(&mut self, id: NodeId) -> Element {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id], vacant) {
            Slot::Occupied(element) => {
                self.free = Some(id);
                element
            }
            Slot::Vacant { .. } => unreachable!("released vacant slot {}", id),
        }
    }

    /// Drop all slots, keeping the allocation for reuse
    pub(crate) fn reset(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    pub(crate) fn element(&self, id: NodeId) -> &Element {
        match &self.slots[id] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => unreachable!("live link to vacant slot {}", id),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> &mut Element {
        match &mut self.slots[id] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => unreachable!("live link to vacant slot {}", id),
        }
    }

    /// Element at `id` if the slot exists and is occupied
    pub(crate) fn get(&self, id: NodeId) -> Option<&Element> {
        match self.slots.get(id)? {
            Slot::Occupied(element) => Some(element),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn occupied(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count()
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl LinkStore for Arena {
    fn next(&self, id: NodeId) -> Link {
        self.element(id).next
    }

    fn set_next(&mut self, id: NodeId, next: Link) {
        self.element_mut(id).next = next;
    }
}

impl OrderedLinkStore for Arena {
    fn key(&self, id: NodeId) -> &[u8] {
        self.element(id).value().as_bytes()
    }
}

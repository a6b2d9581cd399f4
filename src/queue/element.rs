//! Queue elements

/// Index of an element slot inside a queue arena
pub type NodeId = usize;

/// Forward link: the slot of the following element, or `None` at the end
pub type Link = Option<NodeId>;

/// A single queue element: an owned copy of the inserted value plus its forward link
#[derive(Debug)]
pub(crate) struct Element {
    value: String,
    pub(crate) next: Link,
}

impl Element {
    pub(crate) fn new(value: String, next: Link) -> Self {
        Self { value, next }
    }

    /// The stored value
    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    /// The element that follows this one, if any
    pub(crate) fn next(&self) -> Link {
        self.next
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}

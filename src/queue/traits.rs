//! Storage seams used by the link-rewrite algorithms

use crate::queue::element::{Link, NodeId};

/// Anything that stores singly linked nodes addressable by [`NodeId`]
pub trait LinkStore {
    /// Forward link of `id`
    fn next(&self, id: NodeId) -> Link;

    /// Rewrite the forward link of `id`
    fn set_next(&mut self, id: NodeId, next: Link);
}

/// A link store whose nodes carry a byte-wise comparable key
pub trait OrderedLinkStore: LinkStore {
    /// Bytes that order `id` relative to other nodes
    fn key(&self, id: NodeId) -> &[u8];
}

//! Link-rewrite algorithms over singly linked chains
//!
//! Every function here works on a [`Chain`] (a head/tail pair) inside some
//! [`LinkStore`] and only rewrites forward links: no node is created or
//! released. Each function expects the chain's tail to have no successor and
//! leaves every chain it returns in the same state.

use crate::queue::element::{Link, NodeId};
use crate::queue::traits::{LinkStore, OrderedLinkStore};

/// A run of linked nodes described by its first and last node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chain {
    pub head: Link,
    pub tail: Link,
}

impl Chain {
    /// The chain with no nodes
    pub const EMPTY: Chain = Chain {
        head: None,
        tail: None,
    };

    /// A chain consisting of exactly `id`
    pub fn single(id: NodeId) -> Self {
        Self {
            head: Some(id),
            tail: Some(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

/// True when head and tail agree on emptiness and the tail has no successor
pub fn is_terminated<S: LinkStore + ?Sized>(store: &S, chain: Chain) -> bool {
    match (chain.head, chain.tail) {
        (None, None) => true,
        (Some(_), Some(tail)) => store.next(tail).is_none(),
        _ => false,
    }
}

/// Reverse the direction of every link in `chain`
///
/// The previous tail becomes the head and vice versa.
pub fn reverse<S: LinkStore + ?Sized>(store: &mut S, chain: Chain) -> Chain {
    debug_assert!(is_terminated(store, chain));

    let mut previous: Link = None;
    let mut cursor = chain.head;
    while let Some(id) = cursor {
        cursor = store.next(id);
        store.set_next(id, previous);
        previous = Some(id);
    }

    let reversed = Chain {
        head: chain.tail,
        tail: chain.head,
    };
    debug_assert!(is_terminated(store, reversed));
    reversed
}

/// Detach a block of at most `width` nodes starting at `start`
///
/// Returns the detached block and the first node after it, if any.
pub fn split<S: LinkStore + ?Sized>(store: &mut S, start: NodeId, width: usize) -> (Chain, Link) {
    let mut last = start;
    for _ in 1..width {
        match store.next(last) {
            Some(next) => last = next,
            None => break,
        }
    }

    let rest = store.next(last);
    store.set_next(last, None);
    (
        Chain {
            head: Some(start),
            tail: Some(last),
        },
        rest,
    )
}

/// Link `back` after `front`
pub fn append<S: LinkStore + ?Sized>(store: &mut S, front: Chain, back: Chain) -> Chain {
    match (front.tail, back.head) {
        (None, _) => back,
        (_, None) => front,
        (Some(front_tail), Some(back_head)) => {
            store.set_next(front_tail, Some(back_head));
            Chain {
                head: front.head,
                tail: back.tail,
            }
        }
    }
}

/// Merge two ordered chains into one ordered chain
///
/// Keys are compared byte-wise. When keys are equal the node from `left`
/// goes first, so merging adjacent blocks is stable.
pub fn merge<S: OrderedLinkStore + ?Sized>(store: &mut S, left: Chain, right: Chain) -> Chain {
    debug_assert!(is_terminated(store, left));
    debug_assert!(is_terminated(store, right));

    let mut from_left = left.head;
    let mut from_right = right.head;
    let mut merged = Chain::EMPTY;

    loop {
        let taken = match (from_left, from_right) {
            (Some(l), Some(r)) => {
                if store.key(l) <= store.key(r) {
                    from_left = store.next(l);
                    l
                } else {
                    from_right = store.next(r);
                    r
                }
            }
            (Some(_), None) => {
                let rest = Chain {
                    head: from_left,
                    tail: left.tail,
                };
                return append(store, merged, rest);
            }
            (None, Some(_)) => {
                let rest = Chain {
                    head: from_right,
                    tail: right.tail,
                };
                return append(store, merged, rest);
            }
            (None, None) => return merged,
        };
        merged = append(store, merged, Chain::single(taken));
    }
}

/// Sort `chain` of `len` nodes into ascending key order
///
/// Bottom-up: each pass cuts the chain into blocks of `width` nodes and
/// merges neighbouring pairs, doubling `width` until it covers `len`.
/// A block without a partner at the end of a pass is carried over
/// unchanged and absorbed by a later pass.
pub fn sort<S: OrderedLinkStore + ?Sized>(store: &mut S, chain: Chain, len: usize) -> Chain {
    debug_assert!(is_terminated(store, chain));
    if len < 2 {
        return chain;
    }

    let mut sorted = chain;
    let mut width = 1usize;
    while width < len {
        let mut pass = Chain::EMPTY;
        let mut rest = sorted.head;
        let mut merges = 0usize;

        while let Some(left_start) = rest {
            let (left, after_left) = split(store, left_start, width);
            let Some(right_start) = after_left else {
                pass = append(store, pass, left);
                break;
            };
            let (right, after_right) = split(store, right_start, width);
            let block = merge(store, left, right);
            pass = append(store, pass, block);
            merges += 1;
            rest = after_right;
        }

        log::trace!("Sort pass width {} merged {} block pairs", width, merges);
        sorted = pass;
        width = width.saturating_mul(2);
    }

    debug_assert!(is_terminated(store, sorted));
    sorted
}

//! Order node stored in a level's slab.
//!
//! ## Design
//!
//! `OrderNode` wraps an `Order` with doubly-linked list pointers. Each
//! [`Level`](crate::Level) owns a slab of nodes, and the pointers thread
//! them in arrival order. Given a slab key, an order can be unlinked in O(1)
//! without shifting its neighbours.
//!
//! ## Linked List
//!
//! - `next`: the order that arrived after this one at the same price
//! - `prev`: the order that arrived before this one at the same price
//!
//! Slab keys are reused after removal, so a key says nothing about arrival
//! order. Only the pointers do.

use crate::types::Order;

/// Order plus its neighbours in the level queue.
///
/// The pointers are slab keys (`usize`) into the owning level's slab.
#[derive(Debug, Clone)]
pub(crate) struct OrderNode {
    /// The resting order
    pub order: Order,

    /// Next (newer) order in the queue, None at the tail
    pub next: Option<usize>,

    /// Previous (older) order in the queue, None at the head
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Node to be appended after `tail`
    #[inline]
    pub fn after(order: Order, tail: Option<usize>) -> Self {
        Self {
            order,
            next: None,
            prev: tail,
        }
    }

    #[inline]
    pub fn order_id(&self) -> &str {
        &self.order.id
    }

    #[inline]
    pub fn quantity(&self) -> u64 {
        self.order.quantity
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

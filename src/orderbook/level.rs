//! Price level: every order resting at one price.
//!
//! ## Design
//!
//! A `Level` keeps its orders in a private slab threaded as a doubly-linked
//! list, oldest first:
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Any order can be unlinked in O(1) by slab key
//! - An in-place replace keeps the order's queue position
//!
//! The level also tracks its total resting quantity so `total()` is O(1).
//! The total is a `u128`: no number of `u64` quantities can overflow it, so
//! the running value never drifts from the true sum.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use slab::Slab;

use crate::orderbook::node::OrderNode;
use crate::types::Order;

/// All orders resting at a single price.
///
/// Levels are created and dropped by their [`BookSide`](crate::BookSide);
/// callers only ever see levels holding at least one order.
#[derive(Clone)]
pub struct Level {
    price: u64,

    /// Order storage, keyed by slab slot
    orders: Slab<OrderNode>,

    /// Oldest order (slab key)
    head: Option<usize>,

    /// Newest order (slab key)
    tail: Option<usize>,

    /// Sum of resting quantities
    total_quantity: u128,
}

impl Level {
    /// Create an empty level at `price`
    pub(crate) fn new(price: u64) -> Self {
        Self {
            price,
            orders: Slab::new(),
            head: None,
            tail: None,
            total_quantity: 0,
        }
    }

    /// Price of this level
    #[inline]
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Number of resting orders
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Total resting quantity at this level
    ///
    /// ```
    /// use levelbook::{BookSide, LevelTree, Order};
    ///
    /// let mut side = LevelTree::new();
    /// side.put(Order::new("A", 100, 0), 1);
    /// side.put(Order::new("B", 100, 1), 1);
    ///
    /// assert_eq!(side.get(1).map(|level| level.total()), Some(200));
    /// ```
    #[inline]
    pub fn total(&self) -> u128 {
        self.total_quantity
    }

    /// Price-ascending ordering between two levels.
    ///
    /// An ordering key only: two levels at the same price compare `Equal`
    /// whatever orders they hold. Compare contents through `orders()`.
    pub fn compare(&self, other: &Level) -> Ordering {
        self.price.cmp(&other.price)
    }

    /// Orders in arrival order, oldest first
    pub fn orders(&self) -> Orders<'_> {
        Orders {
            slab: &self.orders,
            cursor: self.head,
            remaining: self.orders.len(),
        }
    }

    /// Oldest order at this level
    pub fn front(&self) -> Option<&Order> {
        self.head
            .and_then(|key| self.orders.get(key))
            .map(|node| &node.order)
    }

    /// Whether an order with `order_id` rests here. O(n) in the level size.
    pub fn contains(&self, order_id: &str) -> bool {
        self.orders().any(|order| order.id == order_id)
    }

    /// Order stored under `key`
    pub(crate) fn get(&self, key: usize) -> Option<&Order> {
        self.orders.get(key).map(|node| &node.order)
    }

    /// Append an order at the tail and return its slab key
    pub(crate) fn push_back(&mut self, order: Order) -> usize {
        let quantity = order.quantity;
        let key = self.orders.insert(OrderNode::after(order, self.tail));

        match self.tail.and_then(|tail| self.orders.get_mut(tail)) {
            Some(tail_node) => tail_node.next = Some(key),
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.total_quantity += u128::from(quantity);

        key
    }

    /// Unlink the order under `key`, keeping the others in arrival order
    pub(crate) fn remove(&mut self, key: usize) -> Option<Order> {
        let node = self.orders.try_remove(key)?;

        match node.prev.and_then(|prev| self.orders.get_mut(prev)) {
            Some(prev_node) => prev_node.next = node.next,
            None => self.head = node.next,
        }

        match node.next.and_then(|next| self.orders.get_mut(next)) {
            Some(next_node) => next_node.prev = node.prev,
            None => self.tail = node.prev,
        }

        self.total_quantity -= u128::from(node.quantity());

        Some(node.order)
    }

    /// Swap the order under `key` for `order` without moving it in the queue.
    ///
    /// Returns the previous order, or `None` when the slot is vacant or holds
    /// a different id.
    pub(crate) fn replace(&mut self, key: usize, order: Order) -> Option<Order> {
        let node = self.orders.get_mut(key)?;
        if node.order_id() != order.id {
            return None;
        }

        self.total_quantity =
            self.total_quantity - u128::from(node.quantity()) + u128::from(order.quantity);

        Some(std::mem::replace(&mut node.order, order))
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("price", &self.price)
            .field("total", &self.total_quantity)
            .field("orders", &self.orders().collect::<Vec<_>>())
            .finish()
    }
}

/// Iterator over a level's orders, oldest first.
///
/// Created by [`Level::orders`].
#[derive(Debug, Clone)]
pub struct Orders<'a> {
    slab: &'a Slab<OrderNode>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Orders<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slab.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.order)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Orders<'_> {}

impl FusedIterator for Orders<'_> {}

// ============================================================================
// Unit Tests
// ============================================================================

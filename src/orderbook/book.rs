//! Two-sided book: a bid side, an ask side and the last applied sequence.
//!
//! ## Price Ordering
//!
//! - **Bids**: best level is the highest price, `top_bid` = bid `max()`
//! - **Asks**: best level is the lowest price, `top_ask` = ask `min()`
//!
//! Every other operation forwards 1:1 to the matching side. Errors pass
//! through unchanged.
//!
//! ## Example
//!
//! ```
//! use levelbook::{Book, Order};
//!
//! let mut book = Book::new();
//!
//! book.put_bid(Order::new("b1", 100, 0), 99);
//! book.put_bid(Order::new("b2", 100, 0), 98);
//! book.put_ask(Order::new("a1", 100, 0), 101);
//! book.put_ask(Order::new("a2", 100, 0), 102);
//! book.set_sequence(7);
//!
//! assert_eq!(book.top_bid().map(|level| level.price()), Some(99));
//! assert_eq!(book.top_ask().map(|level| level.price()), Some(101));
//! assert_eq!(book.spread(), Some(2));
//! assert_eq!(book.sequence(), 7);
//! ```

use sha2::{Digest, Sha256};
use tracing::trace;

use crate::config::BookConfig;
use crate::error::Result;
use crate::orderbook::{BookSide, Level, LevelTree};
use crate::types::Order;

/// Bid and ask sides plus a caller-maintained sequence number.
///
/// The book does not interpret `sequence`. Callers that need monotonic
/// sequence numbers must enforce that themselves.
#[derive(Debug, Clone, Default)]
pub struct Book<S = LevelTree> {
    bid: S,
    ask: S,

    /// Sequence number of the last update applied by the caller
    sequence: u64,
}

impl Book<LevelTree> {
    /// Create an empty book
    pub fn new() -> Self {
        Self::from_sides(LevelTree::new(), LevelTree::new())
    }

    /// Create an empty book with pre-sized order indices
    pub fn with_config(config: BookConfig) -> Self {
        Self::from_sides(
            LevelTree::with_capacity(config.bid_capacity),
            LevelTree::with_capacity(config.ask_capacity),
        )
    }

    /// SHA-256 digest over the sequence number, then bids, then asks
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.sequence.to_le_bytes());
        self.bid.hash_into(&mut hasher);
        self.ask.hash_into(&mut hasher);

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        root
    }
}

impl<S: BookSide> Book<S> {
    /// Build a book from two independently owned sides
    pub fn from_sides(bid: S, ask: S) -> Self {
        Self {
            bid,
            ask,
            sequence: 0,
        }
    }

    // ========================================================================
    // Bid side
    // ========================================================================

    pub fn put_bid(&mut self, order: Order, price: u64) {
        self.bid.put(order, price)
    }

    pub fn get_bid(&self, price: u64) -> Option<&Level> {
        self.bid.get(price)
    }

    pub fn remove_bid(&mut self, order_id: &str) -> Result<Order> {
        self.bid.remove(order_id)
    }

    pub fn modify_bid(&mut self, order: Order, price: u64) -> Result<Order> {
        self.bid.modify(order, price)
    }

    /// Highest bid level
    pub fn top_bid(&self) -> Option<&Level> {
        self.bid.max()
    }

    // ========================================================================
    // Ask side
    // ========================================================================

    pub fn put_ask(&mut self, order: Order, price: u64) {
        self.ask.put(order, price)
    }

    pub fn get_ask(&self, price: u64) -> Option<&Level> {
        self.ask.get(price)
    }

    pub fn remove_ask(&mut self, order_id: &str) -> Result<Order> {
        self.ask.remove(order_id)
    }

    pub fn modify_ask(&mut self, order: Order, price: u64) -> Result<Order> {
        self.ask.modify(order, price)
    }

    /// Lowest ask level
    pub fn top_ask(&self) -> Option<&Level> {
        self.ask.min()
    }

    // ========================================================================
    // Sequence
    // ========================================================================

    /// Sequence number of the last applied update
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Record the sequence number of the update just applied. No validation.
    #[inline]
    pub fn set_sequence(&mut self, sequence: u64) {
        trace!(sequence, "set sequence");
        self.sequence = sequence;
    }

    // ========================================================================
    // Whole-book helpers
    // ========================================================================

    /// Bid side
    #[inline]
    pub fn bids(&self) -> &S {
        &self.bid
    }

    /// Ask side
    #[inline]
    pub fn asks(&self) -> &S {
        &self.ask
    }

    /// Best ask minus best bid, None if a side is empty or the book is
    /// crossed
    pub fn spread(&self) -> Option<u64> {
        let bid = self.top_bid()?.price();
        let ask = self.top_ask()?.price();
        ask.checked_sub(bid)
    }

    /// Drop every order on both sides. The sequence number is kept.
    pub fn clear(&mut self) {
        self.bid.clear();
        self.ask.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

//! Sizing hints for a book.

/// Default number of order slots reserved per side
pub const DEFAULT_ORDER_CAPACITY: usize = 1_024;

/// Capacity hints used when constructing a [`Book`](crate::Book).
///
/// The hints only pre-size the order index; a side grows past them freely.
///
/// ```
/// use levelbook::{Book, BookConfig, BookSide};
///
/// let book = Book::with_config(BookConfig::default().with_order_capacity(10_000));
/// assert!(book.bids().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookConfig {
    /// Expected number of simultaneously resting bids
    pub bid_capacity: usize,

    /// Expected number of simultaneously resting asks
    pub ask_capacity: usize,
}

impl BookConfig {
    /// Use the same order capacity for both sides
    pub fn with_order_capacity(mut self, capacity: usize) -> Self {
        self.bid_capacity = capacity;
        self.ask_capacity = capacity;
        self
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            bid_capacity: DEFAULT_ORDER_CAPACITY,
            ask_capacity: DEFAULT_ORDER_CAPACITY,
        }
    }
}

//! Error types shared by every book side.

use thiserror::Error;

/// Errors returned by [`BookSide`](crate::BookSide) mutations.
///
/// Both kinds are caller-correctable. A `NotFound` usually means the feed
/// already removed the order and the call can be treated as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// The order id has no resting level on this side
    #[error("order {0} is not resting on this side")]
    NotFound(String),

    /// `modify` named a price other than the one the order rests at
    #[error("order {id} rests at price {resting}, modify requested price {requested}")]
    PriceMismatch {
        /// Order id
        id: String,
        /// Price recorded in the order index
        resting: u64,
        /// Price supplied by the caller
        requested: u64,
    },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, BookError>;

/// A broken cross-index invariant, as reported by
/// [`LevelTree::check_consistency`](crate::LevelTree::check_consistency).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("level keyed {key} reports price {reported}")]
    LevelPrice { key: u64, reported: u64 },

    #[error("empty level retained at price {0}")]
    EmptyLevel(u64),

    #[error("order {id} rests at {price} but is indexed at {indexed}")]
    Misindexed { id: String, price: u64, indexed: u64 },

    #[error("order {id} at {price} is not indexed")]
    Unindexed { id: String, price: u64 },

    #[error("level {price} total {total} differs from order sum {sum}")]
    Total { price: u64, total: u128, sum: u128 },

    #[error("index entry {id} -> {price} points at no such order")]
    Dangling { id: String, price: u64 },

    #[error("{resting} orders rest in levels but {indexed} are indexed")]
    Count { resting: usize, indexed: usize },
}

//! # levelbook
//!
//! In-memory price-level order book index.
//!
//! ## Architecture
//!
//! - **Types**: the [`Order`] value handed in by a feed
//! - **OrderBook**: [`Level`], the [`BookSide`] trait with its B-tree backed
//!   [`LevelTree`], and the two-sided [`Book`]
//! - **Shared**: [`SharedBook`], a single-lock wrapper for threaded callers
//!
//! ## Design Principles
//!
//! 1. **Two indices, one owner**: the price → level tree and the id → price
//!    map only change together, inside one side
//! 2. **No sentinels**: absent levels are `None`, so price 0 is an ordinary
//!    price
//! 3. **Time priority by arrival**: orders queue in put order, timestamps are
//!    metadata
//! 4. **Synchronous**: no locks, no async; wrap in [`SharedBook`] when needed
//!
//! ## Scope
//!
//! This is an index, not a matching engine. It never crosses orders or
//! generates trades.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order
pub mod types;

/// Order book: levels, sides and the two-sided book
pub mod orderbook;

/// Error types returned by side mutations and consistency checks
pub mod error;

/// Capacity hints
pub mod config;

/// Lock-wrapped book for concurrent callers
pub mod shared;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::BookConfig;
pub use error::{BookError, ConsistencyError, Result};
pub use orderbook::{Book, BookSide, Level, LevelTree, Orders};
pub use shared::{SharedBook, TopOfBook};
pub use types::Order;

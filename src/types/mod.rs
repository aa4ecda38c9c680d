//! Core data types for levelbook
//!
//! ## Types
//!
//! - [`Order`]: An order resting at some price level
//!
//! Prices are plain `u64` ticks owned by the caller. The book never scales
//! or interprets them beyond ordering.

mod order;

pub use order::Order;

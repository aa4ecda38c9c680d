//! Price-level order book index.
//!
//! ## Architecture
//!
//! - **Level**: FIFO queue of orders at one price, slab-backed
//! - **Side**: BTreeMap of levels plus a HashMap order index
//! - **Book**: a bid side and an ask side
//!
//! ## Components
//!
//! - [`Level`]: orders at a single price, with an O(1) total
//! - [`BookSide`]: the operations every side supports
//! - [`LevelTree`]: the B-tree backed side
//! - [`Book`]: bid + ask delegation with a sequence number
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Put | O(log L) |
//! | Get level | O(log L) |
//! | Remove by id | O(log L) |
//! | Modify by id | O(log L) |
//! | Best bid/ask | O(log L) |
//!
//! L = number of price levels on the side.
//!
//! ## Example
//!
//! ```
//! use levelbook::orderbook::{BookSide, LevelTree};
//! use levelbook::types::Order;
//!
//! let mut side = LevelTree::with_capacity(10_000);
//! side.put(Order::new("A", 100, 0), 1);
//! side.modify(Order::new("A", 200, 0), 1).unwrap();
//!
//! assert_eq!(side.get(1).map(|level| level.total()), Some(200));
//! ```

mod node;
pub mod level;
pub mod side;
pub mod book;

pub use level::{Level, Orders};
pub use side::{BookSide, LevelTree};
pub use book::Book;

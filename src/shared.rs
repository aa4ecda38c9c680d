//! Shared access to a book from several threads.
//!
//! The book and its sides have no internal locking. `SharedBook` puts the
//! whole [`Book`] behind one `RwLock`: the bid/ask level trees and their
//! order indices must change together, so finer-grained locks would not
//! protect them.
//!
//! ```
//! use levelbook::{Order, SharedBook};
//! use std::thread;
//!
//! let book = SharedBook::new();
//!
//! let writer = {
//!     let book = book.clone();
//!     thread::spawn(move || {
//!         book.write(|b| {
//!             b.put_bid(Order::new("b1", 10, 0), 99);
//!             b.set_sequence(1);
//!         });
//!     })
//! };
//! writer.join().unwrap();
//!
//! let top = book.top_of_book();
//! assert_eq!(top.bid.map(|level| level.total()), Some(10));
//! assert_eq!(top.sequence, 1);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::orderbook::{Book, Level};

/// Snapshot of both best levels, copied out under a read lock.
#[derive(Debug, Clone)]
pub struct TopOfBook {
    /// Highest bid level
    pub bid: Option<Level>,

    /// Lowest ask level
    pub ask: Option<Level>,

    /// Book sequence at the time of the snapshot
    pub sequence: u64,
}

/// A [`Book`] behind a single reader-writer lock.
///
/// Cloning is cheap and every clone refers to the same book.
#[derive(Debug, Clone, Default)]
pub struct SharedBook {
    inner: Arc<RwLock<Book>>,
}

impl SharedBook {
    /// Wrap an empty book
    pub fn new() -> Self {
        Self::from_book(Book::new())
    }

    pub fn from_book(book: Book) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }

    /// Run `f` under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&Book) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` under the write lock. Everything `f` does is one atomic
    /// update as far as readers can tell.
    pub fn write<R>(&self, f: impl FnOnce(&mut Book) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Copy out the best bid and ask levels.
    ///
    /// The lock is held only while the two levels are cloned.
    pub fn top_of_book(&self) -> TopOfBook {
        let book = self.inner.read();
        TopOfBook {
            bid: book.top_bid().cloned(),
            ask: book.top_ask().cloned(),
            sequence: book.sequence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orderbook::BookSide;
    use crate::types::Order;
    use std::thread;

    #[test]
    fn test_shared_book_empty_snapshot() {
        let book = SharedBook::new();
        let top = book.top_of_book();

        assert!(top.bid.is_none());
        assert!(top.ask.is_none());
        assert_eq!(top.sequence, 0);
    }

    #[test]
    fn test_shared_book_write_then_read() {
        let book = SharedBook::new();

        book.write(|b| {
            b.put_ask(Order::new("a", 5, 0), 101);
            b.put_ask(Order::new("b", 7, 0), 100);
        });

        let best = book.read(|b| b.top_ask().map(|level| level.price()));
        assert_eq!(best, Some(100));
    }

    #[test]
    fn test_shared_book_snapshot_is_detached() {
        let book = SharedBook::new();
        book.write(|b| b.put_bid(Order::new("b", 5, 0), 10));

        let top = book.top_of_book();
        book.write(|b| b.remove_bid("b")).unwrap();

        assert_eq!(top.bid.map(|level| level.total()), Some(5));
        assert!(book.read(|b| b.top_bid().is_none()));
    }

    #[test]
    fn test_shared_book_concurrent_writers() {
        let book = SharedBook::new();

        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let book = book.clone();
                thread::spawn(move || {
                    for i in 0..100u64 {
                        book.write(|b| b.put_bid(Order::new(format!("{t}-{i}"), 1, i), 50 + t));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        book.read(|b| {
            assert_eq!(b.bids().len(), 400);
            assert_eq!(b.top_bid().unwrap().price(), 53);
            assert!(b.bids().check_consistency().is_ok());
        });
    }
}

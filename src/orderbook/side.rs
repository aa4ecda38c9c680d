//! One side of the book: price levels in price order plus an order index.
//!
//! ## Architecture
//!
//! - **BTreeMap**: price → [`Level`], ascending, for O(log n) insert/delete
//!   and O(log n) best-level lookup at either end of the tree
//! - **HashMap**: order id → resting location, so remove and modify never
//!   scan the levels
//!
//! The two indices are private to [`LevelTree`] and every mutation updates
//! both before returning, so callers can never observe one without the other.
//!
//! ## Invariants
//!
//! 1. Every id in the order index names a level that holds exactly that order
//! 2. Every level holds at least one order, and each of them is indexed at
//!    that level's price
//! 3. An id rests at no more than one price
//!
//! [`LevelTree::check_consistency`] verifies all three.

use std::collections::btree_map::{self, BTreeMap};
use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::{debug, trace, warn};

use crate::error::{BookError, ConsistencyError, Result};
use crate::orderbook::Level;
use crate::types::Order;

// ============================================================================
// BookSide trait
// ============================================================================

/// Operations a book side supports, independent of the ordered structure
/// behind it.
///
/// [`Book`](crate::Book) is generic over this trait, so a side backed by a
/// skip list or a sorted array can be dropped in without touching callers.
pub trait BookSide {
    /// Append `order` to the level at `price`, creating the level if needed.
    ///
    /// Never fails. An id that is already resting is moved: its old entry is
    /// unlinked first, then the order joins the back of the `price` queue.
    fn put(&mut self, order: Order, price: u64);

    /// Level at `price`, if any order rests there
    fn get(&self, price: u64) -> Option<&Level>;

    /// Remove a resting order, dropping its level if it becomes empty.
    ///
    /// # Errors
    ///
    /// [`BookError::NotFound`] if `order_id` is not resting. The side is
    /// left untouched.
    fn remove(&mut self, order_id: &str) -> Result<Order>;

    /// Replace a resting order in place, keeping its queue position.
    ///
    /// Returns the previous value of the order.
    ///
    /// # Errors
    ///
    /// - [`BookError::NotFound`] if `order.id` is not resting
    /// - [`BookError::PriceMismatch`] if `price` is not the order's resting
    ///   price
    fn modify(&mut self, order: Order, price: u64) -> Result<Order>;

    /// Level with the greatest price
    fn max(&self) -> Option<&Level>;

    /// Level with the least price
    fn min(&self) -> Option<&Level>;

    /// Number of resting orders
    fn len(&self) -> usize;

    /// Number of distinct price levels
    fn level_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every order and level
    fn clear(&mut self);
}

// ============================================================================
// LevelTree
// ============================================================================

/// Where an order rests: its level price and its slot inside that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    price: u64,
    key: usize,
}

/// B-tree backed [`BookSide`].
///
/// ## Example
///
/// ```
/// use levelbook::{BookSide, LevelTree, Order};
///
/// let mut side = LevelTree::new();
/// side.put(Order::new("A", 100, 1), 10);
/// side.put(Order::new("B", 100, 2), 20);
///
/// assert_eq!(side.max().map(|level| level.price()), Some(20));
/// assert_eq!(side.min().map(|level| level.price()), Some(10));
///
/// side.remove("B").unwrap();
/// assert!(side.get(20).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LevelTree {
    /// Price levels, ascending
    levels: BTreeMap<u64, Level>,

    /// Order id to resting location
    order_index: HashMap<String, Location>,
}

impl LevelTree {
    /// Create an empty side
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty side with room for `order_capacity` resting orders
    /// in the order index
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            levels: BTreeMap::new(),
            order_index: HashMap::with_capacity(order_capacity),
        }
    }

    /// Whether `order_id` is resting on this side
    #[inline]
    pub fn contains(&self, order_id: &str) -> bool {
        self.order_index.contains_key(order_id)
    }

    /// Resting price of `order_id`
    #[inline]
    pub fn price_of(&self, order_id: &str) -> Option<u64> {
        self.order_index.get(order_id).map(|location| location.price)
    }

    /// Resting order with `order_id`
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        let location = self.order_index.get(order_id)?;
        self.levels.get(&location.price)?.get(location.key)
    }

    /// Levels in ascending price order.
    ///
    /// The iterator is double-ended: `.rev()` walks a bid side best-first.
    pub fn levels(&self) -> btree_map::Values<'_, u64, Level> {
        self.levels.values()
    }

    /// Up to `count` levels starting from the best price.
    ///
    /// `descending` selects the bid convention (highest first); otherwise
    /// levels come lowest first, as for asks.
    pub fn depth(&self, count: usize, descending: bool) -> Vec<&Level> {
        if descending {
            self.levels.values().rev().take(count).collect()
        } else {
            self.levels.values().take(count).collect()
        }
    }

    /// SHA-256 digest of the side, walking levels in price order.
    ///
    /// Two sides built from the same operation sequence produce the same
    /// root. Slab slot numbers are not hashed, only what callers can see.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        self.hash_into(&mut hasher);

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        root
    }

    /// [`state_root`](Self::state_root) as lowercase hex
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }

    pub(crate) fn hash_into(&self, hasher: &mut Sha256) {
        hasher.update((self.levels.len() as u64).to_le_bytes());
        for level in self.levels.values() {
            hasher.update(level.price().to_le_bytes());
            hasher.update((level.len() as u64).to_le_bytes());
            for order in level.orders() {
                hasher.update((order.id.len() as u64).to_le_bytes());
                hasher.update(order.id.as_bytes());
                hasher.update(order.quantity.to_le_bytes());
                hasher.update(order.timestamp.to_le_bytes());
            }
        }
    }

    /// Check the cross-index invariants, returning the first violation.
    ///
    /// Walks every level and every index entry, so it is O(n). Meant for
    /// tests and debug assertions, not the hot path.
    pub fn check_consistency(&self) -> std::result::Result<(), ConsistencyError> {
        let mut resting = 0usize;

        for (&price, level) in &self.levels {
            if level.price() != price {
                return Err(ConsistencyError::LevelPrice {
                    key: price,
                    reported: level.price(),
                });
            }
            if level.is_empty() {
                return Err(ConsistencyError::EmptyLevel(price));
            }

            let mut sum = 0u128;
            for order in level.orders() {
                match self.order_index.get(&order.id) {
                    Some(location) if location.price == price => {}
                    Some(location) => {
                        return Err(ConsistencyError::Misindexed {
                            id: order.id.clone(),
                            price,
                            indexed: location.price,
                        })
                    }
                    None => {
                        return Err(ConsistencyError::Unindexed {
                            id: order.id.clone(),
                            price,
                        })
                    }
                }
                sum += u128::from(order.quantity);
                resting += 1;
            }

            if sum != level.total() {
                return Err(ConsistencyError::Total {
                    price,
                    total: level.total(),
                    sum,
                });
            }
        }

        for (id, location) in &self.order_index {
            let found = self
                .levels
                .get(&location.price)
                .and_then(|level| level.get(location.key));
            match found {
                Some(order) if order.id == *id => {}
                _ => {
                    return Err(ConsistencyError::Dangling {
                        id: id.clone(),
                        price: location.price,
                    })
                }
            }
        }

        // Every indexed id was found in its own level above; equal counts
        // then rule out an id resting twice.
        if resting != self.order_index.len() {
            return Err(ConsistencyError::Count {
                resting,
                indexed: self.order_index.len(),
            });
        }

        Ok(())
    }

    /// Unlink the order at `location` and drop its level if it empties.
    ///
    /// The caller has already taken the id out of the order index.
    fn unlink(&mut self, order_id: &str, location: Location) -> Result<Order> {
        let btree_map::Entry::Occupied(mut entry) = self.levels.entry(location.price) else {
            return Err(BookError::NotFound(order_id.to_owned()));
        };

        let order = entry
            .get_mut()
            .remove(location.key)
            .ok_or_else(|| BookError::NotFound(order_id.to_owned()))?;

        if entry.get().is_empty() {
            entry.remove();
            debug!(price = location.price, "level emptied");
        }

        Ok(order)
    }
}

impl BookSide for LevelTree {
    fn put(&mut self, order: Order, price: u64) {
        if let Some(stale) = self.order_index.remove(&order.id) {
            warn!(
                order_id = %order.id,
                resting = stale.price,
                price,
                "order id already resting, moving it"
            );
            if let Err(err) = self.unlink(&order.id, stale) {
                warn!(
                    order_id = %order.id,
                    resting = stale.price,
                    %err,
                    "stale entry missing from its level"
                );
            }
        }

        trace!(order_id = %order.id, price, quantity = order.quantity, "put");

        let id = order.id.clone();
        let level = self.levels.entry(price).or_insert_with(|| {
            debug!(price, "level created");
            Level::new(price)
        });
        let key = level.push_back(order);

        self.order_index.insert(id, Location { price, key });
    }

    fn get(&self, price: u64) -> Option<&Level> {
        self.levels.get(&price)
    }

    fn remove(&mut self, order_id: &str) -> Result<Order> {
        let location = self
            .order_index
            .remove(order_id)
            .ok_or_else(|| BookError::NotFound(order_id.to_owned()))?;

        trace!(order_id, price = location.price, "remove");
        self.unlink(order_id, location)
    }

    fn modify(&mut self, order: Order, price: u64) -> Result<Order> {
        let location = *self
            .order_index
            .get(&order.id)
            .ok_or_else(|| BookError::NotFound(order.id.clone()))?;

        if location.price != price {
            return Err(BookError::PriceMismatch {
                id: order.id,
                resting: location.price,
                requested: price,
            });
        }

        trace!(order_id = %order.id, price, quantity = order.quantity, "modify");

        let id = order.id.clone();
        self.levels
            .get_mut(&location.price)
            .and_then(|level| level.replace(location.key, order))
            .ok_or(BookError::NotFound(id))
    }

    fn max(&self) -> Option<&Level> {
        self.levels.values().next_back()
    }

    fn min(&self) -> Option<&Level> {
        self.levels.values().next()
    }

    fn len(&self) -> usize {
        self.order_index.len()
    }

    fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn clear(&mut self) {
        self.levels.clear();
        self.order_index.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

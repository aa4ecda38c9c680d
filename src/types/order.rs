//! Order value type resting on a book side.
//!
//! An `Order` carries no price and no side: the price is the key of the
//! level it rests in, and the side is whichever `BookSide` holds it.
//! Quantities and timestamps are opaque `u64` values supplied by the feed.

// ============================================================================
// Order struct
// ============================================================================

/// A resting order.
///
/// ## Fields
///
/// - `id`: unique among the orders currently resting on one side
/// - `quantity`: resting size, summed by [`Level::total`](crate::Level::total)
/// - `timestamp`: placement time in nanoseconds, metadata only
///
/// Time priority inside a level is append order. The timestamp is never
/// consulted for ordering.
///
/// ## Example
///
/// ```
/// use levelbook::Order;
///
/// let order = Order::new("A", 100, 1_703_577_600_000_000_000);
/// assert_eq!(order.id, "A");
/// assert_eq!(order.quantity, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Order {
    /// Order identifier, opaque to the book
    pub id: String,

    /// Resting quantity
    pub quantity: u64,

    /// Placement timestamp in nanoseconds
    pub timestamp: u64,
}

impl Order {
    /// Create a new order
    ///
    /// # Arguments
    ///
    /// * `id` - Order identifier
    /// * `quantity` - Resting quantity
    /// * `timestamp` - Placement time in nanoseconds
    pub fn new(id: impl Into<String>, quantity: u64, timestamp: u64) -> Self {
        Self {
            id: id.into(),
            quantity,
            timestamp,
        }
    }

    /// Same order with a new quantity, as sent by a feed amend message
    ///
    /// ```
    /// use levelbook::Order;
    ///
    /// let amended = Order::new("A", 100, 1).with_quantity(40);
    /// assert_eq!(amended.quantity, 40);
    /// assert_eq!(amended.timestamp, 1);
    /// ```
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = Order::new("A", 100, 7);

        assert_eq!(order.id, "A");
        assert_eq!(order.quantity, 100);
        assert_eq!(order.timestamp, 7);
    }

    #[test]
    fn test_order_accepts_owned_id() {
        let id = String::from("order-42");
        let order = Order::new(id.clone(), 1, 0);

        assert_eq!(order.id, id);
    }

    #[test]
    fn test_order_with_quantity_keeps_identity() {
        let order = Order::new("A", 100, 3);
        let amended = order.clone().with_quantity(250);

        assert_eq!(amended.id, order.id);
        assert_eq!(amended.timestamp, order.timestamp);
        assert_eq!(amended.quantity, 250);
        assert_ne!(amended, order);
    }

    #[test]
    fn test_order_default_is_empty() {
        let order = Order::default();

        assert!(order.id.is_empty());
        assert_eq!(order.quantity, 0);
        assert_eq!(order.timestamp, 0);
    }
}

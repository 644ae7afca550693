//! OrderModify: an amendment descriptor consumed by `Book::modify`.

use crate::{Order, OrderError, OrderId, OrderType, Price, Quantity, Side};

/// A pure amendment request: new side, price, and quantity for an
/// existing order id. Carries no order type of its own — `modify` always
/// preserves the original order's type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderModify {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl OrderModify {
    pub fn new(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self { id, side, price, quantity }
    }

    /// Build the replacement order, preserving `order_type` from the
    /// order being amended. Validation (nonzero id, nonzero quantity)
    /// happens in `Order::new`.
    pub fn to_order(self, order_type: OrderType) -> Result<Order, OrderError> {
        Order::new(self.id, self.side, order_type, self.price, self.quantity)
    }
}

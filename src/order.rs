//! Order representation.
//!
//! An order's lifecycle is conceptual, not a stored field: whether
//! an order is resting, partially filled, or filled is always derived from
//! `remaining_quantity`. Terminal states (cancelled, rejected) are reached
//! by the order leaving the book entirely, not by a status transition.

use crate::{OrderError, OrderId, OrderType, Price, Quantity, Side};

/// An order resting in, or being admitted to, the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier, nonzero (enforced at construction).
    pub id: OrderId,
    /// Buy or sell.
    pub side: Side,
    /// Governs admission and partial-fill behavior; immutable after
    /// construction and preserved across a `modify`.
    pub order_type: OrderType,
    /// Limit price; immutable after construction.
    pub price: Price,
    /// Quantity at admission; immutable after construction.
    pub initial_quantity: Quantity,
    /// Quantity not yet filled.
    pub remaining_quantity: Quantity,
}

impl Order {
    /// Construct a new order with `remaining_quantity == initial_quantity`.
    ///
    /// Fails with [`OrderError::ConstructionInvalid`] if `id == 0` or
    /// `quantity == 0`.
    pub fn new(
        id: OrderId,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
    ) -> Result<Self, OrderError> {
        if !id.is_valid() || quantity == 0 {
            return Err(OrderError::ConstructionInvalid);
        }
        Ok(Self {
            id,
            side,
            order_type,
            price,
            initial_quantity: quantity,
            remaining_quantity: quantity,
        })
    }

    /// Quantity filled so far.
    #[inline]
    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity - self.remaining_quantity
    }

    /// True once no quantity remains.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Reduce `remaining_quantity` by `quantity`.
    ///
    /// `quantity == 0` is a no-op. Fails with [`OrderError::OverFill`] if
    /// `quantity` exceeds what remains — this indicates a
    /// matcher bug, since the matcher always derives fills from
    /// `min(bid.remaining, ask.remaining)`.
    pub fn fill(&mut self, quantity: Quantity) -> Result<(), OrderError> {
        if quantity > self.remaining_quantity {
            return Err(OrderError::OverFill);
        }
        self.remaining_quantity -= quantity;
        Ok(())
    }
}

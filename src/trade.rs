//! Trade: the immutable record of a single match between a bid and an ask.

use crate::{OrderId, Price, Quantity};
use std::fmt;

/// One side's record of a trade: which order it was and how much traded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeLeg {
    pub order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

/// A completed match between a resting/aggressing bid and ask.
///
/// Both legs always carry the same quantity and the same execution
/// price. That price is unconditionally the ask's price at the moment
/// of crossing — asymmetric by construction, even when the ask is
/// the passive side of a sell-initiated cross. This is not "corrected"
/// toward a resting-side-always convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trade {
    pub bid: TradeLeg,
    pub ask: TradeLeg,
}

impl Trade {
    pub fn new(bid_order_id: OrderId, ask_order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            bid: TradeLeg { order_id: bid_order_id, price, quantity },
            ask: TradeLeg { order_id: ask_order_id, price, quantity },
        }
    }

    /// The quantity traded (both legs agree).
    #[inline]
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }

    /// The execution price (both legs agree).
    #[inline]
    pub fn price(&self) -> Price {
        self.bid.price
    }

    /// Volume-weighted average price across a trade sequence.
    ///
    /// Returns `None` for an empty slice.
    pub fn vwap(trades: &[Trade]) -> Option<Price> {
        if trades.is_empty() {
            return None;
        }
        let total_qty: u64 = trades.iter().map(|t| t.quantity() as u64).sum();
        if total_qty == 0 {
            return None;
        }
        let total_notional: i64 =
            trades.iter().map(|t| t.price().0 as i64 * t.quantity() as i64).sum();
        Some(Price((total_notional / total_qty as i64) as i32))
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} traded {} @ {} (bid {}, ask {})",
            self.quantity(),
            self.quantity(),
            self.price(),
            self.bid.order_id,
            self.ask.order_id
        )
    }
}

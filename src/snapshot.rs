//! LevelSnapshot: an aggregated, point-in-time depth view of both ladders.

use crate::Price;

/// A single price's aggregated depth at snapshot time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceLevelDepth {
    pub price: Price,
    /// Sum of `remaining_quantity` across all orders at this price.
    /// 64-bit to tolerate dense levels summing past 32 bits even though
    /// individual order quantities are 32-bit.
    pub quantity: u64,
}

/// An aggregated depth view of both ladders at a single moment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelSnapshot {
    /// Ordered price descending (best bid first).
    pub bids: Vec<PriceLevelDepth>,
    /// Ordered price ascending (best ask first).
    pub asks: Vec<PriceLevelDepth>,
}

impl LevelSnapshot {
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.first().map(|l| l.price)
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first().map(|l| l.price)
    }

    /// `best_ask - best_bid`, if both sides have depth.
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.0 as i64 - bid.0 as i64),
            _ => None,
        }
    }

    /// `(best_bid + best_ask) / 2`, if both sides have depth.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid.0 as f64 + ask.0 as f64) / 2.0),
            _ => None,
        }
    }

    pub fn total_bid_quantity(&self) -> u64 {
        self.bids.iter().map(|l| l.quantity).sum()
    }

    pub fn total_ask_quantity(&self) -> u64 {
        self.asks.iter().map(|l| l.quantity).sum()
    }

    /// `(bid_qty - ask_qty) / (bid_qty + ask_qty)`, in `[-1.0, 1.0]`.
    /// `None` if both sides are empty.
    pub fn imbalance(&self) -> Option<f64> {
        let bid_qty = self.total_bid_quantity();
        let ask_qty = self.total_ask_quantity();
        let total = bid_qty + ask_qty;
        if total == 0 {
            return None;
        }
        Some((bid_qty as f64 - ask_qty as f64) / total as f64)
    }
}

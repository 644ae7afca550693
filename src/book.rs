//! Book: the concurrency-safe limit order book.
//!
//! Holds the bid ladder, the ask ladder, and the order index behind a
//! single `RwLock` — mutating operations (`add`, `cancel`, `modify`,
//! `clear`) take it exclusively; `size` and `snapshot` take it shared.
//! The optional observer hook lives behind its own lock so it never
//! contends with the book lock itself.

use std::sync::RwLock;
use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::matching::{can_fill_completely, can_match, cross};
use crate::observer::{op, Observer};
use crate::{Ladder, Order, OrderError, OrderId, OrderModify, OrderType, Price, PriceLevelDepth, Side, Trade};
use crate::snapshot::LevelSnapshot;

#[derive(Clone, Copy, Debug)]
pub(crate) struct IndexEntry {
    pub side: Side,
    pub price: Price,
    pub slot: crate::Slot,
}

/// The three fields the book lock protects: both ladders and the
/// central order index.
///
/// Invariant: the index contains exactly the ids currently resting in
/// exactly one ladder queue — never a historical filled/cancelled order.
pub(crate) struct BookState {
    pub(crate) bids: Ladder,
    pub(crate) asks: Ladder,
    pub(crate) index: FxHashMap<OrderId, IndexEntry>,
}

impl BookState {
    pub(crate) fn new() -> Self {
        Self { bids: Ladder::new(Side::Buy), asks: Ladder::new(Side::Sell), index: FxHashMap::default() }
    }

    fn ladder(&self, side: Side) -> &Ladder {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn ladder_mut(&mut self, side: Side) -> &mut Ladder {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    fn opposite_ladder(&self, side: Side) -> &Ladder {
        self.ladder(side.opposite())
    }

    /// Admission predicate, evaluated in order; the first failure
    /// rejects the order silently (empty trades, no state change).
    fn admitted(&self, order: &Order) -> bool {
        if order.remaining_quantity == 0 || !order.id.is_valid() {
            return false;
        }
        if self.index.contains_key(&order.id) {
            return false;
        }
        match order.order_type {
            OrderType::GoodTillCancel => true,
            OrderType::ImmediateOrCancel => {
                can_match(self.opposite_ladder(order.side), order.side, order.price)
            }
            OrderType::FillOrKill => can_fill_completely(
                self.opposite_ladder(order.side),
                order.price,
                order.remaining_quantity,
            ),
        }
    }

    /// Place, match, and sweep a single order. Returns `None` if
    /// admission rejected the order outright, `Some(trades)` (possibly
    /// empty) otherwise.
    fn try_add(&mut self, order: Order) -> Option<Vec<Trade>> {
        if !self.admitted(&order) {
            return None;
        }

        let id = order.id;
        let side = order.side;
        let price = order.price;
        let order_type = order.order_type;
        let slot = self.ladder_mut(side).insert_order(order);
        self.index.insert(id, IndexEntry { side, price, slot });

        let trades = cross(self);

        // Post-match sweep: only the order just admitted can
        // still be resting and in need of IOC/FOK cleanup, so this
        // checks that one id rather than the whole index.
        if matches!(order_type, OrderType::ImmediateOrCancel | OrderType::FillOrKill)
            && self.index.contains_key(&id)
        {
            self.cancel_internal(id);
        }

        Some(trades)
    }

    fn cancel_internal(&mut self, id: OrderId) -> bool {
        let Some(entry) = self.index.remove(&id) else {
            return false;
        };
        self.ladder_mut(entry.side).remove_order(entry.price, entry.slot);
        true
    }

    fn try_modify(&mut self, modify: OrderModify) -> Result<Vec<Trade>, OrderError> {
        let Some(entry) = self.index.get(&modify.id).copied() else {
            return Ok(Vec::new());
        };
        let order_type = self
            .ladder(entry.side)
            .get_level(entry.price)
            .and_then(|level| level.get(entry.slot))
            .expect("index entry without a corresponding resting order")
            .order_type;

        self.cancel_internal(modify.id);
        let replacement = modify.to_order(order_type)?;
        Ok(self.try_add(replacement).unwrap_or_default())
    }

    fn snapshot(&self) -> LevelSnapshot {
        fn depths(ladder: &Ladder) -> Vec<PriceLevelDepth> {
            ladder
                .iter_best_to_worst()
                .map(|(price, level)| PriceLevelDepth { price: *price, quantity: level.total_quantity() })
                .collect()
        }
        LevelSnapshot { bids: depths(&self.bids), asks: depths(&self.asks) }
    }

    fn clear(&mut self) {
        self.bids = Ladder::new(Side::Buy);
        self.asks = Ladder::new(Side::Sell);
        self.index.clear();
    }
}

/// The price-time priority limit order book. Safe to share across
/// threads behind an `Arc` — every operation takes `&self` and manages
/// its own locking internally.
pub struct Book {
    state: RwLock<BookState>,
    observer: RwLock<Option<Box<Observer>>>,
}

impl Book {
    pub fn new() -> Self {
        Self { state: RwLock::new(BookState::new()), observer: RwLock::new(None) }
    }

    /// Register (or clear, with `None`) the observer hook.
    pub fn set_observer(&self, observer: Option<Box<Observer>>) {
        *self.observer.write().unwrap() = observer;
    }

    fn notify(&self, operation: &str, start: Instant, orders_affected: usize) {
        if let Some(observer) = self.observer.read().unwrap().as_ref() {
            observer(operation, start, Instant::now(), orders_affected);
        }
    }

    /// Admit `order`, run the matcher to a fixpoint, and sweep any
    /// IOC/FOK residual. Returns the trades produced, which may be empty
    /// either because nothing crossed or because admission rejected the
    /// order outright.
    pub fn add(&self, order: Order) -> Vec<Trade> {
        let start = Instant::now();
        trace!(id = order.id.0, side = ?order.side, price = order.price.0, qty = order.remaining_quantity, "add");

        let mut state = self.state.write().unwrap();
        let Some(trades) = state.try_add(order) else {
            self.notify(op::ADD_ORDER_REJECTED, start, 0);
            drop(state);
            debug!(id = order.id.0, "add rejected");
            return Vec::new();
        };

        if trades.is_empty() {
            self.notify(op::MATCH_ORDER_NOT_FOUND, start, 0);
        } else {
            self.notify(op::MATCH_ORDER_SUCCESS, start, trades.len());
        }
        self.notify(op::MATCH_ORDERS, start, trades.len());
        self.notify(op::ADD_ORDER_SUCCESS, start, 1);
        drop(state);
        debug!(id = order.id.0, trades = trades.len(), "add accepted");
        trades
    }

    /// Remove `id` from the book. A missing id is a no-op.
    pub fn cancel(&self, id: OrderId) {
        let start = Instant::now();
        trace!(id = id.0, "cancel");

        let mut state = self.state.write().unwrap();
        let found = state.cancel_internal(id);
        if found {
            self.notify(op::CANCEL_ORDER_SUCCESS, start, 1);
        } else {
            self.notify(op::CANCEL_ORDER_NOT_FOUND, start, 0);
        }
        drop(state);
    }

    /// Cancel-then-replace `modify.id` under a single exclusive
    /// acquisition — the type is preserved from the order being
    /// replaced. Fails with [`OrderError::ConstructionInvalid`]
    /// only if the replacement's amended quantity is zero; a missing id
    /// is a silent no-op, matching `cancel`.
    pub fn modify(&self, modify: OrderModify) -> Result<Vec<Trade>, OrderError> {
        let start = Instant::now();
        trace!(id = modify.id.0, "modify");

        let mut state = self.state.write().unwrap();
        let present = state.index.contains_key(&modify.id);
        let trades = state.try_modify(modify)?;

        if present {
            self.notify(op::CANCEL_ORDER_SUCCESS, start, 1);
            self.notify(op::ADD_ORDER_SUCCESS, start, 1);
        } else {
            self.notify(op::CANCEL_ORDER_NOT_FOUND, start, 0);
        }
        drop(state);
        Ok(trades)
    }

    /// Number of orders currently resting in the book.
    pub fn size(&self) -> usize {
        let start = Instant::now();
        let state = self.state.read().unwrap();
        let size = state.index.len();
        self.notify(op::SIZE, start, size);
        drop(state);
        size
    }

    /// An aggregated depth view of both ladders.
    pub fn snapshot(&self) -> LevelSnapshot {
        let start = Instant::now();
        let state = self.state.read().unwrap();
        let snapshot = state.snapshot();
        self.notify(op::GET_ORDER_INFOS, start, snapshot.bids.len() + snapshot.asks.len());
        drop(state);
        snapshot
    }

    /// Drop both ladders and the index.
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap();
        state.clear();
    }

    /// Read-only admissibility probes, exposed for callers that want to
    /// check before submitting.
    pub fn can_match(&self, side: Side, price: Price) -> bool {
        let state = self.state.read().unwrap();
        can_match(state.opposite_ladder(side), side, price)
    }

    pub fn can_fill_completely(&self, side: Side, price: Price, qty: crate::Quantity) -> bool {
        let state = self.state.read().unwrap();
        can_fill_completely(state.opposite_ladder(side), price, qty)
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

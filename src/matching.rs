//! The matching algorithm and the admission helpers it shares with `Book`.

use crate::book::BookState;
use crate::{Ladder, Level, Price, Quantity, Side, Trade};

/// Is `price` crossable against an opposite-side order resting at
/// `opposite_price`? For a buy at P, a sell at A crosses iff `P >= A`;
/// for a sell at P, a buy at B crosses iff `P <= B`.
fn crosses(side: Side, price: Price, opposite_price: Price) -> bool {
    match side {
        Side::Buy => price >= opposite_price,
        Side::Sell => price <= opposite_price,
    }
}

/// Constant-time check: is there any crossable liquidity at all on the
/// opposite ladder? Used for `ImmediateOrCancel` admission.
pub(crate) fn can_match(opposite: &Ladder, side: Side, price: Price) -> bool {
    opposite.best_price().is_some_and(|best| crosses(side, price, best))
}

/// Does the opposite ladder hold at least `qty` of crossable remaining
/// quantity at or better than `price`? Used for `FillOrKill` admission.
/// Linear in the number of crossable opposite orders; short-circuits via
/// `Ladder::quantity_at_or_better`'s own range sum, which already matches
/// this side's crossability direction (see its doc comment).
pub(crate) fn can_fill_completely(opposite: &Ladder, price: Price, qty: Quantity) -> bool {
    opposite.quantity_at_or_better(price) >= qty as u64
}

/// Cross the book to a fixpoint: while the best bid and best ask overlap,
/// consume their FIFO queues head-first, producing one [`Trade`] per
/// match and pruning fully-filled orders and emptied levels.
pub(crate) fn cross(state: &mut BookState) -> Vec<Trade> {
    let mut trades = Vec::new();

    loop {
        let (bid_price, ask_price) = match (state.bids.best_price(), state.asks.best_price()) {
            (Some(b), Some(a)) => (b, a),
            _ => break,
        };
        if bid_price < ask_price {
            break;
        }

        loop {
            let bid_slot = match state.bids.get_level(bid_price).and_then(Level::front_slot) {
                Some(slot) => slot,
                None => break,
            };
            let ask_slot = match state.asks.get_level(ask_price).and_then(Level::front_slot) {
                Some(slot) => slot,
                None => break,
            };

            let bid_level = state.bids.get_level_mut(bid_price).unwrap();
            let bid_remaining = bid_level.get(bid_slot).unwrap().remaining_quantity;
            let ask_level = state.asks.get_level_mut(ask_price).unwrap();
            let ask_remaining = ask_level.get(ask_slot).unwrap().remaining_quantity;
            let fill_qty = bid_remaining.min(ask_remaining);

            let ask_order = ask_level.get_mut(ask_slot).unwrap();
            ask_order
                .fill(fill_qty)
                .expect("matcher derived a fill exceeding the ask's remaining quantity");
            let ask_id = ask_order.id;
            let execution_price = ask_order.price;
            let ask_done = ask_order.is_filled();
            ask_level.record_fill(fill_qty);

            let bid_order = bid_level.get_mut(bid_slot).unwrap();
            bid_order
                .fill(fill_qty)
                .expect("matcher derived a fill exceeding the bid's remaining quantity");
            let bid_id = bid_order.id;
            let bid_done = bid_order.is_filled();
            bid_level.record_fill(fill_qty);

            trades.push(Trade::new(bid_id, ask_id, execution_price, fill_qty));

            if bid_done {
                state.bids.get_level_mut(bid_price).unwrap().remove(bid_slot);
                state.index.remove(&bid_id);
            }
            if ask_done {
                state.asks.get_level_mut(ask_price).unwrap().remove(ask_slot);
                state.index.remove(&ask_id);
            }
        }

        if state.bids.get_level(bid_price).is_some_and(Level::is_empty) {
            state.bids.remove_level(bid_price);
        }
        if state.asks.get_level(ask_price).is_some_and(Level::is_empty) {
            state.asks.remove_level(ask_price);
        }
    }

    trades
}

//! End-to-end scenarios and boundary behaviors for `Book`.

use limbook::{Book, Order, OrderId, OrderModify, OrderType, Price, Side};

fn order(id: u64, side: Side, order_type: OrderType, price: i32, qty: u32) -> Order {
    Order::new(OrderId(id), side, order_type, Price(price), qty).unwrap()
}

#[test]
fn scenario_simple_full_cross() {
    let book = Book::new();
    book.add(order(1, Side::Sell, OrderType::GoodTillCancel, 100_00, 10));
    let trades = book.add(order(2, Side::Buy, OrderType::GoodTillCancel, 100_00, 10));

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].bid.order_id, OrderId(2));
    assert_eq!(trades[0].ask.order_id, OrderId(1));
    assert_eq!(trades[0].quantity(), 10);
    assert_eq!(trades[0].price(), Price(100_00));
    assert_eq!(book.size(), 0);
}

#[test]
fn scenario_price_time_priority_shallow_cross() {
    let book = Book::new();
    // Two resting bids at the same price: id 1 arrives first, should fill first.
    book.add(order(1, Side::Buy, OrderType::GoodTillCancel, 100_00, 5));
    book.add(order(2, Side::Buy, OrderType::GoodTillCancel, 100_00, 5));

    let trades = book.add(order(3, Side::Sell, OrderType::GoodTillCancel, 100_00, 5));
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].bid.order_id, OrderId(1));

    // Order 2 is still resting, untouched.
    let snap = book.snapshot();
    assert_eq!(snap.total_bid_quantity(), 5);
}

#[test]
fn scenario_ioc_with_no_liquidity_is_rejected_not_left_resting() {
    let book = Book::new();
    let trades = book.add(order(1, Side::Buy, OrderType::ImmediateOrCancel, 100_00, 10));
    assert!(trades.is_empty());
    assert_eq!(book.size(), 0);
    assert_eq!(book.snapshot().best_bid(), None);
}

#[test]
fn scenario_fok_multi_level_success() {
    let book = Book::new();
    book.add(order(1, Side::Sell, OrderType::GoodTillCancel, 100_00, 8));
    book.add(order(2, Side::Sell, OrderType::GoodTillCancel, 101_00, 6));
    book.add(order(3, Side::Sell, OrderType::GoodTillCancel, 102_00, 4));

    let trades = book.add(order(4, Side::Buy, OrderType::FillOrKill, 102_00, 18));
    assert_eq!(trades.len(), 3);
    assert_eq!(trades.iter().map(|t| t.quantity()).sum::<u32>(), 18);
    assert_eq!(book.size(), 0);
}

#[test]
fn scenario_fok_insufficient_liquidity_is_rejected_wholesale() {
    let book = Book::new();
    book.add(order(1, Side::Sell, OrderType::GoodTillCancel, 100_00, 10));

    let trades = book.add(order(2, Side::Buy, OrderType::FillOrKill, 100_00, 11));
    assert!(trades.is_empty());
    // Resting liquidity is untouched by a rejected FOK.
    assert_eq!(book.size(), 1);
    assert_eq!(book.snapshot().asks[0].quantity, 10);
}

#[test]
fn scenario_modify_loses_time_priority() {
    let book = Book::new();
    book.add(order(1, Side::Buy, OrderType::GoodTillCancel, 100_00, 10));
    book.add(order(2, Side::Buy, OrderType::GoodTillCancel, 100_00, 10));

    // Re-amending order 1 at the same price sends it to the back of the queue.
    book.modify(OrderModify::new(OrderId(1), Side::Buy, Price(100_00), 10)).unwrap();

    let trades = book.add(order(3, Side::Sell, OrderType::GoodTillCancel, 100_00, 10));
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].bid.order_id, OrderId(2));
}

#[test]
fn zero_id_is_rejected_at_construction() {
    let err = Order::new(OrderId(0), Side::Buy, OrderType::GoodTillCancel, Price(100_00), 10)
        .unwrap_err();
    assert_eq!(err, limbook::OrderError::ConstructionInvalid);
}

#[test]
fn zero_quantity_is_rejected_at_construction() {
    let err = Order::new(OrderId(1), Side::Buy, OrderType::GoodTillCancel, Price(100_00), 0)
        .unwrap_err();
    assert_eq!(err, limbook::OrderError::ConstructionInvalid);
}

#[test]
fn negative_and_extreme_prices_order_correctly() {
    let book = Book::new();
    book.add(order(1, Side::Sell, OrderType::GoodTillCancel, Price::MIN.0, 10));
    book.add(order(2, Side::Buy, OrderType::GoodTillCancel, Price::MAX.0, 10));

    // The cross already happened inside the two `add` calls above.
    assert_eq!(book.size(), 0);
    assert!(book.snapshot().best_bid().is_none());
}

#[test]
fn duplicate_order_id_is_rejected() {
    let book = Book::new();
    book.add(order(1, Side::Buy, OrderType::GoodTillCancel, 100_00, 10));
    let trades = book.add(order(1, Side::Buy, OrderType::GoodTillCancel, 99_00, 20));

    assert!(trades.is_empty());
    assert_eq!(book.size(), 1);
    assert_eq!(book.snapshot().best_bid(), Some(Price(100_00)));
}

#[test]
fn cancel_unknown_id_is_a_silent_no_op() {
    let book = Book::new();
    book.cancel(OrderId(42));
    assert_eq!(book.size(), 0);
}

#[test]
fn modify_unknown_id_is_a_silent_no_op() {
    let book = Book::new();
    let trades = book
        .modify(OrderModify::new(OrderId(42), Side::Buy, Price(100_00), 10))
        .unwrap();
    assert!(trades.is_empty());
    assert_eq!(book.size(), 0);
}

#[test]
fn modify_rejecting_zero_quantity_surfaces_the_error() {
    let book = Book::new();
    book.add(order(1, Side::Buy, OrderType::GoodTillCancel, 100_00, 10));

    let err = book
        .modify(OrderModify::new(OrderId(1), Side::Buy, Price(100_00), 0))
        .unwrap_err();
    assert_eq!(err, limbook::OrderError::ConstructionInvalid);
}

#[test]
fn clear_drops_all_resting_orders() {
    let book = Book::new();
    book.add(order(1, Side::Buy, OrderType::GoodTillCancel, 99_00, 10));
    book.add(order(2, Side::Sell, OrderType::GoodTillCancel, 101_00, 10));

    book.clear();
    assert_eq!(book.size(), 0);
    let snap = book.snapshot();
    assert!(snap.bids.is_empty());
    assert!(snap.asks.is_empty());
}

// Allow our dollar.cents digit grouping convention (e.g., 100_00 = $100.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! # limbook
//!
//! A price-time priority limit order book and matching engine.
//!
//! [`Book`] is the sole entry point: it owns both price ladders and the
//! central order index behind one lock, and exposes `add`, `cancel`,
//! `modify`, `size`, `snapshot`, and `clear`. Every operation is safe to
//! call from multiple threads concurrently.
//!
//! ## Order types
//!
//! | Type | Behavior |
//! |------|----------|
//! | **GoodTillCancel** | Rests on the book until filled or cancelled |
//! | **ImmediateOrCancel** | Fills what it can immediately, cancels the remainder |
//! | **FillOrKill** | Fills entirely at admission or is rejected outright |
//!
//! ## Quick start
//!
//! ```
//! use limbook::{Book, Order, OrderId, OrderType, Price, Side};
//!
//! let book = Book::new();
//!
//! book.add(Order::new(OrderId(1), Side::Sell, OrderType::GoodTillCancel, Price(101_00), 100).unwrap());
//! book.add(Order::new(OrderId(2), Side::Sell, OrderType::GoodTillCancel, Price(102_00), 200).unwrap());
//!
//! // A bid that crosses the best ask — this matches.
//! let trades = book.add(
//!     Order::new(OrderId(3), Side::Buy, OrderType::GoodTillCancel, Price(101_00), 50).unwrap(),
//! );
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].price(), Price(101_00));
//! assert_eq!(trades[0].quantity(), 50);
//! ```
//!
//! ## Immediate-or-cancel and fill-or-kill
//!
//! ```
//! use limbook::{Book, Order, OrderId, OrderType, Price, Side};
//!
//! let book = Book::new();
//! book.add(Order::new(OrderId(1), Side::Sell, OrderType::GoodTillCancel, Price(100_00), 30).unwrap());
//!
//! // IOC: fills what's available, the remainder is cancelled rather than resting.
//! let trades = book.add(
//!     Order::new(OrderId(2), Side::Buy, OrderType::ImmediateOrCancel, Price(100_00), 100).unwrap(),
//! );
//! assert_eq!(trades[0].quantity(), 30);
//! assert_eq!(book.size(), 0);
//!
//! // FOK: rejected outright if the book can't fill the whole order.
//! book.add(Order::new(OrderId(3), Side::Sell, OrderType::GoodTillCancel, Price(100_00), 50).unwrap());
//! let trades = book.add(
//!     Order::new(OrderId(4), Side::Buy, OrderType::FillOrKill, Price(100_00), 100).unwrap(),
//! );
//! assert!(trades.is_empty());
//! ```
//!
//! ## Cancel and modify
//!
//! ```
//! use limbook::{Book, Order, OrderId, OrderModify, OrderType, Price, Side};
//!
//! let book = Book::new();
//! book.add(Order::new(OrderId(1), Side::Buy, OrderType::GoodTillCancel, Price(99_00), 100).unwrap());
//!
//! book.cancel(OrderId(1));
//! assert_eq!(book.size(), 0);
//!
//! // Modify is cancel-and-replace: the order keeps its id but loses
//! // time priority at its (possibly new) price level.
//! book.add(Order::new(OrderId(2), Side::Buy, OrderType::GoodTillCancel, Price(99_00), 100).unwrap());
//! let trades = book.modify(OrderModify::new(OrderId(2), Side::Buy, Price(98_00), 150)).unwrap();
//! assert!(trades.is_empty());
//! assert_eq!(book.snapshot().best_bid(), Some(Price(98_00)));
//! ```
//!
//! ## Snapshots
//!
//! ```
//! use limbook::{Book, Order, OrderId, OrderType, Price, Side};
//!
//! let book = Book::new();
//! book.add(Order::new(OrderId(1), Side::Buy, OrderType::GoodTillCancel, Price(99_00), 100).unwrap());
//! book.add(Order::new(OrderId(2), Side::Buy, OrderType::GoodTillCancel, Price(100_00), 200).unwrap());
//! book.add(Order::new(OrderId(3), Side::Sell, OrderType::GoodTillCancel, Price(101_00), 150).unwrap());
//!
//! let snap = book.snapshot();
//! assert_eq!(snap.best_bid(), Some(Price(100_00)));
//! assert_eq!(snap.best_ask(), Some(Price(101_00)));
//! assert_eq!(snap.spread(), Some(100));
//! ```
//!
//! ## Observing the book
//!
//! An optional hook (not exercised as a doctest, since its timing is
//! nondeterministic) can observe every operation without contending with
//! the book lock:
//!
//! ```no_run
//! use limbook::Book;
//!
//! let book = Book::new();
//! book.set_observer(Some(Box::new(|operation: &str, start, end, orders_affected| {
//!     let elapsed = end.duration_since(start);
//!     println!("{operation} affected {orders_affected} order(s) in {elapsed:?}");
//! })));
//! ```

mod book;
mod error;
mod ladder;
mod level;
mod matching;
mod observer;
mod order;
mod order_modify;
mod order_type;
mod side;
mod snapshot;
mod trade;
mod types;

pub use book::Book;
pub use error::OrderError;
pub use ladder::Ladder;
pub use level::{Level, Slot};
pub use observer::{op, Observer};
pub use order::Order;
pub use order_modify::OrderModify;
pub use order_type::OrderType;
pub use side::Side;
pub use snapshot::{LevelSnapshot, PriceLevelDepth};
pub use trade::{Trade, TradeLeg};
pub use types::{OrderId, Price, Quantity};

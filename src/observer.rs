//! The book's single optional integration hook.
//!
//! This is the only seam an external performance tracker or metrics
//! collector has into the book's core. It is invoked synchronously while
//! the book lock is held, so an implementation must be non-blocking and
//! must never call back into the `Book` it was registered on — re-entrance
//! would deadlock.

use std::time::Instant;

/// `(operation_name, start, end, orders_affected)`.
pub type Observer = dyn Fn(&str, Instant, Instant, usize) + Send + Sync;

/// Exact operation-name strings the hook may observe.
pub mod op {
    pub const ADD_ORDER_SUCCESS: &str = "AddOrder_Success";
    pub const ADD_ORDER_REJECTED: &str = "AddOrder_Rejected";
    pub const CANCEL_ORDER_SUCCESS: &str = "CancelOrder_Success";
    pub const CANCEL_ORDER_NOT_FOUND: &str = "CancelOrder_NotFound";
    pub const MATCH_ORDER_SUCCESS: &str = "MatchOrder_Success";
    pub const MATCH_ORDER_NOT_FOUND: &str = "MatchOrder_NotFound";
    pub const MATCH_ORDERS: &str = "MatchOrders";
    pub const SIZE: &str = "Size";
    pub const GET_ORDER_INFOS: &str = "GetOrderInfos";
}

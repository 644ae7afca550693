//! Fatal error conditions raised by order construction and matching.

use thiserror::Error;

/// Errors that abort the operation they occur in, as opposed to the
/// routine rejections (admission failure, unknown id) that the book
/// reports silently through its own return values and the observer hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OrderError {
    /// `Order::new` was called with `id == 0` or `quantity == 0`.
    #[error("order construction invalid: id and quantity must both be nonzero")]
    ConstructionInvalid,

    /// `Order::fill` was called with a quantity exceeding what remains.
    #[error("fill quantity exceeds remaining quantity")]
    OverFill,
}

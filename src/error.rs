//! Error taxonomy for state transitions.
//!
//! Every variant is a programming-contract violation on the caller's side,
//! not an expected runtime condition. The reducer fails fast instead of
//! folding a bad action into a best-effort state, which would silently
//! corrupt the displayed balances. No retry policy applies here.

use thiserror::Error;

/// An error surfaced by [`reduce`](crate::reducer::reduce) or by the
/// serialized action boundary in [`crate::replay`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// A numeric argument was non-finite or outside its allowed range
    /// (negative amount, non-positive rate).
    #[error("invalid numeric argument for {field}: {value}")]
    InvalidNumeric { field: &'static str, value: f64 },

    /// An asset symbol outside the recognized set reached the decode
    /// boundary. Internally constructed actions cannot produce this.
    #[error("unknown asset symbol: {0}")]
    UnknownAsset(String),

    /// An action tag outside the closed set reached the decode boundary.
    /// Internally constructed actions cannot produce this either.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// A published transaction id was empty.
    #[error("transaction id must not be empty")]
    EmptyTransactionId,
}

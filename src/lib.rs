//! Exchange-pair state core for a two-asset swap wallet UI.
//!
//! The crate models the state a swap screen shows the user: two asset slots
//! ("alpha", the side the user types an amount into, and "beta", the side
//! derived from the conversion rate), the rate itself, and the id of the last
//! published transaction. All transitions go through the pure [`reducer`];
//! the hosting UI, the external rate feed, and the transaction-submission
//! collaborator only ever dispatch [`action::Action`] values into it.
//!
//! Wallet custody, transaction construction, and the swap protocol live
//! behind an opaque boundary in a separate module and are not part of this
//! crate; neither is any rendering.

pub mod action;
pub mod asset;
pub mod balance;
pub mod error;
pub mod rate_feed;
pub mod reducer;
pub mod replay;
pub mod session;
pub mod state;

pub use action::Action;
pub use asset::AssetSlot;
pub use asset::AssetType;
pub use error::TransitionError;
pub use reducer::reduce;
pub use state::ExchangePairState;

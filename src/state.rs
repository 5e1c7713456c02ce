//! The exchange-pair state value the reducer transitions over.

use serde::Deserialize;
use serde::Serialize;

use crate::asset::AssetSlot;
use crate::asset::AssetType;

/// Full state of the swap pair shown to the user.
///
/// `alpha` is the side the user specifies an amount for and is always
/// authoritative; `beta` is re-derived from `alpha.amount` and `rate` on
/// every amount or rate transition. `rate` is in beta units per one alpha
/// unit. `tx_id` holds the id of the last published transaction, empty if
/// none has been published this session.
///
/// After every transition `alpha.asset != beta.asset` holds. A side-swap
/// exchanges the slots verbatim, so `beta.amount == alpha.amount * rate` may
/// not hold again until the next amount or rate transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangePairState {
    pub alpha: AssetSlot,
    pub beta: AssetSlot,
    pub rate: f64,
    pub tx_id: String,
}

impl ExchangePairState {
    /// The fixed state every UI session starts from.
    pub fn initial() -> Self {
        Self {
            alpha: AssetSlot::new(AssetType::BTC, 0.01),
            beta: AssetSlot::new(AssetType::USDT, 191.34),
            rate: 19133.74,
            tx_id: String::new(),
        }
    }
}

impl Default for ExchangePairState {
    fn default() -> Self {
        Self::initial()
    }
}

//! The closed set of transitions the exchange state accepts.

use serde::Deserialize;
use serde::Serialize;

use crate::asset::AssetType;

/// A discrete state transition, dispatched by the UI input handlers, the
/// rate feed, or the transaction-submission collaborator.
///
/// Serializes as `{"type": "<tag>", "value": ...}` so a host can record an
/// action log and replay it deterministically; see [`crate::replay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Action {
    /// User edited the alpha amount; beta is re-derived from the rate.
    SetAlphaAmount(f64),
    /// User picked a new asset for the alpha side.
    SetAlphaType(AssetType),
    /// User picked a new asset for the beta side.
    SetBetaType(AssetType),
    /// Fresh tick from the rate feed, in beta units per one alpha unit.
    SetRate(f64),
    /// User flipped which asset sits on which side.
    SwapSides,
    /// The submission collaborator broadcast a transaction with this id.
    PublishTransaction(String),
}

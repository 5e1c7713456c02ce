//! Decoding a serialized action stream and deterministic replay.
//!
//! A host records every dispatched action as one JSON object in the shape
//! `{"type": "<tag>", "value": ...}` and can later re-execute the log against
//! the initial state to reproduce a session exactly. This is also the one
//! boundary where [`TransitionError::UnknownAction`] and
//! [`TransitionError::UnknownAsset`] can actually occur: actions constructed
//! in Rust are checked by the compiler, so an unknown tag here means garbage
//! from whatever produced the stream.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::action::Action;
use crate::asset::AssetType;
use crate::error::TransitionError;
use crate::reducer::reduce;
use crate::state::ExchangePairState;

/// Wire shape of one action before the tag is validated.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    value: Value,
}

/// Decodes one serialized action, surfacing the full error taxonomy.
///
/// Unrecognized tags yield [`TransitionError::UnknownAction`], unrecognized
/// asset symbols [`TransitionError::UnknownAsset`], and missing or
/// non-numeric values [`TransitionError::InvalidNumeric`].
pub fn decode(raw: &str) -> Result<Action, TransitionError> {
    let raw: RawAction = serde_json::from_str(raw)
        .map_err(|e| TransitionError::UnknownAction(e.to_string()))?;

    match raw.tag.as_str() {
        "SetAlphaAmount" => Ok(Action::SetAlphaAmount(number(&raw, "alpha amount")?)),
        "SetAlphaType" => Ok(Action::SetAlphaType(asset(&raw)?)),
        "SetBetaType" => Ok(Action::SetBetaType(asset(&raw)?)),
        "SetRate" => Ok(Action::SetRate(number(&raw, "rate")?)),
        "SwapSides" => Ok(Action::SwapSides),
        "PublishTransaction" => match raw.value.as_str() {
            Some(id) => Ok(Action::PublishTransaction(id.to_owned())),
            None => Err(TransitionError::EmptyTransactionId),
        },
        _ => Err(TransitionError::UnknownAction(raw.tag)),
    }
}

/// Re-executes a serialized action stream from `initial`, one action at a
/// time, and returns the final state. Stops at the first bad line or failed
/// transition.
pub fn replay<'a, I>(
    initial: ExchangePairState,
    lines: I,
) -> Result<ExchangePairState, TransitionError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = initial;
    for line in lines {
        let action = decode(line)?;
        state = reduce(&state, &action)?;
    }
    Ok(state)
}

fn number(raw: &RawAction, field: &'static str) -> Result<f64, TransitionError> {
    raw.value
        .as_f64()
        .ok_or(TransitionError::InvalidNumeric {
            field,
            value: f64::NAN,
        })
}

fn asset(raw: &RawAction) -> Result<AssetType, TransitionError> {
    let symbol = raw
        .value
        .as_str()
        .ok_or_else(|| TransitionError::UnknownAsset(raw.value.to_string()))?;
    AssetType::from_str(symbol).map_err(|_| TransitionError::UnknownAsset(symbol.to_owned()))
}

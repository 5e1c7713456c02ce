//! The pure state-transition function for the exchange pair.

use crate::action::Action;
use crate::asset::AssetSlot;
use crate::asset::AssetType;
use crate::error::TransitionError;
use crate::state::ExchangePairState;

/// Applies one action to the state and returns the next state.
///
/// Pure: the input is never mutated, no I/O happens, and the same
/// `(state, action)` pair always produces an equal result. An invalid
/// argument fails fast with a [`TransitionError`]; the caller keeps its
/// original state value.
///
/// The alpha slot is authoritative for amounts: editing the alpha amount or
/// receiving a rate tick re-derives `beta.amount = alpha.amount * rate`.
/// Changing a slot's asset or swapping the sides never recomputes amounts;
/// the numbers the user is looking at must not jump.
pub fn reduce(
    state: &ExchangePairState,
    action: &Action,
) -> Result<ExchangePairState, TransitionError> {
    match action {
        Action::SetAlphaAmount(v) => {
            let v = checked_amount("alpha amount", *v)?;
            Ok(ExchangePairState {
                alpha: AssetSlot::new(state.alpha.asset, v),
                beta: AssetSlot::new(state.beta.asset, v * state.rate),
                ..state.clone()
            })
        }
        Action::SetAlphaType(t) => {
            let (alpha, beta) = assign_asset(state.alpha, state.beta, *t);
            Ok(ExchangePairState {
                alpha,
                beta,
                ..state.clone()
            })
        }
        Action::SetBetaType(t) => {
            let (beta, alpha) = assign_asset(state.beta, state.alpha, *t);
            Ok(ExchangePairState {
                alpha,
                beta,
                ..state.clone()
            })
        }
        Action::SetRate(r) => {
            let r = checked_rate(*r)?;
            Ok(ExchangePairState {
                beta: AssetSlot::new(state.beta.asset, state.alpha.amount * r),
                rate: r,
                ..state.clone()
            })
        }
        Action::SwapSides => Ok(ExchangePairState {
            alpha: state.beta,
            beta: state.alpha,
            ..state.clone()
        }),
        Action::PublishTransaction(id) => {
            if id.is_empty() {
                return Err(TransitionError::EmptyTransactionId);
            }
            Ok(ExchangePairState {
                tx_id: id.clone(),
                ..state.clone()
            })
        }
    }
}

/// Puts `asset` into the primary slot. If the secondary slot already shows
/// `asset`, its asset is displaced to the primary's old one first, so the
/// two sides never show the same asset. Amounts on both slots are left
/// untouched: changing an asset's identity does not rescale the value the
/// user typed.
///
/// Shared by the alpha and beta branches; which slot is "primary" is decided
/// by the caller.
fn assign_asset(
    primary: AssetSlot,
    secondary: AssetSlot,
    asset: AssetType,
) -> (AssetSlot, AssetSlot) {
    let secondary = if secondary.asset == asset {
        AssetSlot::new(primary.asset, secondary.amount)
    } else {
        secondary
    };
    (AssetSlot::new(asset, primary.amount), secondary)
}

fn checked_amount(field: &'static str, value: f64) -> Result<f64, TransitionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TransitionError::InvalidNumeric { field, value })
    }
}

fn checked_rate(value: f64) -> Result<f64, TransitionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TransitionError::InvalidNumeric {
            field: "rate",
            value,
        })
    }
}

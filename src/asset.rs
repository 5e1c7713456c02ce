//! Defines the tradable assets supported by the exchange pair.

use serde::Deserialize;
use serde::Serialize;

/// One of the tradable assets on the settlement network.
///
/// Equality is by symbol identity. The set is closed at compile time;
/// adding an asset means adding a variant here and a ticker below, and the
/// exhaustive matches downstream point out everything else that needs a row.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum AssetType {
    #[default]
    BTC, // Bitcoin
    USDT, // Tether USD
}

impl AssetType {
    /// Returns the ticker used on the settlement network (e.g. "L-BTC").
    pub fn ticker(&self) -> &'static str {
        match self {
            Self::BTC => "L-BTC",
            Self::USDT => "L-USDt",
        }
    }

    /// Returns the plain symbol (e.g. "BTC").
    /// This is handled by the `strum::IntoStaticStr` derive macro.
    pub fn symbol(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the asset.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BTC => "Bitcoin",
            Self::USDT => "Tether USD",
        }
    }

    /// Returns the number of decimal digits the settlement network tracks
    /// for the asset. Both current assets use 8 (satoshi-sized units).
    pub fn decimals(&self) -> u8 {
        match self {
            Self::BTC | Self::USDT => 8,
        }
    }
}

/// One side of the exchange pair: an asset and the amount displayed for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetSlot {
    pub asset: AssetType,
    pub amount: f64,
}

impl AssetSlot {
    pub fn new(asset: AssetType, amount: f64) -> Self {
        Self { asset, amount }
    }
}

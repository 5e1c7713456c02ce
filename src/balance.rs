//! Wallet balance snapshots pushed by the wallet collaborator.
//!
//! Balances are display-only context next to the exchange pair: the wallet
//! module reports them, the UI shows them, and no reducer action ever reads
//! or writes them.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::asset::AssetType;

/// Confirmed balance of a single asset, as reported by the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub asset: AssetType,
    pub value: f64,
}

/// One full balance push from the wallet.
pub type BalanceUpdate = Vec<BalanceEntry>;

/// Latest known balance per asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletBalances(HashMap<AssetType, f64>);

impl WalletBalances {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Replaces the entries named in `update`; assets the update does not
    /// mention keep their last reported value.
    pub fn apply_update(&mut self, update: BalanceUpdate) {
        for entry in update {
            self.0.insert(entry.asset, entry.value);
        }
    }

    /// Balance for `asset`, zero if the wallet never reported one.
    pub fn balance(&self, asset: AssetType) -> f64 {
        self.0.get(&asset).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreported_assets_read_as_zero() {
        let balances = WalletBalances::new();
        assert_eq!(balances.balance(AssetType::BTC), 0.0);
    }

    #[test]
    fn updates_overwrite_only_the_assets_they_mention() {
        let mut balances = WalletBalances::new();
        balances.apply_update(vec![
            BalanceEntry {
                asset: AssetType::BTC,
                value: 0.5,
            },
            BalanceEntry {
                asset: AssetType::USDT,
                value: 1000.0,
            },
        ]);
        balances.apply_update(vec![BalanceEntry {
            asset: AssetType::BTC,
            value: 0.25,
        }]);

        assert_eq!(balances.balance(AssetType::BTC), 0.25);
        assert_eq!(balances.balance(AssetType::USDT), 1000.0);
    }
}

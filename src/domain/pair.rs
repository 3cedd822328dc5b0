//! E-mode pairing configuration.

use crate::domain::{BankId, Decimal, RiskTag};
use serde::{Deserialize, Serialize};

/// A configured rule granting preferential collateral weights when the
/// account borrows `liability_bank` against any of `collateral_banks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmodePair {
    pub collateral_bank_tag: RiskTag,
    pub liability_bank_tag: RiskTag,
    /// Banks sharing the collateral tag.
    pub collateral_banks: Vec<BankId>,
    pub liability_bank: BankId,
    pub asset_weight_init: Decimal,
    pub asset_weight_maint: Decimal,
}

impl EmodePair {
    /// A pair is configured when neither side carries the `UNSET` tag.
    /// Unconfigured pairs never participate in resolution.
    pub fn is_configured(&self) -> bool {
        !self.collateral_bank_tag.is_unset() && !self.liability_bank_tag.is_unset()
    }

    pub fn has_collateral_bank(&self, bank: &BankId) -> bool {
        self.collateral_banks.iter().any(|c| c == bank)
    }

    pub fn weights(&self) -> Weights {
        Weights {
            asset_weight_init: self.asset_weight_init,
            asset_weight_maint: self.asset_weight_maint,
        }
    }
}

/// Initial and maintenance asset weights of a bank or pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub asset_weight_init: Decimal,
    pub asset_weight_maint: Decimal,
}

impl Weights {
    pub fn new(asset_weight_init: Decimal, asset_weight_maint: Decimal) -> Self {
        Self {
            asset_weight_init,
            asset_weight_maint,
        }
    }

    /// Per-field minimum.
    pub fn min(self, other: Weights) -> Weights {
        Weights {
            asset_weight_init: self.asset_weight_init.min(other.asset_weight_init),
            asset_weight_maint: self.asset_weight_maint.min(other.asset_weight_maint),
        }
    }

    /// Per-field maximum.
    pub fn max(self, other: Weights) -> Weights {
        Weights {
            asset_weight_init: self.asset_weight_init.max(other.asset_weight_init),
            asset_weight_maint: self.asset_weight_maint.max(other.asset_weight_maint),
        }
    }
}

/// Smallest `asset_weight_init` across `pairs`, or `None` when empty.
pub fn min_weight(pairs: &[EmodePair]) -> Option<Decimal> {
    pairs.iter().map(|p| p.asset_weight_init).min()
}

//! Per-bank e-mode settings as decoded from on-chain configuration.

use crate::domain::{BankId, Decimal, RiskTag, Weights};
use serde::{Deserialize, Serialize};

/// One entry of a liability bank's e-mode table: borrowing this bank against
/// collateral tagged `collateral_tag` earns these weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmodeEntry {
    pub collateral_tag: RiskTag,
    pub asset_weight_init: Decimal,
    pub asset_weight_maint: Decimal,
}

/// A bank's e-mode tag, entries and default (non-preferential) weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankEmodeConfig {
    pub address: BankId,
    pub tag: RiskTag,
    #[serde(default)]
    pub entries: Vec<EmodeEntry>,
    pub default_weights: Weights,
}

impl BankEmodeConfig {
    pub fn new(address: BankId, tag: RiskTag, default_weights: Weights) -> Self {
        Self {
            address,
            tag,
            entries: Vec::new(),
            default_weights,
        }
    }

    pub fn with_entry(mut self, entry: EmodeEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn has_emode(&self) -> bool {
        !self.tag.is_unset()
    }
}

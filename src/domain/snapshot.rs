//! Snapshot of everything a preview needs: catalog, position and universe.

use crate::domain::{BankEmodeConfig, BankId, EmodePair, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inputs to one e-mode preview, as handed over by the providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub catalog: Vec<EmodePair>,
    /// Per-bank settings; used to build `catalog` when none is given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub banks: Vec<BankEmodeConfig>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub universe: Vec<BankId>,
}

impl Snapshot {
    pub fn new(catalog: Vec<EmodePair>, position: Position, universe: Vec<BankId>) -> Self {
        Self {
            catalog,
            banks: Vec::new(),
            position,
            universe,
        }
    }

    /// Stable key identifying the preview inputs, for caller-side memoization.
    ///
    /// Position sets and the universe hash the same regardless of order; the
    /// catalog and bank settings are hashed in order since they decide
    /// resulting pair order.
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};

        fn hash_var(hasher: &mut Sha256, data: &str) {
            hasher.update((data.len() as u64).to_le_bytes());
            hasher.update(data.as_bytes());
        }

        let mut hasher = Sha256::new();

        hasher.update(b"catalog");
        hasher.update((self.catalog.len() as u64).to_le_bytes());
        for pair in &self.catalog {
            hasher.update(pair.collateral_bank_tag.as_u16().to_le_bytes());
            hasher.update(pair.liability_bank_tag.as_u16().to_le_bytes());
            hasher.update((pair.collateral_banks.len() as u64).to_le_bytes());
            for bank in &pair.collateral_banks {
                hash_var(&mut hasher, bank.as_str());
            }
            hash_var(&mut hasher, pair.liability_bank.as_str());
            hash_var(&mut hasher, &pair.asset_weight_init.to_canonical_string());
            hash_var(&mut hasher, &pair.asset_weight_maint.to_canonical_string());
        }

        hasher.update(b"banks");
        hasher.update((self.banks.len() as u64).to_le_bytes());
        for bank in &self.banks {
            hash_var(&mut hasher, bank.address.as_str());
            hasher.update(bank.tag.as_u16().to_le_bytes());
            hash_var(&mut hasher, &bank.default_weights.asset_weight_init.to_canonical_string());
            hash_var(&mut hasher, &bank.default_weights.asset_weight_maint.to_canonical_string());
            hasher.update((bank.entries.len() as u64).to_le_bytes());
            for entry in &bank.entries {
                hasher.update(entry.collateral_tag.as_u16().to_le_bytes());
                hash_var(&mut hasher, &entry.asset_weight_init.to_canonical_string());
                hash_var(&mut hasher, &entry.asset_weight_maint.to_canonical_string());
            }
        }

        hasher.update(b"liabilities");
        hasher.update((self.position.liabilities.len() as u64).to_le_bytes());
        for bank in &self.position.liabilities {
            hash_var(&mut hasher, bank.as_str());
        }

        hasher.update(b"collateral");
        hasher.update((self.position.collateral.len() as u64).to_le_bytes());
        for bank in &self.position.collateral {
            hash_var(&mut hasher, bank.as_str());
        }

        let universe: BTreeSet<&BankId> = self.universe.iter().collect();
        hasher.update(b"universe");
        hasher.update((universe.len() as u64).to_le_bytes());
        for bank in universe {
            hash_var(&mut hasher, bank.as_str());
        }

        let hash = hasher.finalize();
        format!("hash:{}", hex::encode(&hash[..16]))
    }
}

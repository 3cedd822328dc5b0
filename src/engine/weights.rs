//! Applying resolved e-mode pairs to per-bank collateral weights.

use crate::domain::{BankId, EmodePair, Weights};
use std::collections::BTreeMap;

/// Most conservative preferential weights per collateral bank.
///
/// When a bank is covered by several active pairs, the initial and
/// maintenance weights are each the minimum across those pairs.
pub fn preferential_weights(active_pairs: &[EmodePair]) -> BTreeMap<BankId, Weights> {
    let mut lowest: BTreeMap<BankId, Weights> = BTreeMap::new();
    for pair in active_pairs {
        for bank in &pair.collateral_banks {
            lowest
                .entry(bank.clone())
                .and_modify(|w| *w = w.min(pair.weights()))
                .or_insert_with(|| pair.weights());
        }
    }
    lowest
}

/// Overlay preferential weights on the banks' default weights.
///
/// E-mode never worsens a weight: each field is the maximum of the default
/// and the preferential value. Banks not covered keep their defaults.
pub fn apply_preferential_weights(
    base: &BTreeMap<BankId, Weights>,
    active_pairs: &[EmodePair],
) -> BTreeMap<BankId, Weights> {
    if active_pairs.is_empty() {
        return base.clone();
    }

    let preferential = preferential_weights(active_pairs);
    base.iter()
        .map(|(bank, weights)| {
            let adjusted = match preferential.get(bank) {
                Some(emode) => weights.max(*emode),
                None => *weights,
            };
            (bank.clone(), adjusted)
        })
        .collect()
}

//! Shaping a resolved pair set into the merged preferential view.

use crate::domain::{EmodePair, MergedPreferentialView};

/// The pair with the lowest `asset_weight_init`; ties keep the earliest.
pub fn lowest_weight_pair(pairs: &[EmodePair]) -> Option<&EmodePair> {
    let mut best: Option<&EmodePair> = None;
    for pair in pairs {
        match best {
            Some(current) if pair.asset_weight_init >= current.asset_weight_init => {}
            _ => best = Some(pair),
        }
    }
    best
}

/// Merge the bank and tag lists of every pair, taking the weights from the
/// most conservative (lowest initial weight) pair. `None` for an empty set.
///
/// Lists are deduplicated in first-seen order. Pairs from different
/// collateral-tag groups are merged as-is.
pub fn merge_preferential_view(pairs: &[EmodePair]) -> Option<MergedPreferentialView> {
    let best = lowest_weight_pair(pairs)?;

    let mut view = MergedPreferentialView {
        collateral_banks: Vec::new(),
        collateral_bank_tags: Vec::new(),
        liability_banks: Vec::new(),
        liability_bank_tags: Vec::new(),
        asset_weight_init: best.asset_weight_init,
        asset_weight_maint: best.asset_weight_maint,
    };

    for pair in pairs {
        for bank in &pair.collateral_banks {
            push_unique(&mut view.collateral_banks, bank.clone());
        }
        push_unique(&mut view.collateral_bank_tags, pair.collateral_bank_tag);
        push_unique(&mut view.liability_banks, pair.liability_bank.clone());
        push_unique(&mut view.liability_bank_tags, pair.liability_bank_tag);
    }

    Some(view)
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

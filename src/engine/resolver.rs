//! Eligibility resolution: which configured pairs apply to a position.

use crate::domain::{BankId, EmodePair, RiskTag};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Map each configured pair's liability bank to its liability tag.
pub fn liability_tags(catalog: &[EmodePair]) -> HashMap<&BankId, RiskTag> {
    catalog
        .iter()
        .filter(|p| p.is_configured())
        .map(|p| (&p.liability_bank, p.liability_bank_tag))
        .collect()
}

/// Resolve the e-mode pairs that apply to an account.
///
/// Returns an empty vector when e-mode is inactive. Every active liability
/// must be tier-eligible, and a qualifying collateral-tag group has to cover
/// the tags of all of them. When several groups qualify, all of their pairs
/// are returned, groups in ascending tag order.
///
/// With no active liabilities the requirement set is empty: any pair whose
/// collateral banks intersect the active collateral is a candidate and every
/// group qualifies.
pub fn resolve(
    catalog: &[EmodePair],
    liabilities: &BTreeSet<BankId>,
    collateral: &BTreeSet<BankId>,
) -> Vec<EmodePair> {
    let tag_of = liability_tags(catalog);

    let mut required_tags = BTreeSet::new();
    for bank in liabilities {
        match tag_of.get(bank) {
            Some(tag) => {
                required_tags.insert(*tag);
            }
            None => {
                tracing::trace!(bank = %bank, "untagged liability disables e-mode");
                return Vec::new();
            }
        }
    }

    let possible: Vec<&EmodePair> = catalog
        .iter()
        .filter(|p| p.is_configured())
        .filter(|p| liabilities.is_empty() || liabilities.contains(&p.liability_bank))
        .filter(|p| p.collateral_banks.iter().any(|c| collateral.contains(c)))
        .collect();
    if possible.is_empty() {
        return Vec::new();
    }

    let mut by_collateral_tag: BTreeMap<RiskTag, Vec<&EmodePair>> = BTreeMap::new();
    for pair in possible {
        by_collateral_tag
            .entry(pair.collateral_bank_tag)
            .or_default()
            .push(pair);
    }

    let mut resolved = Vec::new();
    for (collateral_tag, group) in by_collateral_tag {
        let supports: BTreeSet<RiskTag> = group.iter().map(|p| p.liability_bank_tag).collect();
        if supports.is_superset(&required_tags) {
            tracing::trace!(%collateral_tag, pairs = group.len(), "collateral group qualifies");
            resolved.extend(group.into_iter().cloned());
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Decimal;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn bank(s: &str) -> BankId {
        BankId::from(s)
    }

    fn set(banks: &[&str]) -> BTreeSet<BankId> {
        banks.iter().map(|b| bank(b)).collect()
    }

    fn pair(coll_tag: u16, liab_tag: u16, coll: &[&str], liab: &str, init: &str) -> EmodePair {
        EmodePair {
            collateral_bank_tag: RiskTag::new(coll_tag),
            liability_bank_tag: RiskTag::new(liab_tag),
            collateral_banks: coll.iter().map(|c| bank(c)).collect(),
            liability_bank: bank(liab),
            asset_weight_init: d(init),
            asset_weight_maint: d(init),
        }
    }

    #[test]
    fn test_single_pair_resolves() {
        let catalog = vec![pair(1, 10, &["C1"], "L1", "0.9")];
        let resolved = resolve(&catalog, &set(&["L1"]), &set(&["C1"]));
        assert_eq!(resolved, catalog);
    }

    #[test]
    fn test_empty_position_resolves_nothing() {
        let catalog = vec![pair(1, 10, &["C1"], "L1", "0.9")];
        assert!(resolve(&catalog, &set(&[]), &set(&[])).is_empty());
    }

    #[test]
    fn test_collateral_only_resolves_candidates() {
        let catalog = vec![
            pair(1, 10, &["C1"], "L1", "0.9"),
            pair(2, 10, &["C2"], "L1", "0.8"),
        ];
        let resolved = resolve(&catalog, &set(&[]), &set(&["C1"]));
        assert_eq!(resolved, vec![catalog[0].clone()]);
    }

    #[test]
    fn test_untagged_liability_disables_everything() {
        let catalog = vec![pair(1, 10, &["C1"], "L1", "0.9")];
        let resolved = resolve(&catalog, &set(&["L1", "L2"]), &set(&["C1"]));
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_unconfigured_pairs_are_ignored() {
        let catalog = vec![pair(1, 0, &["C1"], "L1", "0.9")];
        assert!(resolve(&catalog, &set(&["L1"]), &set(&["C1"])).is_empty());

        let catalog = vec![pair(0, 10, &["C1"], "L1", "0.9")];
        assert!(resolve(&catalog, &set(&["L1"]), &set(&["C1"])).is_empty());
    }

    #[test]
    fn test_group_must_cover_every_required_tag() {
        // Collateral tag 1 only covers liability tag 10; L_Y (tag 20) is
        // configured only against collateral tag 2 which the account lacks.
        let catalog = vec![
            pair(1, 10, &["C1"], "L_X", "0.9"),
            pair(2, 20, &["C2"], "L_Y", "0.8"),
        ];
        let resolved = resolve(&catalog, &set(&["L_X", "L_Y"]), &set(&["C1"]));
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_group_covering_two_tags_returns_both_pairs() {
        let catalog = vec![
            pair(1, 10, &["C1"], "L_X", "0.9"),
            pair(1, 20, &["C1"], "L_Y", "0.8"),
        ];
        let resolved = resolve(&catalog, &set(&["L_X", "L_Y"]), &set(&["C1"]));
        assert_eq!(resolved, catalog);
    }

    #[test]
    fn test_multiple_qualifying_groups_are_all_returned() {
        let catalog = vec![
            pair(2, 10, &["C2"], "L1", "0.7"),
            pair(1, 10, &["C1"], "L1", "0.9"),
        ];
        let resolved = resolve(&catalog, &set(&["L1"]), &set(&["C1", "C2"]));
        assert_eq!(resolved.len(), 2);
        // Ascending collateral tag order.
        assert_eq!(resolved[0].collateral_bank_tag, RiskTag::new(1));
        assert_eq!(resolved[1].collateral_bank_tag, RiskTag::new(2));
    }

    #[test]
    fn test_pairs_for_inactive_liabilities_are_excluded() {
        let catalog = vec![
            pair(1, 10, &["C1"], "L1", "0.9"),
            pair(1, 10, &["C1"], "L2", "0.85"),
        ];
        let resolved = resolve(&catalog, &set(&["L1"]), &set(&["C1"]));
        assert_eq!(resolved, vec![catalog[0].clone()]);
    }

    #[test]
    fn test_liability_tags_skip_unconfigured() {
        let catalog = vec![
            pair(1, 10, &["C1"], "L1", "0.9"),
            pair(0, 20, &["C1"], "L2", "0.9"),
        ];
        let tags = liability_tags(&catalog);
        assert_eq!(tags.get(&bank("L1")), Some(&RiskTag::new(10)));
        assert!(tags.get(&bank("L2")).is_none());
    }
}

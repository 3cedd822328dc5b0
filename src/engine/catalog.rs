//! Building the pair catalog from per-bank e-mode settings, plus the lookup
//! views used to show which banks pair with which.

use crate::domain::{BankEmodeConfig, BankId, EmodePair, RiskTag};
use std::collections::BTreeMap;

/// Expand per-bank e-mode tables into the flat pair catalog.
///
/// Every tagged bank contributes one pair per entry; the pair's collateral
/// banks are all banks (in input order) carrying the entry's collateral tag.
/// Entries pointing at the `UNSET` tag are dropped.
pub fn build_catalog(banks: &[BankEmodeConfig]) -> Vec<EmodePair> {
    let by_tag = banks_by_tag(banks);
    let mut catalog = Vec::new();

    for bank in banks.iter().filter(|b| b.has_emode()) {
        for entry in &bank.entries {
            if entry.collateral_tag.is_unset() {
                continue;
            }
            let collateral_banks = by_tag.get(&entry.collateral_tag).cloned().unwrap_or_default();
            if collateral_banks.is_empty() {
                tracing::warn!(
                    liability_bank = %bank.address,
                    collateral_tag = %entry.collateral_tag,
                    "e-mode entry references a tag with no banks"
                );
            }
            catalog.push(EmodePair {
                collateral_bank_tag: entry.collateral_tag,
                liability_bank_tag: bank.tag,
                collateral_banks,
                liability_bank: bank.address.clone(),
                asset_weight_init: entry.asset_weight_init,
                asset_weight_maint: entry.asset_weight_maint,
            });
        }
    }

    tracing::debug!(banks = banks.len(), pairs = catalog.len(), "built e-mode catalog");
    catalog
}

/// Group bank addresses by their e-mode tag, keeping input order per group.
pub fn banks_by_tag(banks: &[BankEmodeConfig]) -> BTreeMap<RiskTag, Vec<BankId>> {
    let mut grouped: BTreeMap<RiskTag, Vec<BankId>> = BTreeMap::new();
    for bank in banks {
        grouped.entry(bank.tag).or_default().push(bank.address.clone());
    }
    grouped
}

/// For each liability bank, the banks that can serve as its collateral.
///
/// A candidate is any tagged bank (other than the liability bank itself)
/// whose tag matches the pair's collateral tag.
pub fn collateral_banks_by_liability<'a>(
    catalog: &'a [EmodePair],
    banks: &[BankEmodeConfig],
) -> BTreeMap<BankId, Vec<(BankId, &'a EmodePair)>> {
    let mut result: BTreeMap<BankId, Vec<(BankId, &'a EmodePair)>> = BTreeMap::new();
    for pair in catalog {
        for candidate in banks {
            if candidate.address == pair.liability_bank {
                continue;
            }
            if candidate.has_emode() && candidate.tag == pair.collateral_bank_tag {
                result
                    .entry(pair.liability_bank.clone())
                    .or_default()
                    .push((candidate.address.clone(), pair));
            }
        }
    }
    result
}

/// For each collateral bank, the liability banks it can be borrowed against.
///
/// Pairs whose liability bank is not present in `banks` are skipped.
pub fn liability_banks_by_collateral<'a>(
    catalog: &'a [EmodePair],
    banks: &[BankEmodeConfig],
) -> BTreeMap<BankId, Vec<(BankId, &'a EmodePair)>> {
    let mut result: BTreeMap<BankId, Vec<(BankId, &'a EmodePair)>> = BTreeMap::new();
    for pair in catalog {
        if !banks.iter().any(|b| b.address == pair.liability_bank) {
            tracing::warn!(
                liability_bank = %pair.liability_bank,
                "liability bank referenced in e-mode pair not found in banks"
            );
            continue;
        }
        for candidate in banks {
            if candidate.address == pair.liability_bank {
                continue;
            }
            if candidate.has_emode() && candidate.tag == pair.collateral_bank_tag {
                result
                    .entry(candidate.address.clone())
                    .or_default()
                    .push((pair.liability_bank.clone(), pair));
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decimal, EmodeEntry, Weights};

    const SOL: RiskTag = RiskTag(501);
    const LST: RiskTag = RiskTag(1571);

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn base() -> Weights {
        Weights::new(d("0.5"), d("0.6"))
    }

    fn entry(tag: RiskTag, init: &str, maint: &str) -> EmodeEntry {
        EmodeEntry {
            collateral_tag: tag,
            asset_weight_init: d(init),
            asset_weight_maint: d(maint),
        }
    }

    fn banks() -> Vec<BankEmodeConfig> {
        vec![
            BankEmodeConfig::new(BankId::from("SOL"), SOL, base())
                .with_entry(entry(LST, "0.9", "0.95"))
                .with_entry(entry(RiskTag::UNSET, "0.8", "0.85")),
            BankEmodeConfig::new(BankId::from("JITOSOL"), LST, base()),
            BankEmodeConfig::new(BankId::from("MSOL"), LST, base()),
            BankEmodeConfig::new(BankId::from("USDC"), RiskTag::UNSET, base())
                .with_entry(entry(LST, "0.7", "0.75")),
        ]
    }

    #[test]
    fn test_build_catalog() {
        let catalog = build_catalog(&banks());

        // USDC is untagged and the UNSET entry is dropped.
        assert_eq!(catalog.len(), 1);
        let pair = &catalog[0];
        assert_eq!(pair.liability_bank, BankId::from("SOL"));
        assert_eq!(pair.liability_bank_tag, SOL);
        assert_eq!(pair.collateral_bank_tag, LST);
        assert_eq!(
            pair.collateral_banks,
            vec![BankId::from("JITOSOL"), BankId::from("MSOL")]
        );
        assert_eq!(pair.asset_weight_init, d("0.9"));
        assert_eq!(pair.asset_weight_maint, d("0.95"));
        assert!(pair.is_configured());
    }

    #[test]
    fn test_build_catalog_with_missing_collateral_tag() {
        let banks = vec![BankEmodeConfig::new(BankId::from("SOL"), SOL, base())
            .with_entry(entry(RiskTag::new(7), "0.9", "0.95"))];
        let catalog = build_catalog(&banks);
        assert_eq!(catalog.len(), 1);
        assert!(catalog[0].collateral_banks.is_empty());
    }

    #[test]
    fn test_banks_by_tag() {
        let grouped = banks_by_tag(&banks());
        assert_eq!(grouped[&LST], vec![BankId::from("JITOSOL"), BankId::from("MSOL")]);
        assert_eq!(grouped[&RiskTag::UNSET], vec![BankId::from("USDC")]);
    }

    #[test]
    fn test_collateral_banks_by_liability() {
        let banks = banks();
        let catalog = build_catalog(&banks);
        let view = collateral_banks_by_liability(&catalog, &banks);

        let sol = &view[&BankId::from("SOL")];
        let names: Vec<_> = sol.iter().map(|(b, _)| b.as_str()).collect();
        assert_eq!(names, vec!["JITOSOL", "MSOL"]);
    }

    #[test]
    fn test_liability_banks_by_collateral() {
        let banks = banks();
        let catalog = build_catalog(&banks);
        let view = liability_banks_by_collateral(&catalog, &banks);

        assert_eq!(view.len(), 2);
        assert_eq!(view[&BankId::from("MSOL")][0].0, BankId::from("SOL"));
        assert!(!view.contains_key(&BankId::from("USDC")));
    }

    #[test]
    fn test_liability_banks_by_collateral_skips_unknown_liability() {
        let banks = banks();
        let mut catalog = build_catalog(&banks);
        catalog[0].liability_bank = BankId::from("GONE");
        assert!(liability_banks_by_collateral(&catalog, &banks).is_empty());
    }
}

//! Account position: the sets of banks with outstanding borrows or deposits.

use crate::domain::{Action, BankId, Decimal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single decoded account balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub bank: BankId,
    pub asset_shares: Decimal,
    pub liability_shares: Decimal,
}

impl Balance {
    pub fn new(bank: BankId, asset_shares: Decimal, liability_shares: Decimal) -> Self {
        Self {
            bank,
            asset_shares,
            liability_shares,
        }
    }
}

/// Active liability and collateral banks of an account.
///
/// Uses BTreeSet so every computation over a position iterates in a
/// deterministic order regardless of how the sets were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub liabilities: BTreeSet<BankId>,
    pub collateral: BTreeSet<BankId>,
}

impl Position {
    pub fn new(
        liabilities: impl IntoIterator<Item = BankId>,
        collateral: impl IntoIterator<Item = BankId>,
    ) -> Self {
        Self {
            liabilities: liabilities.into_iter().collect(),
            collateral: collateral.into_iter().collect(),
        }
    }

    /// Derive the active sets from decoded balances: positive liability
    /// shares mark an active borrow, positive asset shares an active deposit.
    pub fn from_balances(balances: &[Balance]) -> Self {
        let liabilities = balances
            .iter()
            .filter(|b| b.liability_shares.is_positive())
            .map(|b| b.bank.clone())
            .collect();
        let collateral = balances
            .iter()
            .filter(|b| b.asset_shares.is_positive())
            .map(|b| b.bank.clone())
            .collect();
        Self {
            liabilities,
            collateral,
        }
    }

    pub fn has_liability(&self, bank: &BankId) -> bool {
        self.liabilities.contains(bank)
    }

    pub fn has_collateral(&self, bank: &BankId) -> bool {
        self.collateral.contains(bank)
    }

    /// Return the position that would result from `action` on `bank`.
    /// `self` is left untouched.
    pub fn apply(&self, action: Action, bank: &BankId) -> Position {
        let mut next = self.clone();
        match action {
            Action::Borrow => {
                next.liabilities.insert(bank.clone());
            }
            Action::Repay => {
                next.liabilities.remove(bank);
            }
            Action::Supply => {
                next.collateral.insert(bank.clone());
            }
            Action::Withdraw => {
                next.collateral.remove(bank);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_from_balances_splits_by_share_side() {
        let balances = vec![
            Balance::new(BankId::from("SOL"), d("10"), d("0")),
            Balance::new(BankId::from("USDC"), d("0"), d("250.5")),
            Balance::new(BankId::from("DUST"), d("0"), d("0")),
        ];

        let position = Position::from_balances(&balances);
        assert_eq!(position.collateral, BTreeSet::from([BankId::from("SOL")]));
        assert_eq!(position.liabilities, BTreeSet::from([BankId::from("USDC")]));
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let position = Position::new([BankId::from("L1")], [BankId::from("C1")]);

        let borrowed = position.apply(Action::Borrow, &BankId::from("L2"));
        assert!(borrowed.has_liability(&BankId::from("L2")));
        assert!(!position.has_liability(&BankId::from("L2")));

        let withdrawn = position.apply(Action::Withdraw, &BankId::from("C1"));
        assert!(withdrawn.collateral.is_empty());
        assert!(position.has_collateral(&BankId::from("C1")));
    }

    #[test]
    fn test_apply_is_set_semantics() {
        let position = Position::new([BankId::from("L1")], []);
        let again = position.apply(Action::Borrow, &BankId::from("L1"));
        assert_eq!(again, position);

        let repay_missing = position.apply(Action::Repay, &BankId::from("L9"));
        assert_eq!(repay_missing, position);
    }

    #[test]
    fn test_supply_then_withdraw_restores_position() {
        let position = Position::new([BankId::from("L1")], [BankId::from("C1")]);
        let bank = BankId::from("C2");
        let restored = position
            .apply(Action::Supply, &bank)
            .apply(Action::Withdraw, &bank);
        assert_eq!(restored, position);
    }
}

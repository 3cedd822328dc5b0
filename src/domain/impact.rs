//! Hypothetical actions and the e-mode impact reports computed for them.

use crate::domain::{BankId, Decimal, EmodePair, RiskTag};
use serde::{Deserialize, Serialize};

/// A hypothetical account action on a single bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Borrow,
    Repay,
    Supply,
    Withdraw,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Borrow, Action::Repay, Action::Supply, Action::Withdraw];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Borrow => write!(f, "borrow"),
            Action::Repay => write!(f, "repay"),
            Action::Supply => write!(f, "supply"),
            Action::Withdraw => write!(f, "withdraw"),
        }
    }
}

/// How an action changes the account's e-mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionStatus {
    /// E-mode off before and after.
    InactiveEmode,
    /// Off before, on after.
    ActivateEmode,
    /// On before, off after.
    RemoveEmode,
    /// On both sides with a higher lowest weight after.
    IncreaseEmode,
    /// On both sides with a lower lowest weight after.
    ReduceEmode,
    /// On both sides, same tier extended.
    ExtendEmode,
}

/// Presentation view of a resolved pair set.
///
/// Bank and tag lists are the deduplicated union across every resulting
/// pair; the weights come from the single pair with the lowest
/// `asset_weight_init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPreferentialView {
    pub collateral_banks: Vec<BankId>,
    pub collateral_bank_tags: Vec<RiskTag>,
    pub liability_banks: Vec<BankId>,
    pub liability_bank_tags: Vec<RiskTag>,
    pub asset_weight_init: Decimal,
    pub asset_weight_maint: Decimal,
}

/// Result of simulating one action on one bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionImpact {
    pub status: TransitionStatus,
    pub resulting_pairs: Vec<EmodePair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_pair: Option<MergedPreferentialView>,
}

impl ActionImpact {
    /// Scalar projection of the merged view: the lowest initial weight of
    /// the resulting pairs.
    pub fn lowest_asset_weight(&self) -> Option<Decimal> {
        self.best_pair.as_ref().map(|view| view.asset_weight_init)
    }
}

/// Per-bank bundle of impacts. `None` means the action does not apply to the
/// bank in the current position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionImpacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrow: Option<ActionImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repay: Option<ActionImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<ActionImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdraw: Option<ActionImpact>,
}

impl ActionImpacts {
    pub fn get(&self, action: Action) -> Option<&ActionImpact> {
        match action {
            Action::Borrow => self.borrow.as_ref(),
            Action::Repay => self.repay.as_ref(),
            Action::Supply => self.supply.as_ref(),
            Action::Withdraw => self.withdraw.as_ref(),
        }
    }

    pub fn set(&mut self, action: Action, impact: ActionImpact) {
        let slot = match action {
            Action::Borrow => &mut self.borrow,
            Action::Repay => &mut self.repay,
            Action::Supply => &mut self.supply,
            Action::Withdraw => &mut self.withdraw,
        };
        *slot = Some(impact);
    }

    pub fn is_empty(&self) -> bool {
        Action::ALL.iter().all(|a| self.get(*a).is_none())
    }
}

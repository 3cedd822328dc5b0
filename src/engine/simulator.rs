//! Action-impact simulation: how a hypothetical action changes e-mode.

use super::classifier::{classify, compare_weights};
use super::preview::merge_preferential_view;
use super::resolver::{liability_tags, resolve};
use crate::domain::{
    min_weight, Action, ActionImpact, BankId, EmodePair, Position, RiskTag, TransitionStatus,
};
use std::collections::{BTreeSet, HashMap};

/// Baseline state shared by every simulated action on one position.
///
/// Resolves the current eligibility once; each call to [`Simulation::impact`]
/// re-resolves against a perturbed copy of the position.
pub struct Simulation<'a> {
    catalog: &'a [EmodePair],
    position: Position,
    baseline: Vec<EmodePair>,
    liability_tags: HashMap<&'a BankId, RiskTag>,
    /// Tags of the banks currently borrowed.
    existing_tags: BTreeSet<RiskTag>,
}

impl<'a> Simulation<'a> {
    pub fn new(catalog: &'a [EmodePair], position: Position) -> Self {
        let baseline = resolve(catalog, &position.liabilities, &position.collateral);
        let liability_tags = liability_tags(catalog);
        let existing_tags = position
            .liabilities
            .iter()
            .filter_map(|bank| liability_tags.get(bank).copied())
            .collect();

        Self {
            catalog,
            position,
            baseline,
            liability_tags,
            existing_tags,
        }
    }

    pub fn baseline(&self) -> &[EmodePair] {
        &self.baseline
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    fn baseline_on(&self) -> bool {
        !self.baseline.is_empty()
    }

    /// Simulate `action` on `bank`.
    pub fn impact(&self, bank: &BankId, action: Action) -> ActionImpact {
        let next = self.position.apply(action, bank);
        let after = resolve(self.catalog, &next.liabilities, &next.collateral);
        let generic = classify(&self.baseline, &after);

        let status = match action {
            Action::Borrow => self.borrow_status(bank, &after, generic),
            Action::Repay => generic,
            Action::Supply => self.supply_status(&after),
            Action::Withdraw => self.withdraw_status(&after),
        };

        tracing::trace!(bank = %bank, %action, ?status, pairs = after.len(), "simulated action");

        let best_pair = merge_preferential_view(&after);
        ActionImpact {
            status,
            resulting_pairs: after,
            best_pair,
        }
    }

    fn borrow_status(
        &self,
        bank: &BankId,
        after: &[EmodePair],
        generic: TransitionStatus,
    ) -> TransitionStatus {
        match self.liability_tags.get(bank) {
            None if self.baseline_on() => TransitionStatus::RemoveEmode,
            None => TransitionStatus::InactiveEmode,
            Some(_) if !self.baseline_on() => generic,
            Some(_) if after.is_empty() => TransitionStatus::RemoveEmode,
            Some(tag) if self.existing_tags.contains(tag) => TransitionStatus::ExtendEmode,
            Some(_) => generic,
        }
    }

    fn supply_status(&self, after: &[EmodePair]) -> TransitionStatus {
        match (self.baseline_on(), !after.is_empty()) {
            (false, true) => TransitionStatus::ActivateEmode,
            (true, true) => TransitionStatus::ExtendEmode,
            (true, false) | (false, false) => TransitionStatus::InactiveEmode,
        }
    }

    fn withdraw_status(&self, after: &[EmodePair]) -> TransitionStatus {
        match (min_weight(&self.baseline), min_weight(after)) {
            (None, _) => TransitionStatus::InactiveEmode,
            (Some(_), None) => TransitionStatus::RemoveEmode,
            (Some(before), Some(after)) => compare_weights(before, after),
        }
    }
}

/// Simulate a single action on a single bank against the given position.
pub fn simulate(
    catalog: &[EmodePair],
    liabilities: &BTreeSet<BankId>,
    collateral: &BTreeSet<BankId>,
    bank: &BankId,
    action: Action,
) -> ActionImpact {
    let position = Position {
        liabilities: liabilities.clone(),
        collateral: collateral.clone(),
    };
    Simulation::new(catalog, position).impact(bank, action)
}

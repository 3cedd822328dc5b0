//! Per-bank fan-out of every applicable hypothetical action.

use super::simulator::Simulation;
use crate::domain::{Action, ActionImpacts, BankId, EmodePair, Position};
use std::collections::{BTreeMap, BTreeSet};

/// Whether `action` on `bank` is a meaningful hypothetical for `position`.
///
/// - Borrow: the bank is not already active collateral.
/// - Supply: the bank is a collateral bank of some configured pair and holds
///   no active balance on either side.
/// - Repay: the bank is an active liability.
/// - Withdraw: the bank is active collateral.
pub fn is_applicable(
    catalog: &[EmodePair],
    position: &Position,
    bank: &BankId,
    action: Action,
) -> bool {
    match action {
        Action::Borrow => !position.has_collateral(bank),
        Action::Supply => {
            is_configured_collateral(catalog, bank)
                && !position.has_liability(bank)
                && !position.has_collateral(bank)
        }
        Action::Repay => position.has_liability(bank),
        Action::Withdraw => position.has_collateral(bank),
    }
}

fn is_configured_collateral(catalog: &[EmodePair], bank: &BankId) -> bool {
    catalog
        .iter()
        .filter(|p| p.is_configured())
        .any(|p| p.has_collateral_bank(bank))
}

/// Simulate every applicable action for every bank in `universe`.
///
/// Each bank in the universe gets an entry; inapplicable actions are left as
/// `None` inside it.
pub fn simulate_all(
    catalog: &[EmodePair],
    liabilities: &BTreeSet<BankId>,
    collateral: &BTreeSet<BankId>,
    universe: &[BankId],
) -> BTreeMap<BankId, ActionImpacts> {
    let position = Position {
        liabilities: liabilities.clone(),
        collateral: collateral.clone(),
    };
    let simulation = Simulation::new(catalog, position);

    let mut result = BTreeMap::new();
    for bank in universe {
        let mut impacts = ActionImpacts::default();
        for action in Action::ALL {
            if is_applicable(catalog, simulation.position(), bank, action) {
                impacts.set(action, simulation.impact(bank, action));
            }
        }
        result.insert(bank.clone(), impacts);
    }

    tracing::debug!(
        banks = result.len(),
        pairs = catalog.len(),
        baseline_pairs = simulation.baseline().len(),
        "simulated e-mode impacts"
    );
    result
}

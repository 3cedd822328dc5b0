//! Preview report assembled from a snapshot, as printed by the binary.

use crate::config::PreviewMode;
use crate::domain::{
    Action, ActionImpacts, BankId, Decimal, EmodePair, MergedPreferentialView, Snapshot,
    TransitionStatus,
};
use crate::engine::{build_catalog, merge_preferential_view, resolve, simulate_all};
use serde::Serialize;
use std::collections::BTreeMap;

/// Status plus scalar lowest weight for one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowestWeightImpact {
    pub status: TransitionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_asset_weight: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BankImpacts {
    Full(ActionImpacts),
    LowestWeight(BTreeMap<Action, LowestWeightImpact>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewReport {
    pub fingerprint: String,
    /// Pairs that apply to the current position.
    pub active: Vec<EmodePair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_view: Option<MergedPreferentialView>,
    pub impacts: BTreeMap<BankId, BankImpacts>,
}

impl PreviewReport {
    /// Build the report for `snapshot`. A snapshot carrying only `banks` is
    /// previewed against the catalog built from them.
    pub fn build(snapshot: &Snapshot, mode: PreviewMode) -> Self {
        let built;
        let catalog: &[EmodePair] = if snapshot.catalog.is_empty() && !snapshot.banks.is_empty() {
            built = build_catalog(&snapshot.banks);
            &built
        } else {
            &snapshot.catalog
        };

        let position = &snapshot.position;
        let active = resolve(catalog, &position.liabilities, &position.collateral);
        let active_view = merge_preferential_view(&active);

        let impacts = simulate_all(
            catalog,
            &position.liabilities,
            &position.collateral,
            &snapshot.universe,
        )
        .into_iter()
        .map(|(bank, impacts)| (bank, project(impacts, mode)))
        .collect();

        PreviewReport {
            fingerprint: snapshot.fingerprint(),
            active,
            active_view,
            impacts,
        }
    }
}

fn project(impacts: ActionImpacts, mode: PreviewMode) -> BankImpacts {
    match mode {
        PreviewMode::Full => BankImpacts::Full(impacts),
        PreviewMode::LowestWeight => BankImpacts::LowestWeight(
            Action::ALL
                .iter()
                .filter_map(|action| {
                    impacts.get(*action).map(|impact| {
                        (
                            *action,
                            LowestWeightImpact {
                                status: impact.status,
                                lowest_asset_weight: impact.lowest_asset_weight(),
                            },
                        )
                    })
                })
                .collect(),
        ),
    }
}

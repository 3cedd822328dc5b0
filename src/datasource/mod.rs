//! Snapshot providers: where the catalog, position and universe come from.

use crate::domain::{BankId, Decimal, Snapshot};
use crate::engine::build_catalog;
use thiserror::Error;

pub mod file;
pub mod mock;

pub use file::FileSnapshotSource;
pub use mock::MockSnapshotSource;

/// Source of preview snapshots.
///
/// Implementations return snapshots that already passed [`prepare_snapshot`].
pub trait SnapshotSource: std::fmt::Debug {
    fn load(&self) -> Result<Snapshot, SnapshotError>;
}

/// Error type for snapshot loading.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Weight {field} = {value} for liability bank {bank} is outside [0, 1]")]
    InvalidWeight {
        bank: BankId,
        field: &'static str,
        value: Decimal,
    },
}

/// Build the catalog from bank settings when needed, then validate weights.
///
/// Unconfigured pairs are kept; the engine ignores them on its own.
pub fn prepare_snapshot(mut snapshot: Snapshot) -> Result<Snapshot, SnapshotError> {
    if snapshot.catalog.is_empty() && !snapshot.banks.is_empty() {
        for bank in &snapshot.banks {
            if let Some(entry) = bank.entries.iter().find(|e| !e.collateral_tag.is_unset()) {
                if !bank.has_emode() {
                    tracing::warn!(
                        bank = %bank.address,
                        tag = %entry.collateral_tag,
                        "untagged bank carries e-mode entries; they are ignored"
                    );
                }
            }
        }
        snapshot.catalog = build_catalog(&snapshot.banks);
    }

    for pair in &snapshot.catalog {
        check_weight(&pair.liability_bank, "assetWeightInit", pair.asset_weight_init)?;
        check_weight(&pair.liability_bank, "assetWeightMaint", pair.asset_weight_maint)?;
    }

    let unconfigured = snapshot.catalog.iter().filter(|p| !p.is_configured()).count();
    if unconfigured > 0 {
        tracing::warn!(unconfigured, "catalog contains unconfigured e-mode pairs");
    }

    Ok(snapshot)
}

fn check_weight(bank: &BankId, field: &'static str, value: Decimal) -> Result<(), SnapshotError> {
    if value.is_unit_interval() {
        Ok(())
    } else {
        Err(SnapshotError::InvalidWeight {
            bank: bank.clone(),
            field,
            value,
        })
    }
}

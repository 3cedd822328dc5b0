//! In-memory snapshot source for tests.

use super::{prepare_snapshot, SnapshotError, SnapshotSource};
use crate::domain::{BankEmodeConfig, BankId, EmodePair, Position, Snapshot};

/// Snapshot source assembled with builder calls.
#[derive(Debug, Clone, Default)]
pub struct MockSnapshotSource {
    snapshot: Snapshot,
}

impl MockSnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pair(mut self, pair: EmodePair) -> Self {
        self.snapshot.catalog.push(pair);
        self
    }

    pub fn with_pairs(mut self, pairs: Vec<EmodePair>) -> Self {
        self.snapshot.catalog.extend(pairs);
        self
    }

    pub fn with_bank(mut self, bank: BankEmodeConfig) -> Self {
        self.snapshot.banks.push(bank);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.snapshot.position = position;
        self
    }

    pub fn with_universe(mut self, universe: Vec<BankId>) -> Self {
        self.snapshot.universe = universe;
        self
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn load(&self) -> Result<Snapshot, SnapshotError> {
        prepare_snapshot(self.snapshot.clone())
    }
}

//! Domain types for e-mode eligibility.
//!
//! This module provides:
//! - Lossless weight handling via the Decimal wrapper
//! - Primitives: BankId, RiskTag
//! - EmodePair catalog entries and per-bank e-mode settings
//! - Account positions and the action/impact report types
//! - Preview snapshots with a stable fingerprint

pub mod bank;
pub mod decimal;
pub mod impact;
pub mod pair;
pub mod position;
pub mod primitives;
pub mod snapshot;

pub use bank::{BankEmodeConfig, EmodeEntry};
pub use decimal::Decimal;
pub use impact::{Action, ActionImpact, ActionImpacts, MergedPreferentialView, TransitionStatus};
pub use pair::{min_weight, EmodePair, Weights};
pub use position::{Balance, Position};
pub use primitives::{BankId, RiskTag};
pub use snapshot::Snapshot;

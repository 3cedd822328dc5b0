pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod report;

pub use config::{Config, PreviewMode};
pub use datasource::{FileSnapshotSource, MockSnapshotSource, SnapshotError, SnapshotSource};
pub use domain::{
    Action, ActionImpact, ActionImpacts, Balance, BankEmodeConfig, BankId, Decimal, EmodeEntry,
    EmodePair, MergedPreferentialView, Position, RiskTag, Snapshot, TransitionStatus, Weights,
};
pub use engine::{classify, resolve, simulate, simulate_all, Simulation};
pub use error::AppError;
pub use report::PreviewReport;

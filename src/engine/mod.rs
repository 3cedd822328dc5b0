//! Pure e-mode eligibility engine.
//!
//! Everything here is synchronous and side-effect free: the catalog and the
//! position are passed in explicitly and nothing is cached between calls.

pub mod catalog;
pub mod classifier;
pub mod fan_out;
pub mod preview;
pub mod resolver;
pub mod simulator;
pub mod weights;

pub use catalog::{
    banks_by_tag, build_catalog, collateral_banks_by_liability, liability_banks_by_collateral,
};
pub use classifier::classify;
pub use fan_out::{is_applicable, simulate_all};
pub use preview::merge_preferential_view;
pub use resolver::resolve;
pub use simulator::{simulate, Simulation};
pub use weights::{apply_preferential_weights, preferential_weights};

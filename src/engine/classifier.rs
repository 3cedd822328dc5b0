//! Generic before/after transition classification.

use crate::domain::{min_weight, Decimal, EmodePair, TransitionStatus};
use std::cmp::Ordering;

/// Classify the change from `before` to `after`.
pub fn classify(before: &[EmodePair], after: &[EmodePair]) -> TransitionStatus {
    match (min_weight(before), min_weight(after)) {
        (None, None) => TransitionStatus::InactiveEmode,
        (None, Some(_)) => TransitionStatus::ActivateEmode,
        (Some(_), None) => TransitionStatus::RemoveEmode,
        (Some(b), Some(a)) => compare_weights(b, a),
    }
}

/// Compare lowest weights when e-mode is on on both sides.
pub fn compare_weights(before: Decimal, after: Decimal) -> TransitionStatus {
    match after.cmp(&before) {
        Ordering::Greater => TransitionStatus::IncreaseEmode,
        Ordering::Less => TransitionStatus::ReduceEmode,
        Ordering::Equal => TransitionStatus::ExtendEmode,
    }
}

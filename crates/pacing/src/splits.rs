//! Projections from a trial onto its split times.

use crate::models::{Splits, Trial};

/// The eight interval times of a trial, in lap order.
pub fn splits(trial: &Trial) -> Splits {
    *trial.splits()
}

/// Sum of the eight splits.
pub fn total_time(trial: &Trial) -> f64 {
    trial.splits().iter().sum()
}

/// Each split as a share of the total time (`t_i / T`).
///
/// No guard against a zero total; callers validate first.
pub fn proportions(trial: &Trial) -> Splits {
    let total = total_time(trial);
    trial.splits().map(|s| s / total)
}

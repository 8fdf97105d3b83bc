//! Batch-averaged pacing shape used as the ICPE baseline.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    errors::PacingError,
    indices::validate,
    models::{SPLIT_COUNT, Splits, Trial},
    splits::proportions,
};

/// Mean normalized split shape of a batch of trials.
///
/// The eight proportions sum to 1.0. Built once per batch and shared
/// read-only by every index computation for that batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReferencePattern(Splits);

impl ReferencePattern {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, lap: usize) -> Option<f64> {
        self.0.get(lap).copied()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Builds the reference pattern for a batch.
///
/// Every usable trial contributes its proportion vector with weight `1/N`,
/// regardless of its own total time. A trial is usable when its splits pass
/// the same check as index computation; others are left out, and a batch
/// with no usable trial fails.
pub fn build(trials: &[Trial]) -> Result<ReferencePattern, PacingError> {
    let usable: Vec<&Trial> = trials
        .iter()
        .filter(|trial| match validate(trial.splits()) {
            Ok(_) => true,
            Err(reason) => {
                warn!(
                    "Leaving trial of {} on {} out of reference pattern: {reason}",
                    trial.athlete(),
                    trial.date()
                );
                false
            }
        })
        .collect();

    if usable.is_empty() {
        return Err(PacingError::EmptyBatch);
    }

    let count = usable.len() as f64;
    let mut pattern = [0.0; SPLIT_COUNT];

    for trial in usable {
        for (acc, p) in pattern.iter_mut().zip(proportions(trial)) {
            *acc += p / count;
        }
    }

    debug!(
        "Built reference pattern from {count} of {} trials",
        trials.len()
    );

    Ok(ReferencePattern(pattern))
}

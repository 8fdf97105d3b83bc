//! 0-100 radar chart scores; lower raw indices score higher.

use crate::models::{Indices, RadarScores};

/// Linear score that is 100 at or below `low` and 0 at or above `high`.
/// NaN scores 0.
pub fn score_inverse(x: f64, low: f64, high: f64) -> f64 {
    match x {
        x if x.is_nan() => 0.0,
        x if x <= low => 100.0,
        x if x >= high => 0.0,
        x => 100.0 * (high - x) / (high - low),
    }
}

const ICPE_FULL: f64 = 0.02;
const ICPE_NONE: f64 = 0.08;

/// Compliance with the reference shape from ICPE; no data scores 0.
pub fn pattern_compliance(icpe: f64) -> f64 {
    if icpe.is_nan() {
        0.0
    } else if icpe <= ICPE_FULL {
        100.0
    } else if icpe >= ICPE_NONE {
        0.0
    } else {
        100.0 * (ICPE_NONE - icpe) / (ICPE_NONE - ICPE_FULL)
    }
}

pub fn score(indices: &Indices) -> RadarScores {
    RadarScores {
        stability: score_inverse(indices.cv_t, 2.0, 5.0),
        global_deceleration: score_inverse(indices.idg, 5.0, 10.0),
        final_performance: score_inverse(indices.icf, 3.0, 8.0),
        balance: score_inverse(indices.ism, 3.0, 8.0),
        pattern_compliance: pattern_compliance(indices.icpe),
    }
}

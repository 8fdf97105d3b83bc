//! Traffic-light banding of individual indices.
//!
//! Each index has two ascending limits. A value at or below the first is
//! green, at or below the second is yellow, anything above is red. NaN is
//! always `Band::Undefined`.

use crate::models::{Band, BandResult};

/// Limits and wording for one index.
#[derive(Debug, Clone, Copy)]
pub struct BandScale {
    pub green_max: f64,
    pub yellow_max: f64,
    green: &'static str,
    yellow: &'static str,
    red: &'static str,
}

impl BandScale {
    pub fn classify(&self, value: f64) -> BandResult {
        let (band, description) = match value {
            v if v.is_nan() => return BandResult::NO_DATA,
            v if v <= self.green_max => (Band::Green, self.green),
            v if v <= self.yellow_max => (Band::Yellow, self.yellow),
            _ => (Band::Red, self.red),
        };
        BandResult { band, description }
    }
}

pub const IDG_SCALE: BandScale = BandScale {
    green_max: 5.0,
    yellow_max: 8.0,
    green: "Very good global deceleration",
    yellow: "Deceleration within an acceptable range",
    red: "Pace drop above ideal",
};

pub const ICF_SCALE: BandScale = BandScale {
    green_max: 3.0,
    yellow_max: 6.0,
    green: "Finish very well sustained",
    yellow: "Moderate drop at the finish",
    red: "Marked collapse in the last quarter",
};

pub const ISM_SCALE: BandScale = BandScale {
    green_max: 3.0,
    yellow_max: 6.0,
    green: "Race well balanced between first and second 100m",
    yellow: "Second 100m noticeably slower",
    red: "First 100m paced too aggressively",
};

pub const CV_T_SCALE: BandScale = BandScale {
    green_max: 2.0,
    yellow_max: 3.5,
    green: "Very stable pacing",
    yellow: "Moderate oscillation between splits",
    red: "Irregular pace (large oscillations)",
};

pub fn band_idg(idg: f64) -> BandResult {
    IDG_SCALE.classify(idg)
}

pub fn band_icf(icf: f64) -> BandResult {
    ICF_SCALE.classify(icf)
}

pub fn band_ism(ism: f64) -> BandResult {
    ISM_SCALE.classify(ism)
}

pub fn band_cv_t(cv_t: f64) -> BandResult {
    CV_T_SCALE.classify(cv_t)
}

//! Plain-language diagnosis of a trial's indices.

use crate::{
    bands::{BandScale, CV_T_SCALE, ICF_SCALE, IDG_SCALE, ISM_SCALE},
    models::Indices,
};

const DEFAULT_PHRASE: &str = "Pacing within normal parameters, no extreme points.";

/// One checked metric: its limits and the phrase for each extreme.
struct Check {
    scale: BandScale,
    value: fn(&Indices) -> f64,
    high: &'static str,
    low: &'static str,
}

const CHECKS: [Check; 4] = [
    Check {
        scale: IDG_SCALE,
        value: |i| i.idg,
        high: "High global pace drop (IDG elevated).",
        low: "Keeps good relative speed from start to finish.",
    },
    Check {
        scale: ICF_SCALE,
        value: |i| i.icf,
        high: "Clear collapse in the last quarter of the race (ICF high).",
        low: "Well sustained finish, little loss over the last 50m.",
    },
    Check {
        scale: ISM_SCALE,
        value: |i| i.ism,
        high: "First 100m very aggressive relative to the second.",
        low: "Good balance between first and second 100m.",
    },
    Check {
        scale: CV_T_SCALE,
        value: |i| i.cv_t,
        high: "Quite irregular pace; possible technical or turn problems.",
        low: "Very stable pacing; good pace management.",
    },
];

impl Check {
    /// Above the yellow limit is high, at or below the green limit is low.
    /// The middle range and NaN say nothing.
    fn phrase(&self, indices: &Indices) -> Option<&'static str> {
        match (self.value)(indices) {
            v if v.is_nan() => None,
            v if v > self.scale.yellow_max => Some(self.high),
            v if v <= self.scale.green_max => Some(self.low),
            _ => None,
        }
    }
}

/// Builds the diagnosis text, checking IDG, ICF, ISM and CV_t in that order.
pub fn generate(indices: &Indices) -> String {
    let mut phrases: Vec<&str> = CHECKS
        .iter()
        .filter_map(|check| check.phrase(indices))
        .collect();

    if phrases.is_empty() {
        phrases.push(DEFAULT_PHRASE);
    }

    phrases.join(" ")
}

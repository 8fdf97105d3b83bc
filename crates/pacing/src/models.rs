use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

/// Number of intervals every trial is split into.
pub const SPLIT_COUNT: usize = 8;

/// Ordered interval times of one trial, in seconds.
pub type Splits = [f64; SPLIT_COUNT];

/// One timed trial: a 200m swim recorded as eight split times.
///
/// Fields are private so a trial cannot change after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    athlete: String,
    date: Date,
    event: String,
    distance: u32,
    splits: Splits,
}

impl Trial {
    pub fn new(
        athlete: impl Into<String>,
        date: Date,
        event: impl Into<String>,
        distance: u32,
        splits: Splits,
    ) -> Self {
        Self {
            athlete: athlete.into(),
            date,
            event: event.into(),
            distance,
            splits,
        }
    }

    pub fn athlete(&self) -> &str {
        &self.athlete
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn splits(&self) -> &Splits {
        &self.splits
    }
}

/// Fatigue and pacing indices of a single trial.
///
/// NaN marks a value that could not be computed. IDG, CV_t, ICF and ISM are
/// either all defined or all NaN; ICPE is NaN whenever no reference pattern
/// was available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Indices {
    /// Global deceleration, percent change from first to last split.
    #[serde(rename = "IDG")]
    pub idg: f64,
    /// Coefficient of variation of the split times, percent.
    #[serde(rename = "CV_t")]
    pub cv_t: f64,
    /// Final collapse, percent change from mid-race to late-race splits.
    #[serde(rename = "ICF")]
    pub icf: f64,
    /// Second half minus first half, as percent of total time.
    #[serde(rename = "ISM")]
    pub ism: f64,
    /// Euclidean distance to the reference pacing shape.
    #[serde(rename = "ICPE")]
    pub icpe: f64,
}

impl Indices {
    pub const UNDEFINED: Indices = Indices {
        idg: f64::NAN,
        cv_t: f64::NAN,
        icf: f64::NAN,
        ism: f64::NAN,
        icpe: f64::NAN,
    };

    /// Returns true when the four split-derived indices are all defined.
    pub fn is_complete(&self) -> bool {
        ![self.idg, self.cv_t, self.icf, self.ism]
            .iter()
            .any(|v| v.is_nan())
    }

    pub fn has_pattern_distance(&self) -> bool {
        !self.icpe.is_nan()
    }
}

/// Why a trial's splits cannot produce indices.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidTrial {
    #[error("split {lap} is not positive ({value})")]
    NonPositiveSplit { lap: usize, value: f64 },
    #[error("split {lap} is not finite ({value})")]
    NonFiniteSplit { lap: usize, value: f64 },
    #[error("total time is not positive ({0})")]
    NonPositiveTotal(f64),
    #[error("total time is not finite ({0})")]
    NonFiniteTotal(f64),
}

/// Traffic-light band for a single index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Green,
    Yellow,
    Red,
    Undefined,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Green => "green",
            Band::Yellow => "yellow",
            Band::Red => "red",
            Band::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandResult {
    pub band: Band,
    pub description: &'static str,
}

impl BandResult {
    pub const NO_DATA: BandResult = BandResult {
        band: Band::Undefined,
        description: "No data",
    };
}

/// Pacing profile of an athlete as seen in one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    SprinterExtended,
    BalancedNegative,
    UnstablePace,
    Balanced,
    Undefined,
}

impl Profile {
    pub fn label(&self) -> &'static str {
        match self {
            Profile::SprinterExtended => "Extended sprinter",
            Profile::BalancedNegative => "Balanced / negative-like",
            Profile::UnstablePace => "Unstable pace",
            Profile::Balanced => "Balanced",
            Profile::Undefined => "Undefined",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::SprinterExtended => {
                "Opens very fast and loses a lot at the end; needs more fatigue tolerance."
            }
            Profile::BalancedNegative => {
                "Keeps the race under control with little loss of pace; the more economical profile."
            }
            Profile::UnstablePace => {
                "Oscillates a lot between splits; focus on rhythm and technical consistency."
            }
            Profile::Balanced => {
                "Generally balanced pacing, with room to refine the finish and basic speed."
            }
            Profile::Undefined => "Not enough data to classify.",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileResult {
    pub profile: Profile,
    pub description: &'static str,
}

impl From<Profile> for ProfileResult {
    fn from(profile: Profile) -> Self {
        Self {
            profile,
            description: profile.description(),
        }
    }
}

/// Normalized 0-100 scores for the radar chart; higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarScores {
    pub stability: f64,
    pub global_deceleration: f64,
    pub final_performance: f64,
    pub balance: f64,
    pub pattern_compliance: f64,
}

/// Lap-by-lap comparison of trial B against trial A.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitComparison {
    /// `(t_B - t_A) / t_A * 100` per lap; positive means B was slower.
    pub lap_differences_pct: Splits,
    pub total_a: f64,
    pub total_b: f64,
    /// `total_b - total_a` in seconds.
    pub total_difference: f64,
}

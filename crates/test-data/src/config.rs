//! Configuration types for test data generation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use time::{Date, macros::date};

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of athletes to generate.
    pub athlete_count: usize,

    /// Number of trials per athlete (range).
    pub trials_per_athlete: (usize, usize),

    /// Date of the first trial; later trials follow weekly.
    pub start_date: Date,

    /// Relative weights of the pacing styles.
    pub profile_mix: ProfileMix,

    /// Random seed for reproducible output.
    pub seed: u64,

    /// Where the CSV is written.
    pub output: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            athlete_count: 12,
            trials_per_athlete: (2, 4),
            start_date: date!(2025 - 11 - 18),
            profile_mix: ProfileMix::default(),
            seed: 12345,
            output: PathBuf::from("trials.csv"),
        }
    }
}

impl SeedConfig {
    /// Reads overrides from `SEED_*` environment variables on top of the defaults.
    ///
    /// - `SEED_ATHLETES`: athlete count
    /// - `SEED_RNG`: random seed
    /// - `SEED_OUTPUT`: CSV output path
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(count) = env_parse("SEED_ATHLETES") {
            config.athlete_count = count;
        }
        if let Some(seed) = env_parse("SEED_RNG") {
            config.seed = seed;
        }
        if let Ok(path) = std::env::var("SEED_OUTPUT") {
            config.output = PathBuf::from(path);
        }
        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Relative weights of the pacing styles assigned to generated athletes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileMix {
    pub even: f64,
    pub negative: f64,
    pub sprinter: f64,
    pub erratic: f64,
}

impl Default for ProfileMix {
    fn default() -> Self {
        // Most age-group swimmers go out too fast.
        Self {
            even: 0.25,
            negative: 0.15,
            sprinter: 0.45,
            erratic: 0.15,
        }
    }
}

impl ProfileMix {
    /// Only one style.
    pub fn only(kind: crate::profiles::ProfileKind) -> Self {
        use crate::profiles::ProfileKind;

        let mut mix = Self {
            even: 0.0,
            negative: 0.0,
            sprinter: 0.0,
            erratic: 0.0,
        };
        match kind {
            ProfileKind::Even => mix.even = 1.0,
            ProfileKind::Negative => mix.negative = 1.0,
            ProfileKind::Sprinter => mix.sprinter = 1.0,
            ProfileKind::Erratic => mix.erratic = 1.0,
        }
        mix
    }

    pub fn weights(&self) -> [f64; 4] {
        [self.even, self.negative, self.sprinter, self.erratic]
    }
}

/// Distribution for skill levels (used for split time generation).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SkillDistribution {
    /// Uniform distribution - equal probability across skill range.
    Uniform,
    /// Normal distribution with specified mean and std deviation.
    Normal { mean: f64, std_dev: f64 },
    /// Power-law distribution - few elite, many average.
    PowerLaw { alpha: f64 },
}

impl Default for SkillDistribution {
    fn default() -> Self {
        Self::PowerLaw { alpha: 2.0 }
    }
}

impl SkillDistribution {
    /// Creates a power-law distribution with default parameters.
    pub fn power_law() -> Self {
        Self::PowerLaw { alpha: 2.0 }
    }
}

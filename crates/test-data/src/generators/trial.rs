//! Split trial generation with realistic time variation.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use time::{Date, Duration};

use pacing::{SPLIT_COUNT, Splits, Trial};

use super::athlete::GeneratedAthlete;
use crate::profiles::{PacingProfile, sample_variance, split_at_lap};

/// Configuration for trial generation.
#[derive(Debug, Clone)]
pub struct TrialGenConfig {
    /// Typical 25m split of an average athlete, in seconds.
    pub base_split_seconds: f64,
    /// Coefficient of variation for day-to-day form.
    pub day_variance: f64,
    /// Days between consecutive trials of one athlete.
    pub interval_days: i64,
    /// Trial distance in meters.
    pub distance: u32,
    /// Event name; the trial number is appended.
    pub event_prefix: String,
}

impl Default for TrialGenConfig {
    fn default() -> Self {
        Self {
            base_split_seconds: 14.0,
            day_variance: 0.015,
            interval_days: 7,
            distance: 200,
            event_prefix: "200 free test".to_string(),
        }
    }
}

/// Generates dated split trials for athletes.
pub struct TrialGenerator {
    config: TrialGenConfig,
}

impl TrialGenerator {
    /// Creates a new trial generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: TrialGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: TrialGenConfig) -> Self {
        Self { config }
    }

    /// Generates `count` trials for one athlete, one every `interval_days`
    /// starting at `start_date`, using the athlete's own pacing style.
    pub fn generate_for_athlete(
        &self,
        athlete: &GeneratedAthlete,
        count: usize,
        start_date: Date,
        rng: &mut impl Rng,
    ) -> Vec<Trial> {
        let base = self.config.base_split_seconds * athlete.skill_factor;
        let profile = athlete.pacing.profile(base);

        (0..count)
            .map(|i| {
                let date = start_date + Duration::days(self.config.interval_days * i as i64);
                let splits = self.generate_splits(profile.as_ref(), rng);
                Trial::new(
                    athlete.name.clone(),
                    date,
                    format!("{} {}", self.config.event_prefix, i + 1),
                    self.config.distance,
                    splits,
                )
            })
            .collect()
    }

    /// Generates eight splits from a profile, rounded to hundredths like a
    /// touchpad readout.
    pub fn generate_splits(&self, profile: &dyn PacingProfile, rng: &mut impl Rng) -> Splits {
        let day_factor = self.sample_day_factor(rng);

        let mut splits = [0.0; SPLIT_COUNT];
        for (lap, split) in splits.iter_mut().enumerate() {
            let noise = sample_variance(profile, rng);
            let time = split_at_lap(profile, lap, noise * day_factor);
            *split = (time * 100.0).round() / 100.0;
        }
        splits
    }

    /// Samples day-to-day form.
    fn sample_day_factor(&self, rng: &mut impl Rng) -> f64 {
        match Normal::new(1.0, self.config.day_variance) {
            Ok(normal) if self.config.day_variance > 0.0 => normal.sample(rng).clamp(0.95, 1.05),
            _ => 1.0,
        }
    }
}

impl Default for TrialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

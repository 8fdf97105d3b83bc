//! Swimmer pacing profiles.
//!
//! Profiles define a typical split time and how it changes lap by lap.
//! They are used by trial generators to produce realistic split sequences.

mod erratic;
mod even;
mod sprinter;

pub use erratic::ErraticPacer;
pub use even::EvenPacer;
pub use sprinter::SprinterProfile;

use serde::{Deserialize, Serialize};

/// Fastest split a generated trial may contain, in seconds.
pub const MIN_SPLIT_SECONDS: f64 = 9.0;

/// Trait for swimmer pacing profiles.
///
/// Implementations should provide:
/// - Base split time at even effort
/// - Lap factor (split multiplier at each lap)
/// - Lap-to-lap variance
pub trait PacingProfile: Send + Sync {
    /// Typical 25m split in seconds at even effort.
    fn base_split_seconds(&self) -> f64;

    /// Split multiplier for a lap (0-based).
    ///
    /// - < 1.0 means faster than base
    /// - > 1.0 means slower than base (fading)
    fn lap_factor(&self, lap: usize) -> f64;

    /// Lap-to-lap noise as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;
}

/// Split time for a lap given a sampled noise factor.
pub fn split_at_lap(profile: &dyn PacingProfile, lap: usize, noise_factor: f64) -> f64 {
    let target = profile.base_split_seconds() * profile.lap_factor(lap);
    (target * noise_factor).max(MIN_SPLIT_SECONDS)
}

/// Samples a noise factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn PacingProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    let std_dev = profile.variance();
    match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.9, 1.1)
        }
        _ => 1.0,
    }
}

/// Pacing style assigned to a generated athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileKind {
    Even,
    Negative,
    Sprinter,
    Erratic,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 4] = [
        ProfileKind::Even,
        ProfileKind::Negative,
        ProfileKind::Sprinter,
        ProfileKind::Erratic,
    ];

    /// Profile of this style at a given base split.
    pub fn profile(&self, base_split_seconds: f64) -> Box<dyn PacingProfile> {
        match self {
            ProfileKind::Even => Box::new(EvenPacer::with_base(base_split_seconds)),
            ProfileKind::Negative => Box::new(EvenPacer::negative(base_split_seconds)),
            ProfileKind::Sprinter => Box::new(SprinterProfile::with_base(base_split_seconds)),
            ProfileKind::Erratic => Box::new(ErraticPacer::with_base(base_split_seconds)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacing::{Profile, SPLIT_COUNT, Trial, compute, profile::classify};
    use time::macros::date;

    /// Noise-free splits of a profile, run through the classifier.
    fn classify_profile(profile: &dyn PacingProfile) -> Profile {
        let mut splits = [0.0; SPLIT_COUNT];
        for (lap, split) in splits.iter_mut().enumerate() {
            *split = split_at_lap(profile, lap, 1.0);
        }
        let trial = Trial::new("Test", date!(2025 - 11 - 18), "200 free", 200, splits);
        classify(&compute(&trial, None)).profile
    }

    #[test]
    fn test_kinds_match_classifier() {
        assert_eq!(
            classify_profile(ProfileKind::Even.profile(14.0).as_ref()),
            Profile::BalancedNegative
        );
        assert_eq!(
            classify_profile(ProfileKind::Negative.profile(14.0).as_ref()),
            Profile::BalancedNegative
        );
        assert_eq!(
            classify_profile(ProfileKind::Sprinter.profile(14.0).as_ref()),
            Profile::SprinterExtended
        );
        assert_eq!(
            classify_profile(ProfileKind::Erratic.profile(14.0).as_ref()),
            Profile::UnstablePace
        );
    }

    #[test]
    fn test_split_floor() {
        let profile = EvenPacer::with_base(5.0);
        assert_eq!(split_at_lap(&profile, 3, 1.0), MIN_SPLIT_SECONDS);
    }

    #[test]
    fn test_zero_variance_samples_one() {
        let profile = EvenPacer::with_base(14.0).with_variance(0.0);
        let mut rng = rand::thread_rng();
        assert_eq!(sample_variance(&profile, &mut rng), 1.0);
    }
}

//! Even and negative-split pacing.

use super::PacingProfile;

/// Swims every lap at nearly the same speed.
///
/// A small positive drift models the usual slight fade; a negative drift
/// gives a negative split (second 100m faster than the first).
#[derive(Debug, Clone)]
pub struct EvenPacer {
    /// Base split in seconds.
    base_split: f64,
    /// First lap multiplier (dive start).
    start_factor: f64,
    /// Split change per lap, as a fraction of base.
    drift: f64,
    /// Lap-to-lap noise (coefficient of variation).
    variance: f64,
}

impl Default for EvenPacer {
    fn default() -> Self {
        Self {
            base_split: 14.0,
            start_factor: 0.97,
            drift: 0.003,
            variance: 0.006,
        }
    }
}

impl EvenPacer {
    pub fn with_base(base_split: f64) -> Self {
        Self {
            base_split,
            ..Default::default()
        }
    }

    /// Builds a negative-split pacer: holds back early, finishes faster.
    pub fn negative(base_split: f64) -> Self {
        Self {
            base_split,
            start_factor: 1.0,
            drift: -0.004,
            ..Default::default()
        }
    }

    pub fn with_variance(mut self, variance: f64) -> Self {
        self.variance = variance;
        self
    }
}

impl PacingProfile for EvenPacer {
    fn base_split_seconds(&self) -> f64 {
        self.base_split
    }

    fn lap_factor(&self, lap: usize) -> f64 {
        let factor = 1.0 + self.drift * lap as f64;
        if lap == 0 {
            factor * self.start_factor
        } else {
            factor
        }
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

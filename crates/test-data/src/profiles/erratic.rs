//! Erratic pacing.

use super::PacingProfile;

/// Alternates fast and slow laps, as when turns or breathing break down.
#[derive(Debug, Clone)]
pub struct ErraticPacer {
    /// Base split in seconds.
    base_split: f64,
    /// Swing around the base split on alternating laps.
    amplitude: f64,
    /// Lap-to-lap noise (coefficient of variation).
    variance: f64,
}

impl Default for ErraticPacer {
    fn default() -> Self {
        Self {
            base_split: 14.0,
            amplitude: 0.05,
            variance: 0.015,
        }
    }
}

impl ErraticPacer {
    pub fn with_base(base_split: f64) -> Self {
        Self {
            base_split,
            ..Default::default()
        }
    }
}

impl PacingProfile for ErraticPacer {
    fn base_split_seconds(&self) -> f64 {
        self.base_split
    }

    fn lap_factor(&self, lap: usize) -> f64 {
        if lap % 2 == 0 {
            1.0 - self.amplitude
        } else {
            1.0 + self.amplitude
        }
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

//! Fly-and-die pacing.

use super::PacingProfile;

/// Goes out hard and fades more with every lap.
///
/// The fade grows faster than linearly, so the last quarter collapses.
#[derive(Debug, Clone)]
pub struct SprinterProfile {
    /// Base split in seconds.
    base_split: f64,
    /// First lap multiplier (dive start).
    start_factor: f64,
    /// Fade coefficient.
    fade: f64,
    /// Fade exponent over lap number.
    fade_exponent: f64,
    /// Lap-to-lap noise (coefficient of variation).
    variance: f64,
}

impl Default for SprinterProfile {
    fn default() -> Self {
        Self {
            base_split: 14.0,
            start_factor: 0.95,
            fade: 0.012,
            fade_exponent: 1.3,
            variance: 0.008,
        }
    }
}

impl SprinterProfile {
    pub fn with_base(base_split: f64) -> Self {
        Self {
            base_split,
            ..Default::default()
        }
    }

    /// Sets how hard the athlete fades.
    pub fn with_fade(mut self, fade: f64) -> Self {
        self.fade = fade;
        self
    }
}

impl PacingProfile for SprinterProfile {
    fn base_split_seconds(&self) -> f64 {
        self.base_split
    }

    fn lap_factor(&self, lap: usize) -> f64 {
        let factor = 1.0 + self.fade * (lap as f64).powf(self.fade_exponent);
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

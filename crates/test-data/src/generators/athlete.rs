//! Athlete generation with skill levels and pacing styles.

use fake::{Fake, faker::name::en::Name};
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};

use crate::config::{ProfileMix, SkillDistribution};
use crate::profiles::ProfileKind;

/// Generated athlete data.
#[derive(Debug, Clone)]
pub struct GeneratedAthlete {
    pub name: String,
    /// Split time multiplier: < 1.0 faster than average, > 1.0 slower.
    pub skill_factor: f64,
    pub pacing: ProfileKind,
}

/// Configuration for athlete generation.
#[derive(Debug, Clone)]
pub struct AthleteGenConfig {
    /// Distribution of performance levels.
    pub skill_distribution: SkillDistribution,
    /// Relative weights of pacing styles.
    pub profile_mix: ProfileMix,
}

impl Default for AthleteGenConfig {
    fn default() -> Self {
        Self {
            skill_distribution: SkillDistribution::power_law(),
            profile_mix: ProfileMix::default(),
        }
    }
}

/// Generates realistic athletes for testing.
pub struct AthleteGenerator {
    config: AthleteGenConfig,
}

impl AthleteGenerator {
    /// Creates a new athlete generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AthleteGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AthleteGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single athlete.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedAthlete {
        GeneratedAthlete {
            name: Name().fake_with_rng(rng),
            skill_factor: self.sample_skill_factor(rng),
            pacing: self.sample_pacing(rng),
        }
    }

    /// Generates multiple athletes.
    ///
    /// Names are made unique with a numeric suffix, since trials are grouped
    /// by athlete name.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedAthlete> {
        let mut athletes: Vec<GeneratedAthlete> = Vec::with_capacity(count);
        for _ in 0..count {
            let mut athlete = self.generate(rng);
            let base = athlete.name.clone();
            let mut suffix = 2;
            while athletes.iter().any(|a| a.name == athlete.name) {
                athlete.name = format!("{base} {suffix}");
                suffix += 1;
            }
            athletes.push(athlete);
        }
        athletes
    }

    /// Picks a pacing style based on configured weights.
    fn sample_pacing(&self, rng: &mut impl Rng) -> ProfileKind {
        let weights = self.config.profile_mix.weights();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return ProfileKind::Even;
        }

        let roll = rng.r#gen::<f64>() * total;
        let mut cumulative = 0.0;
        for (kind, weight) in ProfileKind::ALL.into_iter().zip(weights) {
            cumulative += weight;
            if roll < cumulative {
                return kind;
            }
        }

        // Rounding at the top end; take the last style with weight.
        ProfileKind::ALL
            .into_iter()
            .zip(weights)
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map_or(ProfileKind::Even, |(kind, _)| kind)
    }

    /// Samples a skill factor from the configured distribution.
    ///
    /// Returns a multiplier where:
    /// - < 1.0 = faster than average (elite)
    /// - 1.0 = average
    /// - > 1.0 = slower than average
    fn sample_skill_factor(&self, rng: &mut impl Rng) -> f64 {
        match self.config.skill_distribution {
            SkillDistribution::Uniform => rng.gen_range(0.85..1.25),

            SkillDistribution::Normal { mean, std_dev } => match Normal::new(mean, std_dev) {
                Ok(normal) => normal.sample(rng).clamp(0.75, 1.5),
                Err(_) => mean.clamp(0.75, 1.5),
            },

            SkillDistribution::PowerLaw { alpha } => {
                // Log-normal approximates power-law tail behavior
                // Parameters chosen to give mean ~1.0 with heavy right tail
                let sigma = 0.15 / alpha.sqrt();
                let mu = -0.5 * sigma * sigma; // Ensures mean = 1.0

                match LogNormal::new(mu, sigma) {
                    Ok(log_normal) => log_normal.sample(rng).clamp(0.75, 1.6),
                    Err(_) => 1.0,
                }
            }
        }
    }
}

impl Default for AthleteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

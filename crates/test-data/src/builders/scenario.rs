//! Fluent builder for constructing test scenarios.

use std::io::Write;
use std::ops::RangeInclusive;
use std::time::Instant;

use rand::Rng;
use time::{Date, macros::date};
use tracing::info;

use crate::config::{ProfileMix, SeedConfig, SkillDistribution};
use crate::generators::{
    athlete::{AthleteGenConfig, AthleteGenerator, GeneratedAthlete},
    trial::{TrialGenConfig, TrialGenerator},
};
use crate::output::{SeedError, TrialWriter};
use pacing::Trial;

/// Result of building a scenario.
#[derive(Debug)]
pub struct ScenarioResult {
    pub athletes: Vec<GeneratedAthlete>,
    pub trials: Vec<Trial>,
    /// Metrics from scenario generation (populated if metrics tracking enabled).
    pub metrics: Option<ScenarioMetrics>,
}

/// Performance metrics from scenario generation.
#[derive(Debug, Clone)]
pub struct ScenarioMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent writing output (milliseconds, 0 if build_data used).
    pub writing_time_ms: u64,
    /// Number of athletes generated.
    pub athlete_count: usize,
    /// Number of trials generated.
    pub trial_count: usize,
}

/// Builder for creating complete test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::new()
///     .with_athletes(20)
///     .with_trials_per_athlete(2..=4)
///     .with_profile_mix(ProfileMix::only(ProfileKind::Sprinter))
///     .build_data(&mut rng);
/// ```
pub struct ScenarioBuilder {
    // Athlete configuration
    athlete_count: usize,
    skill_distribution: SkillDistribution,
    profile_mix: ProfileMix,

    // Trial configuration
    trials_per_athlete: RangeInclusive<usize>,
    trial_config: TrialGenConfig,
    start_date: Date,

    // Misc
    track_metrics: bool,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a new scenario builder with default settings.
    pub fn new() -> Self {
        Self {
            athlete_count: 10,
            skill_distribution: SkillDistribution::power_law(),
            profile_mix: ProfileMix::default(),
            trials_per_athlete: 2..=3,
            trial_config: TrialGenConfig::default(),
            start_date: date!(2025 - 11 - 18),
            track_metrics: false,
        }
    }

    /// Creates a builder from a seed configuration.
    pub fn from_config(config: &SeedConfig) -> Self {
        let (min, max) = config.trials_per_athlete;
        Self::new()
            .with_athletes(config.athlete_count)
            .with_trials_per_athlete(min..=max.max(min))
            .with_profile_mix(config.profile_mix)
            .with_start_date(config.start_date)
    }

    /// Sets the number of athletes to generate.
    pub fn with_athletes(mut self, count: usize) -> Self {
        self.athlete_count = count;
        self
    }

    /// Sets the skill distribution across athletes.
    pub fn with_skill_distribution(mut self, distribution: SkillDistribution) -> Self {
        self.skill_distribution = distribution;
        self
    }

    /// Sets the pacing style weights.
    pub fn with_profile_mix(mut self, mix: ProfileMix) -> Self {
        self.profile_mix = mix;
        self
    }

    /// Sets the range of trials per athlete.
    pub fn with_trials_per_athlete(mut self, range: RangeInclusive<usize>) -> Self {
        self.trials_per_athlete = range;
        self
    }

    /// Sets the trial generation configuration.
    pub fn with_trial_config(mut self, config: TrialGenConfig) -> Self {
        self.trial_config = config;
        self
    }

    /// Sets the date of every athlete's first trial.
    pub fn with_start_date(mut self, date: Date) -> Self {
        self.start_date = date;
        self
    }

    /// Enables metrics tracking for performance analysis.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Builds the scenario (generates data but doesn't write it).
    pub fn build_data(&self, rng: &mut impl Rng) -> ScenarioResult {
        let start_time = self.track_metrics.then(Instant::now);

        let athlete_gen = AthleteGenerator::with_config(AthleteGenConfig {
            skill_distribution: self.skill_distribution,
            profile_mix: self.profile_mix,
        });
        let trial_gen = TrialGenerator::with_config(self.trial_config.clone());

        let athletes = athlete_gen.generate_batch(self.athlete_count, rng);
        info!("Generated {} athletes", athletes.len());

        let mut trials = Vec::new();
        for athlete in &athletes {
            let count = rng.gen_range(self.trials_per_athlete.clone());
            trials.extend(trial_gen.generate_for_athlete(athlete, count, self.start_date, rng));
        }
        info!("Generated {} trials", trials.len());

        let metrics = start_time.map(|start| ScenarioMetrics {
            generation_time_ms: start.elapsed().as_millis() as u64,
            writing_time_ms: 0, // Set by build() if output is written
            athlete_count: athletes.len(),
            trial_count: trials.len(),
        });

        ScenarioResult {
            athletes,
            trials,
            metrics,
        }
    }

    /// Builds the scenario and writes its trials as CSV.
    pub fn build<W: Write>(
        &self,
        writer: W,
        rng: &mut impl Rng,
    ) -> Result<ScenarioResult, SeedError> {
        let mut result = self.build_data(rng);

        let write_start = self.track_metrics.then(Instant::now);
        let mut out = TrialWriter::new(writer);
        out.write_trials(&result.trials)?;
        out.finish()?;

        if let (Some(metrics), Some(start)) = (result.metrics.as_mut(), write_start) {
            metrics.writing_time_ms = start.elapsed().as_millis() as u64;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::ProfileKind;
    use pacing::{Profile, analyze_batch, file_parsers::parse_trials_csv};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_build_data_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = ScenarioBuilder::new()
            .with_athletes(5)
            .with_trials_per_athlete(2..=2)
            .with_metrics(true)
            .build_data(&mut rng);

        assert_eq!(result.athletes.len(), 5);
        assert_eq!(result.trials.len(), 10);
        let metrics = result.metrics.unwrap();
        assert_eq!(metrics.trial_count, 10);
        assert_eq!(metrics.writing_time_ms, 0);
    }

    #[test]
    fn test_same_seed_same_trials() {
        let builder = ScenarioBuilder::new().with_athletes(4);
        let a = builder.build_data(&mut StdRng::seed_from_u64(7));
        let b = builder.build_data(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.trials, b.trials);
    }

    #[test]
    fn test_sprinter_scenario_classifies() {
        let mut rng = StdRng::seed_from_u64(2024);
        let result = ScenarioBuilder::new()
            .with_athletes(6)
            .with_profile_mix(ProfileMix::only(ProfileKind::Sprinter))
            .build_data(&mut rng);

        let report = analyze_batch(&result.trials).unwrap();
        assert!(
            report
                .trials
                .iter()
                .all(|t| t.profile.profile == Profile::SprinterExtended)
        );
    }

    #[test]
    fn test_build_writes_parseable_csv() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut buf = Vec::new();
        let result = ScenarioBuilder::new()
            .with_athletes(3)
            .build(&mut buf, &mut rng)
            .unwrap();

        let parsed = parse_trials_csv(buf.as_slice()).unwrap();
        assert_eq!(parsed, result.trials);
    }
}

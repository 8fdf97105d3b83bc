//! Test data generation for pacing analytics.
//!
//! This crate generates realistic 200m split trials for synthetic athletes
//! with distinct pacing styles, and writes them as CSV in the layout the
//! `pacing` binary reads.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let scenario = ScenarioBuilder::new()
//!     .with_athletes(20)
//!     .with_trials_per_athlete(2..=4)
//!     .with_skill_distribution(SkillDistribution::power_law())
//!     .build(File::create("trials.csv")?, &mut rng)?;
//! ```

pub mod builders;
pub mod config;
pub mod fixtures;
pub mod generators;
pub mod output;
pub mod profiles;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioMetrics, ScenarioResult};
    pub use crate::config::{ProfileMix, SeedConfig, SkillDistribution};
    pub use crate::fixtures::sample_trials;
    pub use crate::generators::{
        AthleteGenConfig, AthleteGenerator, GeneratedAthlete, TrialGenConfig, TrialGenerator,
    };
    pub use crate::output::{SeedError, TrialWriter};
    pub use crate::profiles::{
        ErraticPacer, EvenPacer, PacingProfile, ProfileKind, SprinterProfile, sample_variance,
        split_at_lap,
    };
}

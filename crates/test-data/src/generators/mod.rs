//! Entity generators for test data.
//!
//! This module provides generators for creating realistic test entities:
//! - [`AthleteGenerator`]: Generate swimmers with a skill level and pacing style
//! - [`TrialGenerator`]: Generate dated 8-split trials from a pacing profile

pub mod athlete;
pub mod trial;

pub use athlete::{AthleteGenConfig, AthleteGenerator, GeneratedAthlete};
pub use trial::{TrialGenConfig, TrialGenerator};

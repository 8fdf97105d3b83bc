//! Pacing and fatigue analytics for 200m swim trials.
//!
//! A trial is eight split times. From them this crate derives five indices
//! (IDG, CV_t, ICF, ISM and, against a batch reference pattern, ICPE), bands
//! them, classifies a pacing profile, writes a short diagnosis and scores the
//! radar chart. Everything in the analysis path is pure and may run in
//! parallel; see [`report::analyze_batch`].

pub mod bands;
pub mod config;
pub mod diagnosis;
pub mod errors;
pub mod file_parsers;
pub mod indices;
pub mod models;
pub mod profile;
pub mod radar;
pub mod reference;
pub mod report;
pub mod selection;
pub mod splits;

pub use errors::PacingError;
pub use indices::{IndexOutcome, compute, evaluate};
pub use models::{
    Band, BandResult, Indices, InvalidTrial, Profile, ProfileResult, RadarScores, SPLIT_COUNT,
    SplitComparison, Splits, Trial,
};
pub use reference::ReferencePattern;
pub use report::{BatchReport, TrialReport, analyze_batch, analyze_trial};

//! Per-trial and per-batch analysis bundles.

use rayon::prelude::*;
use serde::Serialize;
use time::Date;
use tracing::info;

use crate::{
    bands::{band_cv_t, band_icf, band_idg, band_ism},
    diagnosis,
    errors::PacingError,
    indices,
    models::{BandResult, Indices, ProfileResult, RadarScores, Splits, Trial},
    profile,
    radar,
    reference::{self, ReferencePattern},
    selection::{athletes, trial_label},
    splits::{splits, total_time},
};

#[derive(Debug, Clone, Serialize)]
pub struct IndexBands {
    pub idg: BandResult,
    pub icf: BandResult,
    pub ism: BandResult,
    pub cv_t: BandResult,
}

impl IndexBands {
    pub fn from_indices(indices: &Indices) -> Self {
        Self {
            idg: band_idg(indices.idg),
            icf: band_icf(indices.icf),
            ism: band_ism(indices.ism),
            cv_t: band_cv_t(indices.cv_t),
        }
    }
}

/// Every analysis output for one trial.
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub athlete: String,
    pub date: Date,
    pub label: String,
    pub splits: Splits,
    pub total_time: f64,
    pub valid: bool,
    pub indices: Indices,
    pub bands: IndexBands,
    pub profile: ProfileResult,
    pub diagnosis: String,
    pub radar: RadarScores,
}

/// Analysis of a whole batch against its own reference pattern.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub athletes: Vec<String>,
    pub reference_pattern: ReferencePattern,
    pub trials: Vec<TrialReport>,
}

impl BatchReport {
    /// Keeps only the trials of one athlete.
    pub fn retain_athlete(&mut self, athlete: &str) {
        self.trials.retain(|t| t.athlete == athlete);
        self.athletes.retain(|a| a == athlete);
    }
}

pub fn analyze_trial(trial: &Trial, pattern: Option<&ReferencePattern>) -> TrialReport {
    let outcome = indices::evaluate(trial, pattern);
    let indices = outcome.indices();

    TrialReport {
        athlete: trial.athlete().to_string(),
        date: trial.date(),
        label: trial_label(trial),
        splits: splits(trial),
        total_time: total_time(trial),
        valid: outcome.is_valid(),
        indices,
        bands: IndexBands::from_indices(&indices),
        profile: profile::classify(&indices),
        diagnosis: diagnosis::generate(&indices),
        radar: radar::score(&indices),
    }
}

/// Builds the reference pattern once, then analyzes every trial against it.
/// Output keeps input order.
pub fn analyze_batch(trials: &[Trial]) -> Result<BatchReport, PacingError> {
    let pattern = reference::build(trials)?;

    let reports: Vec<TrialReport> = trials
        .par_iter()
        .map(|trial| analyze_trial(trial, Some(&pattern)))
        .collect();

    let invalid = reports.iter().filter(|r| !r.valid).count();
    info!(
        "Analyzed {} trials ({invalid} with invalid splits)",
        reports.len()
    );

    Ok(BatchReport {
        athletes: athletes(trials),
        reference_pattern: pattern,
        trials: reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Band, Profile};
    use time::macros::date;

    fn batch() -> Vec<Trial> {
        vec![
            Trial::new(
                "A",
                date!(2025 - 11 - 18),
                "test 1",
                200,
                [13.0, 13.8, 14.2, 14.4, 14.8, 15.0, 15.2, 15.4],
            ),
            Trial::new("B", date!(2025 - 11 - 18), "test 1", 200, [14.0; 8]),
            Trial::new(
                "B",
                date!(2025 - 11 - 25),
                "test 2",
                200,
                [14.0, 0.0, 14.0, 14.0, 14.0, 14.0, 14.0, 14.0],
            ),
        ]
    }

    #[test]
    fn test_analyze_batch() {
        let report = analyze_batch(&batch()).unwrap();

        assert_eq!(report.athletes, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(report.trials.len(), 3);
        assert!((report.reference_pattern.sum() - 1.0).abs() < 1e-9);

        let a = &report.trials[0];
        assert!(a.valid);
        assert_eq!(a.bands.idg.band, Band::Red);
        assert_eq!(a.bands.icf.band, Band::Red);
        assert_eq!(a.bands.ism.band, Band::Yellow);
        assert_eq!(a.profile.profile, Profile::SprinterExtended);
        assert!(a.indices.has_pattern_distance());

        let even = &report.trials[1];
        assert_eq!(even.profile.profile, Profile::BalancedNegative);
        assert_eq!(even.radar.stability, 100.0);

        let broken = &report.trials[2];
        assert!(!broken.valid);
        assert_eq!(broken.profile.profile, Profile::Undefined);
        assert_eq!(broken.bands.cv_t.band, Band::Undefined);
        assert_eq!(broken.radar, RadarScores::default());
    }

    #[test]
    fn test_empty_batch() {
        assert!(matches!(analyze_batch(&[]), Err(PacingError::EmptyBatch)));
    }

    #[test]
    fn test_retain_athlete() {
        let mut report = analyze_batch(&batch()).unwrap();
        report.retain_athlete("B");
        assert_eq!(report.trials.len(), 2);
        assert_eq!(report.athletes, vec!["B".to_string()]);
    }

    #[test]
    fn test_analyze_trial_without_pattern() {
        let report = analyze_trial(&batch()[0], None);
        assert!(report.valid);
        assert!(report.indices.icpe.is_nan());
        assert_eq!(report.radar.pattern_compliance, 0.0);
        assert_eq!(report.label, "2025-11-18 – test 1");
    }
}

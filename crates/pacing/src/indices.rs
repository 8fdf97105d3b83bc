//! Fatigue and pacing indices computed from a trial's splits.

use tracing::warn;

use crate::{
    models::{Indices, InvalidTrial, SPLIT_COUNT, Splits, Trial},
    reference::ReferencePattern,
};

/// Result of evaluating one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexOutcome {
    Computed(Indices),
    Invalid(InvalidTrial),
}

impl IndexOutcome {
    /// Collapses the outcome to plain indices, all NaN when invalid.
    pub fn indices(&self) -> Indices {
        match self {
            IndexOutcome::Computed(indices) => *indices,
            IndexOutcome::Invalid(_) => Indices::UNDEFINED,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, IndexOutcome::Computed(_))
    }
}

/// Computes the indices of a trial, NaN-filled when its splits are invalid.
pub fn compute(trial: &Trial, reference: Option<&ReferencePattern>) -> Indices {
    evaluate(trial, reference).indices()
}

/// Computes the indices of a trial, reporting why when it cannot.
pub fn evaluate(trial: &Trial, reference: Option<&ReferencePattern>) -> IndexOutcome {
    let splits = trial.splits();
    let total = match validate(splits) {
        Ok(total) => total,
        Err(reason) => {
            warn!(
                "Invalid trial of {} on {}: {reason}",
                trial.athlete(),
                trial.date()
            );
            return IndexOutcome::Invalid(reason);
        }
    };

    let mut metrics = IndexMetrics::new(reference);
    for (lap, &time) in splits.iter().enumerate() {
        metrics.next_split(lap, time);
    }

    IndexOutcome::Computed(metrics.finish(total))
}

/// Checks every split and the total are positive and finite; returns the total.
pub fn validate(splits: &Splits) -> Result<f64, InvalidTrial> {
    for (lap, &value) in splits.iter().enumerate() {
        let lap = lap + 1;
        if value.is_nan() || value <= 0.0 {
            return Err(InvalidTrial::NonPositiveSplit { lap, value });
        }
        if value.is_infinite() {
            return Err(InvalidTrial::NonFiniteSplit { lap, value });
        }
    }

    let total: f64 = splits.iter().sum();
    if !total.is_finite() {
        return Err(InvalidTrial::NonFiniteTotal(total));
    }
    if total <= 0.0 {
        return Err(InvalidTrial::NonPositiveTotal(total));
    }

    Ok(total)
}

/// A quantity accumulated split by split and resolved once the total is known.
pub trait SplitMetric {
    type Score;
    fn next_split(&mut self, lap: usize, time: f64);
    fn finish(&mut self, total: f64) -> Self::Score;
}

#[derive(Debug, Clone)]
struct IndexMetrics<'a> {
    deceleration: GlobalDeceleration,
    variation: Variation,
    collapse: FinalCollapse,
    halves: HalfSplit,
    pattern: Option<PatternDistance<'a>>,
}

impl<'a> IndexMetrics<'a> {
    fn new(reference: Option<&'a ReferencePattern>) -> Self {
        Self {
            deceleration: GlobalDeceleration::default(),
            variation: Variation::default(),
            collapse: FinalCollapse::default(),
            halves: HalfSplit::default(),
            pattern: reference.map(PatternDistance::new),
        }
    }
}

impl SplitMetric for IndexMetrics<'_> {
    type Score = Indices;

    fn next_split(&mut self, lap: usize, time: f64) {
        self.deceleration.next_split(lap, time);
        self.variation.next_split(lap, time);
        self.collapse.next_split(lap, time);
        self.halves.next_split(lap, time);
        if let Some(pattern) = &mut self.pattern {
            pattern.next_split(lap, time);
        }
    }

    fn finish(&mut self, total: f64) -> Indices {
        Indices {
            idg: self.deceleration.finish(total),
            cv_t: self.variation.finish(total),
            icf: self.collapse.finish(total),
            ism: self.halves.finish(total),
            icpe: self
                .pattern
                .as_mut()
                .map_or(f64::NAN, |pattern| pattern.finish(total)),
        }
    }
}

/// IDG: `100 * (t8 - t1) / t1`.
#[derive(Debug, Clone, Default)]
struct GlobalDeceleration {
    first: Option<f64>,
    last: f64,
}

impl SplitMetric for GlobalDeceleration {
    type Score = f64;

    fn next_split(&mut self, _lap: usize, time: f64) {
        if self.first.is_none() {
            self.first = Some(time);
        }
        self.last = time;
    }

    fn finish(&mut self, _total: f64) -> f64 {
        self.first
            .map_or(f64::NAN, |first| 100.0 * (self.last - first) / first)
    }
}

/// CV_t: population standard deviation over mean, in percent.
#[derive(Debug, Clone, Default)]
struct Variation {
    times: Splits,
}

impl SplitMetric for Variation {
    type Score = f64;

    fn next_split(&mut self, lap: usize, time: f64) {
        self.times[lap] = time;
    }

    fn finish(&mut self, total: f64) -> f64 {
        let n = SPLIT_COUNT as f64;
        let mean = total / n;
        let variance = self.times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;
        100.0 * variance.sqrt() / mean
    }
}

/// ICF: mean of laps 7-8 against mean of laps 3-4, in percent.
#[derive(Debug, Clone, Default)]
struct FinalCollapse {
    base: f64,
    end: f64,
}

impl SplitMetric for FinalCollapse {
    type Score = f64;

    fn next_split(&mut self, lap: usize, time: f64) {
        match lap {
            2 | 3 => self.base += time,
            6 | 7 => self.end += time,
            _ => {}
        }
    }

    fn finish(&mut self, _total: f64) -> f64 {
        let base_mid = self.base / 2.0;
        let end_mid = self.end / 2.0;
        100.0 * (end_mid - base_mid) / base_mid
    }
}

/// ISM: second 100m minus first 100m, as percent of total time.
#[derive(Debug, Clone, Default)]
struct HalfSplit {
    first: f64,
    second: f64,
}

impl SplitMetric for HalfSplit {
    type Score = f64;

    fn next_split(&mut self, lap: usize, time: f64) {
        if lap < SPLIT_COUNT / 2 {
            self.first += time;
        } else {
            self.second += time;
        }
    }

    fn finish(&mut self, total: f64) -> f64 {
        100.0 * (self.second - self.first) / total
    }
}

/// ICPE: L2 distance between the trial's proportions and the reference.
#[derive(Debug, Clone)]
struct PatternDistance<'a> {
    reference: &'a ReferencePattern,
    times: Splits,
}

impl<'a> PatternDistance<'a> {
    fn new(reference: &'a ReferencePattern) -> Self {
        Self {
            reference,
            times: [0.0; SPLIT_COUNT],
        }
    }
}

impl SplitMetric for PatternDistance<'_> {
    type Score = f64;

    fn next_split(&mut self, lap: usize, time: f64) {
        self.times[lap] = time;
    }

    fn finish(&mut self, total: f64) -> f64 {
        self.times
            .iter()
            .zip(self.reference.as_slice())
            .map(|(t, r)| {
                let diff = t / total - r;
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;
    use time::macros::date;

    const SEED_SPLITS: Splits = [13.0, 13.8, 14.2, 14.4, 14.8, 15.0, 15.2, 15.4];

    fn trial(splits: Splits) -> Trial {
        Trial::new("Athlete A", date!(2025 - 11 - 18), "200 free", 200, splits)
    }

    #[test]
    fn test_regression_seed() {
        let indices = compute(&trial(SEED_SPLITS), None);

        assert!((indices.idg - 100.0 * 2.4 / 13.0).abs() < 1e-9);
        assert!((indices.idg - 18.4615).abs() < 1e-3);
        assert!((indices.ism - 100.0 * 5.0 / 115.8).abs() < 1e-9);
        assert!((indices.ism - 4.3178).abs() < 1e-3);
        assert!((indices.icf - 100.0 * 1.0 / 14.3).abs() < 1e-9);
        assert!((indices.icf - 6.993).abs() < 1e-3);
        assert!(indices.cv_t.is_finite() && indices.cv_t > 0.0);
        assert!(indices.icpe.is_nan());
    }

    #[test]
    fn test_population_variance() {
        // Alternating 9/11: mean 10, population std dev exactly 1.
        let indices = compute(&trial([9.0, 11.0, 9.0, 11.0, 9.0, 11.0, 9.0, 11.0]), None);
        assert!((indices.cv_t - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_even_pacing_is_flat() {
        let indices = compute(&trial([14.0; 8]), None);
        assert_eq!(indices.idg, 0.0);
        assert_eq!(indices.cv_t, 0.0);
        assert_eq!(indices.icf, 0.0);
        assert_eq!(indices.ism, 0.0);
    }

    #[test]
    fn test_non_positive_split_invalidates_all() {
        let mut splits = SEED_SPLITS;
        splits[4] = 0.0;
        let t = trial(splits);
        let pattern = reference::build(&[trial(SEED_SPLITS)]).unwrap();

        let outcome = evaluate(&t, Some(&pattern));
        assert_eq!(
            outcome,
            IndexOutcome::Invalid(InvalidTrial::NonPositiveSplit { lap: 5, value: 0.0 })
        );

        let indices = outcome.indices();
        assert!(indices.idg.is_nan());
        assert!(indices.cv_t.is_nan());
        assert!(indices.icf.is_nan());
        assert!(indices.ism.is_nan());
        assert!(indices.icpe.is_nan());
        assert!(!indices.is_complete());
    }

    #[test]
    fn test_negative_split_invalidates() {
        let mut splits = SEED_SPLITS;
        splits[0] = -1.0;
        assert!(!evaluate(&trial(splits), None).is_valid());
    }

    fn assert_all_undefined(indices: &Indices) {
        assert!(indices.idg.is_nan());
        assert!(indices.cv_t.is_nan());
        assert!(indices.icf.is_nan());
        assert!(indices.ism.is_nan());
    }

    #[test]
    fn test_infinite_split_invalidates_all() {
        let mut splits = SEED_SPLITS;
        splits[7] = f64::INFINITY;

        let outcome = evaluate(&trial(splits), None);
        assert_eq!(
            outcome,
            IndexOutcome::Invalid(InvalidTrial::NonFiniteSplit {
                lap: 8,
                value: f64::INFINITY
            })
        );
        assert_all_undefined(&outcome.indices());
    }

    #[test]
    fn test_overflowing_total_invalidates_all() {
        let outcome = evaluate(&trial([1e308; 8]), None);
        assert!(matches!(
            outcome,
            IndexOutcome::Invalid(InvalidTrial::NonFiniteTotal(t)) if t.is_infinite()
        ));
        assert_all_undefined(&outcome.indices());
    }

    #[test]
    fn test_icpe_zero_against_own_shape() {
        let t = trial(SEED_SPLITS);
        let pattern = reference::build(std::slice::from_ref(&t)).unwrap();
        let indices = compute(&t, Some(&pattern));
        assert!(indices.icpe.abs() < 1e-12);
        assert!(indices.is_complete());
        assert!(indices.has_pattern_distance());
    }

    #[test]
    fn test_icpe_distance_from_even_shape() {
        let even = reference::build(&[trial([14.0; 8])]).unwrap();
        let t = trial(SEED_SPLITS);
        let total = 115.8;
        let expected = SEED_SPLITS
            .iter()
            .map(|s| (s / total - 0.125).powi(2))
            .sum::<f64>()
            .sqrt();
        assert!((compute(&t, Some(&even)).icpe - expected).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let t = trial(SEED_SPLITS);
        let a = compute(&t, None);
        let b = compute(&t, None);
        assert_eq!(a.idg.to_bits(), b.idg.to_bits());
        assert_eq!(a.cv_t.to_bits(), b.cv_t.to_bits());
        assert_eq!(a.icf.to_bits(), b.icf.to_bits());
        assert_eq!(a.ism.to_bits(), b.ism.to_bits());
    }
}

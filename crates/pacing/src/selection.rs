//! Picking trials out of a batch and comparing two of them lap by lap.

use std::collections::BTreeSet;

use crate::{
    models::{SPLIT_COUNT, SplitComparison, Trial},
    splits::total_time,
};

/// Distinct athlete names, sorted.
pub fn athletes(trials: &[Trial]) -> Vec<String> {
    trials
        .iter()
        .map(|t| t.athlete())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Trials of one athlete, in input order.
pub fn trials_for_athlete<'a>(trials: &'a [Trial], athlete: &str) -> Vec<&'a Trial> {
    trials.iter().filter(|t| t.athlete() == athlete).collect()
}

/// Label that identifies a trial among one athlete's trials.
pub fn trial_label(trial: &Trial) -> String {
    format!("{} – {}", trial.date(), trial.event())
}

pub fn find_trial<'a>(trials: &'a [Trial], athlete: &str, label: &str) -> Option<&'a Trial> {
    trials
        .iter()
        .find(|t| t.athlete() == athlete && trial_label(t) == label)
}

/// Compares trial `b` against trial `a`.
///
/// Lap differences are percent of `a`'s split; a non-positive split in `a`
/// gives NaN for that lap.
pub fn compare(a: &Trial, b: &Trial) -> SplitComparison {
    let mut lap_differences_pct = [f64::NAN; SPLIT_COUNT];
    for (diff, (&ta, &tb)) in lap_differences_pct
        .iter_mut()
        .zip(a.splits().iter().zip(b.splits()))
    {
        if ta > 0.0 {
            *diff = (tb - ta) / ta * 100.0;
        }
    }

    let total_a = total_time(a);
    let total_b = total_time(b);

    SplitComparison {
        lap_differences_pct,
        total_a,
        total_b,
        total_difference: total_b - total_a,
    }
}

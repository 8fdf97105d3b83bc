//! End-to-end tests: CSV fixture in, batch report out.
//!
//! The fixture is the five-trial demonstration dataset (three athletes,
//! two test dates) in the ingestion format.
//!
//! Run with: `cargo nextest run -p pacing --test pacing_integration`

use std::path::PathBuf;

use pacing::{
    Band, Profile, analyze_batch, compute,
    file_parsers::{parse_trials_csv, parse_trials_file},
    reference,
    selection::{athletes, compare, find_trial, trials_for_athlete},
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_trials.csv")
}

fn load_fixture() -> Vec<pacing::Trial> {
    parse_trials_file(fixture_path()).expect("Failed to parse sample fixture")
}

fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() < eps,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_fixture_loads() {
    let trials = load_fixture();
    assert_eq!(trials.len(), 5);
    assert_eq!(athletes(&trials), vec!["Athlete A", "Athlete B", "Athlete C"]);
    assert_eq!(trials_for_athlete(&trials, "Athlete B").len(), 2);
}

#[test]
fn test_reference_pattern_of_fixture() {
    let trials = load_fixture();
    let pattern = reference::build(&trials).unwrap();

    assert_close(pattern.sum(), 1.0, 1e-9);
    assert_close(pattern.get(0).unwrap(), 0.113140, 1e-5);
    assert_close(pattern.get(7).unwrap(), 0.134743, 1e-5);

    // Every trial slows down, so the shape rises lap over lap.
    let shape = pattern.as_slice();
    assert!(shape.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_indices_of_first_trial() {
    let trials = load_fixture();
    let pattern = reference::build(&trials).unwrap();
    let indices = compute(&trials[0], Some(&pattern));

    assert_close(indices.idg, 18.4615, 1e-3);
    assert_close(indices.ism, 4.3178, 1e-3);
    assert_close(indices.icf, 6.993, 1e-3);
    assert_close(indices.cv_t, 5.1669, 1e-3);
    assert_close(indices.icpe, 0.00287, 1e-4);
}

#[test]
fn test_batch_report() {
    let trials = load_fixture();
    let report = analyze_batch(&trials).unwrap();

    assert_eq!(report.trials.len(), 5);
    for trial in &report.trials {
        assert!(trial.valid);
        assert!(trial.indices.is_complete());
        // Opens fast and fades in every fixture trial.
        assert_eq!(trial.profile.profile, Profile::SprinterExtended);
        // All trials sit close to the batch shape.
        assert_eq!(trial.radar.pattern_compliance, 100.0);
        assert_eq!(trial.radar.global_deceleration, 0.0);
    }

    let first = &report.trials[0];
    assert_eq!(first.label, "2025-11-18 – 200 free test 1");
    assert_close(first.total_time, 115.8, 1e-9);
    assert_eq!(first.bands.idg.band, Band::Red);
    assert_eq!(first.bands.icf.band, Band::Red);
    assert_eq!(first.bands.ism.band, Band::Yellow);
    assert_eq!(first.bands.cv_t.band, Band::Red);
    assert_eq!(
        first.diagnosis,
        "High global pace drop (IDG elevated). \
         Clear collapse in the last quarter of the race (ICF high). \
         Quite irregular pace; possible technical or turn problems."
    );

    // Second test of athlete A: ICF 6.43, ISM 3.44.
    let second = &report.trials[1];
    assert_eq!(second.bands.icf.band, Band::Red);
    assert_eq!(second.bands.ism.band, Band::Yellow);
}

#[test]
fn test_report_serializes() {
    let report = analyze_batch(&load_fixture()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let first = &json["trials"][0];
    assert_eq!(first["date"], "2025-11-18");
    assert_eq!(first["bands"]["idg"]["band"], "red");
    assert_eq!(first["profile"]["profile"], "SprinterExtended");
    assert!(first["indices"]["IDG"].is_number());
    assert!(first["radar"]["patternCompliance"].is_number());
    assert_eq!(json["reference_pattern"].as_array().unwrap().len(), 8);
}

#[test]
fn test_compare_progression() {
    let trials = load_fixture();
    let a = find_trial(&trials, "Athlete B", "2025-11-18 – 200 free test 1").unwrap();
    let b = find_trial(&trials, "Athlete B", "2025-11-25 – 200 free test 2").unwrap();
    let cmp = compare(a, b);

    assert_close(cmp.total_difference, 118.2 - 121.5, 1e-9);
    assert!(cmp.lap_differences_pct.iter().all(|d| *d < 0.0));
    assert_close(cmp.lap_differences_pct[7], (16.0 - 16.8) / 16.8 * 100.0, 1e-9);
}

#[test]
fn test_invalid_row_does_not_break_batch() {
    let text = "athlete,date,event,distance,t1,t2,t3,t4,t5,t6,t7,t8\n\
                A,2025-11-18,test,200,13.0,13.8,14.2,14.4,14.8,15.0,15.2,15.4\n\
                B,2025-11-18,test,200,13.0,0,14.2,14.4,14.8,15.0,15.2,15.4\n";
    let trials = parse_trials_csv(text.as_bytes()).unwrap();
    let report = analyze_batch(&trials).unwrap();

    assert!(report.trials[0].valid);
    assert!(!report.trials[1].valid);
    assert_eq!(report.trials[1].profile.profile, Profile::Undefined);
    assert_eq!(report.trials[1].bands.idg.band, Band::Undefined);
    assert_eq!(
        report.trials[1].diagnosis,
        "Pacing within normal parameters, no extreme points."
    );
}

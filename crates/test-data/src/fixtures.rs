//! Hand-written trials shared by tests across the workspace.

use time::macros::date;

use pacing::Trial;

/// Five trials of three athletes, all opening fast and fading.
pub fn sample_trials() -> Vec<Trial> {
    vec![
        Trial::new(
            "Athlete A",
            date!(2025 - 11 - 18),
            "200 free test 1",
            200,
            [13.0, 13.8, 14.2, 14.4, 14.8, 15.0, 15.2, 15.4],
        ),
        Trial::new(
            "Athlete A",
            date!(2025 - 11 - 25),
            "200 free test 2",
            200,
            [13.1, 13.6, 13.9, 14.1, 14.3, 14.5, 14.8, 15.0],
        ),
        Trial::new(
            "Athlete B",
            date!(2025 - 11 - 18),
            "200 free test 1",
            200,
            [13.5, 14.1, 14.5, 14.9, 15.5, 15.9, 16.3, 16.8],
        ),
        Trial::new(
            "Athlete B",
            date!(2025 - 11 - 25),
            "200 free test 2",
            200,
            [13.3, 13.9, 14.3, 14.6, 15.0, 15.4, 15.7, 16.0],
        ),
        Trial::new(
            "Athlete C",
            date!(2025 - 11 - 20),
            "200 free test 1",
            200,
            [12.8, 13.2, 13.6, 13.9, 14.2, 14.5, 14.8, 15.1],
        ),
    ]
}

//! Pacing profile classification.
//!
//! Rules are checked in order and the first match wins, so a trial that
//! satisfies several rules gets the earliest one.

use crate::models::{Indices, Profile, ProfileResult};

struct Rule {
    profile: Profile,
    applies: fn(&Indices) -> bool,
}

const RULES: [Rule; 4] = [
    Rule {
        profile: Profile::Undefined,
        applies: |i| !i.is_complete(),
    },
    // Opens fast, collapses late.
    Rule {
        profile: Profile::SprinterExtended,
        applies: |i| i.idg > 6.0 && i.icf > 4.0,
    },
    Rule {
        profile: Profile::BalancedNegative,
        applies: |i| i.ism < 2.0 && i.idg <= 6.0 && i.icf <= 4.0,
    },
    Rule {
        profile: Profile::UnstablePace,
        applies: |i| i.cv_t > 3.5,
    },
];

pub fn classify(indices: &Indices) -> ProfileResult {
    RULES
        .iter()
        .find(|rule| (rule.applies)(indices))
        .map_or(Profile::Balanced, |rule| rule.profile)
        .into()
}

//! Output of generated data.

mod writer;

pub use writer::{SeedError, TrialWriter};

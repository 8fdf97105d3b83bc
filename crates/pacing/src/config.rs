//! Runtime configuration for the `pacing` binary.

use std::env;
use std::path::PathBuf;

use crate::errors::PacingError;

/// CLI settings, read from the environment.
///
/// - `PACING_INPUT`: CSV file to analyze (a positional argument wins)
/// - `PACING_ATHLETE`: only report this athlete's trials
/// - `PACING_PRETTY`: pretty-print the JSON report (default `true`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub athlete: Option<String>,
    pub pretty: bool,
}

impl Config {
    pub fn from_env(input_arg: Option<String>) -> Result<Self, PacingError> {
        Self::from_lookup(input_arg, |key| env::var(key).ok())
    }

    fn from_lookup(
        input_arg: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, PacingError> {
        let input = input_arg
            .or_else(|| lookup("PACING_INPUT"))
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                PacingError::Config("no input file: pass a path or set PACING_INPUT".to_string())
            })?;

        let athlete = lookup("PACING_ATHLETE").filter(|s| !s.trim().is_empty());

        let pretty = lookup("PACING_PRETTY")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(true);

        Ok(Self {
            input,
            athlete,
            pretty,
        })
    }
}

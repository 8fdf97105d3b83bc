//! CSV writing for generated trials, in the layout `pacing` ingests.

use std::io::Write;

use thiserror::Error;
use tracing::info;

use pacing::{SPLIT_COUNT, Trial};

const HEADER: [&str; 4 + SPLIT_COUNT] = [
    "athlete", "date", "event", "distance", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8",
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Streams trials as CSV rows.
pub struct TrialWriter<W: Write> {
    inner: csv::Writer<W>,
    header_written: bool,
    rows: usize,
}

impl<W: Write> TrialWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: csv::Writer::from_writer(writer),
            header_written: false,
            rows: 0,
        }
    }

    /// Writes one trial, emitting the header row first if needed.
    pub fn write_trial(&mut self, trial: &Trial) -> Result<(), SeedError> {
        if !self.header_written {
            self.inner.write_record(HEADER)?;
            self.header_written = true;
        }

        let mut record = Vec::with_capacity(HEADER.len());
        record.push(trial.athlete().to_string());
        record.push(trial.date().to_string());
        record.push(trial.event().to_string());
        record.push(trial.distance().to_string());
        record.extend(trial.splits().iter().map(|s| s.to_string()));

        self.inner.write_record(&record)?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_trials(&mut self, trials: &[Trial]) -> Result<(), SeedError> {
        info!("Writing {} trials...", trials.len());
        for trial in trials {
            self.write_trial(trial)?;
        }
        Ok(())
    }

    /// Flushes buffered rows and returns how many trials were written.
    pub fn finish(mut self) -> Result<usize, SeedError> {
        if !self.header_written {
            self.inner.write_record(HEADER)?;
        }
        self.inner.flush()?;
        Ok(self.rows)
    }
}

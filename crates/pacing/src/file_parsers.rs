//! CSV ingestion of split trials.
//!
//! The expected layout is a header row naming `athlete, date, event,
//! distance, t1..t8` followed by one trial per line. Columns are matched by
//! header name, so their order does not matter and extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use tracing::debug;

use crate::models::{SPLIT_COUNT, Splits, Trial};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const SPLIT_COLUMNS: [&str; SPLIT_COUNT] = ["t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8"];

/// Error type for parsing failures
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: invalid number in column {column}: {value:?}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("Line {line}: invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { line: u64, value: String },
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone)]
struct Columns {
    athlete: usize,
    date: usize,
    event: usize,
    distance: usize,
    splits: [usize; SPLIT_COUNT],
    width: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, ParseError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(ParseError::MissingColumn(name))
        };

        let mut splits = [0; SPLIT_COUNT];
        for (slot, name) in splits.iter_mut().zip(SPLIT_COLUMNS) {
            *slot = find(name)?;
        }

        Ok(Self {
            athlete: find("athlete")?,
            date: find("date")?,
            event: find("event")?,
            distance: find("distance")?,
            splits,
            width: headers.len(),
        })
    }
}

/// Parse trials from CSV text.
pub fn parse_trials_csv<R: Read>(reader: R) -> Result<Vec<Trial>, ParseError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut trials = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        trials.push(parse_record(&record, &columns)?);
    }

    debug!("Parsed {} trials", trials.len());

    Ok(trials)
}

/// Parse trials from a CSV file on disk.
pub fn parse_trials_file(path: impl AsRef<Path>) -> Result<Vec<Trial>, crate::errors::PacingError> {
    let file = File::open(path)?;
    Ok(parse_trials_csv(file)?)
}

fn parse_record(record: &StringRecord, columns: &Columns) -> Result<Trial, ParseError> {
    let line = record.position().map_or(0, |p| p.line());

    if record.len() < columns.width {
        return Err(ParseError::FieldCount {
            line,
            expected: columns.width,
            found: record.len(),
        });
    }

    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let date_value = field(columns.date);
    let date = Date::parse(date_value, DATE_FORMAT).map_err(|_| ParseError::InvalidDate {
        line,
        value: date_value.to_string(),
    })?;

    let distance = parse_number::<u32>(field(columns.distance), "distance", line)?;

    let mut splits: Splits = [0.0; SPLIT_COUNT];
    for ((slot, &idx), name) in splits.iter_mut().zip(&columns.splits).zip(SPLIT_COLUMNS) {
        *slot = parse_number::<f64>(field(idx), name, line)?;
    }

    Ok(Trial::new(
        field(columns.athlete),
        date,
        field(columns.event),
        distance,
        splits,
    ))
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    column: &'static str,
    line: u64,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        column,
        value: value.to_string(),
    })
}

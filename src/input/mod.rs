use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::model::record::ScoreRecord;
use crate::resolver::ScoreTable;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "team_name",
    "teammate",
    "team_score",
    "driver_score",
    "combo_score",
    "team_image_url",
    "driver_image_url",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("missing required column '{0}' in header")]
    MissingColumn(&'static str),
    #[error("line {line}: empty value in column '{column}'")]
    EmptyField { line: usize, column: &'static str },
    #[error("line {line}: column '{column}' is not a finite number: '{value}'")]
    BadScore {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("line {line}: duplicate (team, teammate) pair: {team} / {teammate}")]
    DuplicatePair {
        line: usize,
        team: String,
        teammate: String,
    },
    #[error("score table is empty (header only)")]
    EmptyTable,
}

// Raw string row; scores are converted separately so parse failures can
// report the line, column and offending value.
#[derive(Debug, Deserialize)]
struct RawRow {
    team_name: String,
    teammate: String,
    team_score: String,
    driver_score: String,
    combo_score: String,
    team_image_url: String,
    driver_image_url: String,
}

pub fn load_table(path: &Path) -> Result<ScoreTable, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv {
            path: path.display().to_string(),
            source: e,
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records: Vec<ScoreRecord> = Vec::new();
    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();

    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let row = row.map_err(|e| LoadError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;

        let record = validate_row(row, line)?;
        let pair = (record.team_name.clone(), record.teammate.clone());
        if !seen_pairs.insert(pair) {
            return Err(LoadError::DuplicatePair {
                line,
                team: record.team_name,
                teammate: record.teammate,
            });
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(LoadError::EmptyTable);
    }

    info!(
        "loaded {} score records from {}",
        records.len(),
        path.display()
    );
    Ok(ScoreTable::new(records))
}

fn validate_row(row: RawRow, line: usize) -> Result<ScoreRecord, LoadError> {
    if row.team_name.is_empty() {
        return Err(LoadError::EmptyField {
            line,
            column: "team_name",
        });
    }
    if row.teammate.is_empty() {
        return Err(LoadError::EmptyField {
            line,
            column: "teammate",
        });
    }

    let team_score = parse_score(&row.team_score, line, "team_score")?;
    let driver_score = parse_score(&row.driver_score, line, "driver_score")?;
    let combo_score = parse_score(&row.combo_score, line, "combo_score")?;

    Ok(ScoreRecord {
        team_name: row.team_name,
        teammate: row.teammate,
        team_score,
        driver_score,
        combo_score,
        team_image_url: row.team_image_url,
        driver_image_url: row.driver_image_url,
    })
}

fn parse_score(value: &str, line: usize, column: &'static str) -> Result<f32, LoadError> {
    if value.is_empty() {
        return Err(LoadError::EmptyField { line, column });
    }
    let parsed: f32 = value.parse().map_err(|_| LoadError::BadScore {
        line,
        column,
        value: value.to_string(),
    })?;
    if !parsed.is_finite() {
        return Err(LoadError::BadScore {
            line,
            column,
            value: value.to_string(),
        });
    }
    // [0, 1] is a convention of the upstream scoring, not a contract.
    if !(0.0..=1.0).contains(&parsed) {
        warn!(
            "line {}: {} = {} is outside the conventional [0, 1] range",
            line, column, parsed
        );
    }
    Ok(parsed)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

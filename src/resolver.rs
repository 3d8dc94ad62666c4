use std::cmp::Ordering;

use thiserror::Error;

use crate::model::record::ScoreRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no record for team '{team}' with teammate '{teammate}'")]
    NotFound { team: String, teammate: String },
    #[error("top-n count must be non-negative, got {0}")]
    InvalidTopN(i64),
}

/// Immutable score table loaded once at startup. The loader guarantees the
/// table is non-empty and that (team_name, teammate) pairs are unique; all
/// query methods are pure functions over the row vector.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    records: Vec<ScoreRecord>,
}

impl ScoreTable {
    pub fn new(records: Vec<ScoreRecord>) -> ScoreTable {
        ScoreTable { records }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct team names in order of first appearance, not sorted.
    pub fn teams(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for record in &self.records {
            if !out.iter().any(|t| *t == record.team_name) {
                out.push(&record.team_name);
            }
        }
        out
    }

    /// Distinct teammates of `team` in order of first appearance. Empty for
    /// an unknown team; callers treat that as "no valid selection".
    pub fn teammates_of(&self, team: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for record in &self.records {
            if record.team_name == team && !out.iter().any(|m| *m == record.teammate) {
                out.push(&record.teammate);
            }
        }
        out
    }

    /// First record matching (team, teammate) in table order. With the load
    /// invariants in place the first match is the only match.
    pub fn resolve(&self, team: &str, teammate: &str) -> Result<&ScoreRecord, ResolveError> {
        self.records
            .iter()
            .find(|r| r.team_name == team && r.teammate == teammate)
            .ok_or_else(|| ResolveError::NotFound {
                team: team.to_string(),
                teammate: teammate.to_string(),
            })
    }

    /// The `n` records with the highest combo score, descending, ties broken
    /// by original table order. Truncates to the table size; `n = 0` is an
    /// empty result, `n < 0` is an error.
    pub fn top_n(&self, n: i64) -> Result<Vec<&ScoreRecord>, ResolveError> {
        if n < 0 {
            return Err(ResolveError::InvalidTopN(n));
        }
        let mut ranked: Vec<&ScoreRecord> = self.records.iter().collect();
        // Stable sort keeps original order for equal combo scores.
        ranked.sort_by(|a, b| {
            b.combo_score
                .partial_cmp(&a.combo_score)
                .unwrap_or(Ordering::Equal)
        });
        let keep = usize::try_from(n).unwrap_or(usize::MAX);
        ranked.truncate(keep);
        Ok(ranked)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/resolver.rs"]
mod tests;

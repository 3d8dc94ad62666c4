use thiserror::Error;

use crate::model::record::ScoreRecord;
use crate::resolver::{ResolveError, ScoreTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Details,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown team: {0}")]
    UnknownTeam(String),
    #[error("'{teammate}' is not a teammate option for team '{team}'")]
    UnknownTeammate { team: String, teammate: String },
}

/// Display-layer session state: current page plus the (team, teammate)
/// selection. The resolver knows nothing about it. Invariant: the selection
/// always resolves against the table this state was built from.
#[derive(Debug, Clone)]
pub struct DashboardState {
    page: Page,
    team: String,
    teammate: String,
}

impl DashboardState {
    /// Initial state: first team in the table and its first teammate.
    /// `None` only for an empty table, which the loader rejects.
    pub fn new(table: &ScoreTable) -> Option<DashboardState> {
        let team = table.teams().first().copied()?.to_string();
        let teammate = table.teammates_of(&team).first().copied()?.to_string();
        Some(DashboardState {
            page: Page::Dashboard,
            team,
            teammate,
        })
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn teammate(&self) -> &str {
        &self.teammate
    }

    /// Switch team. The teammate is re-validated immediately: if it is not
    /// an option for the new team it falls back to the new team's first
    /// teammate, so a stale selection never reaches the resolver.
    pub fn select_team(&mut self, table: &ScoreTable, team: &str) -> Result<(), SelectionError> {
        let mates = table.teammates_of(team);
        let Some(first) = mates.first().copied() else {
            return Err(SelectionError::UnknownTeam(team.to_string()));
        };
        if !mates.iter().any(|m| *m == self.teammate) {
            self.teammate = first.to_string();
        }
        self.team = team.to_string();
        Ok(())
    }

    pub fn select_teammate(
        &mut self,
        table: &ScoreTable,
        teammate: &str,
    ) -> Result<(), SelectionError> {
        if !table
            .teammates_of(&self.team)
            .iter()
            .any(|m| *m == teammate)
        {
            return Err(SelectionError::UnknownTeammate {
                team: self.team.clone(),
                teammate: teammate.to_string(),
            });
        }
        self.teammate = teammate.to_string();
        Ok(())
    }

    pub fn selected<'t>(&self, table: &'t ScoreTable) -> Result<&'t ScoreRecord, ResolveError> {
        table.resolve(&self.team, &self.teammate)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/ui/state.rs"]
mod tests;

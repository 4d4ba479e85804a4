//! Owned tournament state and the mutate-then-recompute pipeline.

use tracing::debug;

use crate::error::PredictionError;
use crate::matrix::{compute_matrix, Matrix};
use crate::model::{Match, Prediction, Team, TeamId};
use crate::ranking::{rank, BracketThresholds, RankedEntry};
use crate::standings::aggregate;

/// Undecided matches paired with their index in `matches`
pub fn get_upcoming(matches: &[Match]) -> Vec<(usize, &Match)> {
    matches
        .iter()
        .enumerate()
        .filter(|(_, m)| !m.is_decided())
        .collect()
}

/// Set or clear the predicted winner of one match
pub fn set_prediction(m: &mut Match, winner: Option<TeamId>) -> Result<(), PredictionError> {
    m.set_prediction(winner)
}

/// Clear the pick of every undecided match. Decided matches are untouched.
pub fn clear_all_predictions(matches: &mut [Match]) {
    for m in matches.iter_mut().filter(|m| !m.is_decided()) {
        m.predicted_winner_id = Prediction::Cleared;
    }
}

pub fn compute_standings(
    teams: &[Team],
    matches: &[Match],
    thresholds: &BracketThresholds,
) -> Vec<RankedEntry> {
    rank(&aggregate(teams, matches), thresholds)
}

/// Everything derived from the store, rebuilt after each mutation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub standings: Vec<RankedEntry>,
    pub matrix: Matrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Set (`Some`) or clear (`None`) one match's pick
    SetPrediction {
        match_index: usize,
        winner: Option<TeamId>,
    },
    /// Pick a team, or clear the pick if that team is already picked
    TogglePrediction { match_index: usize, team_id: TeamId },
    ClearAll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentStore {
    teams: Vec<Team>,
    matches: Vec<Match>,
}

impl TournamentStore {
    pub fn new(teams: Vec<Team>, matches: Vec<Match>) -> Self {
        Self { teams, matches }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Team name, or a placeholder for ids missing from the dataset
    pub fn team_name(&self, id: TeamId) -> String {
        self.team(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team #{}", id))
    }

    pub fn upcoming(&self) -> Vec<(usize, &Match)> {
        get_upcoming(&self.matches)
    }

    /// Set or clear the pick of the match at `match_index`.
    ///
    /// Only undecided matches accept a pick.
    pub fn set_prediction(
        &mut self,
        match_index: usize,
        winner: Option<TeamId>,
    ) -> Result<(), PredictionError> {
        let m = self
            .matches
            .get_mut(match_index)
            .ok_or(PredictionError::UnknownMatch(match_index))?;
        if m.is_decided() {
            return Err(PredictionError::MatchDecided(match_index));
        }
        set_prediction(m, winner)?;
        debug!(
            "STORE: Match {} prediction is now {:?}",
            match_index, m.predicted_winner_id
        );
        Ok(())
    }

    pub fn toggle_prediction(
        &mut self,
        match_index: usize,
        team_id: TeamId,
    ) -> Result<(), PredictionError> {
        let current = self
            .matches
            .get(match_index)
            .ok_or(PredictionError::UnknownMatch(match_index))?
            .predicted_winner_id;
        let winner = if current == Prediction::Predicted(team_id) {
            None
        } else {
            Some(team_id)
        };
        self.set_prediction(match_index, winner)
    }

    pub fn clear_all_predictions(&mut self) {
        clear_all_predictions(&mut self.matches);
        debug!("STORE: Cleared all predictions");
    }

    pub fn compute_standings(&self, thresholds: &BracketThresholds) -> Vec<RankedEntry> {
        compute_standings(&self.teams, &self.matches, thresholds)
    }

    pub fn compute_matrix(&self) -> Matrix {
        compute_matrix(&self.teams, &self.matches)
    }

    pub fn snapshot(&self, thresholds: &BracketThresholds) -> Snapshot {
        Snapshot {
            standings: self.compute_standings(thresholds),
            matrix: self.compute_matrix(),
        }
    }

    /// Apply a mutation, then recompute standings and matrix in full.
    ///
    /// A rejected mutation leaves the store unchanged and returns the error.
    pub fn apply(
        &mut self,
        mutation: Mutation,
        thresholds: &BracketThresholds,
    ) -> Result<Snapshot, PredictionError> {
        match mutation {
            Mutation::SetPrediction {
                match_index,
                winner,
            } => self.set_prediction(match_index, winner)?,
            Mutation::TogglePrediction {
                match_index,
                team_id,
            } => self.toggle_prediction(match_index, team_id)?,
            Mutation::ClearAll => self.clear_all_predictions(),
        }
        Ok(self.snapshot(thresholds))
    }
}

//! Head-to-head cross table.

use serde::Serialize;

use crate::model::{Match, Team, TeamId};
use crate::outcome::{displayed_winner, is_predicted};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Diagonal: a team against itself
    SelfPair,
    None,
    Win,
    Loss,
    PredictedWin,
    PredictedLoss,
}

impl CellState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Win | Self::PredictedWin => "W",
            Self::Loss | Self::PredictedLoss => "L",
            Self::SelfPair | Self::None => "",
        }
    }

    pub fn is_predicted(&self) -> bool {
        matches!(self, Self::PredictedWin | Self::PredictedLoss)
    }

    /// The same outcome seen from the other team's row
    pub fn mirrored(&self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::PredictedWin => Self::PredictedLoss,
            Self::PredictedLoss => Self::PredictedWin,
            Self::SelfPair => Self::SelfPair,
            Self::None => Self::None,
        }
    }
}

/// Outcome of `row` against `col`, from the row team's point of view
pub fn resolve_cell(row: TeamId, col: TeamId, matches: &[Match]) -> CellState {
    if row == col {
        return CellState::SelfPair;
    }

    let Some(m) = matches.iter().find(|m| m.connects(row, col)) else {
        return CellState::None;
    };

    let predicted = is_predicted(m);
    match (displayed_winner(m), predicted) {
        (None, _) => CellState::None,
        (Some(winner), false) if winner == row => CellState::Win,
        (Some(winner), true) if winner == row => CellState::PredictedWin,
        (Some(_), false) => CellState::Loss,
        (Some(_), true) => CellState::PredictedLoss,
    }
}

/// Full grid, rows and columns in ascending team id order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matrix {
    pub team_ids: Vec<TeamId>,
    pub cells: Vec<Vec<CellState>>,
}

impl Matrix {
    pub fn len(&self) -> usize {
        self.team_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_ids.is_empty()
    }

    pub fn position(&self, team_id: TeamId) -> Option<usize> {
        self.team_ids.binary_search(&team_id).ok()
    }

    pub fn cell(&self, row: TeamId, col: TeamId) -> Option<CellState> {
        let r = self.position(row)?;
        let c = self.position(col)?;
        Some(self.cells[r][c])
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row)?.get(col).copied()
    }
}

pub fn compute_matrix(teams: &[Team], matches: &[Match]) -> Matrix {
    let mut team_ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    team_ids.sort_unstable();
    team_ids.dedup();

    let cells = team_ids
        .iter()
        .map(|&row| {
            team_ids
                .iter()
                .map(|&col| resolve_cell(row, col, matches))
                .collect()
        })
        .collect();

    Matrix { team_ids, cells }
}

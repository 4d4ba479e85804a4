use std::path::PathBuf;
use thiserror::Error;

use crate::model::TeamId;

/// Rejected prediction mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("No match at index {0}")]
    UnknownMatch(usize),

    #[error("Team {team_id} does not play in match {team1_id} vs {team2_id}")]
    TeamNotInMatch {
        team_id: TeamId,
        team1_id: TeamId,
        team2_id: TeamId,
    },

    #[error("Match {0} already has a result")]
    MatchDecided(usize),
}

/// Failures of the loading collaborator
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

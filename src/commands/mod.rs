pub mod matrix;
pub mod standings;
pub mod upcoming;

use anyhow::{Context, Result};

use crate::data_provider::{load_tournament, TournamentDataProvider};
use crate::model::TeamId;
use crate::store::TournamentStore;

/// A `--predict INDEX=TEAM_ID` argument; `INDEX=none` clears the pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionArg {
    pub match_index: usize,
    pub winner: Option<TeamId>,
}

/// Parse `INDEX=TEAM_ID` or `INDEX=none`
pub fn parse_prediction(s: &str) -> Result<PredictionArg, String> {
    let (index, team) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid prediction '{}'. Use INDEX=TEAM_ID", s))?;
    let match_index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid match index '{}'", index))?;
    let winner = match team.trim() {
        "none" | "" => None,
        id => Some(
            id.parse::<TeamId>()
                .map_err(|_| format!("Invalid team id '{}'", id))?,
        ),
    };
    Ok(PredictionArg {
        match_index,
        winner,
    })
}

/// Load the tournament, then apply command-line predictions in order
pub async fn load_with_predictions(
    provider: &dyn TournamentDataProvider,
    predictions: &[PredictionArg],
) -> Result<TournamentStore> {
    let mut store = load_tournament(provider)
        .await
        .context("Failed to load tournament data")?;
    for p in predictions {
        store
            .set_prediction(p.match_index, p.winner)
            .with_context(|| format!("Cannot apply prediction for match {}", p.match_index))?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::MockProvider;
    use crate::model::Prediction;

    #[test]
    fn test_parse_prediction() {
        assert_eq!(
            parse_prediction("6=8"),
            Ok(PredictionArg {
                match_index: 6,
                winner: Some(8)
            })
        );
        assert_eq!(
            parse_prediction(" 3 = none "),
            Ok(PredictionArg {
                match_index: 3,
                winner: None
            })
        );
    }

    #[test]
    fn test_parse_prediction_errors() {
        assert!(parse_prediction("6").is_err());
        assert!(parse_prediction("x=1").is_err());
        assert!(parse_prediction("1=abc").is_err());
    }

    #[tokio::test]
    async fn test_load_with_predictions() {
        let predictions = [PredictionArg {
            match_index: 6,
            winner: Some(8),
        }];
        let store = load_with_predictions(&MockProvider::new(), &predictions)
            .await
            .unwrap();
        assert_eq!(store.matches()[6].predicted_winner_id, Prediction::Predicted(8));
    }

    #[tokio::test]
    async fn test_load_with_invalid_prediction_fails() {
        // Match 0 is already decided
        let predictions = [PredictionArg {
            match_index: 0,
            winner: Some(2),
        }];
        let err = load_with_predictions(&MockProvider::new(), &predictions)
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("already has a result"));
    }
}

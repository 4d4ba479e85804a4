use crate::model::{Match, Prediction, TeamId};

/// Winner that counts for standings.
///
/// A prediction, once touched, always wins over the recorded result, even
/// when it was cleared.
pub fn effective_winner(m: &Match) -> Option<TeamId> {
    match m.predicted_winner_id {
        Prediction::Predicted(id) => Some(id),
        Prediction::Cleared => None,
        Prediction::Unset => m.winner_id,
    }
}

/// Whether the matrix should style this match as a prediction.
///
/// Only undecided matches show predictions; a recorded result always keeps
/// its actual styling.
pub fn is_predicted(m: &Match) -> bool {
    !m.predicted_winner_id.is_unset() && m.winner_id.is_none()
}

/// Winner shown in the head-to-head matrix
pub fn displayed_winner(m: &Match) -> Option<TeamId> {
    if is_predicted(m) {
        m.predicted_winner_id.team()
    } else {
        m.winner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_prediction(winner: Option<TeamId>, prediction: Prediction) -> Match {
        Match {
            team1_id: 1,
            team2_id: 2,
            winner_id: winner,
            predicted_winner_id: prediction,
        }
    }

    #[test]
    fn test_unset_falls_back_to_winner() {
        assert_eq!(effective_winner(&with_prediction(Some(1), Prediction::Unset)), Some(1));
        assert_eq!(effective_winner(&with_prediction(None, Prediction::Unset)), None);
    }

    #[test]
    fn test_prediction_overrides_winner() {
        for winner in [None, Some(1), Some(2)] {
            let m = with_prediction(winner, Prediction::Predicted(2));
            assert_eq!(effective_winner(&m), Some(2));
        }
    }

    #[test]
    fn test_cleared_prediction_means_no_winner() {
        for winner in [None, Some(1), Some(2)] {
            let m = with_prediction(winner, Prediction::Cleared);
            assert_eq!(effective_winner(&m), None);
        }
    }

    #[test]
    fn test_is_predicted_requires_undecided_match() {
        assert!(is_predicted(&with_prediction(None, Prediction::Predicted(1))));
        assert!(is_predicted(&with_prediction(None, Prediction::Cleared)));
        assert!(!is_predicted(&with_prediction(None, Prediction::Unset)));
        assert!(!is_predicted(&with_prediction(Some(1), Prediction::Predicted(2))));
    }

    #[test]
    fn test_displayed_winner_prefers_real_result() {
        let m = with_prediction(Some(1), Prediction::Predicted(2));
        assert_eq!(displayed_winner(&m), Some(1));
        assert_eq!(effective_winner(&m), Some(2));
    }

    #[test]
    fn test_displayed_winner_of_cleared_pick_is_none() {
        assert_eq!(displayed_winner(&with_prediction(None, Prediction::Cleared)), None);
    }
}

//! Tournament records as loaded from the dataset.
//!
//! Teams are immutable for the session. Matches are never added or removed,
//! only their prediction changes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PredictionError;

pub type TeamId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

/// User override for an undecided match.
///
/// `Unset` is the initial state (no key in the dataset), `Cleared` means the
/// user removed a pick (explicit `null`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Prediction {
    #[default]
    Unset,
    Cleared,
    Predicted(TeamId),
}

impl Prediction {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The predicted team, if any
    pub fn team(&self) -> Option<TeamId> {
        match self {
            Self::Predicted(id) => Some(*id),
            Self::Unset | Self::Cleared => None,
        }
    }
}

impl From<Option<TeamId>> for Prediction {
    fn from(value: Option<TeamId>) -> Self {
        match value {
            Some(id) => Self::Predicted(id),
            None => Self::Cleared,
        }
    }
}

// An absent key never reaches these impls: `#[serde(default)]` maps it to
// `Unset`, so a present value is either null or an id.
impl<'de> Deserialize<'de> for Prediction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<TeamId>::deserialize(deserializer).map(Prediction::from)
    }
}

impl Serialize for Prediction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.team().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Match {
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    #[serde(default)]
    pub winner_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Prediction::is_unset")]
    pub predicted_winner_id: Prediction,
}

impl Match {
    pub fn new(team1_id: TeamId, team2_id: TeamId) -> Self {
        Self {
            team1_id,
            team2_id,
            winner_id: None,
            predicted_winner_id: Prediction::Unset,
        }
    }

    pub fn decided(team1_id: TeamId, team2_id: TeamId, winner_id: TeamId) -> Self {
        Self {
            winner_id: Some(winner_id),
            ..Self::new(team1_id, team2_id)
        }
    }

    pub fn is_decided(&self) -> bool {
        self.winner_id.is_some()
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }

    /// Whether this match is the pairing of `a` and `b`, in either orientation
    pub fn connects(&self, a: TeamId, b: TeamId) -> bool {
        (self.team1_id == a && self.team2_id == b) || (self.team1_id == b && self.team2_id == a)
    }

    /// The other participant, or None if `team_id` did not play this match
    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        if self.team1_id == team_id {
            Some(self.team2_id)
        } else if self.team2_id == team_id {
            Some(self.team1_id)
        } else {
            None
        }
    }

    /// Set (`Some`) or clear (`None`) the predicted winner.
    ///
    /// A team that is not one of the two participants is rejected and the
    /// match is left untouched.
    pub fn set_prediction(&mut self, winner: Option<TeamId>) -> Result<(), PredictionError> {
        if let Some(team_id) = winner {
            if !self.involves(team_id) {
                return Err(PredictionError::TeamNotInMatch {
                    team_id,
                    team1_id: self.team1_id,
                    team2_id: self.team2_id,
                });
            }
        }
        self.predicted_winner_id = Prediction::from(winner);
        Ok(())
    }
}

/// Wrapper matching the layout of `teams.json`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamsFile {
    pub teams: Vec<Team>,
}

/// Wrapper matching the layout of `matches.json`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchesFile {
    pub matches: Vec<Match>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_absent_key_is_unset() {
        let m: Match = serde_json::from_str(r#"{"team1_id":1,"team2_id":2,"winner_id":null}"#).unwrap();
        assert_eq!(m.predicted_winner_id, Prediction::Unset);
        assert_eq!(m.winner_id, None);
    }

    #[test]
    fn test_prediction_null_is_cleared() {
        let m: Match = serde_json::from_str(
            r#"{"team1_id":1,"team2_id":2,"winner_id":null,"predicted_winner_id":null}"#,
        )
        .unwrap();
        assert_eq!(m.predicted_winner_id, Prediction::Cleared);
    }

    #[test]
    fn test_prediction_value_is_predicted() {
        let m: Match = serde_json::from_str(
            r#"{"team1_id":1,"team2_id":2,"winner_id":null,"predicted_winner_id":2}"#,
        )
        .unwrap();
        assert_eq!(m.predicted_winner_id, Prediction::Predicted(2));
    }

    #[test]
    fn test_missing_winner_key_is_undecided() {
        let m: Match = serde_json::from_str(r#"{"team1_id":5,"team2_id":6}"#).unwrap();
        assert!(!m.is_decided());
    }

    #[test]
    fn test_serialize_skips_unset_prediction() {
        let json = serde_json::to_string(&Match::new(1, 2)).unwrap();
        assert!(!json.contains("predicted_winner_id"));

        let mut m = Match::new(1, 2);
        m.predicted_winner_id = Prediction::Cleared;
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains(r#""predicted_winner_id":null"#));
    }

    #[test]
    fn test_team_logo_defaults_to_empty() {
        let t: Team = serde_json::from_str(r#"{"id":3,"name":"Gamma"}"#).unwrap();
        assert_eq!(t.logo, "");
    }

    #[test]
    fn test_set_prediction_accepts_participants() {
        let mut m = Match::new(1, 2);
        m.set_prediction(Some(2)).unwrap();
        assert_eq!(m.predicted_winner_id, Prediction::Predicted(2));
        m.set_prediction(None).unwrap();
        assert_eq!(m.predicted_winner_id, Prediction::Cleared);
    }

    #[test]
    fn test_set_prediction_rejects_outsider() {
        let mut m = Match::new(1, 2);
        m.set_prediction(Some(1)).unwrap();

        let err = m.set_prediction(Some(9)).unwrap_err();
        assert!(matches!(err, PredictionError::TeamNotInMatch { team_id: 9, .. }));
        assert_eq!(m.predicted_winner_id, Prediction::Predicted(1));
    }

    #[test]
    fn test_opponent_of() {
        let m = Match::new(3, 7);
        assert_eq!(m.opponent_of(3), Some(7));
        assert_eq!(m.opponent_of(7), Some(3));
        assert_eq!(m.opponent_of(1), None);
    }

    #[test]
    fn test_connects_either_orientation() {
        let m = Match::new(3, 7);
        assert!(m.connects(3, 7));
        assert!(m.connects(7, 3));
        assert!(!m.connects(3, 3));
    }
}

use crate::store::TournamentStore;

use super::types::{Direction, Side};

/// Global actions
///
/// Every state change in the TUI goes through an action. Actions come from
/// key events and from the background loader.
#[derive(Debug, Clone)]
pub enum Action {
    /// Start (or restart) loading the tournament files
    LoadTournament,
    /// Result of a background load; the error is already rendered to text
    TournamentLoaded(Result<TournamentStore, String>),

    FocusNext,
    SelectPreviousMatch,
    SelectNextMatch,
    MoveMatrixCursor(Direction),

    /// Toggle the pick for one side of the selected upcoming match
    PickTeam(Side),
    ClearPredictions,

    SetStatusMessage { message: String, is_error: bool },
    Quit,
}

/// Side effects requested by the reducer, executed by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    LoadTournament,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_clone_keeps_payload() {
        let action = Action::SetStatusMessage {
            message: "hello".to_string(),
            is_error: true,
        };
        match action.clone() {
            Action::SetStatusMessage { message, is_error } => {
                assert_eq!(message, "hello");
                assert!(is_error);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}

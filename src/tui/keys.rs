/// Keyboard event to action mapping
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::AppState;
use super::types::{Direction, Panel, Side};

/// Keys that work regardless of focus
fn handle_global_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::ClearPredictions),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::LoadTournament),
        _ => None,
    }
}

fn handle_predictions_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPreviousMatch),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNextMatch),
        KeyCode::Left | KeyCode::Char('1') => Some(Action::PickTeam(Side::Team1)),
        KeyCode::Right | KeyCode::Char('2') => Some(Action::PickTeam(Side::Team2)),
        _ => None,
    }
}

fn handle_matrix_keys(key_code: KeyCode) -> Option<Action> {
    let direction = match key_code {
        KeyCode::Up | KeyCode::Char('k') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j') => Direction::Down,
        KeyCode::Left | KeyCode::Char('h') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l') => Direction::Right,
        _ => return None,
    };
    Some(Action::MoveMatrixCursor(direction))
}

/// Convert a key event into an action, given the current focus
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} (focus: {:?})", key.code, state.ui.focus);

    if let Some(action) = handle_global_keys(key) {
        return Some(action);
    }

    match state.ui.focus {
        Panel::Predictions => handle_predictions_keys(key.code),
        Panel::Matrix => handle_matrix_keys(key.code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused(panel: Panel) -> AppState {
        let mut state = AppState::default();
        state.ui.focus = panel;
        state
    }

    #[test]
    fn test_global_keys() {
        let state = AppState::default();
        assert!(matches!(key_to_action(key(KeyCode::Char('q')), &state), Some(Action::Quit)));
        assert!(matches!(key_to_action(key(KeyCode::Tab), &state), Some(Action::FocusNext)));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('c')), &state),
            Some(Action::ClearPredictions)
        ));
        assert!(matches!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_prediction_keys() {
        let state = focused(Panel::Predictions);
        assert!(matches!(
            key_to_action(key(KeyCode::Left), &state),
            Some(Action::PickTeam(Side::Team1))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('2')), &state),
            Some(Action::PickTeam(Side::Team2))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Down), &state),
            Some(Action::SelectNextMatch)
        ));
    }

    #[test]
    fn test_matrix_keys_move_cursor() {
        let state = focused(Panel::Matrix);
        assert!(matches!(
            key_to_action(key(KeyCode::Left), &state),
            Some(Action::MoveMatrixCursor(Direction::Left))
        ));
        assert!(key_to_action(key(KeyCode::Char('1')), &state).is_none());
    }
}

use chrono::Local;
use tracing::{debug, warn};

use crate::store::{Mutation, TournamentStore};

use super::action::{Action, Effect};
use super::state::AppState;
use super::types::{Direction, Side};

/// Pure state reducer
///
/// Takes the current state and an action, returns the new state and the
/// effect the runtime should run. No I/O happens here.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::LoadTournament => {
            let mut new_state = state;
            new_state.data.loading = true;
            new_state.data.load_error = None;
            new_state
                .system
                .set_status_message("Loading tournament data...".to_string());
            (new_state, Effect::LoadTournament)
        }
        Action::TournamentLoaded(result) => (reduce_loaded(state, result), Effect::None),
        Action::FocusNext => {
            let mut new_state = state;
            new_state.ui.focus = new_state.ui.focus.next();
            debug!("FOCUS: now on {:?}", new_state.ui.focus);
            (new_state, Effect::None)
        }
        Action::SelectPreviousMatch => (move_selection(state, -1), Effect::None),
        Action::SelectNextMatch => (move_selection(state, 1), Effect::None),
        Action::MoveMatrixCursor(direction) => (move_cursor(state, direction), Effect::None),
        Action::PickTeam(side) => (pick_team(state, side), Effect::None),
        Action::ClearPredictions => (apply_mutation(state, Mutation::ClearAll), Effect::None),
        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }
        Action::Quit => (state, Effect::None),
    }
}

fn reduce_loaded(
    state: AppState,
    result: Result<TournamentStore, String>,
) -> AppState {
    let mut new_state = state;
    new_state.data.loading = false;

    match result {
        Ok(store) => {
            new_state.data.snapshot = store.snapshot(&new_state.system.config.bracket);
            new_state.system.set_status_message(format!(
                "Loaded {} teams, {} matches",
                store.teams().len(),
                store.matches().len()
            ));
            new_state.data.store = Some(store);
            new_state.data.load_error = None;
            new_state.system.loaded_at = Some(Local::now());
            new_state.ui.selected_upcoming = 0;
            new_state.ui.matrix_cursor = (0, 0);
        }
        Err(e) => {
            warn!("LOAD: {}", e);
            new_state
                .system
                .set_status_error_message(format!("Failed to load tournament data: {}", e));
            new_state.data.load_error = Some(e);
        }
    }

    new_state
}

fn move_selection(state: AppState, delta: isize) -> AppState {
    let mut new_state = state;
    let count = new_state.upcoming().len();
    if count == 0 {
        return new_state;
    }
    let current = new_state.ui.selected_upcoming.min(count - 1);
    new_state.ui.selected_upcoming = current.saturating_add_signed(delta).min(count - 1);
    new_state
}

fn move_cursor(state: AppState, direction: Direction) -> AppState {
    let mut new_state = state;
    let size = new_state.data.snapshot.matrix.len();
    if size == 0 {
        return new_state;
    }
    let (row, col) = new_state.ui.matrix_cursor;
    new_state.ui.matrix_cursor = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(size - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(size - 1)),
    };
    new_state
}

fn pick_team(state: AppState, side: Side) -> AppState {
    let Some((match_index, m)) = state.selected_match() else {
        return state;
    };
    let team_id = match side {
        Side::Team1 => m.team1_id,
        Side::Team2 => m.team2_id,
    };
    apply_mutation(
        state,
        Mutation::TogglePrediction {
            match_index,
            team_id,
        },
    )
}

/// Run a store mutation and swap in the fresh snapshot
fn apply_mutation(state: AppState, mutation: Mutation) -> AppState {
    let mut new_state = state;
    let thresholds = new_state.system.config.bracket;
    let Some(store) = new_state.data.store.as_mut() else {
        return new_state;
    };

    match store.apply(mutation, &thresholds) {
        Ok(snapshot) => {
            let message = describe_mutation(store, mutation);
            new_state.data.snapshot = snapshot;
            new_state.system.set_status_message(message);
        }
        Err(e) => {
            warn!("PREDICT: {}", e);
            new_state.system.set_status_error_message(e.to_string());
        }
    }

    debug!("PREDICT: applied {:?}", mutation);
    new_state
}

fn describe_mutation(store: &TournamentStore, mutation: Mutation) -> String {
    match mutation {
        Mutation::ClearAll => "Cleared all predictions".to_string(),
        Mutation::SetPrediction { match_index, .. } | Mutation::TogglePrediction { match_index, .. } => {
            let Some(m) = store.matches().get(match_index) else {
                return String::new();
            };
            let matchup = format!(
                "{} vs {}",
                store.team_name(m.team1_id),
                store.team_name(m.team2_id)
            );
            match m.predicted_winner_id.team() {
                Some(winner) => format!("{}: picked {}", matchup, store.team_name(winner)),
                None => format!("{}: pick cleared", matchup),
            }
        }
    }
}

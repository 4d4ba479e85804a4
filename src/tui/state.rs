use chrono::{DateTime, Local};

use crate::config::Config;
use crate::model::Match;
use crate::store::{Snapshot, TournamentStore};

use super::types::Panel;

pub const DEFAULT_STATUS_MESSAGE: &str = "Tab: switch panel | ←/→: pick winner | c: clear picks | q: quit";

/// Root application state
///
/// Single source of truth, only changed by the reducer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: DataState,
    pub ui: UiState,
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub store: Option<TournamentStore>,
    /// Standings and matrix derived from `store`
    pub snapshot: Snapshot,
    pub loading: bool,
    pub load_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Panel,
    /// Position in the upcoming list, not a match index
    pub selected_upcoming: usize,
    /// (row, col) in the matrix
    pub matrix_cursor: (usize, usize),
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub loaded_at: Option<DateTime<Local>>,
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            loaded_at: None,
            config: Config::default(),
            status_message: Some(DEFAULT_STATUS_MESSAGE.to_string()),
            status_is_error: false,
        }
    }
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

impl AppState {
    pub fn with_config(config: Config) -> Self {
        let mut state = Self::default();
        state.system.config = config;
        state
    }

    /// Undecided matches with their dataset index
    pub fn upcoming(&self) -> Vec<(usize, &Match)> {
        self.data
            .store
            .as_ref()
            .map(|store| store.upcoming())
            .unwrap_or_default()
    }

    /// The upcoming match under the selection, if any
    pub fn selected_match(&self) -> Option<(usize, &Match)> {
        self.upcoming().get(self.ui.selected_upcoming).copied()
    }
}

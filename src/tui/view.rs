/// Screen composition: lays out the panels and renders each widget
use chrono::{DateTime, Local};
use std::fmt::Write;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::config::DisplayConfig;
use crate::store::TournamentStore;

use super::state::AppState;
use super::types::Panel;
use super::widgets::{MatchMatrix, PredictionList, RenderableWidget, StandingsTable, StatusBar};

/// Draw a titled border and return the area inside it
fn panel_block(title: &str, focused: bool, area: Rect, buf: &mut Buffer, config: &DisplayConfig) -> Rect {
    let border_style = if focused {
        Style::default().fg(config.selection_fg)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", title))
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Render the whole application into `buf`
pub fn render_app(state: &AppState, area: Rect, buf: &mut Buffer) {
    let config = &state.system.config.display;

    let [main_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .areas(area);

    match &state.data.store {
        Some(store) => render_tournament(state, store, main_area, buf, config),
        None => render_placeholder(state, main_area, buf, config),
    }

    let loaded_at = state
        .system
        .loaded_at
        .map(|t| format_time(&t, &state.system.config.time_format));
    StatusBar::new()
        .with_message(state.system.status_message.clone(), state.system.status_is_error)
        .with_loaded_at(loaded_at)
        .render(status_area, buf, config);
}

/// Format with the configured pattern, falling back to `%H:%M:%S` when
/// the pattern is invalid
fn format_time(time: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() {
        out = time.format("%H:%M:%S").to_string();
    }
    out
}

fn render_placeholder(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    if area.height == 0 {
        return;
    }
    let (text, style) = match &state.data.load_error {
        Some(e) => (
            format!("Failed to load tournament data: {}", e),
            Style::default().fg(config.error_fg),
        ),
        None => ("Loading tournament data...".to_string(), Style::default()),
    };
    buf.set_stringn(area.x + 1, area.y + area.height / 2, text, area.width.saturating_sub(2) as usize, style);
}

fn render_tournament(
    state: &AppState,
    store: &TournamentStore,
    area: Rect,
    buf: &mut Buffer,
    config: &DisplayConfig,
) {
    let snapshot = &state.data.snapshot;
    let upcoming = store.upcoming();
    let focus = state.ui.focus;

    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(area);

    let predictions = PredictionList::new(
        &upcoming,
        store,
        (focus == Panel::Predictions).then_some(state.ui.selected_upcoming),
    );
    let standings = StandingsTable::new(&snapshot.standings, store);
    let list_height = predictions.preferred_height().unwrap_or(1) + 2;

    let [list_area, standings_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(list_height), Constraint::Min(0)])
        .areas(left);

    let inner = panel_block(
        Panel::Predictions.label(),
        focus == Panel::Predictions,
        list_area,
        buf,
        config,
    );
    predictions.render(inner, buf, config);

    let inner = panel_block("Standings", false, standings_area, buf, config);
    standings.render(inner, buf, config);

    let matrix = MatchMatrix::new(
        &snapshot.matrix,
        store,
        (focus == Panel::Matrix).then_some(state.ui.matrix_cursor),
    );
    let inner = panel_block(Panel::Matrix.label(), focus == Panel::Matrix, right, buf, config);
    matrix.render(inner, buf, config);

    if let Some(summary) = matrix.cursor_summary() {
        let grid_height = matrix.preferred_height().unwrap_or(0);
        if grid_height + 1 < inner.height {
            buf.set_stringn(
                inner.x,
                inner.y + grid_height + 1,
                summary,
                inner.width as usize,
                Style::default().fg(config.selection_fg),
            );
        }
    }
}

//! General test utilities for TUI tests.
//!
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::fixtures::sample_store;
use crate::store::TournamentStore;

use super::action::Action;
use super::reducer::reduce;
use super::state::AppState;
use super::view::render_app;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 120;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// State after a successful load of `store`
pub fn loaded_state(store: TournamentStore) -> AppState {
    reduce(AppState::default(), Action::TournamentLoaded(Ok(store))).0
}

/// State loaded with the eight-team sample tournament
pub fn sample_state() -> AppState {
    loaded_state(sample_store())
}

/// Render the full application into a fresh buffer
pub fn render_state(state: &AppState, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    render_app(state, buf.area, &mut buf);
    buf
}

/// True when any line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}

/// MatchMatrix widget - head-to-head grid with a movable cursor
///
/// The cursor row and column headers are drawn in the selection color and
/// the cell under the cursor is reversed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use crate::commands::matrix::cell_text;
use crate::config::DisplayConfig;
use crate::formatting::{fit_width, short_name};
use crate::layout_constants::{MATRIX_CELL_WIDTH, MATRIX_COL_LABEL_LEN, MATRIX_ROW_HEADER_WIDTH};
use crate::matrix::{CellState, Matrix};
use crate::store::TournamentStore;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct MatchMatrix<'a> {
    pub matrix: &'a Matrix,
    pub store: &'a TournamentStore,
    /// (row, col); None when the panel is not focused
    pub cursor: Option<(usize, usize)>,
}

impl<'a> MatchMatrix<'a> {
    pub fn new(matrix: &'a Matrix, store: &'a TournamentStore, cursor: Option<(usize, usize)>) -> Self {
        Self {
            matrix,
            store,
            cursor,
        }
    }

    fn cell_style(&self, state: CellState, row: usize, col: usize, config: &DisplayConfig) -> Style {
        let fg = match state {
            CellState::Win => config.win_fg,
            CellState::Loss => config.loss_fg,
            CellState::PredictedWin | CellState::PredictedLoss => config.predicted_fg,
            CellState::SelfPair => Color::DarkGray,
            CellState::None => Color::Reset,
        };
        let mut style = Style::default().fg(fg);
        match self.cursor {
            Some(cursor) if cursor == (row, col) => {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Some((r, c)) if r == row || c == col => {
                style = style.add_modifier(Modifier::BOLD);
            }
            _ => {}
        }
        style
    }

    fn header_style(&self, highlighted: bool, config: &DisplayConfig) -> Style {
        if highlighted {
            Style::default()
                .fg(config.selection_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(config.header_fg)
        }
    }

    /// Description of the cell under the cursor, e.g. "Aurora beat Blaze"
    pub fn cursor_summary(&self) -> Option<String> {
        let (row, col) = self.cursor?;
        let state = self.matrix.cell_at(row, col)?;
        let row_name = self.store.team_name(self.matrix.team_ids[row]);
        let col_name = self.store.team_name(self.matrix.team_ids[col]);
        let text = match state {
            CellState::SelfPair => row_name,
            CellState::None => format!("{} vs {}: no result", row_name, col_name),
            CellState::Win => format!("{} beat {}", row_name, col_name),
            CellState::Loss => format!("{} lost to {}", row_name, col_name),
            CellState::PredictedWin => format!("{} picked to beat {}", row_name, col_name),
            CellState::PredictedLoss => format!("{} picked to lose to {}", row_name, col_name),
        };
        Some(text)
    }
}

impl<'a> RenderableWidget for MatchMatrix<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 || self.matrix.is_empty() {
            return;
        }
        let grid_x = area.x + MATRIX_ROW_HEADER_WIDTH as u16;
        let cell_x = |col: usize| grid_x + (col * MATRIX_CELL_WIDTH) as u16 + 1;
        let fits = |x: u16| x + MATRIX_COL_LABEL_LEN as u16 <= area.right();
        let (cursor_row, cursor_col) = match self.cursor {
            Some((r, c)) => (Some(r), Some(c)),
            None => (None, None),
        };

        for (col, &team_id) in self.matrix.team_ids.iter().enumerate() {
            let x = cell_x(col);
            if !fits(x) {
                break;
            }
            let label = format!(
                "{:^width$}",
                short_name(&self.store.team_name(team_id), MATRIX_COL_LABEL_LEN),
                width = MATRIX_COL_LABEL_LEN
            );
            buf.set_string(x, area.y, label, self.header_style(cursor_col == Some(col), config));
        }

        for (row, &team_id) in self.matrix.team_ids.iter().enumerate() {
            let y = area.y + 1 + row as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_stringn(
                area.x,
                y,
                fit_width(&self.store.team_name(team_id), MATRIX_ROW_HEADER_WIDTH),
                area.width as usize,
                self.header_style(cursor_row == Some(row), config),
            );

            for (col, state) in self.matrix.cells[row].iter().enumerate() {
                let x = cell_x(col);
                if !fits(x) {
                    break;
                }
                let text = format!(
                    "{:^width$}",
                    cell_text(*state, config),
                    width = MATRIX_COL_LABEL_LEN
                );
                buf.set_string(x, y, text, self.cell_style(*state, row, col, config));
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.matrix.len() as u16 + 1)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some((MATRIX_ROW_HEADER_WIDTH + self.matrix.len() * MATRIX_CELL_WIDTH) as u16)
    }
}

/// Widgets that render straight into a ratatui Buffer
///
/// Each widget borrows the data it shows and draws itself with the
/// display config's colors and box characters.

#[cfg(test)]
pub mod testing;

pub mod match_matrix;
pub use match_matrix::MatchMatrix;

pub mod prediction_list;
pub use prediction_list::PredictionList;

pub mod standings_table;
pub use standings_table::StandingsTable;

pub mod status_bar;
pub use status_bar::StatusBar;

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, so tests can
/// render into a small buffer and compare lines.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

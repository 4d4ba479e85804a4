/// StatusBar widget - separator plus a status line
///
/// Left side shows the status message (errors in the error color), right
/// side shows when the tournament data was loaded.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Default)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    /// Already formatted load time
    pub loaded_at: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: Option<String>, is_error: bool) -> Self {
        self.message = message;
        self.is_error = is_error;
        self
    }

    pub fn with_loaded_at(mut self, loaded_at: Option<String>) -> Self {
        self.loaded_at = loaded_at;
        self
    }

    fn build_right_text(&self) -> String {
        match &self.loaded_at {
            Some(time) => format!("Loaded {}", time),
            None => "Not loaded".to_string(),
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let width = area.width as usize;

        buf.set_stringn(
            area.x,
            area.y,
            config.box_chars.horizontal.repeat(width),
            width,
            Style::default(),
        );

        let right_text = format!(" {} {} ", config.box_chars.vertical, self.build_right_text());
        let right_width = right_text.width();
        let left_width = width.saturating_sub(right_width);

        if let Some(message) = &self.message {
            let style = if self.is_error {
                Style::default().fg(config.error_fg)
            } else {
                Style::default()
            };
            buf.set_stringn(area.x + 1, area.y + 1, message, left_width.saturating_sub(1), style);
        }

        if right_width <= width {
            buf.set_string(
                area.x + left_width as u16,
                area.y + 1,
                right_text,
                Style::default(),
            );
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}

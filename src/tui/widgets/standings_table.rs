/// StandingsTable widget - ranked teams colored by bracket

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use crate::commands::standings::{standings_header, standings_row};
use crate::config::DisplayConfig;
use crate::ranking::{Classification, RankedEntry};
use crate::store::TournamentStore;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct StandingsTable<'a> {
    pub entries: &'a [RankedEntry],
    pub store: &'a TournamentStore,
}

impl<'a> StandingsTable<'a> {
    pub fn new(entries: &'a [RankedEntry], store: &'a TournamentStore) -> Self {
        Self { entries, store }
    }

    /// Number of rules drawn between bracket groups
    fn group_breaks(&self) -> usize {
        self.entries
            .windows(2)
            .filter(|w| w[0].classification != w[1].classification)
            .count()
    }
}

fn classification_style(classification: Classification, config: &DisplayConfig) -> Style {
    let color = match classification {
        Classification::Winners => config.winners_fg,
        Classification::Losers => config.losers_fg,
        Classification::Eliminated => config.eliminated_fg,
    };
    Style::default().fg(color)
}

impl<'a> RenderableWidget for StandingsTable<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let rule = config.box_chars.horizontal.repeat(width);
        let mut y = area.y;

        buf.set_stringn(
            area.x,
            y,
            standings_header(),
            width,
            Style::default().fg(config.header_fg).add_modifier(Modifier::BOLD),
        );
        y += 1;
        if y < area.bottom() {
            buf.set_stringn(area.x, y, &rule, width, Style::default());
            y += 1;
        }

        let mut previous = None;
        for entry in self.entries {
            if y >= area.bottom() {
                break;
            }
            if previous.is_some_and(|c| c != entry.classification) {
                buf.set_stringn(area.x, y, &rule, width, Style::default().fg(config.eliminated_fg));
                y += 1;
                if y >= area.bottom() {
                    break;
                }
            }
            previous = Some(entry.classification);

            let line = standings_row(entry, &self.store.team_name(entry.team_id));
            buf.set_stringn(
                area.x,
                y,
                line,
                width,
                classification_style(entry.classification, config),
            );
            y += 1;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some((2 + self.entries.len() + self.group_breaks()) as u16)
    }
}

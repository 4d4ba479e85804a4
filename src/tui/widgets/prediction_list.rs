/// PredictionList widget - upcoming matches with the current picks
///
/// Each row shows the dataset index and both teams. A picked team is marked
/// with `*` and drawn in the predicted color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use crate::config::DisplayConfig;
use crate::formatting::fit_width;
use crate::layout_constants::PREDICTION_TEAM_WIDTH;
use crate::model::{Match, TeamId};
use crate::store::TournamentStore;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug)]
pub struct PredictionList<'a> {
    pub upcoming: &'a [(usize, &'a Match)],
    pub store: &'a TournamentStore,
    /// Position in `upcoming`; None hides the selector
    pub selected: Option<usize>,
}

impl<'a> PredictionList<'a> {
    pub fn new(
        upcoming: &'a [(usize, &'a Match)],
        store: &'a TournamentStore,
        selected: Option<usize>,
    ) -> Self {
        Self {
            upcoming,
            store,
            selected,
        }
    }

    /// First row to draw so the selection stays visible
    fn scroll_offset(&self, height: usize) -> usize {
        match self.selected {
            Some(selected) if height > 0 && selected >= height => selected + 1 - height,
            _ => 0,
        }
    }

    fn team_span(&self, m: &Match, team_id: TeamId, row_style: Style, config: &DisplayConfig) -> Span<'static> {
        let picked = m.predicted_winner_id.team() == Some(team_id);
        let text = format!(
            "{}{}",
            if picked { "*" } else { " " },
            fit_width(&self.store.team_name(team_id), PREDICTION_TEAM_WIDTH)
        );
        if picked {
            Span::styled(
                text,
                Style::default()
                    .fg(config.predicted_fg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(text, row_style)
        }
    }
}

impl<'a> RenderableWidget for PredictionList<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.upcoming.is_empty() {
            buf.set_stringn(
                area.x,
                area.y,
                "No upcoming matches",
                area.width as usize,
                Style::default().fg(config.eliminated_fg),
            );
            return;
        }

        let height = area.height as usize;
        let offset = self.scroll_offset(height);
        for (row, (position, (index, m))) in self
            .upcoming
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .enumerate()
        {
            let is_selected = self.selected == Some(position);
            let row_style = if is_selected {
                Style::default().fg(config.selection_fg)
            } else {
                Style::default()
            };
            let selector = if is_selected {
                config.box_chars.selector.as_str()
            } else {
                " "
            };

            let line = Line::from(vec![
                Span::styled(format!("{} {:>3}  ", selector, index), row_style),
                self.team_span(m, m.team1_id, row_style, config),
                Span::styled(" vs ", row_style),
                self.team_span(m, m.team2_id, row_style, config),
            ]);
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.upcoming.len().max(1) as u16)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some((7 + (PREDICTION_TEAM_WIDTH + 1) * 2 + 4) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_store, team};
    use crate::tui::testing::assert_buffer;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_prediction_list_rows() {
        let store = sample_store();
        let upcoming = store.upcoming();
        let widget = PredictionList::new(&upcoming, &store, Some(0));
        let buf = render_widget_with_config(&widget, 45, 8, &test_config_ascii());

        assert_eq!(
            buffer_line(&buf, 0).trim_end(),
            ">   5   Aurora         vs  Granite"
        );
        assert_eq!(
            buffer_line(&buf, 1).trim_end(),
            "    6   Aurora         vs  Harbor"
        );
        assert_eq!(get_cell(&buf, 0, 0).fg, test_config().selection_fg);
    }

    #[test]
    fn test_prediction_list_marks_pick() {
        let mut store = sample_store();
        store.set_prediction(6, Some(8)).unwrap();
        let upcoming = store.upcoming();
        let widget = PredictionList::new(&upcoming, &store, None);
        let buf = render_widget(&widget, 45, 8);

        assert_eq!(
            buffer_line(&buf, 1).trim_end(),
            "    6   Aurora         vs *Harbor"
        );
        // '*' sits right after " vs "
        assert_eq!(get_cell(&buf, 26, 1).fg, test_config().predicted_fg);
    }

    #[test]
    fn test_prediction_list_scrolls_to_selection() {
        let store = sample_store();
        let upcoming = store.upcoming();
        let widget = PredictionList::new(&upcoming, &store, Some(7));
        let buf = render_widget_with_config(&widget, 45, 3, &test_config_ascii());

        assert!(buffer_line(&buf, 2).starts_with(">  27"));
    }

    #[test]
    fn test_prediction_list_small_tournament() {
        let mut store = TournamentStore::new(
            vec![team(1, "Aurora"), team(2, "Blaze"), team(3, "Cobalt")],
            vec![Match::new(1, 2), Match::decided(1, 3, 3), Match::new(2, 3)],
        );
        store.set_prediction(2, Some(2)).unwrap();
        let upcoming = store.upcoming();
        let widget = PredictionList::new(&upcoming, &store, Some(0));
        let buf = render_widget_with_config(&widget, 40, 3, &test_config_ascii());

        assert_buffer(
            &buf,
            &[
                ">   0   Aurora         vs  Blaze",
                "    2  *Blaze          vs  Cobalt",
                "",
            ],
        );
    }

    #[test]
    fn test_prediction_list_empty() {
        let store = TournamentStore::default();
        let widget = PredictionList::new(&[], &store, None);
        let buf = render_widget(&widget, 30, 2);
        assert_eq!(buffer_line(&buf, 0).trim_end(), "No upcoming matches");
    }
}

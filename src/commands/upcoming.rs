use crate::config::{Config, DisplayConfig};
use crate::data_provider::{load_tournament, TournamentDataProvider};
use crate::formatting::{fit_width, format_header};
use crate::layout_constants::PREDICTION_TEAM_WIDTH;
use crate::model::Prediction;
use crate::store::TournamentStore;
use anyhow::{Context, Result};

/// List undecided matches with the index `--predict` expects
pub fn format_upcoming(store: &TournamentStore, display: &DisplayConfig) -> String {
    let upcoming = store.upcoming();
    if upcoming.is_empty() {
        return "No upcoming matches.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {} {:>4}  {} {}\n",
        "Index",
        fit_width("Team 1", PREDICTION_TEAM_WIDTH),
        "",
        fit_width("Team 2", PREDICTION_TEAM_WIDTH),
        "Pick"
    ));
    output.push_str(&format!(
        "{}\n",
        display
            .box_chars
            .horizontal
            .repeat(5 + 2 + PREDICTION_TEAM_WIDTH * 2 + 7 + 1 + 4)
    ));

    for (index, m) in upcoming {
        let pick = match m.predicted_winner_id {
            Prediction::Predicted(id) => store.team_name(id),
            Prediction::Unset | Prediction::Cleared => "-".to_string(),
        };
        let line = format!(
            "{:>5}  {} {:>4}  {} {}",
            index,
            fit_width(&format!("{} ({})", store.team_name(m.team1_id), m.team1_id), PREDICTION_TEAM_WIDTH),
            "vs",
            fit_width(&format!("{} ({})", store.team_name(m.team2_id), m.team2_id), PREDICTION_TEAM_WIDTH),
            pick
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

pub async fn run(provider: &dyn TournamentDataProvider, config: &Config) -> Result<()> {
    let store = load_tournament(provider)
        .await
        .context("Failed to load tournament data")?;

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Upcoming matches", true, &config.display));
    output.push('\n');
    output.push_str(&format_upcoming(&store, &config.display));
    print!("{}", output);

    Ok(())
}

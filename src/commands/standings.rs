use crate::commands::{load_with_predictions, PredictionArg};
use crate::config::{Config, DisplayConfig};
use crate::data_provider::TournamentDataProvider;
use crate::formatting::{fit_width, format_header};
use crate::layout_constants::{
    BRACKET_COL_WIDTH, RANK_COL_WIDTH, RECORD_COL_WIDTH, STANDINGS_TABLE_WIDTH,
    TEAM_NAME_COL_WIDTH,
};
use crate::ranking::RankedEntry;
use crate::store::TournamentStore;
use anyhow::Result;

/// Column header line shared by the CLI table and the TUI widget
pub fn standings_header() -> String {
    format!(
        "{:>rank_width$} {} {:>record_width$} {:<bracket_width$}",
        "Rk",
        fit_width("Team", TEAM_NAME_COL_WIDTH),
        "W-L",
        "Bracket",
        rank_width = RANK_COL_WIDTH,
        record_width = RECORD_COL_WIDTH,
        bracket_width = BRACKET_COL_WIDTH,
    )
}

pub fn standings_row(entry: &RankedEntry, team_name: &str) -> String {
    format!(
        "{:>rank_width$} {} {:>record_width$} {}",
        entry.rank,
        fit_width(team_name, TEAM_NAME_COL_WIDTH),
        format!("{}-{}", entry.wins, entry.losses),
        entry.classification.label(),
        rank_width = RANK_COL_WIDTH,
        record_width = RECORD_COL_WIDTH,
    )
}

/// Render ranked standings, with a rule between bracket groups
pub fn format_standings_table(
    standings: &[RankedEntry],
    store: &TournamentStore,
    display: &DisplayConfig,
) -> String {
    if standings.is_empty() {
        return "No teams.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&standings_header());
    output.push('\n');
    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(STANDINGS_TABLE_WIDTH)
    ));

    let mut previous = None;
    for entry in standings {
        if previous.is_some_and(|c| c != entry.classification) {
            output.push_str(&format!(
                "{}\n",
                display.box_chars.horizontal.repeat(STANDINGS_TABLE_WIDTH)
            ));
        }
        previous = Some(entry.classification);

        output.push_str(&standings_row(entry, &store.team_name(entry.team_id)));
        output.push('\n');
    }

    output
}

pub async fn run(
    provider: &dyn TournamentDataProvider,
    predictions: &[PredictionArg],
    config: &Config,
) -> Result<()> {
    let store = load_with_predictions(provider, predictions).await?;
    let standings = store.compute_standings(&config.bracket);

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Standings", true, &config.display));
    output.push('\n');
    output.push_str(&format_standings_table(&standings, &store, &config.display));
    print!("{}", output);

    Ok(())
}

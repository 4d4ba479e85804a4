use crate::commands::{load_with_predictions, PredictionArg};
use crate::config::{Config, DisplayConfig};
use crate::data_provider::TournamentDataProvider;
use crate::formatting::{fit_width, format_header, short_name};
use crate::layout_constants::{MATRIX_COL_LABEL_LEN, MATRIX_ROW_HEADER_WIDTH};
use crate::matrix::{CellState, Matrix};
use crate::store::TournamentStore;
use anyhow::Result;

/// Text for one cell; predictions carry a trailing `*`
pub fn cell_text(state: CellState, display: &DisplayConfig) -> String {
    match state {
        CellState::SelfPair => display.box_chars.diagonal.repeat(MATRIX_COL_LABEL_LEN),
        CellState::None => String::new(),
        s if s.is_predicted() => format!("{}*", s.label()),
        s => s.label().to_string(),
    }
}

pub fn format_matrix(matrix: &Matrix, store: &TournamentStore, display: &DisplayConfig) -> String {
    if matrix.is_empty() {
        return "No teams.\n".to_string();
    }

    let mut lines = Vec::with_capacity(matrix.len() + 1);

    let mut header = " ".repeat(MATRIX_ROW_HEADER_WIDTH);
    for &id in &matrix.team_ids {
        header.push_str(&format!(
            " {:^width$}",
            short_name(&store.team_name(id), MATRIX_COL_LABEL_LEN),
            width = MATRIX_COL_LABEL_LEN
        ));
    }
    lines.push(header);

    for (r, &row_id) in matrix.team_ids.iter().enumerate() {
        let mut line = fit_width(&store.team_name(row_id), MATRIX_ROW_HEADER_WIDTH);
        for cell in &matrix.cells[r] {
            line.push_str(&format!(
                " {:^width$}",
                cell_text(*cell, display),
                width = MATRIX_COL_LABEL_LEN
            ));
        }
        lines.push(line);
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(line.trim_end());
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
    let matrix = store.compute_matrix();

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Head to head", true, &config.display));
    output.push('\n');
    output.push_str(&format_matrix(&matrix, &store, &config.display));
    output.push_str("\nW/L: row team won/lost  *: predicted\n");
    print!("{}", output);

    Ok(())
}

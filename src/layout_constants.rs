//! Shared layout constants used across CLI and TUI components.

/// Width of the rank column ("Rk")
pub const RANK_COL_WIDTH: usize = 3;

/// Width of the team name column in the standings table
pub const TEAM_NAME_COL_WIDTH: usize = 18;

/// Width of the "W-L" record column
pub const RECORD_COL_WIDTH: usize = 7;

/// Width of the bracket column
pub const BRACKET_COL_WIDTH: usize = 15;

/// Total width of a standings table line
pub const STANDINGS_TABLE_WIDTH: usize =
    RANK_COL_WIDTH + 1 + TEAM_NAME_COL_WIDTH + 1 + RECORD_COL_WIDTH + 1 + BRACKET_COL_WIDTH;

/// Width of the row header (team name) in the matrix
pub const MATRIX_ROW_HEADER_WIDTH: usize = 12;

/// Width of one matrix cell, including its left padding
pub const MATRIX_CELL_WIDTH: usize = 4;

/// Characters of the team name used as a matrix column header
pub const MATRIX_COL_LABEL_LEN: usize = 3;

/// Width of a team name in the upcoming matches list
pub const PREDICTION_TEAM_WIDTH: usize = 14;

pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod matrix;
pub mod model;
pub mod outcome;
pub mod ranking;
pub mod standings;
pub mod store;
pub mod tui;

#[cfg(any(test, feature = "development"))]
pub mod dev;

pub use error::{LoadError, PredictionError};
pub use model::{Match, Prediction, Team, TeamId};
pub use store::{Mutation, Snapshot, TournamentStore};

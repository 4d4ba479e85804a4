/// Mock tournament source for development and testing
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::data_provider::TournamentDataProvider;
use crate::error::LoadError;
use crate::fixtures;
use crate::model::{Match, Team};

/// Serves the fixture tournament instead of reading files
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    /// Delay before the matches dataset resolves
    pub matches_delay: Option<Duration>,
    /// Make the matches fetch fail
    pub fail_matches: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        info!("Creating MockProvider for development mode");
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_matches: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl TournamentDataProvider for MockProvider {
    async fn teams(&self) -> Result<Vec<Team>, LoadError> {
        info!("MockProvider: Returning fixture teams");
        Ok(fixtures::sample_teams())
    }

    async fn matches(&self) -> Result<Vec<Match>, LoadError> {
        if let Some(delay) = self.matches_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_matches {
            return Err(LoadError::Io {
                path: PathBuf::from("mock://matches.json"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock failure"),
            });
        }
        info!("MockProvider: Returning fixture matches");
        Ok(fixtures::sample_matches())
    }
}

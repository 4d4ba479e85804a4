/// Trait for the loading collaborator, abstracting over file-backed and mock sources
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::LoadError;
use crate::model::{Match, MatchesFile, Team, TeamsFile};
use crate::store::TournamentStore;

/// Source of the two tournament datasets
#[async_trait]
pub trait TournamentDataProvider: Send + Sync {
    /// Fetch the team list
    async fn teams(&self) -> Result<Vec<Team>, LoadError>;

    /// Fetch the match list
    async fn matches(&self) -> Result<Vec<Match>, LoadError>;
}

/// Reads `teams.json` and `matches.json` style files
#[derive(Debug, Clone)]
pub struct FileProvider {
    teams_path: PathBuf,
    matches_path: PathBuf,
}

impl FileProvider {
    pub fn new(teams_path: impl Into<PathBuf>, matches_path: impl Into<PathBuf>) -> Self {
        Self {
            teams_path: teams_path.into(),
            matches_path: matches_path.into(),
        }
    }

    pub fn teams_path(&self) -> &Path {
        &self.teams_path
    }

    pub fn matches_path(&self) -> &Path {
        &self.matches_path
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    debug!("LOAD: Reading {}", path.display());
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl TournamentDataProvider for FileProvider {
    async fn teams(&self) -> Result<Vec<Team>, LoadError> {
        let file: TeamsFile = read_json(&self.teams_path).await?;
        Ok(file.teams)
    }

    async fn matches(&self) -> Result<Vec<Match>, LoadError> {
        let file: MatchesFile = read_json(&self.matches_path).await?;
        Ok(file.matches)
    }
}

/// Fetch both datasets concurrently and build the store.
///
/// Nothing is built unless both fetches succeed.
pub async fn load_tournament(
    provider: &dyn TournamentDataProvider,
) -> Result<TournamentStore, LoadError> {
    let (teams, matches) = tokio::try_join!(provider.teams(), provider.matches())?;
    info!(
        "LOAD: Loaded {} teams and {} matches",
        teams.len(),
        matches.len()
    );
    Ok(TournamentStore::new(teams, matches))
}

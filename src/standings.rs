//! Win/loss aggregation over effective match outcomes.

use std::collections::HashMap;
use tracing::warn;

use crate::model::{Match, Team, TeamId};
use crate::outcome::effective_winner;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }
}

/// Per-team records, kept in team input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(TeamId, Record)>,
    index: HashMap<TeamId, usize>,
}

impl Tally {
    fn with_teams(teams: &[Team]) -> Self {
        let mut tally = Self::default();
        for team in teams {
            if tally.index.contains_key(&team.id) {
                continue;
            }
            tally.index.insert(team.id, tally.entries.len());
            tally.entries.push((team.id, Record::default()));
        }
        tally
    }

    pub fn get(&self, team_id: TeamId) -> Option<Record> {
        self.index.get(&team_id).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, team_id: TeamId) -> bool {
        self.index.contains_key(&team_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in team input order
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, Record)> + '_ {
        self.entries.iter().copied()
    }

    fn record_mut(&mut self, team_id: TeamId) -> Option<&mut Record> {
        let i = *self.index.get(&team_id)?;
        Some(&mut self.entries[i].1)
    }
}

/// Fold effective winners into per-team records.
///
/// Every team starts at 0-0. Matches without an effective winner, and
/// matches that reference a team outside `teams`, are skipped.
pub fn aggregate(teams: &[Team], matches: &[Match]) -> Tally {
    let mut tally = Tally::with_teams(teams);

    for m in matches {
        let Some(winner) = effective_winner(m) else {
            continue;
        };

        if !tally.contains(m.team1_id) || !tally.contains(m.team2_id) {
            warn!(
                "STANDINGS: Skipping match {} vs {} with unknown team",
                m.team1_id, m.team2_id
            );
            continue;
        }

        let Some(loser) = m.opponent_of(winner) else {
            warn!(
                "STANDINGS: Skipping match {} vs {}: winner {} did not play",
                m.team1_id, m.team2_id, winner
            );
            continue;
        };

        if let Some(record) = tally.record_mut(winner) {
            record.wins += 1;
        }
        if let Some(record) = tally.record_mut(loser) {
            record.losses += 1;
        }
    }

    tally
}

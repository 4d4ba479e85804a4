//! Competition ranking and bracket classification.

use serde::{Deserialize, Serialize};

use crate::model::TeamId;
use crate::standings::{Record, Tally};

/// Default last rank that advances to the winners bracket
pub const DEFAULT_WINNERS_MAX_RANK: usize = 4;

/// Default last rank that advances to the losers bracket
pub const DEFAULT_LOSERS_MAX_RANK: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BracketThresholds {
    pub winners_max_rank: usize,
    pub losers_max_rank: usize,
}

impl Default for BracketThresholds {
    fn default() -> Self {
        Self {
            winners_max_rank: DEFAULT_WINNERS_MAX_RANK,
            losers_max_rank: DEFAULT_LOSERS_MAX_RANK,
        }
    }
}

impl BracketThresholds {
    pub fn classify(&self, rank: usize) -> Classification {
        if rank <= self.winners_max_rank {
            Classification::Winners
        } else if rank <= self.losers_max_rank {
            Classification::Losers
        } else {
            Classification::Eliminated
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Winners,
    Losers,
    Eliminated,
}

impl Classification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Winners => "winners",
            Self::Losers => "losers",
            Self::Eliminated => "eliminated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Winners => "Winners bracket",
            Self::Losers => "Losers bracket",
            Self::Eliminated => "Eliminated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub team_id: TeamId,
    pub wins: u32,
    pub losses: u32,
    pub rank: usize,
    pub classification: Classification,
}

impl RankedEntry {
    pub fn record(&self) -> Record {
        Record {
            wins: self.wins,
            losses: self.losses,
        }
    }
}

/// Sort by most wins then fewest losses and assign "1224" ranks.
///
/// The sort is stable, so exact ties keep the tally's team order. A team
/// sharing the previous team's record shares its rank; otherwise its rank is
/// its 1-based position.
pub fn rank(tally: &Tally, thresholds: &BracketThresholds) -> Vec<RankedEntry> {
    let mut sorted: Vec<(TeamId, Record)> = tally.iter().collect();
    sorted.sort_by(|(_, a), (_, b)| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));

    let mut ranked = Vec::with_capacity(sorted.len());
    let mut current_rank = 0;
    let mut previous: Option<Record> = None;

    for (position, (team_id, record)) in sorted.into_iter().enumerate() {
        if previous != Some(record) {
            current_rank = position + 1;
        }
        previous = Some(record);

        ranked.push(RankedEntry {
            team_id,
            wins: record.wins,
            losses: record.losses,
            rank: current_rank,
            classification: thresholds.classify(current_rank),
        });
    }

    ranked
}

/// Fixture data for tests, benchmarks and development mode
///
/// The sample tournament is an eight-team round robin with most results in
/// and a handful of matches still to play.
use crate::model::{Match, Team, TeamId};
use crate::store::TournamentStore;

const SAMPLE_TEAM_NAMES: [&str; 8] = [
    "Aurora", "Blaze", "Cobalt", "Drift", "Ember", "Frost", "Granite", "Harbor",
];

/// (team1, team2, winner); winner 0 means not played yet
const SAMPLE_RESULTS: [(TeamId, TeamId, TeamId); 28] = [
    (1, 2, 1),
    (1, 3, 1),
    (1, 4, 4),
    (1, 5, 1),
    (1, 6, 1),
    (1, 7, 0),
    (1, 8, 0),
    (2, 3, 3),
    (2, 4, 2),
    (2, 5, 5),
    (2, 6, 2),
    (2, 7, 2),
    (2, 8, 0),
    (3, 4, 3),
    (3, 5, 3),
    (3, 6, 6),
    (3, 7, 0),
    (3, 8, 3),
    (4, 5, 4),
    (4, 6, 4),
    (4, 7, 7),
    (4, 8, 0),
    (5, 6, 6),
    (5, 7, 5),
    (5, 8, 0),
    (6, 7, 7),
    (6, 8, 0),
    (7, 8, 0),
];

pub fn team(id: TeamId, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        logo: format!("logos/{}.png", name.to_lowercase()),
    }
}

/// Teams 1..=n named "Team 1", "Team 2", ...
pub fn teams(n: u32) -> Vec<Team> {
    (1..=n).map(|id| team(id, &format!("Team {}", id))).collect()
}

pub fn sample_teams() -> Vec<Team> {
    SAMPLE_TEAM_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| team(id, name))
        .collect()
}

pub fn sample_matches() -> Vec<Match> {
    SAMPLE_RESULTS
        .iter()
        .map(|&(team1, team2, winner)| match winner {
            0 => Match::new(team1, team2),
            w => Match::decided(team1, team2, w),
        })
        .collect()
}

pub fn sample_store() -> TournamentStore {
    TournamentStore::new(sample_teams(), sample_matches())
}

/// Full round robin of `n` teams, results alternating by parity and the last
/// `undecided` matches left open. Used to size benchmarks.
pub fn round_robin(n: u32, undecided: usize) -> TournamentStore {
    let mut matches = Vec::new();
    for a in 1..=n {
        for b in (a + 1)..=n {
            let winner = if (a + b) % 2 == 0 { a } else { b };
            matches.push(Match::decided(a, b, winner));
        }
    }
    let open_from = matches.len().saturating_sub(undecided);
    for m in &mut matches[open_from..] {
        m.winner_id = None;
    }
    TournamentStore::new(teams(n), matches)
}

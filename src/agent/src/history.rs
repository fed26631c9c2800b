use common::model::game::{Outcome, RoundRecord};
use serde::Serialize;

/// Aggregate results, counted from the human's side.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Stats {
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    fn count(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWin => self.wins += 1,
            Outcome::ComputerWin => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// Append-only, chronological record of a match.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    rounds: Vec<RoundRecord>,
    stats: Stats,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: RoundRecord) {
        self.stats.count(record.outcome());
        self.rounds.push(record);
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.rounds.iter()
    }

    /// Counters maintained on every append.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Counters rebuilt from the stored rounds; always equal to `stats()`.
    pub fn recount(&self) -> Stats {
        self.rounds.iter().fold(Stats::default(), |mut stats, round| {
            stats.count(round.outcome());
            stats
        })
    }
}

use common::{
    model::game::{beats, Move, Outcome},
    GameError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{history::MatchHistory, random::RandomSource};

/// Chance, in percent, that the opponent ignores history and plays at random.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent(5)
    }
}

impl TryFrom<u32> for Percent {
    type Error = GameError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(percent) if percent <= 100 => Ok(Percent(percent)),
            _ => Err(GameError::InvalidRandomness(value)),
        }
    }
}

impl From<Percent> for u32 {
    fn from(percent: Percent) -> Self {
        percent.0 as u32
    }
}

pub trait Strategy {
    fn make_move(
        &self,
        history: &MatchHistory,
        randomness: Percent,
        rng: &mut dyn RandomSource,
    ) -> Move;
}

/// Reads the last round and bets on how a human reacts to it.
/// A computer win means the human switches to whatever beats the computer's last
/// move, so the computer moves up one step. A human win means the human repeats,
/// so the computer counters it. Ties and the first round are random.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveStrategy;

impl Strategy for AdaptiveStrategy {
    fn make_move(
        &self,
        history: &MatchHistory,
        randomness: Percent,
        rng: &mut dyn RandomSource,
    ) -> Move {
        let Some(last) = history.last() else {
            return rng.any_move();
        };

        let roll = rng.roll_percent();
        if roll < randomness.value() {
            debug!(roll, randomness = randomness.value(), "Playing a random hand");
            return rng.any_move();
        }

        match last.outcome() {
            Outcome::ComputerWin => beats(last.computer_move()),
            Outcome::HumanWin => beats(last.human_move()),
            Outcome::Tie => rng.any_move(),
        }
    }
}

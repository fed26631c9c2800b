use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Result of a single round, from the human's point of view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    HumanWin,
    ComputerWin,
    Tie,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move that defeats `self`.
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// `None` on a draw, otherwise whether `self` wins against `other`.
    pub fn defeats(&self, other: &Move) -> Option<bool> {
        if self == other {
            None
        } else {
            Some(matches!(
                (self, other),
                (Move::Rock, Move::Scissors)
                    | (Move::Scissors, Move::Paper)
                    | (Move::Paper, Move::Rock)
            ))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

/// The move that defeats `m`. Applying it three times returns `m`.
pub fn beats(m: Move) -> Move {
    m.counter()
}

pub fn resolve(human: Move, computer: Move) -> Outcome {
    match human.defeats(&computer) {
        None => Outcome::Tie,
        Some(true) => Outcome::HumanWin,
        Some(false) => Outcome::ComputerWin,
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::InvalidMove(s.to_owned()))
    }
}

impl TryFrom<&str> for Move {
    type Error = GameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u8> for Move {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| GameError::InvalidMove(value.to_string()))
    }
}

/// One completed round. The outcome is always derived from the two moves.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    human_move: Move,
    computer_move: Move,
    outcome: Outcome,
}

impl RoundRecord {
    pub fn new(human_move: Move, computer_move: Move) -> Self {
        RoundRecord {
            human_move,
            computer_move,
            outcome: resolve(human_move, computer_move),
        }
    }

    pub fn human_move(&self) -> Move {
        self.human_move
    }

    pub fn computer_move(&self) -> Move {
        self.computer_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

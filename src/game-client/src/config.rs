use std::time::Duration;

use agent::{Percent, RandomSource, RngSource};

use crate::error::{ClientError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Chance the opponent plays a random hand instead of reading the last round.
    pub randomness: Percent,
    /// Loop ticks per second.
    pub fps: u32,
    /// Fixed seed for the opponent's random draws; entropy when unset.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(randomness: u32, fps: u32, seed: Option<u64>) -> Result<Self> {
        if fps == 0 {
            return Err(ClientError::InvalidFps(fps));
        }
        Ok(GameConfig {
            randomness: Percent::try_from(randomness)?,
            fps,
            seed,
        })
    }

    pub fn tick(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            randomness: Percent::default(),
            fps: 10,
            seed: None,
        }
    }
}

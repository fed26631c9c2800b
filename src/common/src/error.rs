use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: {0:?}")]
    InvalidMove(String),

    #[error("Randomness must be a percentage in 0..=100, got {0}")]
    InvalidRandomness(u32),

    #[error("Hit regions {0:?} and {1:?} overlap")]
    OverlappingRegions(String, String),
}

// Lets `Move: TryInto<Move>` flow through the same conversion bound as fallible inputs.
impl From<std::convert::Infallible> for GameError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

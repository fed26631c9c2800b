use common::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tick rate must be at least one per second, got {0}")]
    InvalidFps(u32),
}

pub type Result<T> = std::result::Result<T, ClientError>;

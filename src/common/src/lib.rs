pub mod error;
pub mod model;
pub mod utility;

pub use error::{GameError, Result};

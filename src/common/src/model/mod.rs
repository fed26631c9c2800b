pub mod game;
pub mod id;

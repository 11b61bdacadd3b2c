pub mod config;
pub mod logger;
pub mod replay;
pub mod snake;
pub mod version;
mod session_rng;

pub use session_rng::SessionRng;
pub use snake::{
    Direction, GameConfig, GameState, GameStateError, Grid, GridValue, MoveOutcome, Position,
};

mod direction_queue;
mod error;
mod game_state;
mod grid;
mod settings;
mod types;

pub use direction_queue::{DIRECTION_QUEUE_CAPACITY, DirectionQueue};
pub use error::GameStateError;
pub use game_state::{GameState, INITIAL_SNAKE_LENGTH, MAX_DIMENSION, MIN_COLS, MIN_ROWS};
pub use grid::Grid;
pub use settings::{DEFAULT_CONFIG_FILE, GameConfig, get_config_manager};
pub use types::{Direction, GridValue, MoveOutcome, Position};

use super::game_state::{MAX_DIMENSION, MIN_COLS, MIN_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStateError {
    InvalidDimensions { rows: usize, cols: usize },
}

impl std::fmt::Display for GameStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStateError::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid grid size {}x{}: need {}..={} rows and {}..={} columns",
                rows, cols, MIN_ROWS, MAX_DIMENSION, MIN_COLS, MAX_DIMENSION
            ),
        }
    }
}

impl std::error::Error for GameStateError {}

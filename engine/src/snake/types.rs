use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn translate(&self, direction: Direction) -> Self {
        let (row_delta, col_delta) = direction.delta();
        Self::new(self.row + row_delta, self.col + col_delta)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// `(row_delta, col_delta)`; rows grow downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Contents of a grid cell. `Outside` is only ever produced by collision
/// checks and is never stored in a [`Grid`](super::Grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridValue {
    #[default]
    Empty,
    Snake,
    Food,
    Outside,
}

/// What a single call to `GameState::advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Ate,
    HitWall,
    HitSelf,
    /// The game was already over; nothing changed.
    Ignored,
}

impl MoveOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, MoveOutcome::HitWall | MoveOutcome::HitSelf)
    }
}

use std::collections::VecDeque;
use std::fmt;

use crate::log;
use crate::session_rng::SessionRng;
use super::direction_queue::DirectionQueue;
use super::error::GameStateError;
use super::grid::Grid;
use super::settings::GameConfig;
use super::types::{Direction, GridValue, MoveOutcome, Position};

pub const MIN_ROWS: usize = 1;
/// The starting snake occupies columns 1..=3.
pub const MIN_COLS: usize = 4;
pub const MAX_DIMENSION: usize = 4096;
pub const INITIAL_SNAKE_LENGTH: i32 = 3;

/// A single game of snake: the grid, the snake on it, buffered turns, score
/// and the game-over flag.
///
/// The grid and the body are kept in sync by `add_head` and `remove_tail`,
/// which are the only paths that touch `Snake` cells.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    body: VecDeque<Position>,
    direction: Direction,
    pending_directions: DirectionQueue,
    food: Option<Position>,
    score: u32,
    game_over: bool,
    ticks: u64,
    rng: SessionRng,
}

impl GameState {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameStateError> {
        Self::with_rng(rows, cols, SessionRng::from_random())
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameStateError> {
        let rng = match config.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Self::with_rng(config.rows, config.cols, rng)
    }

    pub fn with_rng(rows: usize, cols: usize, rng: SessionRng) -> Result<Self, GameStateError> {
        validate_dimensions(rows, cols)?;

        let mut state = Self {
            grid: Grid::new(rows, cols),
            body: VecDeque::with_capacity(INITIAL_SNAKE_LENGTH as usize),
            direction: Direction::Right,
            pending_directions: DirectionQueue::new(),
            food: None,
            score: 0,
            game_over: false,
            ticks: 0,
            rng,
        };
        state.add_snake();
        state.add_food();
        Ok(state)
    }

    fn add_snake(&mut self) {
        let row = (self.grid.rows() / 2) as i32;
        for col in 1..=INITIAL_SNAKE_LENGTH {
            self.add_head(Position::new(row, col));
        }
    }

    fn add_food(&mut self) {
        let empty = self.grid.empty_positions();
        self.food = self.rng.pick(&empty);

        match self.food {
            Some(pos) => {
                self.grid.set(pos, GridValue::Food);
                log!("Food spawned at ({}, {})", pos.row, pos.col);
            }
            None => log!("Board is full, no food placed"),
        }
    }

    fn add_head(&mut self, pos: Position) {
        self.body.push_front(pos);
        self.grid.set(pos, GridValue::Snake);
    }

    fn remove_tail(&mut self) {
        if let Some(tail) = self.body.pop_back() {
            self.grid.set(tail, GridValue::Empty);
        }
    }

    /// Queues a turn for an upcoming tick. Returns whether it was accepted;
    /// rejected requests leave the state untouched.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        self.pending_directions.try_push(self.direction, direction)
    }

    fn will_hit(&self, new_head: Position) -> GridValue {
        match self.grid.get(new_head) {
            None => GridValue::Outside,
            // The tail leaves this cell during the same tick.
            Some(_) if new_head == self.tail_position() => GridValue::Empty,
            Some(value) => value,
        }
    }

    /// Advances the game by one tick.
    pub fn advance(&mut self) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }

        if let Some(direction) = self.pending_directions.pop() {
            self.direction = direction;
        }
        self.ticks += 1;

        let new_head = self.head_position().translate(self.direction);

        match self.will_hit(new_head) {
            GridValue::Outside => self.finish(MoveOutcome::HitWall, new_head),
            GridValue::Snake => self.finish(MoveOutcome::HitSelf, new_head),
            GridValue::Empty => {
                self.remove_tail();
                self.add_head(new_head);
                MoveOutcome::Moved
            }
            GridValue::Food => {
                self.add_head(new_head);
                self.score += 1;
                self.add_food();
                MoveOutcome::Ate
            }
        }
    }

    fn finish(&mut self, outcome: MoveOutcome, new_head: Position) -> MoveOutcome {
        self.game_over = true;
        log!(
            "Game over after {} ticks: {:?} at ({}, {}), score {}",
            self.ticks,
            outcome,
            new_head.row,
            new_head.col,
            self.score
        );
        outcome
    }

    pub fn head_position(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail_position(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    /// Body positions, head first.
    pub fn snake_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn snake_len(&self) -> usize {
        self.body.len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: i32, col: i32) -> GridValue {
        self.grid.cell(row, col)
    }

    pub fn food_position(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending_directions.iter()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    fn set_food(&mut self, pos: Position) {
        if let Some(old) = self.food.take() {
            self.grid.set(old, GridValue::Empty);
        }
        self.grid.set(pos, GridValue::Food);
        self.food = Some(pos);
    }

    #[cfg(test)]
    fn set_snake(&mut self, body: &[Position], direction: Direction) {
        while !self.body.is_empty() {
            self.remove_tail();
        }
        for &pos in body.iter().rev() {
            self.add_head(pos);
        }
        self.direction = direction;
    }
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<(), GameStateError> {
    if !(MIN_ROWS..=MAX_DIMENSION).contains(&rows) || !(MIN_COLS..=MAX_DIMENSION).contains(&cols) {
        return Err(GameStateError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.head_position();
        for (row, cells) in self.grid.rows_iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    GridValue::Snake if head == Position::new(row as i32, col as i32) => '@',
                    GridValue::Snake => 'o',
                    GridValue::Food => '*',
                    GridValue::Empty | GridValue::Outside => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

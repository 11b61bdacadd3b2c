use crate::session_rng::SessionRng;
use crate::snake::{GameState, GameStateError};
use super::types::{Replay, ReplayAction, ReplayMetadata};

pub struct ReplayPlayer {
    replay: Replay,
    current_action_index: usize,
}

impl ReplayPlayer {
    pub fn new(replay: Replay) -> Self {
        Self {
            replay,
            current_action_index: 0,
        }
    }

    pub fn metadata(&self) -> &ReplayMetadata {
        &self.replay.metadata
    }

    pub fn engine_version(&self) -> &str {
        &self.replay.metadata.engine_version
    }

    pub fn seed(&self) -> u64 {
        self.replay.metadata.seed
    }

    pub fn total_ticks(&self) -> u64 {
        self.replay.total_ticks
    }

    pub fn total_actions(&self) -> usize {
        self.replay.actions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current_action_index >= self.replay.actions.len()
    }

    /// A fresh game with the recorded size and seed.
    pub fn build_game(&self) -> Result<GameState, GameStateError> {
        let metadata = &self.replay.metadata;
        GameState::with_rng(metadata.rows, metadata.cols, SessionRng::new(metadata.seed))
    }

    /// Consumes the actions recorded for `tick`, skipping any stale ones
    /// before it.
    pub fn actions_for_tick(&mut self, tick: u64) -> Vec<ReplayAction> {
        let mut actions = Vec::new();
        while let Some(action) = self.replay.actions.get(self.current_action_index) {
            if action.tick > tick {
                break;
            }
            if action.tick == tick {
                actions.push(*action);
            }
            self.current_action_index += 1;
        }
        actions
    }

    /// Feeds the turns recorded for the game's current tick into `game`.
    pub fn apply_pending(&mut self, game: &mut GameState) {
        for action in self.actions_for_tick(game.ticks()) {
            game.change_direction(action.direction);
        }
    }

    pub fn reset(&mut self) {
        self.current_action_index = 0;
    }

    pub fn into_replay(self) -> Replay {
        self.replay
    }
}

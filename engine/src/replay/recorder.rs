use crate::snake::Direction;
use super::types::{Replay, ReplayAction, ReplayMetadata};

pub struct ReplayRecorder {
    engine_version: String,
    game_started_timestamp_ms: i64,
    rows: usize,
    cols: usize,
    seed: u64,
    actions: Vec<ReplayAction>,
}

impl ReplayRecorder {
    pub fn new(engine_version: String, rows: usize, cols: usize, seed: u64) -> Self {
        let game_started_timestamp_ms = chrono::Utc::now().timestamp_millis();

        Self {
            engine_version,
            game_started_timestamp_ms,
            rows,
            cols,
            seed,
            actions: Vec::new(),
        }
    }

    /// Only turns the game accepted should be recorded; replaying a rejected
    /// one is harmless but bloats the file.
    pub fn record_direction(&mut self, tick: u64, direction: Direction) {
        self.actions.push(ReplayAction { tick, direction });
    }

    pub fn finalize(&mut self, total_ticks: u64) -> Replay {
        let mut actions = std::mem::take(&mut self.actions);
        // Stable, so turns within a tick keep their order.
        actions.sort_by_key(|a| a.tick);

        Replay {
            metadata: ReplayMetadata {
                engine_version: self.engine_version.clone(),
                game_started_timestamp_ms: self.game_started_timestamp_ms,
                rows: self.rows,
                cols: self.cols,
                seed: self.seed,
            },
            total_ticks,
            actions,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn actions_count(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_sorts_actions_by_tick() {
        let mut recorder = ReplayRecorder::new("1.0.0".to_string(), 10, 12, 42);
        recorder.record_direction(5, Direction::Up);
        recorder.record_direction(2, Direction::Down);
        recorder.record_direction(2, Direction::Left);
        assert_eq!(recorder.actions_count(), 3);

        let replay = recorder.finalize(9);

        assert_eq!(replay.total_ticks, 9);
        assert_eq!(replay.metadata.seed, 42);
        assert_eq!(replay.metadata.rows, 10);
        assert_eq!(replay.metadata.cols, 12);
        assert_eq!(replay.metadata.engine_version, "1.0.0");
        assert_eq!(
            replay.actions,
            vec![
                ReplayAction { tick: 2, direction: Direction::Down },
                ReplayAction { tick: 2, direction: Direction::Left },
                ReplayAction { tick: 5, direction: Direction::Up },
            ]
        );
        assert_eq!(recorder.actions_count(), 0);
    }

    #[test]
    fn test_finalize_twice_keeps_metadata() {
        let mut recorder = ReplayRecorder::new("2.1.0".to_string(), 8, 9, 7);
        recorder.record_direction(1, Direction::Up);

        let first = recorder.finalize(4);
        let second = recorder.finalize(6);

        assert_eq!(first.metadata.engine_version, "2.1.0");
        assert_eq!(second.metadata.engine_version, "2.1.0");
        assert_eq!(second.metadata, first.metadata);
        assert_eq!(second.total_ticks, 6);
        assert!(second.actions.is_empty());
    }
}

use serde::{Deserialize, Serialize};

use crate::snake::Direction;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayMetadata {
    pub engine_version: String,
    pub game_started_timestamp_ms: i64,
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
}

/// An accepted turn, requested before the `tick`-th advance (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayAction {
    pub tick: u64,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub metadata: ReplayMetadata,
    pub total_ticks: u64,
    pub actions: Vec<ReplayAction>,
}

mod types;
pub mod recorder;
pub mod file_io;
pub mod player;

pub use types::{Replay, ReplayAction, ReplayMetadata};
pub use recorder::ReplayRecorder;
pub use file_io::{
    ReplayError, generate_replay_filename, load_replay, load_replay_from_bytes, save_replay,
    save_replay_to_bytes,
};
pub use player::ReplayPlayer;

pub const REPLAY_FILE_EXTENSION: &str = "snakereplay";
pub const REPLAY_VERSION: u8 = 1;

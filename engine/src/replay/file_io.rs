use std::path::Path;
use std::io::{Read, Write};

use super::types::Replay;
use super::{REPLAY_FILE_EXTENSION, REPLAY_VERSION};

#[derive(Debug)]
pub enum ReplayError {
    IoError(std::io::Error),
    DecodeError(serde_yaml_ng::Error),
    InvalidUtf8(std::str::Utf8Error),
    UnsupportedVersion { found: u8, expected: u8 },
    EmptyFile,
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::IoError(e) => write!(f, "IO error: {}", e),
            ReplayError::DecodeError(e) => write!(f, "Decode error: {}", e),
            ReplayError::InvalidUtf8(e) => write!(f, "Replay body is not UTF-8: {}", e),
            ReplayError::UnsupportedVersion { found, expected } => {
                write!(f, "Unsupported replay version: found {}, expected {}", found, expected)
            }
            ReplayError::EmptyFile => write!(f, "Empty replay file"),
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for ReplayError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ReplayError::DecodeError(e)
    }
}

impl From<std::str::Utf8Error> for ReplayError {
    fn from(e: std::str::Utf8Error) -> Self {
        ReplayError::InvalidUtf8(e)
    }
}

pub fn save_replay(path: &Path, replay: &Replay) -> Result<(), ReplayError> {
    let bytes = save_replay_to_bytes(replay)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(&bytes)?;
    Ok(())
}

pub fn save_replay_to_bytes(replay: &Replay) -> Result<Vec<u8>, ReplayError> {
    let encoded = serde_yaml_ng::to_string(replay)?;
    let mut result = vec![REPLAY_VERSION];
    result.extend(encoded.into_bytes());
    Ok(result)
}

pub fn load_replay(path: &Path) -> Result<Replay, ReplayError> {
    let mut file = std::fs::File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    load_replay_from_bytes(&buffer)
}

pub fn load_replay_from_bytes(bytes: &[u8]) -> Result<Replay, ReplayError> {
    let Some((&version, body)) = bytes.split_first() else {
        return Err(ReplayError::EmptyFile);
    };

    if version != REPLAY_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: version,
            expected: REPLAY_VERSION,
        });
    }

    let replay = serde_yaml_ng::from_str(std::str::from_utf8(body)?)?;
    Ok(replay)
}

pub fn generate_replay_filename(version: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let sanitized_version = version.replace('.', "_");

    format!("{}_SNAKE_{}.{}", timestamp, sanitized_version, REPLAY_FILE_EXTENSION)
}

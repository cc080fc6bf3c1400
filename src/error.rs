//! Top-level run errors and their process exit codes.

use std::io;
use std::path::PathBuf;

use crate::animation::AnimationError;
use crate::compute::EngineError;
use crate::schema::{ConfigError, ImageSeedError, ScenarioError};

/// Exit code for usage and configuration errors.
pub const EXIT_USAGE: i32 = 1;
/// Exit code when the seed image cannot be decoded.
pub const EXIT_IMAGE_DECODE: i32 = 2;
/// Exit code when an output file cannot be written.
pub const EXIT_OUTPUT_WRITE: i32 = 3;
/// Exit code when the scenario cannot be loaded.
pub const EXIT_SCENARIO_LOAD: i32 = 4;
/// Exit code for engine contract violations.
pub const EXIT_INTERNAL: i32 = 70;

/// Fatal errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    ImageDecode(#[from] ImageSeedError),
    #[error(transparent)]
    ScenarioLoad(#[from] ScenarioError),
    #[error(transparent)]
    FrameWrite(#[from] AnimationError),
    #[error("Failed to write {path}: {source}")]
    Output { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl RunError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Config(_) => EXIT_USAGE,
            RunError::ImageDecode(_) => EXIT_IMAGE_DECODE,
            RunError::FrameWrite(_) | RunError::Output { .. } => EXIT_OUTPUT_WRITE,
            RunError::ScenarioLoad(_) => EXIT_SCENARIO_LOAD,
            RunError::Engine(_) => EXIT_INTERNAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let decode = RunError::from(ImageSeedError::EmptyImage);
        let load = RunError::from(ScenarioError::InvalidDimensions {
            width: 0,
            height: 1,
            lives: 0,
        });
        let write = RunError::from(AnimationError::Io(io::Error::other("disk full")));
        let output = RunError::Output {
            path: PathBuf::from("stage0.json"),
            source: io::Error::other("denied"),
        };

        assert_eq!(decode.exit_code(), EXIT_IMAGE_DECODE);
        assert_eq!(load.exit_code(), EXIT_SCENARIO_LOAD);
        assert_eq!(write.exit_code(), EXIT_OUTPUT_WRITE);
        assert_eq!(output.exit_code(), EXIT_OUTPUT_WRITE);

        let codes = [EXIT_USAGE, EXIT_IMAGE_DECODE, EXIT_OUTPUT_WRITE, EXIT_SCENARIO_LOAD];
        for (i, a) in codes.iter().enumerate() {
            assert!(codes[i + 1..].iter().all(|b| a != b));
            assert_ne!(*a, 0);
        }
    }

    #[test]
    fn test_messages() {
        let err = RunError::from(ScenarioError::InvalidDimensions {
            width: 0,
            height: 4,
            lives: 3,
        });
        assert_eq!(
            err.to_string(),
            "Abnormal scenario data. width=0, height=4, len(lives)=3"
        );
    }
}

//! Run configuration: output locations, budgets and RNG seeding.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LivesPolicy, SeedRng};

/// Default generation budget for image-seeded runs.
pub const DEFAULT_IMAGE_EPOCH: u64 = 300;

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_animation_file() -> String {
    "out.gif".to_string()
}

fn default_stage0_file() -> String {
    "stage0.json".to_string()
}

fn default_frame_prefix() -> String {
    "out".to_string()
}

fn default_image_epoch() -> u64 {
    DEFAULT_IMAGE_EPOCH
}

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory receiving every output file.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Animated GIF file name.
    #[serde(default = "default_animation_file")]
    pub animation_file: String,
    /// Generation-0 scenario file name.
    #[serde(default = "default_stage0_file")]
    pub stage0_file: String,
    /// Still frames are named `{prefix}{generation:03}.jpg`.
    #[serde(default = "default_frame_prefix")]
    pub frame_prefix: String,
    /// Generation budget when seeding from an image.
    #[serde(default = "default_image_epoch")]
    pub image_epoch: u64,
    /// Seed for the seeding-op RNG (None = entropy).
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Reject scenarios whose `lives` length disagrees with their dimensions.
    #[serde(default)]
    pub strict_lives: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            animation_file: default_animation_file(),
            stage0_file: default_stage0_file(),
            frame_prefix: default_frame_prefix(),
            image_epoch: DEFAULT_IMAGE_EPOCH,
            random_seed: None,
            strict_lives: false,
        }
    }
}

impl RunConfig {
    /// Path of the animated GIF.
    pub fn animation_path(&self) -> PathBuf {
        self.output_dir.join(&self.animation_file)
    }

    /// Path of the generation-0 scenario.
    pub fn stage0_path(&self) -> PathBuf {
        self.output_dir.join(&self.stage0_file)
    }

    /// Path of the still image for a generation.
    pub fn frame_path(&self, generation: u64) -> PathBuf {
        self.output_dir
            .join(format!("{}{:03}.jpg", self.frame_prefix, generation))
    }

    pub fn lives_policy(&self) -> LivesPolicy {
        if self.strict_lives {
            LivesPolicy::Strict
        } else {
            LivesPolicy::Lenient
        }
    }

    /// Seeding RNG, deterministic when `random_seed` is set.
    pub fn seed_rng(&self) -> SeedRng {
        match self.random_seed {
            Some(seed) => SeedRng::new(seed),
            None => SeedRng::from_entropy(),
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, name) in [
            ("animation_file", &self.animation_file),
            ("stage0_file", &self.stage0_file),
        ] {
            if name.is_empty() {
                return Err(ConfigError::EmptyFileName(field));
            }
            if Path::new(name).components().count() != 1 {
                return Err(ConfigError::NotAFileName {
                    field,
                    value: name.clone(),
                });
            }
        }
        if self.frame_prefix.contains(['/', '\\']) {
            return Err(ConfigError::NotAFileName {
                field: "frame_prefix",
                value: self.frame_prefix.clone(),
            });
        }
        if self.animation_file == self.stage0_file {
            return Err(ConfigError::OutputCollision(self.animation_file.clone()));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Output file name `{0}` must not be empty")]
    EmptyFileName(&'static str),
    #[error("`{field}` must be a bare file name, got {value:?}")]
    NotAFileName { field: &'static str, value: String },
    #[error("Animation and stage0 outputs both named {0:?}")]
    OutputCollision(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

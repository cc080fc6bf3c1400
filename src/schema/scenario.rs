//! Persisted scenario records: JSON load/save of simulation state.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{SeedRng, apply_op_codes};
use crate::compute::{Grid, GridError, SimulationState};

/// How to reconcile a `lives` array whose length disagrees with the
/// declared dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LivesPolicy {
    /// Truncate extra values or zero-pad missing ones.
    #[default]
    Lenient,
    /// Reject any length mismatch.
    Strict,
}

/// Scenario record as stored on disk.
///
/// Missing fields default to zero/empty/false, so an absent `width` is
/// reported as invalid dimensions rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Generation budget.
    pub epoch: u64,
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Row-major cell values; positive means alive.
    pub lives: Vec<i64>,
    /// Seeding op codes (see [`super::SeedOp`]), applied once on load.
    pub ops: Vec<i64>,
    /// Export a still image per generation.
    pub out_frames: bool,
    /// Dump the grid to stdout per generation.
    pub verbose: bool,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Record the state's current generation. Ops are always cleared so they
    /// are not reapplied when the file is loaded again.
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            epoch: state.epoch_budget,
            width: state.width(),
            height: state.height(),
            lives: state.grid.cells().iter().map(|&c| c as i64).collect(),
            ops: Vec::new(),
            out_frames: state.out_frames,
            verbose: state.verbose,
        }
    }

    /// Write as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Check declared dimensions.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.width < 1 || self.height < 1 {
            return Err(ScenarioError::InvalidDimensions {
                width: self.width,
                height: self.height,
                lives: self.lives.len(),
            });
        }
        cell_count(self.width, self.height)?;
        Ok(())
    }

    /// Build the initial simulation state, applying seeding ops in order.
    pub fn into_state(
        self,
        rng: &mut SeedRng,
        policy: LivesPolicy,
    ) -> Result<SimulationState, ScenarioError> {
        self.validate()?;

        let lives = normalize_lives(self.width, self.height, self.lives, policy)?;
        let mut grid = Grid::from_cells(self.width, self.height, &lives)?;
        let applied = apply_op_codes(&mut grid, &self.ops, rng);
        if applied > 0 {
            log::info!(
                "Applied {} seeding ops, {} lives",
                applied,
                grid.count_lives()
            );
        }

        Ok(SimulationState {
            grid,
            epoch_budget: self.epoch,
            generation: 0,
            out_frames: self.out_frames,
            verbose: self.verbose,
        })
    }
}

fn cell_count(width: usize, height: usize) -> Result<usize, ScenarioError> {
    width
        .checked_mul(height)
        .ok_or(ScenarioError::DimensionsTooLarge { width, height })
}

/// Fit a raw `lives` sequence to `width * height` cells.
///
/// Values are never re-indexed: the leading cells keep their positions.
pub fn normalize_lives(
    width: usize,
    height: usize,
    mut lives: Vec<i64>,
    policy: LivesPolicy,
) -> Result<Vec<i64>, ScenarioError> {
    let expected = cell_count(width, height)?;
    if lives.len() == expected {
        return Ok(lives);
    }

    match policy {
        LivesPolicy::Strict => Err(ScenarioError::LivesLengthMismatch {
            expected,
            actual: lives.len(),
        }),
        LivesPolicy::Lenient => {
            log::debug!(
                "lives length {} does not match {}x{}; resizing to {}",
                lives.len(),
                width,
                height,
                expected
            );
            if expected > lives.len() {
                lives
                    .try_reserve_exact(expected - lives.len())
                    .map_err(|_| ScenarioError::DimensionsTooLarge { width, height })?;
            }
            lives.resize(expected, 0);
            Ok(lives)
        }
    }
}

/// Scenario loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Abnormal scenario data. width={width}, height={height}, len(lives)={lives}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        lives: usize,
    },
    #[error("Scenario dimensions {width}x{height} are too large")]
    DimensionsTooLarge { width: usize, height: usize },
    #[error("Scenario has {actual} lives but dimensions need {expected}")]
    LivesLengthMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn blank(width: usize, height: usize) -> Scenario {
        Scenario {
            epoch: 10,
            width,
            height,
            lives: vec![0; width * height],
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "epoch": 300,
            "width": 3,
            "height": 2,
            "lives": [0, 1, 0, 1, 1, 1],
            "ops": [],
            "out_frames": true,
            "verbose": false
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.epoch, 300);
        assert!(scenario.out_frames);

        let state = scenario.into_state(&mut SeedRng::new(0), LivesPolicy::Lenient).unwrap();
        assert_eq!(state.grid.dump(), "010\n111\n");
        assert_eq!(state.epoch_budget, 300);
        assert!(state.out_frames);
    }

    #[test]
    fn test_missing_fields_default() {
        let scenario = Scenario::from_json(r#"{"width": 2, "height": 2}"#).unwrap();
        assert_eq!(scenario.epoch, 0);
        assert!(scenario.lives.is_empty());

        let state = scenario.into_state(&mut SeedRng::new(0), LivesPolicy::Lenient).unwrap();
        assert_eq!(state.count_lives(), 0);
        assert!(state.is_terminated());
    }

    #[test]
    fn test_invalid_dimensions() {
        for json in [r#"{"width": 0, "height": 4}"#, r#"{"width": 4}"#, "{}"] {
            let err = Scenario::from_json(json)
                .unwrap()
                .into_state(&mut SeedRng::new(0), LivesPolicy::Lenient)
                .unwrap_err();
            assert!(matches!(err, ScenarioError::InvalidDimensions { .. }), "{json}");
        }
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let json = r#"{"epoch": 1, "width": 18446744073709551615, "height": 2, "lives": [1]}"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioError::DimensionsTooLarge { height: 2, .. })
        ));

        for policy in [LivesPolicy::Lenient, LivesPolicy::Strict] {
            let err = scenario
                .clone()
                .into_state(&mut SeedRng::new(0), policy)
                .unwrap_err();
            assert!(matches!(err, ScenarioError::DimensionsTooLarge { .. }));
        }
    }

    #[test]
    fn test_normalize_overflowing_dimensions() {
        assert!(matches!(
            normalize_lives(usize::MAX, 3, vec![1], LivesPolicy::Lenient),
            Err(ScenarioError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn test_normalize_unallocatable_padding() {
        // Fits in usize but no allocator can provide it.
        let side = 1usize << (usize::BITS / 2 - 1);
        assert!(matches!(
            normalize_lives(side, side, vec![1], LivesPolicy::Lenient),
            Err(ScenarioError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Scenario::from_json("{\"width\": "),
            Err(ScenarioError::Parse(_))
        ));
        assert!(matches!(
            Scenario::from_json(r#"{"width": -3, "height": 2}"#),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            Scenario::load(dir.path().join("absent.json")),
            Err(ScenarioError::Io(_))
        ));
    }

    #[test]
    fn test_normalize_pads_short_lives() {
        let lives = normalize_lives(3, 2, vec![1, 1], LivesPolicy::Lenient).unwrap();
        assert_eq!(lives, vec![1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_normalize_truncates_long_lives() {
        let lives = normalize_lives(2, 2, vec![1, 0, 1, 0, 1, 1], LivesPolicy::Lenient).unwrap();
        assert_eq!(lives, vec![1, 0, 1, 0]);
    }

    #[test]
    fn test_normalize_strict_rejects() {
        let err = normalize_lives(2, 2, vec![1], LivesPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::LivesLengthMismatch {
                expected: 4,
                actual: 1
            }
        ));
        assert!(normalize_lives(2, 2, vec![1, 0, 0, 1], LivesPolicy::Strict).is_ok());
    }

    #[test]
    fn test_fill_row_op_on_empty_grid() {
        let mut scenario = blank(6, 4);
        scenario.ops = vec![2];
        let state = scenario.into_state(&mut SeedRng::new(5), LivesPolicy::Lenient).unwrap();

        let full = state.grid.rows().filter(|r| r.iter().all(|&c| c == 1)).count();
        let empty = state.grid.rows().filter(|r| r.iter().all(|&c| c == 0)).count();
        assert_eq!(full, 1);
        assert_eq!(empty, 3);
    }

    #[test]
    fn test_save_clears_ops_and_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stage0.json");

        let mut scenario = blank(5, 4);
        scenario.ops = vec![0, 0, 3];
        scenario.verbose = true;
        let state = scenario.into_state(&mut SeedRng::new(11), LivesPolicy::Lenient).unwrap();

        let saved = Scenario::from_state(&state);
        assert!(saved.ops.is_empty());
        saved.save(&path).unwrap();

        let loaded = Scenario::load(&path).unwrap();
        assert!(loaded.ops.is_empty());
        let restored = loaded.into_state(&mut SeedRng::new(99), LivesPolicy::Strict).unwrap();
        assert_eq!(restored.grid, state.grid);
        assert_eq!(restored.epoch_budget, state.epoch_budget);
        assert!(restored.verbose);
    }

    #[test]
    fn test_saved_json_shape() {
        let state = blank(2, 1).into_state(&mut SeedRng::new(0), LivesPolicy::Lenient).unwrap();
        let value = serde_json::to_value(Scenario::from_state(&state)).unwrap();
        assert_eq!(value["ops"], serde_json::json!([]));
        assert_eq!(value["lives"], serde_json::json!([0, 0]));
        assert_eq!(value["out_frames"], serde_json::json!(false));
    }
}

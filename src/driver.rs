//! Run driver: seed a simulation, step it to termination and write outputs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::animation::{AnimationRecorder, AnimationStats, save_still};
use crate::compute::{LifePropagator, SimulationState, SimulationStats};
use crate::error::RunError;
use crate::schema::{RunConfig, Scenario, load_image};

/// Separator printed before each verbose grid dump.
pub const DUMP_SEPARATOR: &str = "------------------";

/// Where the initial grid comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Raster image, thresholded per pixel.
    Image(PathBuf),
    /// Persisted scenario record (JSON).
    Scenario(PathBuf),
}

impl SeedSource {
    /// Pick the source kind from the file extension (`.json` = scenario).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let is_json = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            SeedSource::Scenario(path)
        } else {
            SeedSource::Image(path)
        }
    }

    /// Build the initial simulation state.
    pub fn load(&self, config: &RunConfig) -> Result<SimulationState, RunError> {
        match self {
            SeedSource::Image(path) => {
                let grid = load_image(path)?;
                Ok(SimulationState::new(grid, config.image_epoch))
            }
            SeedSource::Scenario(path) => {
                let scenario = Scenario::load(path)?;
                let mut rng = config.seed_rng();
                Ok(scenario.into_state(&mut rng, config.lives_policy())?)
            }
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Generations stepped.
    pub generations: u64,
    /// Still images written.
    pub stills: usize,
    /// Final state statistics.
    pub final_stats: SimulationStats,
    /// GIF output.
    pub animation: AnimationStats,
}

/// Run to termination, printing verbose dumps to stdout.
pub fn run(state: &mut SimulationState, config: &RunConfig) -> Result<RunSummary, RunError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(state, config, &mut out)
}

/// Run to termination, writing verbose dumps to `out`.
///
/// Saves the generation-0 scenario first. Then, for every generation while
/// the state is active: dump (if verbose), export a still (if requested),
/// record a GIF frame, step. The GIF is written last.
pub fn run_with_output<W: Write>(
    state: &mut SimulationState,
    config: &RunConfig,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    config.validate()?;

    let stage0 = config.stage0_path();
    Scenario::from_state(state)
        .save(&stage0)
        .map_err(|source| RunError::Output {
            path: stage0.clone(),
            source,
        })?;
    log::info!("Saved generation 0 to {}", stage0.display());

    let start_generation = state.generation;
    let mut propagator = LifePropagator::for_state(state);
    let mut recorder =
        AnimationRecorder::new(config.animation_path(), state.width(), state.height());
    let mut stills = 0;

    while !state.is_terminated() {
        if state.verbose {
            writeln!(out, "{DUMP_SEPARATOR}")
                .and_then(|_| out.write_all(state.grid.dump().as_bytes()))
                .map_err(|source| RunError::Output {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
        if state.out_frames {
            save_still(&state.grid, config.frame_path(state.generation))?;
            stills += 1;
        }
        recorder.record_frame(&state.grid)?;
        propagator.step(state)?;
    }

    let final_stats = SimulationStats::from_state(state);
    log::info!(
        "Stopped at generation {} of {} with {} lives",
        state.generation,
        state.epoch_budget,
        final_stats.live_cells
    );

    let animation = recorder.finalize()?;

    Ok(RunSummary {
        generations: state.generation - start_generation,
        stills,
        final_stats,
        animation,
    })
}

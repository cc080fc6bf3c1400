//! Animation recorder for capturing one GIF frame per generation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use gif::{Encoder, Frame, Repeat};

use super::AnimationError;
use super::format::{frame_delay, global_palette, render_frame};
use crate::compute::Grid;

/// Animation recorder that captures generation snapshots and writes them
/// as a looping GIF on finalize.
///
/// Usage:
/// ```ignore
/// let mut recorder = AnimationRecorder::new("out.gif", width, height);
/// while !state.is_terminated() {
///     recorder.record_frame(&state.grid)?;
///     propagator.step(&mut state)?;
/// }
/// recorder.finalize()?;
/// ```
pub struct AnimationRecorder {
    path: PathBuf,
    width: usize,
    height: usize,
    /// Snapshots in generation order.
    frames: Vec<Grid>,
}

impl AnimationRecorder {
    /// Create a recorder for grids of the given dimensions.
    pub fn new<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            width,
            height,
            frames: Vec::new(),
        }
    }

    /// Snapshot a generation.
    pub fn record_frame(&mut self, grid: &Grid) -> Result<(), AnimationError> {
        if grid.width() != self.width || grid.height() != self.height {
            return Err(AnimationError::ShapeMismatch {
                expected: (self.width, self.height),
                actual: (grid.width(), grid.height()),
            });
        }
        self.frames.push(grid.clone());
        Ok(())
    }

    /// Get number of frames recorded so far.
    pub fn frames_recorded(&self) -> usize {
        self.frames.len()
    }

    /// Encode all frames to the output file as palette-indexed GIF frames.
    ///
    /// With no frames nothing is written. GIF dimensions are 16-bit, so larger
    /// grids are rejected before the file is created.
    pub fn finalize(self) -> Result<AnimationStats, AnimationError> {
        if self.frames.is_empty() {
            log::warn!(
                "No generations recorded; skipping {}",
                self.path.display()
            );
            return Ok(AnimationStats {
                frame_count: 0,
                path: None,
            });
        }

        let (width, height) = match (u16::try_from(self.width), u16::try_from(self.height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(AnimationError::TooLarge {
                    width: self.width,
                    height: self.height,
                });
            }
        };

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        {
            let mut encoder = Encoder::new(&mut writer, width, height, &global_palette())?;
            encoder.set_repeat(Repeat::Infinite)?;
            for (i, grid) in self.frames.iter().enumerate() {
                let mut frame = Frame::from_indexed_pixels(width, height, render_frame(grid), None);
                frame.delay = frame_delay(i);
                encoder.write_frame(&frame)?;
            }
        }
        writer.flush()?;

        log::info!(
            "Wrote {} frames to {}",
            self.frames.len(),
            self.path.display()
        );

        Ok(AnimationStats {
            frame_count: self.frames.len(),
            path: Some(self.path),
        })
    }
}

/// Statistics from recording session.
#[derive(Debug, Clone)]
pub struct AnimationStats {
    /// Total frames written.
    pub frame_count: usize,
    /// Output file, if one was written.
    pub path: Option<PathBuf>,
}

impl std::fmt::Display for AnimationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} frames -> {}", self.frame_count, path.display()),
            None => write!(f, "no frames"),
        }
    }
}

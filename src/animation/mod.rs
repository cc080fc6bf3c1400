//! Frame rendering for Life simulations.
//!
//! Every generation becomes one frame of a looping GIF. The first frame is
//! held for [`START_DELAY_MS`] so playback pauses on the seed; later frames
//! advance immediately. Optionally each generation is also written as a
//! JPEG still (`out000.jpg`, `out001.jpg`, ...).
//!
//! GIF frames are palette-indexed against the eight-color [`PALETTE`]:
//! dead cells use index 0 (black), live cells index 7 (white).

mod format;
mod recorder;
mod still;

use std::io;

pub use format::{
    DEAD_INDEX, FRAME_DELAY_MS, LIVE_INDEX, PALETTE, START_DELAY_MS, frame_delay, global_palette,
    render_frame, render_still,
};
pub use recorder::{AnimationRecorder, AnimationStats};
pub use still::{STILL_QUALITY, save_still};

/// Frame output errors.
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Failed to write frame output: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode frame: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to encode GIF: {0}")]
    Gif(#[from] gif::EncodingError),
    #[error("Grid {width}x{height} exceeds the GIF limit of 65535 per side")]
    TooLarge { width: usize, height: usize },
    #[error("Frame is {actual:?} but recorder expects {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

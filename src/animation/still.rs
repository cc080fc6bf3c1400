//! Per-generation JPEG still export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;

use super::AnimationError;
use super::format::render_still;
use crate::compute::Grid;

/// JPEG quality for still frames.
pub const STILL_QUALITY: u8 = 100;

/// Write a grid as a white-on-black JPEG, one pixel per cell.
pub fn save_still<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), AnimationError> {
    let img = render_still(grid);
    let mut writer = BufWriter::new(File::create(path)?);
    JpegEncoder::new_with_quality(&mut writer, STILL_QUALITY).encode_image(&img)?;
    writer.flush()?;
    Ok(())
}

//! Frame format definitions: palette, delays and grid rasterization.

use image::{Rgb, RgbImage};

use crate::compute::{ALIVE, Grid};

/// Eight-color frame palette, written as the GIF's global color table.
pub const PALETTE: [[u8; 3]; 8] = [
    [0x00, 0x00, 0x00],
    [0x00, 0x00, 0xff],
    [0x00, 0xff, 0x00],
    [0x00, 0xff, 0xff],
    [0xff, 0x00, 0x00],
    [0xff, 0x00, 0xff],
    [0xff, 0xff, 0x00],
    [0xff, 0xff, 0xff],
];

/// Palette index for dead cells (black).
pub const DEAD_INDEX: u8 = 0;
/// Palette index for live cells (white).
pub const LIVE_INDEX: u8 = 7;

/// Display time of the first frame, so playback pauses on the seed.
pub const START_DELAY_MS: u32 = 1000;
/// Display time of every later frame.
pub const FRAME_DELAY_MS: u32 = 0;

/// Flattened RGB triples for the GIF color table.
pub fn global_palette() -> Vec<u8> {
    PALETTE.concat()
}

/// Delay for the frame at `index`, in GIF centiseconds.
pub fn frame_delay(index: usize) -> u16 {
    let ms = if index == 0 {
        START_DELAY_MS
    } else {
        FRAME_DELAY_MS
    };
    (ms / 10) as u16
}

/// Rasterize a grid to palette indices, one per cell, row-major.
pub fn render_frame(grid: &Grid) -> Vec<u8> {
    grid.cells()
        .iter()
        .map(|&c| if c == ALIVE { LIVE_INDEX } else { DEAD_INDEX })
        .collect()
}

/// Rasterize a grid as opaque RGB for still export (white on black).
pub fn render_still(grid: &Grid) -> RgbImage {
    let live = Rgb(PALETTE[LIVE_INDEX as usize]);
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for (i, &cell) in grid.cells().iter().enumerate() {
        if cell == ALIVE {
            let (x, y) = (i % grid.width(), i / grid.width());
            img.put_pixel(x as u32, y as u32, live);
        }
    }
    img
}

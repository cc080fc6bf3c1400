//! Image sampler: turn a decoded raster image into an initial grid.
//!
//! Each pixel is read as 16-bit alpha-premultiplied RGBA. A cell is alive
//! when `floor(sqrt(r² + g² + b²)) >= a / 2`. The threshold is fixed.

use std::io;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::compute::Grid;

/// Maximum value of a 16-bit channel.
const CHANNEL_MAX: u64 = 0xFFFF;

/// Threshold test on 16-bit premultiplied channels.
#[inline]
pub fn pixel_is_alive(r: u16, g: u16, b: u16, a: u16) -> bool {
    let (r, g, b) = (r as u64, g as u64, b as u64);
    let brightness = ((r * r + g * g + b * b) as f64).sqrt() as u64;
    brightness >= a as u64 / 2
}

/// Premultiply a straight-alpha channel value.
#[inline]
fn premultiply(c: u16, a: u16) -> u16 {
    (c as u64 * a as u64 / CHANNEL_MAX) as u16
}

/// Sample every pixel of a decoded image into a grid of the same size.
pub fn grid_from_image(img: &DynamicImage) -> Result<Grid, ImageSeedError> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    if width == 0 || height == 0 {
        return Err(ImageSeedError::EmptyImage);
    }

    let rgba = img.to_rgba16();
    let mut grid = Grid::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alive = pixel_is_alive(premultiply(r, a), premultiply(g, a), premultiply(b, a), a);
        if alive {
            grid.set(x as usize, y as usize, true);
        }
    }
    Ok(grid)
}

/// Decode an image file (format guessed from content) and sample it.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Grid, ImageSeedError> {
    let path = path.as_ref();
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode()?;

    log::info!(
        "Decoded {} (format={:?}, {}x{})",
        path.display(),
        format,
        img.width(),
        img.height()
    );

    let grid = grid_from_image(&img)?;
    log::info!("Seeded {} lives from image", grid.count_lives());
    Ok(grid)
}

/// Image decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum ImageSeedError {
    #[error("Failed to open image: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Image has no pixels")]
    EmptyImage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_threshold_opaque() {
        assert!(!pixel_is_alive(0, 0, 0, 0xFFFF));
        assert!(pixel_is_alive(0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF));
        // Exactly half of alpha on one channel is the boundary.
        assert!(pixel_is_alive(0x7FFF, 0, 0, 0xFFFF));
        assert!(!pixel_is_alive(0x7FFE, 0, 0, 0xFFFF));
    }

    #[test]
    fn test_threshold_transparent_is_alive() {
        // Fully transparent: brightness 0 >= 0.
        assert!(pixel_is_alive(0, 0, 0, 0));
    }

    #[test]
    fn test_grid_from_rgb_image() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(2, 1, Rgb([200, 0, 0]));
        img.put_pixel(1, 1, Rgb([60, 60, 60]));

        let grid = grid_from_image(&DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        // 60*257 per channel: sqrt(3) * 15420 = 26708 < 32767
        assert_eq!(grid.dump(), "100\n001\n");
    }

    #[test]
    fn test_grid_from_rgba_premultiplies() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 128]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));

        let grid = grid_from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(grid.dump(), "10\n");
    }

    #[test]
    fn test_load_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.png");

        let mut img = RgbImage::new(4, 4);
        for x in 0..4 {
            img.put_pixel(x, 2, Rgb([255, 255, 255]));
        }
        img.save(&path).unwrap();

        let grid = load_image(&path).unwrap();
        assert_eq!(grid.count_lives(), 4);
        assert!((0..4).all(|x| grid.is_alive(x, 2)));
    }

    #[test]
    fn test_load_garbage_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"definitely not pixels").unwrap();

        assert!(matches!(load_image(&path), Err(ImageSeedError::Decode(_))));
        assert!(matches!(
            load_image(dir.path().join("missing.png")),
            Err(ImageSeedError::Io(_))
        ));
    }
}

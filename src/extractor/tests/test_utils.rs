use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage};

/// Builds an RGB image where every pixel encodes its own coordinates
pub fn create_patterned_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x * 7 + y * 13) % 256) as u8])
    })
}

/// Writes a patterned PNG into `dir` and returns its path
pub fn write_source_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("source.png");
    DynamicImage::ImageRgb8(create_patterned_image(width, height))
        .save(&path)
        .unwrap();
    path
}

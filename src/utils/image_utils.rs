//! Image decoding, encoding and resizing helpers

use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::debug;

use crate::errors::{ExtractError, ExtractResult};

/// Decode an image file, detecting its format from the content
///
/// The extension is only a hint; a mislabelled file still decodes.
pub fn decode_image(path: &Path) -> ExtractResult<DynamicImage> {
    let decode_failed = |message: String| ExtractError::DecodeFailed {
        path: path.to_path_buf(),
        message,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_failed(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_failed(e.to_string()))?;

    debug!("Detected format {:?} for {}", reader.format(), path.display());

    reader.decode().map_err(|e| decode_failed(e.to_string()))
}

/// Encode an image into memory in the given format
///
/// # Arguments
/// * `image` - Image to encode
/// * `format` - Output container format
/// * `path` - Destination path, used only for error reporting
pub fn encode_image(image: &DynamicImage, format: ImageFormat, path: &Path) -> ExtractResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format).map_err(|e| ExtractError::EncodeFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(buffer.into_inner())
}

/// Resize to an exact square and convert to RGBA for icon output
pub fn resize_to_icon(image: &DynamicImage, size: u32, filter: FilterType) -> DynamicImage {
    let resized = image.resize_exact(size, size, filter);
    DynamicImage::ImageRgba8(resized.to_rgba8())
}

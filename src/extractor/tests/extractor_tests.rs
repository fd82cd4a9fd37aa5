use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::config::ExtractConfig;
use crate::errors::ExtractError;
use crate::extractor::{ImageExtractor, Region};
use crate::utils::logger::Logger;

use super::test_utils::{create_patterned_image, write_source_png};

#[test]
fn test_crop_logo_copies_region() {
    let logger = Logger::disabled();
    let extractor = ImageExtractor::new(&logger);
    let source = DynamicImage::ImageRgb8(create_patterned_image(200, 180));

    let logo = extractor.crop_logo(&source, Region::default()).unwrap();
    assert_eq!(logo.dimensions(), (110, 110));

    let logo = logo.to_rgb8();
    let source = source.to_rgb8();
    for (x, y, pixel) in logo.enumerate_pixels() {
        assert_eq!(pixel, source.get_pixel(x + 40, y + 40));
    }
}

#[test]
fn test_crop_logo_rejects_undersized_source() {
    let logger = Logger::disabled();
    let extractor = ImageExtractor::new(&logger);
    let source = DynamicImage::ImageRgb8(create_patterned_image(149, 300));

    let err = extractor.crop_logo(&source, Region::default()).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidCropBounds { width: 149, height: 300, .. }));
    assert!(err.is_processing_error());
}

#[test]
fn test_make_favicon_is_square_rgba() {
    let logger = Logger::disabled();
    let extractor = ImageExtractor::new(&logger);
    let logo = DynamicImage::ImageRgb8(create_patterned_image(110, 110));

    let favicon = extractor.make_favicon(&logo, 32, FilterType::Triangle);
    assert_eq!(favicon.dimensions(), (32, 32));
    assert!(favicon.as_rgba8().is_some());
}

#[test]
fn test_custom_config_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = write_source_png(dir.path(), 64, 64);
    let output_dir = dir.path().join("nested").join("public");

    let config = ExtractConfig {
        source_path,
        output_dir: output_dir.clone(),
        crop: Region::new(0, 0, 48, 32).unwrap(),
        favicon_size: 16,
        logo_file_name: "brand.png".to_string(),
        favicon_file_name: "icon.ico".to_string(),
        ..ExtractConfig::default()
    };

    let logger = Logger::disabled();
    let report = ImageExtractor::new(&logger).extract_with_config(&config).unwrap();

    assert_eq!(report.logo_path, output_dir.join("brand.png"));
    assert_eq!(report.favicon_path, output_dir.join("icon.ico"));
    assert_eq!(report.logo_dimensions, (48, 32));
    assert_eq!(report.favicon_dimensions, (16, 16));
    assert_eq!(image::open(&report.favicon_path).unwrap().dimensions(), (16, 16));
}

#[test]
fn test_failed_decode_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("broken.png");
    std::fs::write(&source_path, b"definitely not an image").unwrap();
    let output_dir = dir.path().join("out");
    std::fs::create_dir(&output_dir).unwrap();

    let logger = Logger::disabled();
    let err = ImageExtractor::new(&logger).extract(&source_path, &output_dir).unwrap_err();

    assert!(matches!(err, ExtractError::DecodeFailed { .. }));
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[test]
fn test_inspect_reports_fit() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExtractConfig {
        source_path: write_source_png(dir.path(), 120, 200),
        ..ExtractConfig::default()
    };

    let logger = Logger::disabled();
    let info = ImageExtractor::new(&logger).inspect(&config).unwrap();

    assert_eq!((info.width, info.height), (120, 200));
    assert_eq!(info.region, Region::default());
    assert!(!info.region_fits);
    assert_eq!(info.color, "Rgb8");
}

//! Integration tests for the logo extraction workflow

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};

use logocrop::{ExtractError, LogoCrop};

/// Writes a PNG whose pixels are derived from their coordinates and `seed`
fn write_source(dir: &Path, name: &str, width: u32, height: u32, seed: u8) -> PathBuf {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x as u8).wrapping_add(seed),
            (y as u8).wrapping_mul(3),
            ((x ^ y) as u8).wrapping_add(seed.wrapping_mul(5)),
        ])
    });

    let path = dir.join(name);
    DynamicImage::ImageRgb8(image).save(&path).unwrap();
    path
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

#[test]
fn test_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("does-not-exist.jpg");
    let output_dir = dir.path().join("public");

    let kit = LogoCrop::new(None).unwrap();
    let err = kit.extract(&source, &output_dir).unwrap_err();

    match &err {
        ExtractError::SourceNotFound(path) => assert_eq!(path, &source),
        other => panic!("expected SourceNotFound, got {:?}", other),
    }
    assert!(!err.is_processing_error());
    assert_eq!(err.to_string(), format!("Source file not found: {}", source.display()));
    assert!(!output_dir.exists());
}

#[test]
fn test_happy_path_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "screenshot.png", 320, 240, 0);
    let output_dir = dir.path().join("public");
    fs::create_dir(&output_dir).unwrap();

    let kit = LogoCrop::new(None).unwrap();
    let report = kit.extract(&source, &output_dir).unwrap();

    assert_eq!(report.logo_path, output_dir.join("logo.png"));
    assert_eq!(report.favicon_path, output_dir.join("favicon.ico"));
    assert_eq!(report.logo_dimensions, (110, 110));
    assert_eq!(report.favicon_dimensions, (32, 32));

    // Only the two outputs remain, no staging leftovers
    assert_eq!(entries(&output_dir), 2);

    let logo = image::open(&report.logo_path).unwrap();
    assert_eq!(logo.dimensions(), (110, 110));
    let logo = logo.to_rgb8();
    let original = image::open(&source).unwrap().to_rgb8();
    for (x, y, pixel) in logo.enumerate_pixels() {
        assert_eq!(pixel, original.get_pixel(x + 40, y + 40), "pixel mismatch at ({}, {})", x, y);
    }

    let favicon_bytes = fs::read(&report.favicon_path).unwrap();
    assert_eq!(image::guess_format(&favicon_bytes).unwrap(), ImageFormat::Ico);
    let favicon = image::load_from_memory_with_format(&favicon_bytes, ImageFormat::Ico).unwrap();
    assert_eq!(favicon.dimensions(), (32, 32));
}

#[test]
fn test_favicon_is_resized_logo() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "screenshot.png", 200, 200, 17);

    let kit = LogoCrop::new(None).unwrap();
    let report = kit.extract(&source, dir.path()).unwrap();

    let expected = image::open(&report.logo_path).unwrap()
        .resize_exact(32, 32, FilterType::Triangle)
        .to_rgba8();
    let favicon = image::open(&report.favicon_path).unwrap().to_rgba8();

    for (x, y, pixel) in favicon.enumerate_pixels() {
        let want = expected.get_pixel(x, y);
        for channel in 0..4 {
            let diff = (pixel[channel] as i16 - want[channel] as i16).abs();
            assert!(diff <= 1, "favicon differs from resized logo at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_undersized_source_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "small.png", 120, 160, 0);
    let output_dir = dir.path().join("public");
    fs::create_dir(&output_dir).unwrap();

    let kit = LogoCrop::new(None).unwrap();
    let err = kit.extract(&source, &output_dir).unwrap_err();

    assert!(matches!(err, ExtractError::InvalidCropBounds { width: 120, height: 160, .. }));
    assert!(err.is_processing_error());
    assert_eq!(entries(&output_dir), 0);
}

#[test]
fn test_second_run_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("public");
    let kit = LogoCrop::new(None).unwrap();

    let first = write_source(dir.path(), "first.png", 160, 160, 0);
    kit.extract(&first, &output_dir).unwrap();
    let first_logo = fs::read(output_dir.join("logo.png")).unwrap();

    let second = write_source(dir.path(), "second.png", 160, 160, 99);
    let report = kit.extract(&second, &output_dir).unwrap();

    let second_logo = fs::read(&report.logo_path).unwrap();
    assert_ne!(first_logo, second_logo);

    let logo = image::open(&report.logo_path).unwrap().to_rgb8();
    let original = image::open(&second).unwrap().to_rgb8();
    assert_eq!(logo.get_pixel(0, 0), original.get_pixel(40, 40));
    assert_eq!(entries(&output_dir), 2);
}

#[test]
fn test_unwritable_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "screenshot.png", 200, 200, 0);

    // A regular file where the output directory should be
    let blocker = dir.path().join("public");
    fs::write(&blocker, b"not a directory").unwrap();

    let kit = LogoCrop::new(None).unwrap();
    let err = kit.extract(&source, &blocker).unwrap_err();

    assert!(matches!(err, ExtractError::WriteFailed { .. }));
    assert!(err.is_processing_error());
    assert_eq!(fs::read(&blocker).unwrap(), b"not a directory");
}

#[test]
fn test_inspect_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "screenshot.png", 400, 300, 0);

    let kit = LogoCrop::new(None).unwrap();
    let info = kit.inspect(&source).unwrap();

    assert_eq!((info.width, info.height), (400, 300));
    assert!(info.region_fits);
    assert_eq!(entries(dir.path()), 1);
}

#[test]
fn test_log_file_records_run() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), "screenshot.png", 200, 200, 0);
    let log_path = dir.path().join("run.log");
    let output_dir = dir.path().join("public");

    let kit = LogoCrop::new(log_path.to_str()).unwrap();
    kit.extract(&source, &output_dir).unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("logo.png"));
    assert!(log.contains("favicon.ico"));
}

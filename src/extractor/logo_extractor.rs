//! Logo and favicon extraction pipeline
//!
//! The pipeline is linear: check the source exists, decode it, crop the
//! configured region, derive the favicon from the crop, then publish both
//! files. Both outputs are encoded and staged before either is renamed into
//! place, so a failure before publishing leaves the output directory as it
//! was.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use log::{debug, info};

use crate::config::ExtractConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::utils::image_utils;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::utils::write_utils;

use super::region::Region;
use super::report::{ExtractionReport, SourceInfo};

// decode, crop, resize, encode+stage, publish
const PIPELINE_STEPS: u64 = 5;

/// Crops a logo out of a source image and derives a favicon from it
pub struct ImageExtractor<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl<'a> ImageExtractor<'a> {
    /// Create a new image extractor
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        ImageExtractor {
            logger,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Extract the logo and favicon using the default settings
    ///
    /// # Arguments
    /// * `source_path` - Image to crop the logo from
    /// * `output_dir` - Directory receiving `logo.png` and `favicon.ico`
    ///
    /// # Returns
    /// The written paths, or the first error encountered
    pub fn extract(&self, source_path: &Path, output_dir: &Path) -> ExtractResult<ExtractionReport> {
        let config = ExtractConfig {
            source_path: source_path.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            ..ExtractConfig::default()
        };

        self.extract_with_config(&config)
    }

    /// Extract the logo and favicon as described by a configuration
    pub fn extract_with_config(&self, config: &ExtractConfig) -> ExtractResult<ExtractionReport> {
        let source_path = config.source_path.as_path();
        info!("Extracting logo from {} into {}", source_path.display(), config.output_dir.display());

        if !source_path.exists() {
            debug!("Source file not found: {}", source_path.display());
            return Err(ExtractError::SourceNotFound(source_path.to_path_buf()));
        }

        let progress = if self.show_progress {
            ProgressTracker::new(PIPELINE_STEPS, "Decoding source")
        } else {
            ProgressTracker::hidden(PIPELINE_STEPS)
        };

        match self.run_pipeline(config, &progress) {
            Ok(report) => {
                progress.finish();
                self.logger.log(&format!(
                    "Extracted {} -> {} ({}x{}), {} ({}x{})",
                    source_path.display(),
                    report.logo_path.display(), report.logo_dimensions.0, report.logo_dimensions.1,
                    report.favicon_path.display(), report.favicon_dimensions.0, report.favicon_dimensions.1,
                ))?;
                Ok(report)
            },
            Err(e) => {
                progress.abandon("Failed");
                info!("Extraction failed: {}", e);
                Err(e)
            }
        }
    }

    fn run_pipeline(&self, config: &ExtractConfig, progress: &ProgressTracker) -> ExtractResult<ExtractionReport> {
        let source = image_utils::decode_image(&config.source_path)?;
        info!("Decoded source image: {}x{}", source.width(), source.height());
        progress.increment(1);

        progress.set_message("Cropping logo");
        let logo = self.crop_logo(&source, config.crop)?;
        progress.increment(1);

        progress.set_message("Resizing favicon");
        let favicon = self.make_favicon(&logo, config.favicon_size, config.resize_filter);
        progress.increment(1);

        progress.set_message("Writing outputs");
        let logo_path = config.logo_path();
        let favicon_path = config.favicon_path();
        let logo_bytes = image_utils::encode_image(&logo, ImageFormat::Png, &logo_path)?;
        let favicon_bytes = image_utils::encode_image(&favicon, ImageFormat::Ico, &favicon_path)?;

        write_utils::ensure_output_dir(&config.output_dir)?;
        let staged_logo = write_utils::stage_bytes(&logo_path, &logo_bytes)?;
        let staged_favicon = write_utils::stage_bytes(&favicon_path, &favicon_bytes)?;
        debug!("Staged outputs at {} and {}",
               staged_logo.staged_path().display(), staged_favicon.staged_path().display());
        progress.increment(1);

        let logo_path = staged_logo.commit()?;
        info!("Saved logo to {}", logo_path.display());
        let favicon_path = staged_favicon.commit()?;
        info!("Saved favicon to {}", favicon_path.display());
        progress.increment(1);

        Ok(ExtractionReport {
            logo_path,
            favicon_path,
            logo_dimensions: logo.dimensions(),
            favicon_dimensions: favicon.dimensions(),
        })
    }

    /// Cut the region out of the source image
    ///
    /// # Returns
    /// The cropped pixels, or `InvalidCropBounds` if the region does not fit
    pub fn crop_logo(&self, source: &DynamicImage, region: Region) -> ExtractResult<DynamicImage> {
        let (width, height) = source.dimensions();
        region.validate_within(width, height)?;

        debug!("Cropping region {} from {}x{} image", region, width, height);
        Ok(source.crop_imm(region.left(), region.top(), region.width(), region.height()))
    }

    /// Downscale the logo into a square favicon
    pub fn make_favicon(&self, logo: &DynamicImage, size: u32, filter: FilterType) -> DynamicImage {
        debug!("Resizing {}x{} logo to {}x{} favicon with {:?}",
               logo.width(), logo.height(), size, size, filter);
        image_utils::resize_to_icon(logo, size, filter)
    }

    /// Decode the source and report whether the configured region fits
    ///
    /// Nothing is written.
    pub fn inspect(&self, config: &ExtractConfig) -> ExtractResult<SourceInfo> {
        let path = config.source_path.as_path();
        if !path.exists() {
            return Err(ExtractError::SourceNotFound(path.to_path_buf()));
        }

        let source = image_utils::decode_image(path)?;
        let (width, height) = source.dimensions();

        Ok(SourceInfo {
            path: path.to_path_buf(),
            width,
            height,
            color: format!("{:?}", source.color()),
            region: config.crop,
            region_fits: config.crop.fits_within(width, height),
        })
    }
}

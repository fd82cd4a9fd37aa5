//! Logo extraction command
//!
//! Crops the logo, writes it and the derived favicon, and prints where
//! both were saved.

use log::info;

use crate::commands::command_traits::Command;
use crate::config::ExtractConfig;
use crate::errors::ExtractResult;
use crate::extractor::ImageExtractor;
use crate::utils::logger::Logger;

/// Command for extracting the logo and favicon
pub struct ExtractCommand<'a> {
    /// Resolved extraction settings
    config: ExtractConfig,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `config` - Resolved extraction settings
    /// * `show_progress` - Whether to draw a progress bar
    /// * `logger` - Logger for recording operations
    pub fn new(config: ExtractConfig, show_progress: bool, logger: &'a Logger) -> Self {
        info!("Creating extract command for {}", config.source_path.display());
        ExtractCommand {
            config,
            show_progress,
            logger,
        }
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        let extractor = ImageExtractor::new(self.logger).with_progress(self.show_progress);
        let report = extractor.extract_with_config(&self.config)?;

        println!("Saved logo to {}", report.logo_path.display());
        println!("Saved favicon to {}", report.favicon_path.display());

        info!("Extraction successful");
        self.logger.log("Extraction successful")?;

        Ok(())
    }
}

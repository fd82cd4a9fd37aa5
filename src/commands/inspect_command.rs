//! Source inspection command
//!
//! Reports the source dimensions and whether the configured crop region
//! fits, without writing any output.

use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::config::ExtractConfig;
use crate::errors::ExtractResult;
use crate::extractor::ImageExtractor;
use crate::utils::logger::Logger;

/// Command for inspecting the source image
pub struct InspectCommand<'a> {
    config: ExtractConfig,
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    pub fn new(config: ExtractConfig, logger: &'a Logger) -> Self {
        InspectCommand { config, logger }
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        info!("Inspecting {}", self.config.source_path.display());

        let info = ImageExtractor::new(self.logger).inspect(&self.config)?;
        if !info.region_fits {
            warn!("Crop region {} exceeds the {}x{} source", info.region, info.width, info.height);
        }

        println!("{}", info);
        self.logger.log(&info.to_string())?;

        Ok(())
    }
}

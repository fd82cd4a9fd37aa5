use std::path::Path;
use log::info;
use crate::config::ExtractConfig;
use crate::errors::ExtractResult;
use crate::extractor::{ExtractionReport, ImageExtractor, SourceInfo};
use crate::utils::logger::Logger;

/// Main interface to the logocrop library
pub struct LogoCrop {
    logger: Logger,
    config: ExtractConfig,
}

impl LogoCrop {
    /// Create a new LogoCrop instance with the bundled defaults
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file; without one nothing is logged to disk
    ///
    /// # Returns
    /// A LogoCrop instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> ExtractResult<Self> {
        Self::with_config(ExtractConfig::default(), log_file)
    }

    /// Create a LogoCrop instance with explicit settings
    ///
    /// The source path and output directory of `config` are only used by
    /// `run`; `extract` and `inspect` take their own paths.
    pub fn with_config(config: ExtractConfig, log_file: Option<&str>) -> ExtractResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(LogoCrop { logger, config })
    }

    /// Settings used for every extraction
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Crop the logo from `source_path` and write it and the favicon into `output_dir`
    ///
    /// # Arguments
    /// * `source_path` - Image containing the logo
    /// * `output_dir` - Directory receiving the logo and favicon
    ///
    /// # Returns
    /// The written paths, or `SourceNotFound` / a processing error
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(&self, source_path: P, output_dir: Q) -> ExtractResult<ExtractionReport> {
        let config = ExtractConfig {
            source_path: source_path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            ..self.config.clone()
        };

        self.extract_with(&config)
    }

    /// Run an extraction described entirely by `config`
    pub fn extract_with(&self, config: &ExtractConfig) -> ExtractResult<ExtractionReport> {
        let report = ImageExtractor::new(&self.logger).extract_with_config(config)?;
        info!("Saved logo to {}", report.logo_path.display());
        info!("Saved favicon to {}", report.favicon_path.display());
        Ok(report)
    }

    /// Run an extraction using the paths of the instance's own configuration
    pub fn run(&self) -> ExtractResult<ExtractionReport> {
        self.extract_with(&self.config)
    }

    /// Describe a source image and whether the configured crop fits it
    pub fn inspect<P: AsRef<Path>>(&self, source_path: P) -> ExtractResult<SourceInfo> {
        let config = ExtractConfig {
            source_path: source_path.as_ref().to_path_buf(),
            ..self.config.clone()
        };

        ImageExtractor::new(&self.logger).inspect(&config)
    }
}

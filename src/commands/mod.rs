//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use inspect_command::InspectCommand;

use std::path::PathBuf;

use clap::ArgMatches;
use log::debug;

use crate::config::{parse_filter, ExtractConfig};
use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::Region;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct LogocropCommandFactory;

impl LogocropCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        LogocropCommandFactory
    }
}

impl Default for LogocropCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for LogocropCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: ExtractConfig,
                      logger: &'a Logger) -> ExtractResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(config, logger)))
        } else {
            // Extraction is the default
            let show_progress = !args.get_flag("quiet");
            Ok(Box::new(ExtractCommand::new(config, show_progress, logger)))
        }
    }
}

/// Build the effective configuration from CLI arguments
///
/// Starts from the bundled defaults, applies `--config` if given, then the
/// individual flags.
pub fn resolve_config(args: &ArgMatches) -> ExtractResult<ExtractConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => ExtractConfig::from_file(path)?,
        None => ExtractConfig::default(),
    };

    if let Some(source) = args.get_one::<String>("source") {
        config.source_path = PathBuf::from(source);
    }
    if let Some(output_dir) = args.get_one::<String>("output-dir") {
        config.output_dir = PathBuf::from(output_dir);
    }
    if let Some(crop) = args.get_one::<String>("crop") {
        config.crop = Region::from_string(crop)?;
    }
    if let Some(size) = args.get_one::<String>("favicon-size") {
        let size = size.parse::<u32>()
            .map_err(|_| ExtractError::ConfigError(format!("Invalid favicon size: {}", size)))?;
        config.set_favicon_size(size)?;
    }
    if let Some(filter) = args.get_one::<String>("filter") {
        config.resize_filter = parse_filter(filter)?;
    }
    if let Some(log_file) = args.get_one::<String>("log-file") {
        config.log_file = PathBuf::from(log_file);
    }

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

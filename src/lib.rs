pub mod errors;
pub mod config;
pub mod extractor;
pub mod utils;
pub mod cli;
pub mod commands;
pub mod api;

pub use crate::api::LogoCrop;

pub use config::ExtractConfig;
pub use errors::{ExtractError, ExtractResult};
pub use extractor::{ExtractionReport, ImageExtractor, Region, SourceInfo};

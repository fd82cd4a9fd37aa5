//! Logo extraction from raster images
//!
//! This module crops the logo region out of a source image and derives
//! the favicon from that crop.

mod region;
mod report;
mod logo_extractor;
#[cfg(test)]
mod tests;

// Public exports
pub use region::Region;
pub use report::{ExtractionReport, SourceInfo};
pub use logo_extractor::ImageExtractor;

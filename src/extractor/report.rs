//! Results returned by the extractor

use std::fmt;
use std::path::PathBuf;

use super::region::Region;

/// Outcome of a successful extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Where the logo was written
    pub logo_path: PathBuf,
    /// Where the favicon was written
    pub favicon_path: PathBuf,
    /// Logo width and height in pixels
    pub logo_dimensions: (u32, u32),
    /// Favicon width and height in pixels
    pub favicon_dimensions: (u32, u32),
}

/// What `inspect` learned about a source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Colour type as reported by the decoder
    pub color: String,
    pub region: Region,
    /// Whether `region` lies inside the image
    pub region_fits: bool,
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source: {}", self.path.display())?;
        writeln!(f, "  Dimensions: {}x{}", self.width, self.height)?;
        writeln!(f, "  Color type: {}", self.color)?;
        writeln!(f, "  Crop region: {}", self.region)?;
        write!(f, "  Region fits: {}", if self.region_fits { "yes" } else { "no" })
    }
}

//! Region structure for defining the crop area
//!
//! The region is expressed as pixel bounds where (0,0) is the top-left
//! corner of the image. `right` and `bottom` are exclusive, so a region of
//! (40, 40, 150, 150) covers 110x110 pixels.

use std::fmt;

use crate::errors::{ExtractError, ExtractResult};

/// Crop region in pixel coordinates
///
/// Only constructible through `new`/`from_string`, so `left < right` and
/// `top < bottom` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Leftmost column included in the crop
    left: u32,

    /// Topmost row included in the crop
    top: u32,

    /// Column immediately after the rightmost pixel
    right: u32,

    /// Row immediately after the bottommost pixel
    bottom: u32,
}

impl Region {
    /// Create a new region from its bounds
    ///
    /// # Arguments
    /// * `left` - X-coordinate of the left edge
    /// * `top` - Y-coordinate of the top edge
    /// * `right` - X-coordinate just past the right edge
    /// * `bottom` - Y-coordinate just past the bottom edge
    ///
    /// # Returns
    /// The region, or a `ConfigError` if it would be empty
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> ExtractResult<Self> {
        if left >= right || top >= bottom {
            return Err(ExtractError::ConfigError(format!(
                "Crop region ({}, {}, {}, {}) is empty: left must be < right and top < bottom",
                left, top, right, bottom
            )));
        }

        Ok(Region { left, top, right, bottom })
    }

    /// Parse a region from a "left,top,right,bottom" string
    pub fn from_string(value: &str) -> ExtractResult<Self> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ExtractError::ConfigError(format!(
                "Crop region must have 4 comma-separated values (left,top,right,bottom), got '{}'",
                value
            )));
        }

        let mut bounds = [0u32; 4];
        for (slot, part) in bounds.iter_mut().zip(&parts) {
            *slot = part.parse::<u32>()
                .map_err(|_| ExtractError::ConfigError(format!("Invalid crop coordinate: '{}'", part)))?;
        }

        Region::new(bounds[0], bounds[1], bounds[2], bounds[3])
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    /// Width of the region in pixels
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the region in pixels
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Check whether the region lies inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }

    /// Validate the region against an image's dimensions
    ///
    /// # Returns
    /// `InvalidCropBounds` when any edge lies outside the image
    pub fn validate_within(&self, width: u32, height: u32) -> ExtractResult<()> {
        if self.fits_within(width, height) {
            Ok(())
        } else {
            Err(ExtractError::InvalidCropBounds { region: *self, width, height })
        }
    }
}

impl Default for Region {
    /// The historical logo position: (40, 40) to (150, 150)
    fn default() -> Self {
        Region { left: 40, top: 40, right: 150, bottom: 150 }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{} ({}x{})",
               self.left, self.top, self.right, self.bottom, self.width(), self.height())
    }
}

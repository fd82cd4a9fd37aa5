//! Extraction configuration
//!
//! Defaults come from the bundled `logocrop.toml`. A user file with the same
//! layout can override any subset of keys, and the CLI overrides both.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use lazy_static::lazy_static;
use log::{debug, warn};

use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::Region;

/// Largest side an ICO entry can store
pub const MAX_FAVICON_SIZE: u32 = 256;

lazy_static! {
    // Parse the bundled defaults once
    static ref DEFAULT_CONFIG: ExtractConfig = {
        let mut config = ExtractConfig::builtin();
        if let Err(e) = config.apply_str(include_str!("../logocrop.toml")) {
            eprintln!("Warning: Failed to parse bundled defaults: {}", e);
        }
        config
    };
}

/// Everything one extraction run needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Image to crop the logo from
    pub source_path: PathBuf,
    /// Directory receiving the logo and favicon
    pub output_dir: PathBuf,
    /// Pixel bounds of the logo
    pub crop: Region,
    /// Side length of the square favicon
    pub favicon_size: u32,
    /// File name of the logo inside `output_dir`
    pub logo_file_name: String,
    /// File name of the favicon inside `output_dir`
    pub favicon_file_name: String,
    /// Resampling filter used for the favicon
    pub resize_filter: FilterType,
    /// Log file written by the CLI
    pub log_file: PathBuf,
}

impl ExtractConfig {
    /// Hard fallback used when the bundled file cannot be read
    fn builtin() -> Self {
        ExtractConfig {
            source_path: PathBuf::from("uploaded_media.jpg"),
            output_dir: PathBuf::from("public"),
            crop: Region::default(),
            favicon_size: 32,
            logo_file_name: "logo.png".to_string(),
            favicon_file_name: "favicon.ico".to_string(),
            resize_filter: FilterType::Triangle,
            log_file: PathBuf::from("logocrop.log"),
        }
    }

    /// Parse a configuration from a TOML string, on top of the defaults
    pub fn from_str(content: &str) -> ExtractResult<Self> {
        let mut config = ExtractConfig::default();
        config.apply_str(content)?;
        Ok(config)
    }

    /// Load a configuration from a TOML file, on top of the defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| {
            ExtractError::ConfigError(format!("Cannot read config file {}: {}", path.display(), e))
        })?;

        Self::from_str(&contents)
    }

    /// Path of the logo output
    pub fn logo_path(&self) -> PathBuf {
        self.output_dir.join(&self.logo_file_name)
    }

    /// Path of the favicon output
    pub fn favicon_path(&self) -> PathBuf {
        self.output_dir.join(&self.favicon_file_name)
    }

    /// Set the favicon size, rejecting sizes an ICO cannot hold
    pub fn set_favicon_size(&mut self, size: u32) -> ExtractResult<()> {
        if size == 0 || size > MAX_FAVICON_SIZE {
            return Err(ExtractError::ConfigError(format!(
                "Favicon size must be between 1 and {}, got {}", MAX_FAVICON_SIZE, size
            )));
        }
        self.favicon_size = size;
        Ok(())
    }

    /// Overlay the keys present in a TOML document
    fn apply_str(&mut self, content: &str) -> ExtractResult<()> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| ExtractError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        if let Some(value) = Self::get_str(&toml_value, "paths", "source")? {
            self.source_path = PathBuf::from(value);
        }
        if let Some(value) = Self::get_str(&toml_value, "paths", "output_dir")? {
            self.output_dir = PathBuf::from(value);
        }
        if let Some(value) = Self::get_str(&toml_value, "paths", "log_file")? {
            self.log_file = PathBuf::from(value);
        }

        // Crop edges may be given partially; the result is revalidated as a whole
        let left = Self::get_u32(&toml_value, "crop", "left")?.unwrap_or(self.crop.left());
        let top = Self::get_u32(&toml_value, "crop", "top")?.unwrap_or(self.crop.top());
        let right = Self::get_u32(&toml_value, "crop", "right")?.unwrap_or(self.crop.right());
        let bottom = Self::get_u32(&toml_value, "crop", "bottom")?.unwrap_or(self.crop.bottom());
        self.crop = Region::new(left, top, right, bottom)?;

        if let Some(size) = Self::get_u32(&toml_value, "favicon", "size")? {
            self.set_favicon_size(size)?;
        }
        if let Some(name) = Self::get_str(&toml_value, "favicon", "filter")? {
            self.resize_filter = parse_filter(name)?;
        }

        if let Some(value) = Self::get_str(&toml_value, "output", "logo")? {
            self.logo_file_name = value.to_string();
        }
        if let Some(value) = Self::get_str(&toml_value, "output", "favicon")? {
            self.favicon_file_name = value.to_string();
        }

        Ok(())
    }

    /// Helper to read an optional string key from a table
    fn get_str<'v>(toml_value: &'v toml::Value, table: &str, key: &str) -> ExtractResult<Option<&'v str>> {
        match toml_value.get(table).and_then(|t| t.get(key)) {
            None => Ok(None),
            Some(v) => v.as_str().map(Some).ok_or_else(|| {
                ExtractError::ConfigError(format!("{}.{} must be a string", table, key))
            }),
        }
    }

    /// Helper to read an optional non-negative integer key from a table
    fn get_u32(toml_value: &toml::Value, table: &str, key: &str) -> ExtractResult<Option<u32>> {
        let Some(v) = toml_value.get(table).and_then(|t| t.get(key)) else {
            return Ok(None);
        };

        let number = v.as_integer().ok_or_else(|| {
            ExtractError::ConfigError(format!("{}.{} must be an integer", table, key))
        })?;

        u32::try_from(number).map(Some).map_err(|_| {
            ExtractError::ConfigError(format!("{}.{} out of range: {}", table, key, number))
        })
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

/// Translate a filter name into an `image` resampling filter
pub fn parse_filter(name: &str) -> ExtractResult<FilterType> {
    match name.to_lowercase().as_str() {
        "nearest" => Ok(FilterType::Nearest),
        "triangle" | "bilinear" => Ok(FilterType::Triangle),
        "catmullrom" | "bicubic" => Ok(FilterType::CatmullRom),
        "gaussian" => Ok(FilterType::Gaussian),
        "lanczos3" | "lanczos" => Ok(FilterType::Lanczos3),
        other => {
            warn!("Unknown resize filter requested: {}", other);
            Err(ExtractError::ConfigError(format!(
                "Unknown resize filter '{}' (expected nearest, triangle, catmullrom, gaussian or lanczos3)",
                name
            )))
        }
    }
}

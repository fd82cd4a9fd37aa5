//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub(crate) mod progress;
pub(crate) mod image_utils;
pub(crate) mod write_utils;

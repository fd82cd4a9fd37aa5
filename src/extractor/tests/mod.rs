//! Tests for the extractor module

mod test_utils;
mod extractor_tests;

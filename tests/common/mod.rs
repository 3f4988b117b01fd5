//! Common test utilities for floodtiles.
//!
//! This module provides shared fixtures and checks for the integration tests.

// Not every test binary uses every helper
#![allow(dead_code)]

pub mod assertions;
pub mod image_utils;
pub mod test_data;

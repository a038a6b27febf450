//! Format converters
//!
//! This module contains converters from music notation formats into the
//! crate's event model.

pub mod mei;

// Re-export for convenience
pub use mei::{convert_mei, ImportError, ImportResult, ImportSettings, MeiValueError};

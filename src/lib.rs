//! MEI Import
//!
//! Converts MEI (Music Encoding Initiative) note and rest elements into
//! typed music events: pitch, dotted duration, articulations and identity.

pub mod converters;
pub mod models;

// Re-export commonly used types
pub use converters::mei::{
    convert_mei, note_from_node, rest_from_node, AttributeSource, ImportError, ImportResult,
    ImportSettings, MeiValueError, SkippedElement,
};
pub use models::*;

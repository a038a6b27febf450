//! Public API types for MEI import

use crate::models::MusicEvent;
use serde::{Deserialize, Serialize};

/// Result of converting an MEI document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    /// Converted notes and rests, in document order
    pub events: Vec<MusicEvent>,

    /// Elements dropped because their attributes could not be decoded
    pub skipped_elements: Vec<SkippedElement>,
}

/// Information about a skipped element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedElement {
    /// Element tag name (e.g., "note")
    pub element_type: String,

    /// Element identity, if it had one
    pub element_id: Option<String>,

    /// Decoding error message
    pub reason: String,
}

/// Configuration options for document import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Skip elements with undecodable attributes instead of failing
    pub skip_invalid_elements: bool,

    /// Whether `<rest>` elements produce events
    pub include_rests: bool,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            skip_invalid_elements: false,
            include_rests: true,
        }
    }
}

//! MEI to music event converter
//!
//! Converts MEI `<note>` and `<rest>` elements into [`MusicEvent`] values.
//!
//! # Architecture
//!
//! ```text
//! MEI element attributes (pname, accid, oct, dur, dots, artic, id)
//!   ↓ [attributes: code tables + translate]
//! Typed values (Accidental, Rational, Articulation)
//!   ↓ [builders: pitch, duration, event]
//! MusicEvent (Note | Rest)
//! ```
//!
//! Every unknown code fails with the same [`MeiValueError`], whose message
//! names the attribute and the offending value.
//!
//! # Basic Usage
//!
//! ```ignore
//! use mei_import::converters::mei::{convert_mei, ImportSettings};
//!
//! let mei = r#"<layer><note pname="d" accid="s" oct="2" dur="4" dots="1"/></layer>"#;
//! let result = convert_mei(mei, &ImportSettings::default())?;
//! assert_eq!(result.events[0].quarter_length(), 1.5);
//! ```
//!
//! [`MusicEvent`]: crate::models::MusicEvent

pub mod attributes;
pub mod builders;
pub mod errors;
pub mod parser;
pub mod types;

// Re-export main API
pub use attributes::{
    decode_accidental, decode_articulation, decode_articulation_list, decode_articulation_token,
    decode_duration_unit, translate, CodeMapping, CompoundArticulation,
};
pub use builders::{build_duration, note_from_node, resolve_pitch, rest_from_node};
pub use errors::{ImportError, MeiValueError};
pub use parser::{convert_element, convert_mei, AttributeSource};
pub use types::{ImportResult, ImportSettings, SkippedElement};

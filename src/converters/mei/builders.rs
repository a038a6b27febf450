//! Event construction from MEI elements
//!
//! Each builder reads the attributes it needs into optional values,
//! decodes them, and assembles the event in one step.

use super::attributes::{decode_accidental, decode_articulation_list, decode_duration_unit};
use super::errors::MeiValueError;
use super::parser::AttributeSource;
use crate::models::{
    Accidental, Duration, MusicEvent, NoteEvent, Pitch, Rational, RestEvent, Step,
};

/// Build a pitch from a pitch name such as "D", "d", "D#6" or "E-4".
///
/// A missing or empty name gives the empty pitch instead of an error.
pub fn resolve_pitch(name: Option<&str>) -> Result<Pitch, MeiValueError> {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => return Ok(Pitch::empty()),
    };
    let invalid = || MeiValueError::new("pname", name);

    let mut chars = name.chars();
    let step = chars
        .next()
        .and_then(|c| Step::from_char(c.to_ascii_uppercase()))
        .ok_or_else(invalid)?;
    let rest = chars.as_str();

    // Octave digits follow the modifier; "-" is always a flat, so "C-1" is
    // C flat in octave 1.
    let octave_start = rest
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (modifier, octave_text) = rest.split_at(octave_start);

    let accidental = if modifier.is_empty() {
        None
    } else {
        Some(Accidental::from_modifier(modifier).ok_or_else(invalid)?)
    };

    let octave = if octave_text.is_empty() {
        None
    } else {
        Some(octave_text.parse::<i8>().map_err(|_| invalid())?)
    };

    Ok(Pitch::new(step, accidental, octave))
}

/// Dotted duration from an undotted base length.
///
/// Accepts anything convertible to an exact quarter length, so integer and
/// rational bases behave the same.
pub fn build_duration<B: Into<Rational>>(base: B, dots: u32) -> Duration {
    Duration::new(base.into(), dots)
}

/// Convert a `<note>` element
pub fn note_from_node<N: AttributeSource + ?Sized>(node: &N) -> Result<MusicEvent, MeiValueError> {
    let pname = node.attribute_or("pname", "");
    let accid = node.attribute("accid");
    let oct = node.attribute_or("oct", "");
    let dur = node.attribute("dur");
    let dots = node.attribute("dots");
    let id = read_id(node);
    let artic = node.attribute("artic").filter(|a| !a.is_empty());

    let mut pitch = resolve_pitch(Some(pname))?;
    if let Some(code) = accid {
        pitch = pitch.with_accidental(Some(decode_accidental(code)?));
    }
    if !oct.is_empty() {
        pitch = pitch.with_octave(Some(parse_octave(oct)?));
    }

    let duration = build_duration(decode_duration_unit(dur)?, parse_dots(dots)?);

    let articulations = match artic {
        Some(codes) => decode_articulation_list(codes)?,
        None => Vec::new(),
    };

    let note = NoteEvent::new(pitch, duration)
        .with_id(id)
        .with_articulations(articulations);

    log::debug!(
        "converted <note> {} ({} quarters)",
        note.name_with_octave(),
        note.duration.quarter_length
    );

    Ok(MusicEvent::Note(note))
}

/// Convert a `<rest>` element
pub fn rest_from_node<N: AttributeSource + ?Sized>(node: &N) -> Result<MusicEvent, MeiValueError> {
    let dur = node.attribute("dur");
    let dots = node.attribute("dots");
    let id = read_id(node);

    let duration = build_duration(decode_duration_unit(dur)?, parse_dots(dots)?);
    let rest = RestEvent::new(duration).with_id(id);

    log::debug!("converted <rest> ({} quarters)", rest.duration.quarter_length);

    Ok(MusicEvent::Rest(rest))
}

fn read_id<N: AttributeSource + ?Sized>(node: &N) -> Option<String> {
    node.attribute("id")
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn parse_octave(text: &str) -> Result<i8, MeiValueError> {
    text.trim()
        .parse::<i8>()
        .map_err(|_| MeiValueError::new("oct", text))
}

fn parse_dots(text: Option<&str>) -> Result<u32, MeiValueError> {
    match text {
        None => Ok(0),
        Some(t) => t
            .trim()
            .parse::<u32>()
            .map_err(|_| MeiValueError::new("dots", t)),
    }
}

//! Attribute value decoding
//!
//! MEI encodes most note properties as short codes ("s" for sharp, "4" for a
//! quarter note, "stacc" for staccato). Every code is resolved through
//! [`translate`] so an unknown value always produces the same error.

use super::errors::MeiValueError;
use crate::models::{Accidental, Articulation, Rational};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Fixed mapping from an attribute code to its decoded value
pub type CodeMapping<V> = HashMap<&'static str, V>;

lazy_static! {
    /// `accid` codes
    pub static ref ACCID_ATTR: CodeMapping<Accidental> = {
        let mut m = HashMap::new();
        m.insert("s", Accidental::Sharp);
        m.insert("f", Accidental::Flat);
        m.insert("ss", Accidental::DoubleSharp);
        m.insert("x", Accidental::DoubleSharp);
        m.insert("ff", Accidental::DoubleFlat);
        m.insert("xs", Accidental::TripleSharp);
        m.insert("ts", Accidental::TripleSharp);
        m.insert("tf", Accidental::TripleFlat);
        m.insert("n", Accidental::Natural);
        m.insert("nf", Accidental::Flat);
        m.insert("ns", Accidental::Sharp);
        m.insert("su", Accidental::ThreeQuarterSharp);
        m.insert("sd", Accidental::QuarterSharp);
        m.insert("fu", Accidental::QuarterFlat);
        m.insert("fd", Accidental::ThreeQuarterFlat);
        m.insert("nu", Accidental::QuarterSharp);
        m.insert("nd", Accidental::QuarterFlat);
        m
    };

    /// `dur` codes, as quarter lengths
    pub static ref DUR_ATTR: CodeMapping<Rational> = {
        let mut m = HashMap::new();
        m.insert("maxima", Rational::from_integer(32));
        m.insert("long", Rational::from_integer(16));
        m.insert("breve", Rational::from_integer(8));
        m.insert("1", Rational::from_integer(4));
        m.insert("2", Rational::from_integer(2));
        m.insert("4", Rational::from_integer(1));
        m.insert("8", Rational::new(1, 2));
        m.insert("16", Rational::new(1, 4));
        m.insert("32", Rational::new(1, 8));
        m.insert("64", Rational::new(1, 16));
        m.insert("128", Rational::new(1, 32));
        m.insert("256", Rational::new(1, 64));
        m.insert("512", Rational::new(1, 128));
        m.insert("1024", Rational::new(1, 256));
        m.insert("2048", Rational::new(1, 512));
        m
    };

    /// `artic` codes (single articulations only)
    pub static ref ARTIC_ATTR: CodeMapping<Articulation> = {
        let mut m = HashMap::new();
        m.insert("acc", Articulation::Accent);
        m.insert("stacc", Articulation::Staccato);
        m.insert("ten", Articulation::Tenuto);
        m.insert("stacciss", Articulation::Staccatissimo);
        m.insert("marc", Articulation::StrongAccent);
        m.insert("spicc", Articulation::Spiccato);
        m.insert("doit", Articulation::Doit);
        m.insert("plop", Articulation::Plop);
        m.insert("fall", Articulation::Falloff);
        m.insert("dnbow", Articulation::DownBow);
        m.insert("upbow", Articulation::UpBow);
        m.insert("harm", Articulation::Harmonic);
        m.insert("snap", Articulation::SnapPizzicato);
        m.insert("stop", Articulation::Stopped);
        m.insert("open", Articulation::OpenString);
        m.insert("dbltongue", Articulation::DoubleTongue);
        m.insert("toe", Articulation::OrganToe);
        m.insert("trpltongue", Articulation::TripleTongue);
        m.insert("heel", Articulation::OrganHeel);
        m
    };
}

/// Look up `code` in `mapping`, failing with a [`MeiValueError`] naming
/// `attribute` when the code is unknown.
pub fn translate<V: Clone>(
    code: &str,
    attribute: &str,
    mapping: &CodeMapping<V>,
) -> Result<V, MeiValueError> {
    mapping
        .get(code)
        .cloned()
        .ok_or_else(|| MeiValueError::new(attribute, code))
}

pub fn decode_accidental(code: &str) -> Result<Accidental, MeiValueError> {
    translate(code, "accid", &ACCID_ATTR)
}

/// Decode a `dur` code to its undotted quarter length.
///
/// A missing code is reported as an empty value.
pub fn decode_duration_unit(code: Option<&str>) -> Result<Rational, MeiValueError> {
    translate(code.unwrap_or(""), "dur", &DUR_ATTR)
}

pub fn decode_articulation(code: &str) -> Result<Articulation, MeiValueError> {
    translate(code, "artic", &ARTIC_ATTR)
}

/// Hyphenated articulation codes that stand for two marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundArticulation {
    /// "marc-stacc"
    MarcatoStaccato,
    /// "ten-stacc"
    TenutoStaccato,
}

impl CompoundArticulation {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "marc-stacc" => Some(CompoundArticulation::MarcatoStaccato),
            "ten-stacc" => Some(CompoundArticulation::TenutoStaccato),
            _ => None,
        }
    }

    pub fn articulations(self) -> [Articulation; 2] {
        match self {
            CompoundArticulation::MarcatoStaccato => {
                [Articulation::StrongAccent, Articulation::Staccato]
            }
            CompoundArticulation::TenutoStaccato => [Articulation::Tenuto, Articulation::Staccato],
        }
    }
}

/// Decode one articulation token, which may be a compound code.
pub fn decode_articulation_token(code: &str) -> Result<Vec<Articulation>, MeiValueError> {
    match CompoundArticulation::from_code(code) {
        Some(compound) => Ok(compound.articulations().to_vec()),
        None => Ok(vec![decode_articulation(code)?]),
    }
}

/// Decode a whitespace-separated `artic` value, keeping token order and
/// duplicates.
pub fn decode_articulation_list(codes: &str) -> Result<Vec<Articulation>, MeiValueError> {
    let mut articulations = Vec::new();
    for token in codes.split_whitespace() {
        articulations.extend(decode_articulation_token(token)?);
    }
    Ok(articulations)
}

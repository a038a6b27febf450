//! Pitch model
//!
//! A pitch is built from up to three independent parts: a letter name,
//! an accidental and an octave. Any of them may be absent; an empty pitch
//! is the value used when a source element carries no pitch name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diatonic letter name (C through B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// Parse a single uppercase letter A-G
    pub fn from_char(c: char) -> Option<Step> {
        match c {
            'C' => Some(Step::C),
            'D' => Some(Step::D),
            'E' => Some(Step::E),
            'F' => Some(Step::F),
            'G' => Some(Step::G),
            'A' => Some(Step::A),
            'B' => Some(Step::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Step::C => 'C',
            Step::D => 'D',
            Step::E => 'E',
            Step::F => 'F',
            Step::G => 'G',
            Step::A => 'A',
            Step::B => 'B',
        }
    }
}

/// Pitch modifier
///
/// Quarter-tone variants use the `~` (quarter sharp) and backtick
/// (quarter flat) modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
    DoubleSharp,
    DoubleFlat,
    TripleSharp,
    TripleFlat,
    QuarterSharp,
    ThreeQuarterSharp,
    QuarterFlat,
    ThreeQuarterFlat,
}

impl Accidental {
    /// Modifier text used in pitch names ("#", "-", "##", ...).
    /// A natural has an empty modifier.
    pub fn modifier(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "-",
            Accidental::DoubleSharp => "##",
            Accidental::DoubleFlat => "--",
            Accidental::TripleSharp => "###",
            Accidental::TripleFlat => "---",
            Accidental::QuarterSharp => "~",
            Accidental::ThreeQuarterSharp => "#~",
            Accidental::QuarterFlat => "`",
            Accidental::ThreeQuarterFlat => "-`",
        }
    }

    /// Inverse of [`Accidental::modifier`], also accepting "n" for natural
    pub fn from_modifier(s: &str) -> Option<Accidental> {
        match s {
            "n" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "-" => Some(Accidental::Flat),
            "##" => Some(Accidental::DoubleSharp),
            "--" => Some(Accidental::DoubleFlat),
            "###" => Some(Accidental::TripleSharp),
            "---" => Some(Accidental::TripleFlat),
            "~" => Some(Accidental::QuarterSharp),
            "#~" => Some(Accidental::ThreeQuarterSharp),
            "`" => Some(Accidental::QuarterFlat),
            "-`" => Some(Accidental::ThreeQuarterFlat),
            _ => None,
        }
    }

    /// Alteration in semitones (quarter tones are 0.5)
    pub fn alter(&self) -> f32 {
        match self {
            Accidental::Natural => 0.0,
            Accidental::Sharp => 1.0,
            Accidental::Flat => -1.0,
            Accidental::DoubleSharp => 2.0,
            Accidental::DoubleFlat => -2.0,
            Accidental::TripleSharp => 3.0,
            Accidental::TripleFlat => -3.0,
            Accidental::QuarterSharp => 0.5,
            Accidental::ThreeQuarterSharp => 1.5,
            Accidental::QuarterFlat => -0.5,
            Accidental::ThreeQuarterFlat => -1.5,
        }
    }
}

/// Musical pitch with optional letter, accidental and octave
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub step: Option<Step>,
    pub accidental: Option<Accidental>,
    pub octave: Option<i8>,
}

impl Pitch {
    pub fn new(step: Step, accidental: Option<Accidental>, octave: Option<i8>) -> Self {
        Self {
            step: Some(step),
            accidental,
            octave,
        }
    }

    /// Empty pitch: no letter, accidental or octave
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_accidental(self, accidental: Option<Accidental>) -> Self {
        Self { accidental, ..self }
    }

    pub fn with_octave(self, octave: Option<i8>) -> Self {
        Self { octave, ..self }
    }

    /// Letter plus accidental modifier, e.g. "D#". Empty for an empty pitch.
    pub fn name(&self) -> String {
        match self.step {
            Some(step) => {
                let modifier = self.accidental.map(|a| a.modifier()).unwrap_or("");
                format!("{}{}", step.as_char(), modifier)
            }
            None => String::new(),
        }
    }

    /// Name followed by the octave number when one is set, e.g. "D#2"
    pub fn name_with_octave(&self) -> String {
        match (self.step, self.octave) {
            (Some(_), Some(octave)) => format!("{}{}", self.name(), octave),
            _ => self.name(),
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name_with_octave())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_with_octave() {
        let pitch = Pitch::new(Step::D, Some(Accidental::Sharp), Some(2));
        assert_eq!(pitch.name(), "D#");
        assert_eq!(pitch.name_with_octave(), "D#2");
    }

    #[test]
    fn test_natural_has_no_modifier() {
        let pitch = Pitch::new(Step::D, Some(Accidental::Natural), Some(2));
        assert_eq!(pitch.name_with_octave(), "D2");
    }

    #[test]
    fn test_empty_pitch_renders_empty() {
        assert_eq!(Pitch::empty().name_with_octave(), "");
        assert_eq!(Pitch::empty().to_string(), "");
    }

    #[test]
    fn test_modifier_roundtrip_for_quarter_tones() {
        for acc in [Accidental::QuarterFlat, Accidental::ThreeQuarterSharp] {
            assert_eq!(Accidental::from_modifier(acc.modifier()), Some(acc));
        }
    }
}

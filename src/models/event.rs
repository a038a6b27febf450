//! Note and rest events
//!
//! Events are value objects: each is built once from its source element
//! and handed to the caller.

use super::{Articulation, Duration, Pitch};
use serde::{Deserialize, Serialize};

/// A pitched note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub pitch: Pitch,
    pub duration: Duration,
    pub articulations: Vec<Articulation>,
    pub id: Option<String>,
}

impl NoteEvent {
    pub fn new(pitch: Pitch, duration: Duration) -> Self {
        Self {
            pitch,
            duration,
            articulations: Vec::new(),
            id: None,
        }
    }

    pub fn with_id(self, id: Option<String>) -> Self {
        Self { id, ..self }
    }

    pub fn with_articulations(self, articulations: Vec<Articulation>) -> Self {
        Self {
            articulations,
            ..self
        }
    }

    pub fn name_with_octave(&self) -> String {
        self.pitch.name_with_octave()
    }
}

/// A rest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestEvent {
    pub duration: Duration,
    pub id: Option<String>,
}

impl RestEvent {
    pub fn new(duration: Duration) -> Self {
        Self { duration, id: None }
    }

    pub fn with_id(self, id: Option<String>) -> Self {
        Self { id, ..self }
    }
}

/// A converted note or rest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MusicEvent {
    Note(NoteEvent),
    Rest(RestEvent),
}

impl MusicEvent {
    pub fn duration(&self) -> &Duration {
        match self {
            MusicEvent::Note(note) => &note.duration,
            MusicEvent::Rest(rest) => &rest.duration,
        }
    }

    pub fn quarter_length(&self) -> f64 {
        self.duration().quarter_length()
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            MusicEvent::Note(note) => note.id.as_deref(),
            MusicEvent::Rest(rest) => rest.id.as_deref(),
        }
    }

    /// Articulations of a note; rests have none
    pub fn articulations(&self) -> &[Articulation] {
        match self {
            MusicEvent::Note(note) => &note.articulations,
            MusicEvent::Rest(_) => &[],
        }
    }

    pub fn as_note(&self) -> Option<&NoteEvent> {
        match self {
            MusicEvent::Note(note) => Some(note),
            MusicEvent::Rest(_) => None,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, MusicEvent::Rest(_))
    }
}

impl From<NoteEvent> for MusicEvent {
    fn from(note: NoteEvent) -> Self {
        MusicEvent::Note(note)
    }
}

impl From<RestEvent> for MusicEvent {
    fn from(rest: RestEvent) -> Self {
        MusicEvent::Rest(rest)
    }
}

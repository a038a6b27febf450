//! Models module for the MEI importer
//!
//! This module contains the music objects the converter produces:
//! pitches, durations, articulations and note/rest events.

pub mod articulation;
pub mod duration;
pub mod event;
pub mod pitch;

// Re-export commonly used types
pub use articulation::Articulation;
pub use duration::{Duration, Rational};
pub use event::{MusicEvent, NoteEvent, RestEvent};
pub use pitch::{Accidental, Pitch, Step};

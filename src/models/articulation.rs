use serde::{Deserialize, Serialize};

/// Performance marking attached to a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Articulation {
    Accent,
    Staccato,
    Tenuto,
    Staccatissimo,
    /// Marcato
    StrongAccent,
    Spiccato,
    Doit,
    Plop,
    Falloff,
    DownBow,
    UpBow,
    Harmonic,
    SnapPizzicato,
    Stopped,
    OpenString,
    DoubleTongue,
    TripleTongue,
    OrganToe,
    OrganHeel,
}

impl Articulation {
    pub fn name(&self) -> &'static str {
        match self {
            Articulation::Accent => "accent",
            Articulation::Staccato => "staccato",
            Articulation::Tenuto => "tenuto",
            Articulation::Staccatissimo => "staccatissimo",
            Articulation::StrongAccent => "strong accent",
            Articulation::Spiccato => "spiccato",
            Articulation::Doit => "doit",
            Articulation::Plop => "plop",
            Articulation::Falloff => "falloff",
            Articulation::DownBow => "down bow",
            Articulation::UpBow => "up bow",
            Articulation::Harmonic => "harmonic",
            Articulation::SnapPizzicato => "snap pizzicato",
            Articulation::Stopped => "stopped",
            Articulation::OpenString => "open string",
            Articulation::DoubleTongue => "double tongue",
            Articulation::TripleTongue => "triple tongue",
            Articulation::OrganToe => "organ toe",
            Articulation::OrganHeel => "organ heel",
        }
    }
}

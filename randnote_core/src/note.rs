// Note names, natural letters, and modifications.
//
// A `NoteName` is a spelling, not a sound: `CSharp` and `DFlat` are distinct
// symbols for the same pitch class. The 17 names cover the 12 pitch classes
// with both spellings for each black key. There are no spellings across the
// B–C and E–F semitone gaps (no B♯, C♭, E♯, F♭), so every name stays inside
// its octave.
//
// Everything in this module is a pure, total mapping. The enharmonic side
// (alternative spellings, sharp/flat neighbors of a letter) lives in
// `enharmonic.rs`; absolute pitches live in `pitch.rs`.

use crate::error::ParseNoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 17 note spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    A,
    ASharp,
    BFlat,
    B,
    C,
    CSharp,
    DFlat,
    D,
    DSharp,
    EFlat,
    E,
    F,
    FSharp,
    GFlat,
    G,
    GSharp,
    AFlat,
}

/// The letter of a note, ignoring sharps and flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Natural {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modification {
    None,
    Sharp,
    Flat,
}

impl NoteName {
    pub const ALL: [NoteName; 17] = [
        NoteName::A,
        NoteName::ASharp,
        NoteName::BFlat,
        NoteName::B,
        NoteName::C,
        NoteName::CSharp,
        NoteName::DFlat,
        NoteName::D,
        NoteName::DSharp,
        NoteName::EFlat,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::GFlat,
        NoteName::G,
        NoteName::GSharp,
        NoteName::AFlat,
    ];

    pub fn natural(self) -> Natural {
        match self {
            NoteName::A | NoteName::ASharp | NoteName::AFlat => Natural::A,
            NoteName::B | NoteName::BFlat => Natural::B,
            NoteName::C | NoteName::CSharp => Natural::C,
            NoteName::DFlat | NoteName::D | NoteName::DSharp => Natural::D,
            NoteName::EFlat | NoteName::E => Natural::E,
            NoteName::F | NoteName::FSharp => Natural::F,
            NoteName::GFlat | NoteName::G | NoteName::GSharp => Natural::G,
        }
    }

    pub fn modification(self) -> Modification {
        match self {
            NoteName::A
            | NoteName::B
            | NoteName::C
            | NoteName::D
            | NoteName::E
            | NoteName::F
            | NoteName::G => Modification::None,

            NoteName::ASharp
            | NoteName::CSharp
            | NoteName::DSharp
            | NoteName::FSharp
            | NoteName::GSharp => Modification::Sharp,

            NoteName::AFlat
            | NoteName::BFlat
            | NoteName::DFlat
            | NoteName::EFlat
            | NoteName::GFlat => Modification::Flat,
        }
    }

    pub fn is_natural(self) -> bool {
        self.modification() == Modification::None
    }

    /// Semitone class counted from C (C = 0, B = 11).
    pub fn pitch_class(self) -> u8 {
        let base = self.natural().pitch_class();
        match self.modification() {
            Modification::None => base,
            Modification::Sharp => (base + 1) % 12,
            Modification::Flat => (base + 11) % 12,
        }
    }
}

impl Natural {
    pub const ALL: [Natural; 7] = [
        Natural::A,
        Natural::B,
        Natural::C,
        Natural::D,
        Natural::E,
        Natural::F,
        Natural::G,
    ];

    /// The unmodified note name spelled with this letter.
    pub fn note_name(self) -> NoteName {
        match self {
            Natural::A => NoteName::A,
            Natural::B => NoteName::B,
            Natural::C => NoteName::C,
            Natural::D => NoteName::D,
            Natural::E => NoteName::E,
            Natural::F => NoteName::F,
            Natural::G => NoteName::G,
        }
    }

    /// Semitone class of the natural counted from C.
    pub fn pitch_class(self) -> u8 {
        match self {
            Natural::C => 0,
            Natural::D => 2,
            Natural::E => 4,
            Natural::F => 5,
            Natural::G => 7,
            Natural::A => 9,
            Natural::B => 11,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Natural::A => 'A',
            Natural::B => 'B',
            Natural::C => 'C',
            Natural::D => 'D',
            Natural::E => 'E',
            Natural::F => 'F',
            Natural::G => 'G',
        }
    }
}

impl Modification {
    /// Display suffix: nothing, `♯`, or `♭`.
    pub fn symbol(self) -> &'static str {
        match self {
            Modification::None => "",
            Modification::Sharp => "♯",
            Modification::Flat => "♭",
        }
    }

    /// Ordering key for sibling lists: natural < sharp < flat.
    pub(crate) fn display_rank(self) -> u8 {
        match self {
            Modification::None => 0,
            Modification::Sharp => 1,
            Modification::Flat => 2,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.natural().letter(), self.modification().symbol())
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parses `C`, `c#`, `C♯`, `Db`, `D♭`. Spellings the model lacks (`B#`,
/// `Fb`) are rejected.
impl FromStr for NoteName {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNoteError(s.to_string());
        let mut chars = s.trim().chars();
        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Natural::A,
            Some('B') => Natural::B,
            Some('C') => Natural::C,
            Some('D') => Natural::D,
            Some('E') => Natural::E,
            Some('F') => Natural::F,
            Some('G') => Natural::G,
            _ => return Err(err()),
        };
        let modification = match chars.as_str() {
            "" => Modification::None,
            "#" | "♯" | "s" | "sharp" => Modification::Sharp,
            "b" | "♭" | "flat" => Modification::Flat,
            _ => return Err(err()),
        };
        match modification {
            Modification::None => Ok(natural.note_name()),
            Modification::Sharp => natural.sharp().ok_or_else(err),
            Modification::Flat => natural.flat().ok_or_else(err),
        }
    }
}

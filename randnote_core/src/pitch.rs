// Absolute pitches and drawable samples.
//
// `Pitch` is a semitone index over octaves 2 through 6: index 0 is C2 and
// index 59 is B6. Comparing two pitches compares their height, which is what
// the range filter in `pool.rs` relies on. On disk a pitch is just its index;
// deserialization rejects anything outside the enumeration.
//
// A `Sample` pairs a spelling with a pitch. Only spellings of the pitch's
// semitone are admissible (`Sample::new` returns `None` otherwise, and
// deserialization applies the same check), so no code downstream ever sees
// a C♯ sitting on an E.

use crate::error::{InadmissibleSample, ParseNoteError, PitchOutOfRange};
use crate::note::NoteName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Octave number of `Pitch::LOWEST`.
pub const LOWEST_OCTAVE: u8 = 2;
/// Octave number of `Pitch::HIGHEST`.
pub const HIGHEST_OCTAVE: u8 = 6;

const PITCH_COUNT: u8 = (HIGHEST_OCTAVE - LOWEST_OCTAVE + 1) * 12;

/// MIDI note number of C2 (so C4 = 60).
const MIDI_OF_LOWEST: u8 = 36;

/// Spellings of each pitch class, indexed from C.
const SPELLINGS: [&[NoteName]; 12] = [
    &[NoteName::C],
    &[NoteName::CSharp, NoteName::DFlat],
    &[NoteName::D],
    &[NoteName::DSharp, NoteName::EFlat],
    &[NoteName::E],
    &[NoteName::F],
    &[NoteName::FSharp, NoteName::GFlat],
    &[NoteName::G],
    &[NoteName::GSharp, NoteName::AFlat],
    &[NoteName::A],
    &[NoteName::ASharp, NoteName::BFlat],
    &[NoteName::B],
];

/// An absolute, octave-qualified pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pitch(u8);

impl Pitch {
    pub const LOWEST: Pitch = Pitch(0);
    pub const HIGHEST: Pitch = Pitch(PITCH_COUNT - 1);

    pub fn new(index: u8) -> Option<Pitch> {
        (index < PITCH_COUNT).then_some(Pitch(index))
    }

    /// The pitch with semitone class `pitch_class` (C = 0) in `octave`.
    pub fn from_octave(pitch_class: u8, octave: u8) -> Option<Pitch> {
        if pitch_class >= 12 || !(LOWEST_OCTAVE..=HIGHEST_OCTAVE).contains(&octave) {
            return None;
        }
        Pitch::new((octave - LOWEST_OCTAVE) * 12 + pitch_class)
    }

    /// Every pitch, lowest first.
    pub fn all() -> impl Iterator<Item = Pitch> {
        (0..PITCH_COUNT).map(Pitch)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn octave(self) -> u8 {
        LOWEST_OCTAVE + self.0 / 12
    }

    /// Semitone class counted from C.
    pub fn pitch_class(self) -> u8 {
        self.0 % 12
    }

    pub fn midi(self) -> u8 {
        MIDI_OF_LOWEST + self.0
    }

    /// The one or two spellings of this pitch, sharp before flat.
    pub fn note_names(self) -> &'static [NoteName] {
        SPELLINGS[self.pitch_class() as usize]
    }
}

impl TryFrom<u8> for Pitch {
    type Error = PitchOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Pitch::new(index).ok_or(PitchOutOfRange(index))
    }
}

impl From<Pitch> for u8 {
    fn from(pitch: Pitch) -> u8 {
        pitch.0
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octave = self.octave();
        let names: Vec<String> = self
            .note_names()
            .iter()
            .map(|n| format!("{n}{octave}"))
            .collect();
        write!(f, "{}", names.join("/"))
    }
}

/// Parses a spelled pitch such as `C4`, `F#3` or `Bb5`.
impl FromStr for Pitch {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::from_str(s).map(|sample| sample.pitch())
    }
}

/// A drawable note: a spelling at an absolute pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSample")]
pub struct Sample {
    name: NoteName,
    pitch: Pitch,
}

/// Unvalidated wire shape of a `Sample`.
#[derive(Deserialize)]
struct RawSample {
    name: NoteName,
    pitch: Pitch,
}

impl Sample {
    /// `None` unless `name` spells `pitch`.
    pub fn new(name: NoteName, pitch: Pitch) -> Option<Sample> {
        pitch
            .note_names()
            .contains(&name)
            .then_some(Sample { name, pitch })
    }

    /// `name` in `octave`, e.g. `Sample::at(NoteName::CSharp, 4)`.
    pub fn at(name: NoteName, octave: u8) -> Option<Sample> {
        Pitch::from_octave(name.pitch_class(), octave).and_then(|pitch| Sample::new(name, pitch))
    }

    pub fn name(self) -> NoteName {
        self.name
    }

    pub fn pitch(self) -> Pitch {
        self.pitch
    }

    pub fn octave(self) -> u8 {
        self.pitch.octave()
    }

    /// Every admissible sample, lowest pitch first.
    pub fn universe() -> Vec<Sample> {
        Pitch::all()
            .flat_map(|pitch| {
                pitch
                    .note_names()
                    .iter()
                    .map(move |&name| Sample { name, pitch })
            })
            .collect()
    }
}

impl TryFrom<RawSample> for Sample {
    type Error = InadmissibleSample;

    fn try_from(raw: RawSample) -> Result<Self, Self::Error> {
        Sample::new(raw.name, raw.pitch).ok_or(InadmissibleSample {
            name: raw.name,
            pitch: raw.pitch,
        })
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave())
    }
}

/// Parses `C4`, `c#4`, `D♭5`: a note name followed by an octave number.
impl FromStr for Sample {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNoteError(s.to_string());
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(err)?;
        let (name, octave) = trimmed.split_at(split);
        let name: NoteName = name.parse().map_err(|_| err())?;
        let octave: u8 = octave.parse().map_err(|_| err())?;
        Sample::at(name, octave).ok_or_else(err)
    }
}

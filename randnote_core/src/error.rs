// Error types for the drill engine.
//
// Nothing here is fatal to the application. Parse and store errors are
// caught by the persistence adapter and turned into fallbacks; range errors
// reject a single settings edit and leave state untouched.

use crate::pitch::Pitch;
use thiserror::Error;

/// A persisted settings or history payload could not be trusted.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed JSON, a missing field, or a value outside its enumeration.
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A structurally valid settings record with `min_pitch > max_pitch`.
    #[error("pitch range is inverted: min {min} > max {max}")]
    InvertedRange { min: Pitch, max: Pitch },
}

/// A persistence backend failed to read or write a record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// A pitch-range edit that would leave `min_pitch > max_pitch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pitch range edit rejected: min {min} would exceed max {max}")]
pub struct RangeError {
    pub min: Pitch,
    pub max: Pitch,
}

/// A pitch index outside the supported octaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pitch index {0} is out of range")]
pub struct PitchOutOfRange(pub u8);

/// A name/pitch pair that no real note spells that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{name} is not a spelling of pitch {pitch}")]
pub struct InadmissibleSample {
    pub name: crate::note::NoteName,
    pub pitch: Pitch,
}

/// Text that does not spell a note or pitch, e.g. from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{0}' as a note")]
pub struct ParseNoteError(pub String);

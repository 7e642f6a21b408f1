// User-facing drill settings.
//
// Loaded once at startup (see `persist.rs`), edited through `AppState`, and
// written back after every accepted edit. `min_pitch <= max_pitch` holds for
// every `Settings` the crate hands out: the parser rejects inverted ranges
// and `AppState`'s range setters refuse edits that would invert one.

use crate::equivalence::EquivalenceRelation;
use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};

/// How a sample is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleDisplayStyle {
    Letters,
    Staff,
    StaffAndLetters,
}

impl SampleDisplayStyle {
    pub fn shows_letters(self) -> bool {
        matches!(self, SampleDisplayStyle::Letters | SampleDisplayStyle::StaffAndLetters)
    }

    pub fn shows_staff(self) -> bool {
        matches!(self, SampleDisplayStyle::Staff | SampleDisplayStyle::StaffAndLetters)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Draw only unmodified notes.
    pub naturals_only: bool,
    /// Ignore history when building the pool.
    pub allow_repeats: bool,
    /// Which history entries block a candidate, and how names are grouped
    /// for display.
    pub equivalence_relation: EquivalenceRelation,
    pub display_equivalent_note_names: bool,
    pub display_octave: bool,
    pub sample_display_style: SampleDisplayStyle,
    /// Inclusive lower bound of the drawable range.
    pub min_pitch: Pitch,
    /// Inclusive upper bound of the drawable range.
    pub max_pitch: Pitch,
}

impl Default for Settings {
    /// Naturals only, no repeats, by name, letters, C4 through B5.
    fn default() -> Self {
        Settings {
            naturals_only: true,
            allow_repeats: false,
            equivalence_relation: EquivalenceRelation::BY_NAME,
            display_equivalent_note_names: false,
            display_octave: false,
            sample_display_style: SampleDisplayStyle::Letters,
            min_pitch: Pitch::from_octave(0, 4).unwrap_or(Pitch::LOWEST),
            max_pitch: Pitch::from_octave(11, 5).unwrap_or(Pitch::HIGHEST),
        }
    }
}

impl Settings {
    /// Whether `pitch` lies in `[min_pitch, max_pitch]`.
    pub fn in_range(&self, pitch: Pitch) -> bool {
        (self.min_pitch..=self.max_pitch).contains(&pitch)
    }
}

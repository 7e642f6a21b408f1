// Application state and the persisting session shell.
//
// `AppState` is plain data: the settings plus the current round's history.
// Its mutators return whether anything changed, and the pitch-range setters
// refuse edits that would leave `min_pitch > max_pitch`, returning
// `RangeError` with the state untouched.
//
// `Session` owns an `AppState` and a `Store`. It loads both records once on
// open and, after each mutation that actually changed something, writes the
// record it touched. Rejected or no-op edits never reach the store. Front
// ends (the CLI in `main.rs`) talk to a `Session` and nothing else.

use crate::equivalence::{EquivalenceRelation, NameRelation};
use crate::error::RangeError;
use crate::persist::{load_history, load_settings, save_history, save_settings};
use crate::pitch::{Pitch, Sample};
use crate::pool::{compute_pool, draw_sample};
use crate::settings::{SampleDisplayStyle, Settings};
use crate::store::Store;
use randnote_prng::RandomSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub settings: Settings,
    pub history: Vec<Sample>,
}

/// Replace `*slot` with `value`, reporting whether it differed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

impl AppState {
    pub fn new(settings: Settings, history: Vec<Sample>) -> Self {
        Self { settings, history }
    }

    /// The most recent draw.
    pub fn current(&self) -> Option<Sample> {
        self.history.last().copied()
    }

    pub fn pool(&self) -> Vec<Sample> {
        compute_pool(&self.history, &self.settings)
    }

    /// True when no further sample can be drawn this round.
    pub fn is_round_over(&self) -> bool {
        self.pool().is_empty()
    }

    /// Draw the next sample and append it to history. `None` (and no change)
    /// when the pool is empty.
    pub fn draw<R: RandomSource>(&mut self, rng: &mut R) -> Option<Sample> {
        let next = draw_sample(&self.history, &self.settings, rng)?;
        self.history.push(next);
        Some(next)
    }

    /// Clear history. Returns false if it was already empty.
    pub fn reset(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.history.clear();
        true
    }

    pub fn set_naturals_only(&mut self, value: bool) -> bool {
        replace(&mut self.settings.naturals_only, value)
    }

    pub fn set_allow_repeats(&mut self, value: bool) -> bool {
        replace(&mut self.settings.allow_repeats, value)
    }

    pub fn set_display_equivalent_note_names(&mut self, value: bool) -> bool {
        replace(&mut self.settings.display_equivalent_note_names, value)
    }

    pub fn set_display_octave(&mut self, value: bool) -> bool {
        replace(&mut self.settings.display_octave, value)
    }

    pub fn set_equivalence_relation(&mut self, relation: EquivalenceRelation) -> bool {
        replace(&mut self.settings.equivalence_relation, relation)
    }

    pub fn set_octave_sensitive(&mut self, value: bool) -> bool {
        replace(&mut self.settings.equivalence_relation.is_octave_sensitive, value)
    }

    pub fn set_name_relation(&mut self, relation: NameRelation) -> bool {
        replace(&mut self.settings.equivalence_relation.name_relation, relation)
    }

    pub fn set_display_style(&mut self, style: SampleDisplayStyle) -> bool {
        replace(&mut self.settings.sample_display_style, style)
    }

    pub fn set_min_pitch(&mut self, pitch: Pitch) -> Result<bool, RangeError> {
        if pitch > self.settings.max_pitch {
            return Err(RangeError {
                min: pitch,
                max: self.settings.max_pitch,
            });
        }
        Ok(replace(&mut self.settings.min_pitch, pitch))
    }

    pub fn set_max_pitch(&mut self, pitch: Pitch) -> Result<bool, RangeError> {
        if pitch < self.settings.min_pitch {
            return Err(RangeError {
                min: self.settings.min_pitch,
                max: pitch,
            });
        }
        Ok(replace(&mut self.settings.max_pitch, pitch))
    }
}

/// A settings edit, as issued by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEdit {
    NaturalsOnly(bool),
    AllowRepeats(bool),
    DisplayEquivalentNoteNames(bool),
    DisplayOctave(bool),
    EquivalenceRelation(EquivalenceRelation),
    OctaveSensitive(bool),
    NameRelation(NameRelation),
    DisplayStyle(SampleDisplayStyle),
    MinPitch(Pitch),
    MaxPitch(Pitch),
}

impl AppState {
    /// Apply one edit. Range edits may be rejected.
    pub fn apply(&mut self, edit: SettingsEdit) -> Result<bool, RangeError> {
        Ok(match edit {
            SettingsEdit::NaturalsOnly(v) => self.set_naturals_only(v),
            SettingsEdit::AllowRepeats(v) => self.set_allow_repeats(v),
            SettingsEdit::DisplayEquivalentNoteNames(v) => self.set_display_equivalent_note_names(v),
            SettingsEdit::DisplayOctave(v) => self.set_display_octave(v),
            SettingsEdit::EquivalenceRelation(r) => self.set_equivalence_relation(r),
            SettingsEdit::OctaveSensitive(v) => self.set_octave_sensitive(v),
            SettingsEdit::NameRelation(r) => self.set_name_relation(r),
            SettingsEdit::DisplayStyle(s) => self.set_display_style(s),
            SettingsEdit::MinPitch(p) => self.set_min_pitch(p)?,
            SettingsEdit::MaxPitch(p) => self.set_max_pitch(p)?,
        })
    }
}

pub struct Session<S: Store> {
    state: AppState,
    store: S,
}

impl<S: Store> Session<S> {
    /// Load settings and history from `store`, falling back to defaults.
    pub fn open(store: S) -> Self {
        let settings = load_settings(&store);
        let history = load_history(&store);
        log::debug!("session opened with {} history entries", history.len());
        Self {
            state: AppState::new(settings, history),
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (AppState, S) {
        (self.state, self.store)
    }

    pub fn draw<R: RandomSource>(&mut self, rng: &mut R) -> Option<Sample> {
        let drawn = self.state.draw(rng);
        if drawn.is_some() {
            save_history(&mut self.store, &self.state.history);
        }
        drawn
    }

    pub fn reset(&mut self) -> bool {
        let changed = self.state.reset();
        if changed {
            save_history(&mut self.store, &self.state.history);
        }
        changed
    }

    /// Apply a settings edit; persist it if it changed anything.
    pub fn edit(&mut self, edit: SettingsEdit) -> Result<bool, RangeError> {
        let changed = self.state.apply(edit).inspect_err(|e| log::info!("{e}"))?;
        if changed {
            save_settings(&mut self.store, &self.state.settings);
        }
        Ok(changed)
    }
}

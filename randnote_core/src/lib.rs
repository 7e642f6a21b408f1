// RandNote: a note-identification drill.
//
// Draws random notes (a spelling plus an absolute pitch) from a configurable
// pool, keeps the round's history so notes are not repeated, and renders the
// result as letters or as ABC staff notation.
//
// Architecture, leaf first:
// - note.rs: NoteName (17 spellings), Natural (A–G), Modification
// - enharmonic.rs: alternative spellings, sharp/flat neighbors of a letter
// - pitch.rs: Pitch (C2..B6 semitone index) and admissible Sample pairs
// - equivalence.rs: NameRelation × octave sensitivity, sibling grouping
// - pool.rs: eligible-sample filtering and uniform draws
// - display.rs: text rendering of names and samples
// - staff.rs: ABC notation for a sequence of samples
// - settings.rs: drill settings and their defaults
// - store.rs: the Store trait, in-memory and file-backed stores
// - persist.rs: strict parsing, serialization, load-with-fallback
// - state.rs: AppState and the persisting Session shell
// - error.rs: error types
//
// Randomness is injected through `randnote_prng::RandomSource`.

pub mod display;
pub mod enharmonic;
pub mod equivalence;
pub mod error;
pub mod note;
pub mod persist;
pub mod pitch;
pub mod pool;
pub mod settings;
pub mod staff;
pub mod state;
pub mod store;

pub use equivalence::{EquivalenceRelation, NameRelation, names_equal};
pub use note::{Modification, Natural, NoteName};
pub use pitch::{Pitch, Sample};
pub use pool::{compute_pool, draw_sample};
pub use settings::{SampleDisplayStyle, Settings};
pub use state::{AppState, Session, SettingsEdit};

// Serialization of settings and history, and the load-with-fallback policy.
//
// `parse_settings` / `parse_history` are strict: every field must be present
// and well-typed, enums must name a known variant, pitches must be in range,
// samples must be admissible, and a settings range must not be inverted.
// They return `Err` rather than guessing.
//
// `load_settings` / `load_history` are the other half: they never fail. A
// missing record, a store error, or a parse error all produce the fallback
// (default settings, empty history), with a warning logged for anything
// other than a plain absence.

use crate::error::ParseError;
use crate::pitch::Sample;
use crate::settings::Settings;
use crate::store::{Store, StoreKey};

pub fn parse_settings(text: &str) -> Result<Settings, ParseError> {
    let settings: Settings = serde_json::from_str(text)?;
    if settings.min_pitch > settings.max_pitch {
        return Err(ParseError::InvertedRange {
            min: settings.min_pitch,
            max: settings.max_pitch,
        });
    }
    Ok(settings)
}

pub fn parse_history(text: &str) -> Result<Vec<Sample>, ParseError> {
    Ok(serde_json::from_str(text)?)
}

pub fn serialize_settings(settings: &Settings) -> String {
    // Plain data with string keys; serialization cannot fail.
    serde_json::to_string(settings).unwrap_or_default()
}

pub fn serialize_history(history: &[Sample]) -> String {
    serde_json::to_string(history).unwrap_or_default()
}

pub fn load_settings(store: &impl Store) -> Settings {
    load_or(store, StoreKey::Settings, parse_settings).unwrap_or_default()
}

pub fn load_history(store: &impl Store) -> Vec<Sample> {
    load_or(store, StoreKey::NoteHistory, parse_history).unwrap_or_default()
}

fn load_or<T>(
    store: &impl Store,
    key: StoreKey,
    parse: impl Fn(&str) -> Result<T, ParseError>,
) -> Option<T> {
    let text = match store.load(key) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("could not read {}: {e}; using defaults", key.as_str());
            return None;
        }
    };
    match parse(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding stored {}: {e}", key.as_str());
            None
        }
    }
}

/// Write `settings`, logging rather than propagating a failure.
pub fn save_settings(store: &mut impl Store, settings: &Settings) {
    save(store, StoreKey::Settings, &serialize_settings(settings));
}

/// Write `history`, logging rather than propagating a failure.
pub fn save_history(store: &mut impl Store, history: &[Sample]) {
    save(store, StoreKey::NoteHistory, &serialize_history(history));
}

fn save(store: &mut impl Store, key: StoreKey, text: &str) {
    if let Err(e) = store.save(key, text) {
        log::warn!("could not write {}: {e}", key.as_str());
    }
}

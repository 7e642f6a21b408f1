// Text rendering of note names and samples.
//
// With equivalents hidden, a name renders as its own spelling ("C♯"). With
// equivalents shown, the spelling comes first, followed by every sibling the
// active name relation groups with it, joined by "/": "C♯/D♭" under
// `Enharmonic`, "D/D♯/D♭" under `Letter`. Sibling order comes from
// `equivalence::equivalent_names`.
//
// `render_sample` and `render_history` pick letters, staff notation
// (`staff.rs`), or both according to the settings' display style.

use crate::equivalence::{NameRelation, equivalent_names};
use crate::note::NoteName;
use crate::pitch::Sample;
use crate::settings::Settings;
use crate::staff::staff_notation;

/// The spelling of `name`, e.g. "B♭".
pub fn note_name_string(name: NoteName) -> String {
    name.to_string()
}

pub fn name_strings(name: NoteName, relation: NameRelation, show_equivalents: bool) -> String {
    group(name, relation, show_equivalents)
        .iter()
        .map(|n| note_name_string(*n))
        .collect::<Vec<_>>()
        .join("/")
}

/// Like `name_strings`, with the octave appended to each spelling when
/// `show_octave` is set ("C♯4/D♭4").
pub fn sample_strings(
    sample: Sample,
    relation: NameRelation,
    show_equivalents: bool,
    show_octave: bool,
) -> String {
    group(sample.name(), relation, show_equivalents)
        .iter()
        .map(|n| {
            if show_octave {
                format!("{}{}", n, sample.octave())
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn group(name: NoteName, relation: NameRelation, show_equivalents: bool) -> Vec<NoteName> {
    if show_equivalents {
        equivalent_names(name, relation)
    } else {
        vec![name]
    }
}

/// Letter rendering of one sample under the current settings.
pub fn sample_letters(sample: Sample, settings: &Settings) -> String {
    sample_strings(
        sample,
        settings.equivalence_relation.name_relation,
        settings.display_equivalent_note_names,
        settings.display_octave,
    )
}

/// One sample in the configured style. Staff output is a complete ABC tune.
pub fn render_sample(sample: Sample, settings: &Settings) -> String {
    render(&[sample], settings)
}

/// The whole history in the configured style: letters space-separated, staff
/// as one ABC tune with a bar per sample.
pub fn render_history(history: &[Sample], settings: &Settings) -> String {
    render(history, settings)
}

fn render(samples: &[Sample], settings: &Settings) -> String {
    let style = settings.sample_display_style;
    let mut parts = Vec::new();
    if style.shows_staff() {
        parts.push(staff_notation(samples));
    }
    if style.shows_letters() {
        let letters: Vec<String> = samples.iter().map(|&s| sample_letters(s, settings)).collect();
        parts.push(letters.join(" "));
    }
    parts.join("\n")
}

// ABC staff notation for drawn samples.
//
// Renders a sequence of samples as a small ABC tune that any ABC engraver
// (abcjs, abcm2ps) can typeset. The header is fixed apart from the clef; the
// body is one quarter note per sample, each in its own bar so an accidental
// never carries over to the next note.
//
// Pitch spelling follows ABC's absolute convention: `C` is middle C (C4),
// lowercase letters are the octave above, and each `'` or `,` shifts one more
// octave up or down. Accidentals prefix the letter: `^` sharp, `_` flat.

use crate::note::{Modification, NoteName};
use crate::pitch::Sample;

/// Octave that ABC writes with plain uppercase letters.
const ABC_BASE_OCTAVE: u8 = 4;

/// A single ABC pitch token for `sample`, e.g. `^c` for C♯5 or `_B,` for B♭3.
pub fn abc_note(sample: Sample) -> String {
    let mut token = String::new();
    token.push_str(accidental(sample.name()));

    let letter = sample.name().natural().letter();
    let octave = sample.octave();
    if octave > ABC_BASE_OCTAVE {
        token.push(letter.to_ascii_lowercase());
        for _ in ABC_BASE_OCTAVE + 1..octave {
            token.push('\'');
        }
    } else {
        token.push(letter);
        for _ in octave..ABC_BASE_OCTAVE {
            token.push(',');
        }
    }
    token
}

fn accidental(name: NoteName) -> &'static str {
    match name.modification() {
        Modification::None => "",
        Modification::Sharp => "^",
        Modification::Flat => "_",
    }
}

/// Bass clef when every sample sits below middle C, treble otherwise.
fn clef(samples: &[Sample]) -> &'static str {
    if !samples.is_empty() && samples.iter().all(|s| s.octave() < ABC_BASE_OCTAVE) {
        "bass"
    } else {
        "treble"
    }
}

/// A complete ABC tune for `samples`. An empty slice yields only the header.
pub fn staff_notation(samples: &[Sample]) -> String {
    let mut out = format!("X:1\nM:none\nL:1/4\nK:C clef={}", clef(samples));
    if !samples.is_empty() {
        let tokens: Vec<String> = samples.iter().map(|&s| abc_note(s)).collect();
        out.push('\n');
        out.push_str(&tokens.join(" | "));
        out.push_str(" |]");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Sample {
        text.parse().unwrap()
    }

    #[test]
    fn middle_octave_is_uppercase() {
        assert_eq!(abc_note(s("C4")), "C");
        assert_eq!(abc_note(s("B4")), "B");
    }

    #[test]
    fn octave_marks() {
        assert_eq!(abc_note(s("C5")), "c");
        assert_eq!(abc_note(s("C6")), "c'");
        assert_eq!(abc_note(s("C3")), "C,");
        assert_eq!(abc_note(s("C2")), "C,,");
    }

    #[test]
    fn accidentals_prefix_the_letter() {
        assert_eq!(abc_note(s("C#5")), "^c");
        assert_eq!(abc_note(s("Bb3")), "_B,");
        assert_eq!(abc_note(s("Gb6")), "_g'");
    }

    #[test]
    fn enharmonic_spellings_differ_on_the_staff() {
        assert_ne!(abc_note(s("C#4")), abc_note(s("Db4")));
        assert_eq!(abc_note(s("Db4")), "_D");
    }

    #[test]
    fn empty_history_is_just_the_header() {
        assert_eq!(staff_notation(&[]), "X:1\nM:none\nL:1/4\nK:C clef=treble");
    }

    #[test]
    fn tune_has_one_bar_per_sample() {
        let tune = staff_notation(&[s("C4"), s("F#4"), s("a5")]);
        assert_eq!(tune.lines().last(), Some("C | ^F | a |]"));
    }

    #[test]
    fn low_register_uses_bass_clef() {
        let tune = staff_notation(&[s("G2"), s("D3")]);
        assert!(tune.contains("clef=bass"));
        let mixed = staff_notation(&[s("G2"), s("D4")]);
        assert!(mixed.contains("clef=treble"));
    }

    #[test]
    fn notation_varies_with_history() {
        assert_ne!(staff_notation(&[s("C4")]), staff_notation(&[s("D4")]));
    }
}

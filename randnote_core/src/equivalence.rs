// Equivalence relations over note names and samples.
//
// One closed type covers every relation the drill offers: a name relation
// (identical spelling, same pitch class, same letter) crossed with an octave
// sensitivity flag. The common named relations are constants on
// `EquivalenceRelation`:
//
//   BY_NAME              identical spelling, any octave
//   BY_PITCH_CLASS       enharmonic spelling, any octave
//   BY_LETTER            same letter, any octave
//   BY_ABSOLUTE_PITCH    enharmonic spelling, same octave (= same pitch)
//   BY_NAME_AND_PITCH    identical spelling, same octave (= same name + pitch)
//   BY_LETTER_AND_OCTAVE same letter, same octave
//
// The two "pitch" rows collapse onto the composition only because samples
// are admissible (see `pitch.rs`): a spelling fixes the semitone, and no
// spelling crosses an octave boundary.
//
// The relations drive two things: which samples the pool excludes after a
// draw (`pool.rs`), and which sibling spellings the formatter groups
// together (`display.rs`, via `equivalent_names`).

use crate::note::NoteName;
use crate::pitch::Sample;
use serde::{Deserialize, Serialize};

/// How two spellings are compared, ignoring octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameRelation {
    /// Only the same spelling.
    Identical,
    /// The same spelling or its enharmonic alternative.
    Enharmonic,
    /// The same natural letter.
    Letter,
}

impl NameRelation {
    pub const ALL: [NameRelation; 3] = [
        NameRelation::Identical,
        NameRelation::Enharmonic,
        NameRelation::Letter,
    ];
}

/// A name relation plus whether octaves must match as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquivalenceRelation {
    pub is_octave_sensitive: bool,
    pub name_relation: NameRelation,
}

impl EquivalenceRelation {
    pub const BY_NAME: Self = Self::new(NameRelation::Identical, false);
    pub const BY_PITCH_CLASS: Self = Self::new(NameRelation::Enharmonic, false);
    pub const BY_LETTER: Self = Self::new(NameRelation::Letter, false);
    pub const BY_ABSOLUTE_PITCH: Self = Self::new(NameRelation::Enharmonic, true);
    pub const BY_NAME_AND_PITCH: Self = Self::new(NameRelation::Identical, true);
    pub const BY_LETTER_AND_OCTAVE: Self = Self::new(NameRelation::Letter, true);

    pub const fn new(name_relation: NameRelation, is_octave_sensitive: bool) -> Self {
        Self {
            is_octave_sensitive,
            name_relation,
        }
    }

    /// Every combination, octave-insensitive first.
    pub fn all() -> impl Iterator<Item = EquivalenceRelation> {
        [false, true].into_iter().flat_map(|octave| {
            NameRelation::ALL
                .into_iter()
                .map(move |rel| EquivalenceRelation::new(rel, octave))
        })
    }

    pub fn are_equal(self, a: Sample, b: Sample) -> bool {
        names_equal(self.name_relation, a.name(), b.name())
            && (!self.is_octave_sensitive || a.octave() == b.octave())
    }
}

pub fn names_equal(relation: NameRelation, a: NoteName, b: NoteName) -> bool {
    match relation {
        NameRelation::Identical => a == b,
        NameRelation::Enharmonic => a == b || a == b.alternative_name(),
        NameRelation::Letter => a.natural() == b.natural(),
    }
}

/// `name` followed by every other spelling equivalent to it under `relation`,
/// siblings ordered natural, then sharp, then flat.
pub fn equivalent_names(name: NoteName, relation: NameRelation) -> Vec<NoteName> {
    let mut siblings: Vec<NoteName> = match relation {
        NameRelation::Identical => Vec::new(),
        NameRelation::Enharmonic => vec![name.alternative_name()],
        NameRelation::Letter => {
            let nat = name.natural();
            [Some(nat.note_name()), nat.sharp(), nat.flat()]
                .into_iter()
                .flatten()
                .collect()
        }
    };
    siblings.retain(|&s| s != name);
    siblings.sort_by_key(|s| s.modification().display_rank());
    siblings.dedup();

    let mut names = Vec::with_capacity(siblings.len() + 1);
    names.push(name);
    names.extend(siblings);
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Natural;

    fn every_pair() -> impl Iterator<Item = (Sample, Sample)> {
        let universe = Sample::universe();
        let copy = universe.clone();
        universe
            .into_iter()
            .flat_map(move |a| copy.clone().into_iter().map(move |b| (a, b)))
    }

    #[test]
    fn by_name_matches_closed_form() {
        for (a, b) in every_pair() {
            assert_eq!(
                EquivalenceRelation::BY_NAME.are_equal(a, b),
                a.name() == b.name()
            );
        }
    }

    #[test]
    fn by_pitch_class_matches_closed_form() {
        for (a, b) in every_pair() {
            assert_eq!(
                EquivalenceRelation::BY_PITCH_CLASS.are_equal(a, b),
                a.name() == b.name() || a.name() == b.name().alternative_name()
            );
        }
    }

    #[test]
    fn by_letter_matches_closed_form() {
        for (a, b) in every_pair() {
            assert_eq!(
                EquivalenceRelation::BY_LETTER.are_equal(a, b),
                a.name().natural() == b.name().natural()
            );
        }
    }

    #[test]
    fn by_absolute_pitch_matches_closed_form() {
        for (a, b) in every_pair() {
            assert_eq!(
                EquivalenceRelation::BY_ABSOLUTE_PITCH.are_equal(a, b),
                a.pitch() == b.pitch(),
                "{a} vs {b}"
            );
        }
    }

    #[test]
    fn by_name_and_pitch_matches_closed_form() {
        for (a, b) in every_pair() {
            assert_eq!(
                EquivalenceRelation::BY_NAME_AND_PITCH.are_equal(a, b),
                a.name() == b.name() && a.pitch() == b.pitch()
            );
        }
    }

    #[test]
    fn by_letter_and_octave_matches_closed_form() {
        for (a, b) in every_pair() {
            assert_eq!(
                EquivalenceRelation::BY_LETTER_AND_OCTAVE.are_equal(a, b),
                a.name().natural() == b.name().natural() && a.octave() == b.octave()
            );
        }
    }

    #[test]
    fn every_relation_is_an_equivalence() {
        let universe = Sample::universe();
        for rel in EquivalenceRelation::all() {
            for &a in &universe {
                assert!(rel.are_equal(a, a), "{rel:?} not reflexive at {a}");
                for &b in &universe {
                    let ab = rel.are_equal(a, b);
                    assert_eq!(ab, rel.are_equal(b, a), "{rel:?} not symmetric");
                    if !ab {
                        continue;
                    }
                    for &c in &universe {
                        if rel.are_equal(b, c) {
                            assert!(rel.are_equal(a, c), "{rel:?} not transitive: {a} {b} {c}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn six_distinct_relations() {
        let all: Vec<_> = EquivalenceRelation::all().collect();
        assert_eq!(all.len(), 6);
        for rel in [
            EquivalenceRelation::BY_NAME,
            EquivalenceRelation::BY_PITCH_CLASS,
            EquivalenceRelation::BY_LETTER,
            EquivalenceRelation::BY_ABSOLUTE_PITCH,
            EquivalenceRelation::BY_NAME_AND_PITCH,
            EquivalenceRelation::BY_LETTER_AND_OCTAVE,
        ] {
            assert!(all.contains(&rel));
        }
    }

    #[test]
    fn identical_has_no_siblings() {
        for name in NoteName::ALL {
            assert_eq!(equivalent_names(name, NameRelation::Identical), vec![name]);
        }
    }

    #[test]
    fn enharmonic_siblings() {
        assert_eq!(
            equivalent_names(NoteName::DFlat, NameRelation::Enharmonic),
            vec![NoteName::DFlat, NoteName::CSharp]
        );
        assert_eq!(
            equivalent_names(NoteName::E, NameRelation::Enharmonic),
            vec![NoteName::E]
        );
    }

    #[test]
    fn letter_siblings_are_natural_sharp_flat() {
        assert_eq!(
            equivalent_names(NoteName::AFlat, NameRelation::Letter),
            vec![NoteName::AFlat, NoteName::A, NoteName::ASharp]
        );
        assert_eq!(
            equivalent_names(NoteName::D, NameRelation::Letter),
            vec![NoteName::D, NoteName::DSharp, NoteName::DFlat]
        );
        // No C flat in the model.
        assert_eq!(
            equivalent_names(NoteName::CSharp, NameRelation::Letter),
            vec![NoteName::CSharp, NoteName::C]
        );
    }

    #[test]
    fn siblings_are_exactly_the_equivalent_names() {
        for relation in NameRelation::ALL {
            for name in NoteName::ALL {
                let group = equivalent_names(name, relation);
                for other in NoteName::ALL {
                    assert_eq!(
                        group.contains(&other),
                        names_equal(relation, name, other),
                        "{relation:?}: {name:?} / {other:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn letter_group_sizes() {
        for nat in Natural::ALL {
            let expected = 1 + usize::from(nat.sharp().is_some()) + usize::from(nat.flat().is_some());
            assert_eq!(equivalent_names(nat.note_name(), NameRelation::Letter).len(), expected);
        }
    }
}

// Pool computation and random draws.
//
// The pool is the set of samples eligible for the next draw. It is built by
// filtering the static universe (`Sample::universe()`) in four steps:
//
// 1. Keep samples whose pitch lies in `[min_pitch, max_pitch]`.
// 2. If `naturals_only`, keep unmodified spellings.
// 3. If `allow_repeats`, stop here; history is irrelevant.
// 4. Otherwise drop every candidate equivalent, under the configured
//    relation, to any sample already in history.
//
// Each step only removes samples, so tightening a setting can only shrink
// the pool. An empty pool is not an error: it marks the end of a round and
// `draw_sample` reports it as `None`.
//
// Randomness comes from the caller (`RandomSource`), never from a global.

use crate::pitch::Sample;
use crate::settings::Settings;
use randnote_prng::RandomSource;

/// Samples eligible for the next draw. Order follows the universe (lowest
/// pitch first) but carries no meaning.
pub fn compute_pool(history: &[Sample], settings: &Settings) -> Vec<Sample> {
    let mut pool: Vec<Sample> = Sample::universe()
        .into_iter()
        .filter(|s| settings.in_range(s.pitch()))
        .collect();

    if settings.naturals_only {
        pool.retain(|s| s.name().is_natural());
    }

    if !settings.allow_repeats {
        let relation = settings.equivalence_relation;
        pool.retain(|&candidate| !history.iter().any(|&prev| relation.are_equal(candidate, prev)));
    }

    log::debug!(
        "pool: {} candidates after {} history entries",
        pool.len(),
        history.len()
    );
    pool
}

/// Draw one sample uniformly from the pool, or `None` if it is empty.
pub fn draw_sample<R: RandomSource>(
    history: &[Sample],
    settings: &Settings,
    rng: &mut R,
) -> Option<Sample> {
    let pool = compute_pool(history, settings);
    let drawn = rng.choose(&pool).copied();
    match drawn {
        Some(sample) => log::debug!("drew {sample} from a pool of {}", pool.len()),
        None => log::debug!("pool exhausted, nothing to draw"),
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::{EquivalenceRelation, NameRelation};
    use crate::note::NoteName;
    use crate::pitch::Pitch;
    use randnote_prng::{DrillRng, SequenceRng};

    fn s(text: &str) -> Sample {
        text.parse().unwrap()
    }

    /// Single octave (C4..B4), so every name appears once.
    fn one_octave(relation: EquivalenceRelation, naturals_only: bool) -> Settings {
        Settings {
            naturals_only,
            allow_repeats: false,
            equivalence_relation: relation,
            min_pitch: Pitch::from_octave(0, 4).unwrap(),
            max_pitch: Pitch::from_octave(11, 4).unwrap(),
            ..Settings::default()
        }
    }

    fn full_range() -> Settings {
        Settings {
            naturals_only: false,
            allow_repeats: true,
            min_pitch: Pitch::LOWEST,
            max_pitch: Pitch::HIGHEST,
            ..Settings::default()
        }
    }

    #[test]
    fn full_range_with_repeats_is_the_universe() {
        assert_eq!(compute_pool(&[], &full_range()), Sample::universe());
    }

    #[test]
    fn naturals_round_ends_on_g() {
        let settings = one_octave(EquivalenceRelation::BY_NAME, true);
        let history: Vec<Sample> = ["A4", "B4", "C4", "D4", "E4", "F4"].map(s).to_vec();
        let pool = compute_pool(&history, &settings);
        assert_eq!(pool, vec![s("G4")]);

        let mut rng = DrillRng::new(3);
        let last = draw_sample(&history, &settings, &mut rng).unwrap();
        assert_eq!(last, s("G4"));

        let mut history = history;
        history.push(last);
        assert!(compute_pool(&history, &settings).is_empty());
        assert_eq!(draw_sample(&history, &settings, &mut rng), None);
    }

    #[test]
    fn enharmonic_collision_is_excluded() {
        let settings = one_octave(EquivalenceRelation::BY_PITCH_CLASS, false);
        let pool = compute_pool(&[s("C#4")], &settings);
        assert!(!pool.contains(&s("Db4")));
        assert!(!pool.contains(&s("C#4")));
        assert!(pool.contains(&s("D4")));
        assert_eq!(pool.len(), 15);
    }

    #[test]
    fn by_name_keeps_the_enharmonic_partner() {
        let settings = one_octave(EquivalenceRelation::BY_NAME, false);
        let pool = compute_pool(&[s("C#4")], &settings);
        assert!(pool.contains(&s("Db4")));
        assert!(!pool.contains(&s("C#4")));
    }

    #[test]
    fn octave_insensitive_relation_blocks_all_octaves() {
        let settings = Settings {
            naturals_only: false,
            allow_repeats: false,
            equivalence_relation: EquivalenceRelation::BY_NAME,
            ..full_range()
        };
        let pool = compute_pool(&[s("A3")], &settings);
        assert!(pool.iter().all(|x| x.name() != NoteName::A));
    }

    #[test]
    fn octave_sensitive_relation_blocks_one_octave() {
        let settings = Settings {
            naturals_only: false,
            allow_repeats: false,
            equivalence_relation: EquivalenceRelation::BY_NAME_AND_PITCH,
            ..full_range()
        };
        let pool = compute_pool(&[s("A3")], &settings);
        assert!(!pool.contains(&s("A3")));
        assert!(pool.contains(&s("A4")));
        assert_eq!(pool.len(), Sample::universe().len() - 1);
    }

    #[test]
    fn letter_relation_blocks_sharps_and_flats_of_the_letter() {
        let settings = one_octave(EquivalenceRelation::new(NameRelation::Letter, false), false);
        let pool = compute_pool(&[s("D4")], &settings);
        for blocked in ["Db4", "D4", "D#4"] {
            assert!(!pool.contains(&s(blocked)), "{blocked} should be blocked");
        }
        // C# is a different letter even though it shares a key with Db.
        assert!(pool.contains(&s("C#4")));
    }

    #[test]
    fn allow_repeats_ignores_history() {
        let settings = Settings {
            allow_repeats: true,
            ..one_octave(EquivalenceRelation::BY_NAME, true)
        };
        let history: Vec<Sample> = ["A4", "B4", "C4"].map(s).to_vec();
        assert_eq!(compute_pool(&history, &settings).len(), 7);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let settings = Settings {
            min_pitch: Pitch::from_octave(0, 4).unwrap(),
            max_pitch: Pitch::from_octave(0, 4).unwrap(),
            ..full_range()
        };
        assert_eq!(compute_pool(&[], &settings), vec![s("C4")]);
    }

    #[test]
    fn constraints_are_monotonic() {
        let history: Vec<Sample> = ["C#4", "E4", "Bb3", "G5"].map(s).to_vec();
        for relation in EquivalenceRelation::all() {
            let loose = Settings {
                equivalence_relation: relation,
                ..full_range()
            };
            let base = compute_pool(&history, &loose);

            let naturals = compute_pool(&history, &Settings { naturals_only: true, ..loose });
            assert!(naturals.iter().all(|x| base.contains(x)));
            assert!(base.iter().filter(|x| !naturals.contains(x)).all(|x| !x.name().is_natural()));

            let no_repeats = compute_pool(&history, &Settings { allow_repeats: false, ..loose });
            for removed in base.iter().filter(|x| !no_repeats.contains(x)) {
                assert!(history.iter().any(|&h| relation.are_equal(*removed, h)));
            }
            assert!(no_repeats.iter().all(|x| base.contains(x)));

            let narrow = Settings {
                min_pitch: Pitch::from_octave(0, 3).unwrap(),
                max_pitch: Pitch::from_octave(11, 4).unwrap(),
                ..loose
            };
            let narrowed = compute_pool(&history, &narrow);
            for removed in base.iter().filter(|x| !narrowed.contains(x)) {
                assert!(!narrow.in_range(removed.pitch()));
            }
        }
    }

    #[test]
    fn draw_uses_the_random_source_index() {
        let settings = one_octave(EquivalenceRelation::BY_NAME, true);
        let pool = compute_pool(&[], &settings);
        for (i, expected) in pool.iter().enumerate() {
            let mut rng = SequenceRng::constant(i as u64);
            assert_eq!(draw_sample(&[], &settings, &mut rng), Some(*expected));
        }
    }

    #[test]
    fn draw_never_leaves_the_pool() {
        let settings = Settings {
            naturals_only: false,
            equivalence_relation: EquivalenceRelation::BY_PITCH_CLASS,
            ..Settings::default()
        };
        let history = vec![s("C#4"), s("F5")];
        let pool = compute_pool(&history, &settings);
        let mut rng = DrillRng::new(99);
        for _ in 0..500 {
            let drawn = draw_sample(&history, &settings, &mut rng).unwrap();
            assert!(pool.contains(&drawn));
        }
    }

    #[test]
    fn draw_is_roughly_uniform() {
        let settings = one_octave(EquivalenceRelation::BY_NAME, true);
        let pool = compute_pool(&[], &settings);
        let mut rng = DrillRng::new(2024);
        let mut counts = vec![0u32; pool.len()];
        let n = 70_000;
        for _ in 0..n {
            let drawn = draw_sample(&[], &settings, &mut rng).unwrap();
            let i = pool.iter().position(|&p| p == drawn).unwrap();
            counts[i] += 1;
        }
        for (i, &c) in counts.iter().enumerate() {
            assert!(
                (9_500..10_500).contains(&c),
                "{} drawn {c} times, expected ~10000",
                pool[i]
            );
        }
    }

    #[test]
    fn round_exhausts_after_pool_size_draws() {
        let settings = one_octave(EquivalenceRelation::BY_PITCH_CLASS, false);
        let mut rng = DrillRng::new(5);
        let mut history = Vec::new();
        while let Some(next) = draw_sample(&history, &settings, &mut rng) {
            history.push(next);
        }
        // 12 pitch classes in one octave.
        assert_eq!(history.len(), 12);
    }
}

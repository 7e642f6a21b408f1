// Random sources for the RandNote drill.
//
// The sampler never touches a global generator. Every draw takes a
// `&mut impl RandomSource`, so the application decides where randomness comes
// from and tests can script the exact stream they want.
//
// Two implementations live here:
// - `DrillRng`: xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding.
//   Hand-rolled so the crate has no RNG dependency and the same seed yields
//   the same drill on every platform. Its state serializes with serde.
// - `SequenceRng`: replays a fixed list of raw values in a loop. Used by tests
//   to pin down which pool element gets picked.
//
// `range_u64` rejects from the top of the `u64` space rather than the bottom,
// so a scripted value `v` smaller than the range always maps to index `v`.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniformly distributed 64-bit values.
///
/// Only `next_u64` is required; the bounded helpers are derived from it and
/// are free of modulo bias.
pub trait RandomSource {
    /// Generate the next raw value.
    fn next_u64(&mut self) -> u64;

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        // 2^64 mod range: the size of the biased tail at the top of u64.
        let tail = (u64::MAX % range + 1) % range;
        let limit = 0u64.wrapping_sub(tail);
        loop {
            let r = self.next_u64();
            if r < limit {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Pick one element of `items` uniformly, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.range_usize(0, items.len())])
        }
    }
}

/// Xoshiro256++ PRNG, the drill's default source of randomness.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrillRng {
    s: [u64; 4],
}

impl DrillRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Seed from the wall clock and process id. For interactive use, where a
    /// different drill each run is the point.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos ^ (u64::from(std::process::id()) << 32))
    }
}

impl RandomSource for DrillRng {
    fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

/// Replays a scripted list of raw values, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<u64>,
    pos: usize,
}

impl SequenceRng {
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, pos: 0 }
    }

    /// A source that always yields `value`.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRng {
    fn next_u64(&mut self) -> u64 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}

/// SplitMix64, used only for seeding xoshiro256++ from a single `u64`.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

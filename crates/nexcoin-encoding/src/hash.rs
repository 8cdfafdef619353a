//! Seed hashing and byte-stream expansion

/// djb2 starting value
const DJB2_INIT: i64 = 5381;

/// Added to the final hash so short seeds never start the LCG near zero
const HASH_OFFSET: i64 = 999_999;

// Numerical Recipes LCG constants
const LCG_MULTIPLIER: f64 = 1_664_525.0;
const LCG_INCREMENT: f64 = 1_013_904_223.0;
const LCG_MASK: u32 = 0x7fff_ffff;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// djb2 hash (`hash * 33 + c`) over the UTF-16 code units of `seed`.
///
/// Only the shift is truncated to 32 bits; the accumulator keeps growing as an
/// exact integer. Generated addresses depend on this, so it must not be
/// "fixed" into a plain wrapping u32 hash.
pub fn seed_hash(seed: &str) -> i64 {
    let mut hash = DJB2_INIT;

    for unit in seed.encode_utf16() {
        let shifted = (hash as i32) << 5;
        hash = hash
            .wrapping_add(i64::from(shifted))
            .wrapping_add(i64::from(unit));
    }

    hash.wrapping_abs().wrapping_add(HASH_OFFSET)
}

/// Truncate a binary64 value to its low 32 bits (modulo 2^32).
fn low_u32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(TWO_POW_32) as u32
}

/// One LCG step. The product is computed in binary64, so a large first state
/// loses low bits before the 31-bit mask is applied.
fn lcg_step(state: f64) -> u32 {
    let next = state * LCG_MULTIPLIER + LCG_INCREMENT;
    low_u32(next) & LCG_MASK
}

/// Infinite stream of non-zero pseudo bytes derived from a seed string.
#[derive(Debug, Clone)]
pub struct SeedStream {
    state: f64,
    index: usize,
}

impl SeedStream {
    pub fn new(seed: &str) -> Self {
        Self {
            state: seed_hash(seed) as f64,
            index: 0,
        }
    }
}

impl Iterator for SeedStream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let state = lcg_step(self.state);
        self.state = f64::from(state);

        let mixed = ((state ^ (state >> 16)) & 0xff) as u8;
        // Zero would show up as a stray leading '1' in Base58
        let byte = if mixed == 0 {
            (self.index % 255) as u8 + 1
        } else {
            mixed
        };

        self.index += 1;
        Some(byte)
    }
}

/// Expand `seed` into exactly `length` bytes, none of them zero.
pub fn expand_bytes(seed: &str, length: usize) -> Vec<u8> {
    SeedStream::new(seed).take(length).collect()
}

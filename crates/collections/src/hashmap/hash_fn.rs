//! The djb2 string hash and its reduction onto a bucket range.
//!
//! The accumulator is a `u64` and wraps on overflow, so long keys land on
//! the same bucket on every platform regardless of the width of `usize`.

use std::num::NonZeroUsize;

/// Initial accumulator value of djb2
pub const SEED: u64 = 5381;

/// Full 64 bit djb2 digest of `key`: `h = h * 33 + byte` for every byte
pub fn djb2(key: &str) -> u64 {
    key.as_bytes().iter().fold(SEED, |h, &c| {
        // (h << 5) + h
        h.wrapping_mul(33).wrapping_add(u64::from(c))
    })
}

/// Maps `key` onto a bucket index in `0..capacity`
pub fn hash(key: &str, capacity: NonZeroUsize) -> usize {
    // capacity fits in u64 and the remainder is below it, so both casts are lossless
    (djb2(key) % capacity.get() as u64) as usize
}

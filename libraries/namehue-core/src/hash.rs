use std::num::NonZeroU64;

use crate::config::HueConfig;
use crate::palette::PaletteEntry;

/// 2^53 - 1. Every published color depends on this exact value.
pub const HASH_MODULUS: u64 = (1 << 53) - 1;

/// Rolling `h * 31 + unit` hash over the UTF-16 code units of `input`,
/// reduced modulo `modulus`.
///
/// Reducing after every step yields the same value as reducing the
/// unbounded polynomial once at the end, since all terms are non-negative.
/// The accumulator stays below `modulus`, so `h * 31 + u16::MAX` always fits
/// in a `u128` and nothing wraps.
pub fn fast_hash(input: &str, modulus: NonZeroU64) -> u64 {
    let modulus = u128::from(modulus.get());
    let hash = input
        .encode_utf16()
        .fold(0u128, |h, unit| (h * 31 + u128::from(unit)) % modulus);
    // below modulus, so lossless
    hash as u64
}

/// The palette index `input` is drawn in.
pub fn color_index(input: &str, config: &HueConfig) -> usize {
    let count = config.color_count() as u64;
    (fast_hash(input, config.modulus) % count) as usize
}

/// The palette entry `input` is drawn in.
pub fn color_entry(input: &str, config: &HueConfig) -> PaletteEntry {
    let index = color_index(input, config);
    config
        .palette
        .entry(index)
        .unwrap_or_else(|| unreachable!("color index {index} is within the palette"))
}

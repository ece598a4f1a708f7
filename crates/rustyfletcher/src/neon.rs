//! ARM NEON entry points.
//! NEON is always available on aarch64.

#![cfg(target_arch = "aarch64")]

use byteorder::ByteOrder;

use crate::wide;

/// NEON Fletcher-16 with wide accumulators.
///
/// # Safety
/// Caller must ensure aarch64 target (NEON always available).
#[target_feature(enable = "neon")]
pub unsafe fn fletcher16(data: &[u8]) -> u16 {
    wide::fletcher16(data)
}

/// NEON Fletcher-32 over native 16-bit words.
///
/// # Safety
/// Caller must ensure aarch64 target.
#[target_feature(enable = "neon")]
pub unsafe fn fletcher32_from_words(words: &[u16]) -> u32 {
    wide::fletcher32_from_words(words)
}

/// NEON Fletcher-32 over bytes paired with byte order `B`.
///
/// # Safety
/// Caller must ensure aarch64 target.
#[target_feature(enable = "neon")]
pub unsafe fn fletcher32_from_bytes<B: ByteOrder>(data: &[u8]) -> u32 {
    wide::fletcher32_from_bytes::<B>(data)
}

//! AVX2 entry points for x86_64.
//! All functions require runtime detection via is_x86_feature_detected!("avx2").
//!
//! The bodies are the [`crate::wide`] kernels inlined under the AVX2 target
//! feature, so the `u64` accumulation loops are compiled for 256-bit registers.

#![cfg(target_arch = "x86_64")]

use byteorder::ByteOrder;

use crate::wide;

/// AVX2 Fletcher-16.
///
/// # Safety
/// Caller must verify is_x86_feature_detected!("avx2").
#[target_feature(enable = "avx2")]
pub unsafe fn fletcher16(data: &[u8]) -> u16 {
    wide::fletcher16(data)
}

/// AVX2 Fletcher-32 over native 16-bit words.
///
/// # Safety
/// Caller must verify is_x86_feature_detected!("avx2").
#[target_feature(enable = "avx2")]
pub unsafe fn fletcher32_from_words(words: &[u16]) -> u32 {
    wide::fletcher32_from_words(words)
}

/// AVX2 Fletcher-32 over bytes paired with byte order `B`.
///
/// # Safety
/// Caller must verify is_x86_feature_detected!("avx2").
#[target_feature(enable = "avx2")]
pub unsafe fn fletcher32_from_bytes<B: ByteOrder>(data: &[u8]) -> u32 {
    wide::fletcher32_from_bytes::<B>(data)
}

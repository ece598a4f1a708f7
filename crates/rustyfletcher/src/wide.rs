//! Kernels with 64-bit accumulators.
//!
//! A `u64` `c1` tolerates far longer runs between reductions, so on 64-bit
//! targets these do almost no division. The SIMD backends compile these
//! bodies under their target features. Results are identical to
//! [`crate::scalar`] because both end every block with a full reduction.

use byteorder::ByteOrder;

use crate::scalar::{MOD16, MOD32};

/// Largest Fletcher-16 block (in bytes) for which
/// `254 + 254·n + 255·n(n+1)/2` fits in a `u64`.
pub const FLETCHER16_BLOCK: usize = 380_368_695;

/// Largest Fletcher-32 block (in words) for which
/// `65534 + 65534·n + 65535·n(n+1)/2` fits in a `u64`.
pub const FLETCHER32_BLOCK: usize = 23_726_745;

#[inline(always)]
pub fn fletcher16(data: &[u8]) -> u16 {
    let mut c0: u64 = 0;
    let mut c1: u64 = 0;

    for block in data.chunks(FLETCHER16_BLOCK) {
        for &byte in block {
            c0 += u64::from(byte);
            c1 += c0;
        }
        c0 %= u64::from(MOD16);
        c1 %= u64::from(MOD16);
    }

    ((c1 << 8) | c0) as u16
}

#[inline(always)]
pub fn fletcher32_from_words(words: &[u16]) -> u32 {
    let mut c0: u64 = 0;
    let mut c1: u64 = 0;

    for block in words.chunks(FLETCHER32_BLOCK) {
        for &word in block {
            c0 += u64::from(word);
            c1 += c0;
        }
        c0 %= u64::from(MOD32);
        c1 %= u64::from(MOD32);
    }

    ((c1 << 16) | c0) as u32
}

#[inline(always)]
pub fn fletcher32_from_bytes<B: ByteOrder>(data: &[u8]) -> u32 {
    let mut c0: u64 = 0;
    let mut c1: u64 = 0;

    for block in data.chunks(FLETCHER32_BLOCK * 2) {
        let mut pairs = block.chunks_exact(2);
        for pair in &mut pairs {
            c0 += u64::from(B::read_u16(pair));
            c1 += c0;
        }
        if let [last] = pairs.remainder() {
            c0 += u64::from(B::read_u16(&[*last, 0]));
            c1 += c0;
        }
        c0 %= u64::from(MOD32);
        c1 %= u64::from(MOD32);
    }

    ((c1 << 16) | c0) as u32
}

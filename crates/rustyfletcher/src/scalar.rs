//! Portable scalar kernels with 32-bit accumulators.
//!
//! These reproduce the classic batching exactly: a block of additions, then
//! one reduction of both sums. They are the fallback for every platform and
//! the reference the other backends are tested against.

use byteorder::ByteOrder;

/// Largest Fletcher-16 block (in bytes) whose running `c1` stays below 2^32.
///
/// Found by solving `n * (n + 1) / 2 * (2^8 - 1) < 2^32 - 1`. Lowering it is
/// safe; raising it past the derived bound is not.
pub const FLETCHER16_BLOCK: usize = 5002;

/// Largest Fletcher-32 block (in 16-bit words) whose running `c1` stays below 2^32.
pub const FLETCHER32_BLOCK: usize = 360;

pub const MOD16: u32 = 255;
pub const MOD32: u32 = 65535;

pub fn fletcher16(data: &[u8]) -> u16 {
    let mut c0: u32 = 0;
    let mut c1: u32 = 0;

    for block in data.chunks(FLETCHER16_BLOCK) {
        for &byte in block {
            c0 += u32::from(byte);
            c1 += c0;
        }
        c0 %= MOD16;
        c1 %= MOD16;
    }

    ((c1 << 8) | c0) as u16
}

pub fn fletcher32_from_words(words: &[u16]) -> u32 {
    let mut c0: u32 = 0;
    let mut c1: u32 = 0;

    for block in words.chunks(FLETCHER32_BLOCK) {
        for &word in block {
            c0 += u32::from(word);
            c1 += c0;
        }
        c0 %= MOD32;
        c1 %= MOD32;
    }

    (c1 << 16) | c0
}

/// Fletcher-32 over raw bytes paired into words with byte order `B`.
///
/// An odd trailing byte is padded with a zero byte.
pub fn fletcher32_from_bytes<B: ByteOrder>(data: &[u8]) -> u32 {
    let mut c0: u32 = 0;
    let mut c1: u32 = 0;

    // Only the last block can have an odd length.
    for block in data.chunks(FLETCHER32_BLOCK * 2) {
        let mut pairs = block.chunks_exact(2);
        for pair in &mut pairs {
            c0 += u32::from(B::read_u16(pair));
            c1 += c0;
        }
        if let [last] = pairs.remainder() {
            c0 += u32::from(B::read_u16(&[*last, 0]));
            c1 += c0;
        }
        c0 %= MOD32;
        c1 %= MOD32;
    }

    (c1 << 16) | c0
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn block_sizes_cannot_overflow_u32() {
        // Worst case c1 entering a block already reduced, then n maximal elements.
        let worst = |m: u128, e: u128, n: u128| (m - 1) + n * (m - 1) + e * n * (n + 1) / 2;
        assert!(worst(255, 255, FLETCHER16_BLOCK as u128) <= u32::MAX as u128);
        assert!(worst(65535, 65535, FLETCHER32_BLOCK as u128) <= u32::MAX as u128);
        // 360 is tight for the 32-bit variant.
        assert!(worst(65535, 65535, FLETCHER32_BLOCK as u128 + 1) > u32::MAX as u128);
    }

    #[test]
    fn fletcher16_empty_is_zero() {
        assert_eq!(fletcher16(&[]), 0);
    }

    #[test]
    fn fletcher16_wikipedia_vectors() {
        assert_eq!(fletcher16(b"abcde"), 0xC8F0);
        assert_eq!(fletcher16(b"abcdef"), 0x2057);
        assert_eq!(fletcher16(b"abcdefgh"), 0x0627);
    }

    #[test]
    fn fletcher16_all_ff_saturated_block() {
        // 0xFF bytes are the worst case for the accumulators.
        let data = vec![0xFFu8; FLETCHER16_BLOCK * 3 + 7];
        // 255 == 0 (mod 255), so both sums stay zero.
        assert_eq!(fletcher16(&data), 0);
    }

    #[test]
    fn fletcher32_words_empty_is_zero() {
        assert_eq!(fletcher32_from_words(&[]), 0);
    }

    #[test]
    fn fletcher32_words_single() {
        // c0 = 1, c1 = 1
        assert_eq!(fletcher32_from_words(&[1]), 0x0001_0001);
        // 0xFFFF reduces to zero.
        assert_eq!(fletcher32_from_words(&[0xFFFF]), 0);
    }

    #[test]
    fn fletcher32_bytes_matches_words() {
        let bytes = b"abcdefgh";
        let le: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|p| u16::from_le_bytes([p[0], p[1]]))
            .collect();
        let be: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|p| u16::from_be_bytes([p[0], p[1]]))
            .collect();
        assert_eq!(fletcher32_from_bytes::<LittleEndian>(bytes), fletcher32_from_words(&le));
        assert_eq!(fletcher32_from_bytes::<BigEndian>(bytes), fletcher32_from_words(&be));
    }

    #[test]
    fn fletcher32_bytes_odd_length_pads_zero() {
        let data: Vec<u8> = (0..(FLETCHER32_BLOCK * 2 + 1)).map(|i| i as u8).collect();
        let mut padded = data.clone();
        padded.push(0);
        assert_eq!(
            fletcher32_from_bytes::<LittleEndian>(&data),
            fletcher32_from_bytes::<LittleEndian>(&padded)
        );
        assert_eq!(
            fletcher32_from_bytes::<BigEndian>(&data),
            fletcher32_from_bytes::<BigEndian>(&padded)
        );
    }
}

//! Fletcher-16 and Fletcher-32 checksums.
//!
//! Fletcher checksums keep two running sums over the input, a plain sum and a
//! sum of sums, reduced modulo 255 (16-bit variant) or 65535 (32-bit variant)
//! and packed into the high and low halves of the result. They catch
//! accidental corruption cheaply; they are not cryptographic.
//!
//! All public functions automatically select the best available backend at
//! runtime. Every backend has the portable [`scalar`] kernels as a fallback
//! and returns bit-identical results.
//!
//! ```
//! use rustyfletcher::{fletcher16, fletcher32_from_bytes, LittleEndian};
//!
//! assert_eq!(fletcher16(b"abcdef"), 0x2057);
//! assert_eq!(fletcher32_from_bytes::<LittleEndian>(b"abcdef"), 0x5650_2D2A);
//! ```

pub mod scalar;
pub mod wide;

#[cfg(target_arch = "aarch64")]
pub mod neon;

#[cfg(target_arch = "x86_64")]
pub mod avx2;

pub mod checksum;
pub mod error;
pub mod trailer;

use std::sync::OnceLock;

pub use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
pub use error::ChecksumError;
pub use trailer::{append_fletcher16, append_fletcher32, verify_fletcher16, verify_fletcher32};

/// Available checksum backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// ARM NEON (always available on aarch64)
    Neon,
    /// x86_64 AVX2
    Avx2,
    /// Portable scalar fallback
    Scalar,
}

static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Detect the best available backend at runtime.
///
/// Detection runs once per process; later calls return the cached result.
pub fn detect_backend() -> Backend {
    *BACKEND.get_or_init(|| {
        let backend = probe_backend();
        log::debug!("fletcher checksum backend: {backend:?}");
        backend
    })
}

fn probe_backend() -> Backend {
    #[cfg(target_arch = "aarch64")]
    {
        return Backend::Neon; // Always available on aarch64
    }

    #[cfg(all(target_arch = "x86_64", feature = "simd"))]
    {
        if is_x86_feature_detected!("avx2") {
            return Backend::Avx2;
        }
    }

    #[allow(unreachable_code)]
    Backend::Scalar
}

// ---------------------------------------------------------------------------
// Public API — auto-dispatched
// ---------------------------------------------------------------------------

/// Compute the Fletcher-16 checksum of `data`.
///
/// Returns `(c1 << 8) | c0`. Empty input yields 0.
pub fn fletcher16(data: &[u8]) -> u16 {
    checksum::fletcher16(data)
}

/// Compute Fletcher-16 over the first `len` bytes of `data`.
///
/// Fails with [`ChecksumError::InvalidLength`] if `len` exceeds `data.len()`.
pub fn fletcher16_prefix(data: &[u8], len: usize) -> Result<u16, ChecksumError> {
    let prefix = data.get(..len).ok_or(ChecksumError::InvalidLength {
        requested: len,
        available: data.len(),
    })?;
    Ok(fletcher16(prefix))
}

/// Compute the Fletcher-32 checksum of a sequence of 16-bit words.
///
/// Every element counts as one word; no byte order is involved.
pub fn fletcher32_from_words(words: &[u16]) -> u32 {
    checksum::fletcher32_from_words(words)
}

/// Compute the Fletcher-32 checksum of raw bytes.
///
/// Bytes are paired into 16-bit words using byte order `B`. An odd-length
/// input is treated as if one zero byte were appended.
pub fn fletcher32_from_bytes<B: ByteOrder>(data: &[u8]) -> u32 {
    checksum::fletcher32_from_bytes::<B>(data)
}

/// Compute Fletcher-32 over `words` where the length is given in bytes.
///
/// `byte_len` is rounded up to the next even number and half of it is the
/// number of words consumed. Fails with [`ChecksumError::InvalidLength`]
/// (counted in words) if that many words are not available.
pub fn fletcher32_prefix(words: &[u16], byte_len: usize) -> Result<u32, ChecksumError> {
    let word_len = byte_len / 2 + byte_len % 2;
    let prefix = words.get(..word_len).ok_or(ChecksumError::InvalidLength {
        requested: word_len,
        available: words.len(),
    })?;
    Ok(fletcher32_from_words(prefix))
}

//! Backend dispatch for the checksum kernels.

use byteorder::ByteOrder;

/// Compute Fletcher-16, dispatching to the detected backend.
pub fn fletcher16(data: &[u8]) -> u16 {
    match crate::detect_backend() {
        #[cfg(target_arch = "aarch64")]
        crate::Backend::Neon => {
            // SAFETY: aarch64 target verified, NEON always available.
            unsafe { crate::neon::fletcher16(data) }
        }

        #[cfg(target_arch = "x86_64")]
        crate::Backend::Avx2 => {
            // SAFETY: Runtime-verified AVX2 support.
            unsafe { crate::avx2::fletcher16(data) }
        }

        _ => crate::scalar::fletcher16(data),
    }
}

/// Compute Fletcher-32 over 16-bit words, dispatching to the detected backend.
pub fn fletcher32_from_words(words: &[u16]) -> u32 {
    match crate::detect_backend() {
        #[cfg(target_arch = "aarch64")]
        crate::Backend::Neon => {
            // SAFETY: aarch64 target verified, NEON always available.
            unsafe { crate::neon::fletcher32_from_words(words) }
        }

        #[cfg(target_arch = "x86_64")]
        crate::Backend::Avx2 => {
            // SAFETY: Runtime-verified AVX2 support.
            unsafe { crate::avx2::fletcher32_from_words(words) }
        }

        _ => crate::scalar::fletcher32_from_words(words),
    }
}

/// Compute Fletcher-32 over bytes in order `B`, dispatching to the detected backend.
pub fn fletcher32_from_bytes<B: ByteOrder>(data: &[u8]) -> u32 {
    match crate::detect_backend() {
        #[cfg(target_arch = "aarch64")]
        crate::Backend::Neon => {
            // SAFETY: aarch64 target verified, NEON always available.
            unsafe { crate::neon::fletcher32_from_bytes::<B>(data) }
        }

        #[cfg(target_arch = "x86_64")]
        crate::Backend::Avx2 => {
            // SAFETY: Runtime-verified AVX2 support.
            unsafe { crate::avx2::fletcher32_from_bytes::<B>(data) }
        }

        _ => crate::scalar::fletcher32_from_bytes::<B>(data),
    }
}

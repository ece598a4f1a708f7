//! Error types for checked checksum operations.

use core::fmt;

/// Errors returned by the length-checked and trailer-verifying operations.
///
/// The plain slice functions ([`crate::fletcher16`],
/// [`crate::fletcher32_from_words`], ...) are total and never produce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumError {
    /// A caller-supplied element count exceeds the buffer.
    InvalidLength {
        /// Number of elements the caller asked to checksum.
        requested: usize,
        /// Number of elements actually present.
        available: usize,
    },
    /// Input too short to carry a checksum trailer.
    TooShort {
        /// Minimum number of bytes required.
        needed: usize,
        /// Number of bytes actually available.
        available: usize,
    },
    /// The stored trailer does not match the recomputed checksum.
    Mismatch {
        /// The checksum found in the trailer.
        stored: u32,
        /// The checksum we computed over the payload.
        computed: u32,
    },
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumError::InvalidLength {
                requested,
                available,
            } => {
                write!(
                    f,
                    "invalid length: {requested} elements requested, buffer holds {available}"
                )
            }
            ChecksumError::TooShort { needed, available } => {
                write!(
                    f,
                    "input too short for checksum trailer: need {needed} bytes, have {available}"
                )
            }
            ChecksumError::Mismatch { stored, computed } => {
                write!(
                    f,
                    "checksum mismatch: stored {stored:#010x}, computed {computed:#010x}"
                )
            }
        }
    }
}

impl std::error::Error for ChecksumError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_length() {
        let err = ChecksumError::InvalidLength {
            requested: 10,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid length: 10 elements requested, buffer holds 4"
        );
    }

    #[test]
    fn display_mismatch_is_hex() {
        let err = ChecksumError::Mismatch {
            stored: 0xF04F_C729,
            computed: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("0xf04fc729"), "got {msg}");
        assert!(msg.contains("0x00000000"), "got {msg}");
    }

    #[test]
    fn usable_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ChecksumError::TooShort {
            needed: 4,
            available: 1,
        });
        assert!(err.to_string().starts_with("input too short"));
    }
}

//! Checksum trailers: seal a payload with its Fletcher checksum appended, and
//! verify-and-strip it on the way back.

use byteorder::{BigEndian, ByteOrder};

use crate::error::ChecksumError;

/// Size of a Fletcher-16 trailer in bytes.
pub const FLETCHER16_TRAILER: usize = 2;

/// Size of a Fletcher-32 trailer in bytes.
pub const FLETCHER32_TRAILER: usize = 4;

/// Append the Fletcher-16 checksum of `payload`, big-endian (`c1` first).
pub fn append_fletcher16(payload: &[u8]) -> Vec<u8> {
    let checksum = crate::fletcher16(payload);
    let mut sealed = Vec::with_capacity(payload.len() + FLETCHER16_TRAILER);
    sealed.extend_from_slice(payload);
    sealed.extend_from_slice(&checksum.to_be_bytes());
    sealed
}

/// Verify a Fletcher-16 trailer and return the payload without it.
pub fn verify_fletcher16(sealed: &[u8]) -> Result<&[u8], ChecksumError> {
    let (payload, trailer) = split_trailer(sealed, FLETCHER16_TRAILER)?;
    let stored = BigEndian::read_u16(trailer);
    let computed = crate::fletcher16(payload);
    if stored != computed {
        return Err(ChecksumError::Mismatch {
            stored: u32::from(stored),
            computed: u32::from(computed),
        });
    }
    Ok(payload)
}

/// Append the Fletcher-32 checksum of `payload`.
///
/// Words are formed with byte order `B`, and the checksum itself is written in
/// the same order.
pub fn append_fletcher32<B: ByteOrder>(payload: &[u8]) -> Vec<u8> {
    let checksum = crate::fletcher32_from_bytes::<B>(payload);
    let mut sealed = Vec::with_capacity(payload.len() + FLETCHER32_TRAILER);
    sealed.extend_from_slice(payload);
    let mut trailer = [0u8; FLETCHER32_TRAILER];
    B::write_u32(&mut trailer, checksum);
    sealed.extend_from_slice(&trailer);
    sealed
}

/// Verify a Fletcher-32 trailer written by [`append_fletcher32`] with the same
/// byte order, and return the payload without it.
pub fn verify_fletcher32<B: ByteOrder>(sealed: &[u8]) -> Result<&[u8], ChecksumError> {
    let (payload, trailer) = split_trailer(sealed, FLETCHER32_TRAILER)?;
    let stored = B::read_u32(trailer);
    let computed = crate::fletcher32_from_bytes::<B>(payload);
    if stored != computed {
        return Err(ChecksumError::Mismatch { stored, computed });
    }
    Ok(payload)
}

fn split_trailer(sealed: &[u8], trailer_len: usize) -> Result<(&[u8], &[u8]), ChecksumError> {
    if sealed.len() < trailer_len {
        return Err(ChecksumError::TooShort {
            needed: trailer_len,
            available: sealed.len(),
        });
    }
    Ok(sealed.split_at(sealed.len() - trailer_len))
}

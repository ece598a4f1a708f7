#![no_main]
use libfuzzer_sys::fuzz_target;
use rustyfletcher::{scalar, wide, BigEndian, LittleEndian};

fuzz_target!(|data: &[u8]| {
    // Dispatched, scalar and wide kernels must agree on every input.
    let f16 = rustyfletcher::fletcher16(data);
    assert_eq!(f16, scalar::fletcher16(data));
    assert_eq!(f16, wide::fletcher16(data));

    let le = rustyfletcher::fletcher32_from_bytes::<LittleEndian>(data);
    assert_eq!(le, scalar::fletcher32_from_bytes::<LittleEndian>(data));
    assert_eq!(le, wide::fletcher32_from_bytes::<LittleEndian>(data));

    let be = rustyfletcher::fletcher32_from_bytes::<BigEndian>(data);
    assert_eq!(be, scalar::fletcher32_from_bytes::<BigEndian>(data));

    let words: Vec<u16> = data
        .chunks(2)
        .map(|p| u16::from_le_bytes([p[0], p.get(1).copied().unwrap_or(0)]))
        .collect();
    assert_eq!(rustyfletcher::fletcher32_from_words(&words), le);
    assert_eq!(rustyfletcher::fletcher32_prefix(&words, data.len()), Ok(le));
});

#![no_main]
use libfuzzer_sys::fuzz_target;
use rustyfletcher::{BigEndian, LittleEndian};

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must never panic during verification.
    let _ = rustyfletcher::verify_fletcher16(data);
    let _ = rustyfletcher::verify_fletcher32::<LittleEndian>(data);
    let _ = rustyfletcher::verify_fletcher32::<BigEndian>(data);

    // Sealing then verifying always succeeds.
    let sealed = rustyfletcher::append_fletcher32::<BigEndian>(data);
    assert_eq!(rustyfletcher::verify_fletcher32::<BigEndian>(&sealed), Ok(data));
    let sealed = rustyfletcher::append_fletcher16(data);
    assert_eq!(rustyfletcher::verify_fletcher16(&sealed), Ok(data));
});

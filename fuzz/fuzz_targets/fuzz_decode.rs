#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Whole-file decode of arbitrary bytes must never panic
    let _ = photonfile::PhotonFile::decode(&mut Cursor::new(data));

    // The layer mask codec accepts every byte stream
    let _ = photonfile::mask::decode(data, 64, 64);

    // Preview codec over the same bytes viewed as words
    let words: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let _ = photonfile::preview::decode(&words, 32, 32);
});

#![no_main]
use libfuzzer_sys::fuzz_target;
use photonfile::PhotonFile;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // If it decodes, encode→decode must reproduce the model
    let Ok(file) = PhotonFile::decode(&mut Cursor::new(data)) else {
        return;
    };

    let mut encoded = Vec::new();
    file.encode_to(&mut encoded).expect("in-memory encode failed");

    let file2 = match PhotonFile::decode(&mut Cursor::new(encoded.as_slice())) {
        Ok(f) => f,
        Err(e) => panic!("re-encoded file failed to decode: {e}"),
    };

    assert_eq!(file.preview.pixels(), file2.preview.pixels());
    assert_eq!(file.thumbnail.pixels(), file2.thumbnail.pixels());
    assert_eq!(file.layers.len(), file2.layers.len());
    for (a, b) in file.layers.iter().zip(&file2.layers) {
        assert_eq!(a.data, b.data, "layer data changed across roundtrip");
    }

    // Scalar fields may be NaN in hostile input, so compare through a second
    // encode: it must be a byte-for-byte fixpoint.
    let mut encoded2 = Vec::new();
    file2.encode_to(&mut encoded2).expect("in-memory encode failed");
    assert_eq!(encoded, encoded2, "encode is not a fixpoint");
});

#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal valid file: 1x1 previews, zero layers.
    // 108 header + 32+4 preview + 32+4 thumbnail = 180 bytes.
    let mut f = vec![0u8; 180];
    f[0x00..0x04].copy_from_slice(&0x12FD0019u32.to_le_bytes()); // magic1
    f[0x04..0x08].copy_from_slice(&1u32.to_le_bytes()); // magic2
    f[0x34..0x38].copy_from_slice(&2u32.to_le_bytes()); // screen height
    f[0x38..0x3C].copy_from_slice(&2u32.to_le_bytes()); // screen width
    f[0x3C..0x40].copy_from_slice(&108u32.to_le_bytes()); // preview header offset
    f[0x40..0x44].copy_from_slice(&180u32.to_le_bytes()); // layer table offset (empty, at EOF)
    f[0x48..0x4C].copy_from_slice(&144u32.to_le_bytes()); // thumbnail header offset
    for (hdr, data) in [(108usize, 140u32), (144usize, 176u32)] {
        f[hdr..hdr + 4].copy_from_slice(&1u32.to_le_bytes()); // width
        f[hdr + 4..hdr + 8].copy_from_slice(&1u32.to_le_bytes()); // height
        f[hdr + 8..hdr + 12].copy_from_slice(&data.to_le_bytes()); // data offset
        f[hdr + 12..hdr + 16].copy_from_slice(&4u32.to_le_bytes()); // data size
    }
    // Both previews decode from four zero bytes: one black literal word
    // plus the trailing phantom word, already zero in the buffer.
    fs::write(format!("{dir}/empty_print.photon"), &f).unwrap();

    // Same file with one layer: a 2x2 all-unset mask (single 0x04 byte).
    let mut g = f.clone();
    g[0x44..0x48].copy_from_slice(&1u32.to_le_bytes()); // total layers
    // Layer header at 180: heights/exposures zero, data at 216, 1 byte.
    g.extend_from_slice(&[0u8; 36]);
    g[180 + 12..180 + 16].copy_from_slice(&216u32.to_le_bytes());
    g[180 + 16..180 + 20].copy_from_slice(&1u32.to_le_bytes());
    g.push(0x04);
    fs::write(format!("{dir}/one_layer.photon"), &g).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), 0x12FD0019u32.to_le_bytes()).unwrap();
    fs::write(format!("{dir}/bad_magic.bin"), vec![0xFFu8; 108]).unwrap();
    fs::write(format!("{dir}/short_header.bin"), vec![0u8; 60]).unwrap();

    println!("Generated seed corpus in {dir}/");
}

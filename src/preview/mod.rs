//! The 16-bit packed preview pixel codec.
//!
//! Preview and thumbnail rasters store one little-endian word per pixel:
//! red in bits 0-4, a fill flag at bit 5, green in bits 6-10, blue in bits
//! 11-15. Channels lose precision to 5 bits. A word with the fill flag set
//! is followed by a run word that repeats the color across the row-major
//! raster.

mod decode;
mod encode;

pub use self::decode::decode;
pub use self::encode::encode;

use rgb::RGB8;

/// Pack an RGB triple and the fill flag into one pixel word.
///
/// Channels are rescaled `0..=255` to `0..=31`, rounding to the nearest
/// step.
pub fn pack(px: RGB8, fill: bool) -> u16 {
    let r_bits = rescale(0.0, 255.0, 0.0, 31.0, f64::from(px.r)) as u16 & 0x1F;
    let g_bits = rescale(0.0, 255.0, 0.0, 31.0, f64::from(px.g)) as u16 & 0x1F;
    let b_bits = rescale(0.0, 255.0, 0.0, 31.0, f64::from(px.b)) as u16 & 0x1F;
    let mut word = r_bits | (g_bits << 6) | (b_bits << 11);
    if fill {
        word |= 1 << 5;
    }
    word
}

/// Unpack a pixel word into its RGB triple and fill flag.
///
/// Channels are rescaled `0..=31` back to `0..=255`, rounding to the
/// nearest step.
pub fn unpack(word: u16) -> (RGB8, bool) {
    let fill = (word >> 5) & 1 == 1;
    let r = rescale(0.0, 31.0, 0.0, 255.0, f64::from(word & 0x1F)) as u8;
    let g = rescale(0.0, 31.0, 0.0, 255.0, f64::from((word >> 6) & 0x1F)) as u8;
    let b = rescale(0.0, 31.0, 0.0, 255.0, f64::from((word >> 11) & 0x1F)) as u8;
    (RGB8::new(r, g, b), fill)
}

/// Map `v` from one range onto another, rounding to the nearest value.
fn rescale(from_min: f64, from_max: f64, to_min: f64, to_max: f64, v: f64) -> f64 {
    ((v - from_min) * (to_max - to_min) / (from_max - from_min) + to_min).round()
}

pub(crate) fn words_to_le_bytes(words: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 2);
    for word in words {
        out.extend_from_slice(&word.to_le_bytes());
    }
    out
}

/// Pairs bytes into words; a trailing odd byte is dropped, as the reference
/// readers do.
pub(crate) fn le_bytes_to_words(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

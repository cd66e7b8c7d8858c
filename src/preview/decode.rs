//! Preview raster decoder.

use rgb::RGB8;

use crate::error::Result;
use crate::preview::unpack;
use crate::raster::Raster;

/// Pixels no word reaches keep the reference decoder's white background.
const BACKGROUND: RGB8 = RGB8::new(255, 255, 255);

/// Decode packed preview words against the header bounds.
///
/// Pixels are written row-major. A fill word repeats its color for the run
/// length carried in the next word's low 12 bits (the 0x3000 marker bits
/// are masked off) and then once more at the cursor the run leaves behind.
/// The doubled write is what every known encoder counts on, so it stays.
/// Writes past `width * height` are dropped while the cursor keeps
/// advancing; a fill word with no run word after it ends the decode.
pub fn decode(words: &[u16], width: u32, height: u32) -> Result<Raster> {
    let mut raster = Raster::filled(width, height, BACKGROUND)?;
    let total = raster.pixels().len();
    let pixels = raster.pixels_mut();

    // Row-major pixel cursor.
    let mut p = 0usize;
    let mut i = 0usize;
    while i < words.len() {
        let (color, fill) = unpack(words[i]);
        if fill {
            let Some(&run_word) = words.get(i + 1) else {
                break;
            };
            for _ in 0..(run_word & 0xFFF) {
                if p < total {
                    pixels[p] = color;
                }
                p += 1;
            }
            i += 1;
        }
        if p < total {
            pixels[p] = color;
        }
        p += 1;
        i += 1;
    }
    Ok(raster)
}

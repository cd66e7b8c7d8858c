//! Layer mask decoder.

use crate::error::Result;
use crate::mask::FLAG_SET;
use crate::raster::Mask;

/// Decode a layer's run-length stream against the screen bounds.
///
/// Every byte stream decodes: a set-run that would pass `width * height`
/// stops there without error, and pixels no run reaches stay unset. The
/// decoder accepts run lengths up to the full 7 bits even though the
/// encoder flushes earlier.
pub fn decode(data: &[u8], width: u32, height: u32) -> Result<Mask> {
    let mut mask = Mask::new(width, height)?;
    let w = width as usize;
    let h = height as usize;
    let total = w * h;

    let bits = mask.bits_mut();
    // Column-major pixel cursor: walks down each column in turn.
    let mut p = 0usize;
    for &b in data {
        if b & FLAG_SET != 0 {
            for _ in 0..(b & !FLAG_SET) {
                if p >= total {
                    break;
                }
                let x = p / h;
                let y = p % h;
                bits[y * w + x] = true;
                p += 1;
            }
        } else {
            p += b as usize;
        }
    }
    Ok(mask)
}

//! Preview raster encoder.

use crate::preview::pack;
use crate::raster::Raster;

/// Longest run a single run word can describe.
const RUN_CAP: u16 = 0xFFF;

/// Encode a raster as packed preview words.
///
/// The loop runs one index past the last pixel on purpose: the phantom
/// index reads as no pixel at all, matches nothing, and emits the trailing
/// literal 0x0000 word present in reference output. Neighbor lookups are
/// bounds-checked, which also stops every run at the raster edge. A run of
/// three or more equal pixels emits the color word with the fill flag set
/// followed by `length - 1 | 0x3000`; anything shorter emits plain literal
/// words.
pub fn encode(raster: &Raster) -> Vec<u16> {
    let pixels = raster.pixels();
    let total = pixels.len();
    let pixel_at = |i: usize| pixels.get(i).copied();

    let mut out = Vec::new();
    let mut i = 0usize;
    while i <= total {
        let p = pixel_at(i).unwrap_or_default();
        let run_ok =
            i + 2 < total && pixel_at(i + 1) == Some(p) && pixel_at(i + 2) == Some(p);
        if run_ok {
            let mut run: u16 = 3;
            while run < RUN_CAP && pixel_at(i + run as usize) == Some(p) {
                run += 1;
            }
            out.push(pack(p, true));
            out.push((run - 1) | 0x3000);
            i += run as usize - 1;
        } else {
            out.push(pack(p, false));
        }
        i += 1;
    }
    out
}

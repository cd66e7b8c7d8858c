//! Layer mask encoder.

use crate::mask::FLAG_SET;
use crate::raster::Mask;

/// Longest run the encoder packs into one byte before force-flushing.
/// Two short of the 7-bit maximum; the original slicers never emit more,
/// and printers are only known to accept their output.
const RUN_FLUSH: u8 = 0x7F - 2;

/// Encode a mask as a run-length byte stream.
///
/// Pixels are walked column-major. A color change or a full run counter
/// flushes one byte; at the end of the mask at most one counter is still
/// nonzero and gets flushed last.
pub fn encode(mask: &Mask) -> Vec<u8> {
    let w = mask.width() as usize;
    let h = mask.height() as usize;
    let bits = mask.bits();

    let mut out = Vec::new();
    let mut set_run: u8 = 0;
    let mut unset_run: u8 = 0;

    for p in 0..bits.len() {
        let x = p / h;
        let y = p % h;
        if bits[y * w + x] {
            if unset_run != 0 {
                out.push(unset_run);
                unset_run = 0;
            }
            set_run += 1;
            if set_run >= RUN_FLUSH {
                out.push(set_run | FLAG_SET);
                set_run = 0;
            }
        } else {
            if set_run != 0 {
                out.push(set_run | FLAG_SET);
                set_run = 0;
            }
            unset_run += 1;
            if unset_run >= RUN_FLUSH {
                out.push(unset_run);
                unset_run = 0;
            }
        }
    }
    if set_run != 0 {
        out.push(set_run | FLAG_SET);
    }
    if unset_run != 0 {
        out.push(unset_run);
    }
    out
}

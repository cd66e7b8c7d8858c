use photonfile::*;

fn xorshift(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

fn quantized(px: RGB8) -> RGB8 {
    preview::unpack(preview::pack(px, false)).0
}

#[test]
fn mask_roundtrip_checkerboard() {
    let mut mask = Mask::new(8, 8).unwrap();
    for y in 0..8 {
        for x in 0..8 {
            mask.set(x, y, (x + y) % 2 == 0);
        }
    }
    let encoded = mask::encode(&mask);
    let decoded = mask::decode(&encoded, 8, 8).unwrap();
    assert_eq!(decoded, mask);
}

#[test]
fn mask_roundtrip_noise() {
    let mut state = 0x9E3779B9;
    let bits: Vec<bool> = (0..64 * 32).map(|_| xorshift(&mut state) & 1 == 1).collect();
    let mask = Mask::from_bits(64, 32, bits).unwrap();
    let decoded = mask::decode(&mask::encode(&mask), 64, 32).unwrap();
    assert_eq!(decoded, mask);
}

#[test]
fn mask_roundtrip_extremes() {
    let empty = Mask::new(16, 16).unwrap();
    let decoded = mask::decode(&mask::encode(&empty), 16, 16).unwrap();
    assert_eq!(decoded, empty);

    let mut full = Mask::new(16, 16).unwrap();
    for y in 0..16 {
        for x in 0..16 {
            full.set(x, y, true);
        }
    }
    // 256 set pixels: two full counters and a remainder
    let encoded = mask::encode(&full);
    assert_eq!(encoded, vec![0xFD, 0xFD, 0x86]);
    assert_eq!(mask::decode(&encoded, 16, 16).unwrap(), full);
}

#[test]
fn mask_encoding_is_column_major() {
    // The first column of a 2x3 grid is contiguous in the stream.
    let mut mask = Mask::new(2, 3).unwrap();
    for y in 0..3 {
        mask.set(0, y, true);
    }
    let encoded = mask::encode(&mask);
    assert_eq!(encoded, vec![0x83, 0x03]);
    assert_eq!(mask::decode(&encoded, 2, 3).unwrap(), mask);
}

#[test]
fn mask_short_unset_runs() {
    assert_eq!(mask::encode(&Mask::new(2, 1).unwrap()), vec![0x02]);
    assert_eq!(mask::encode(&Mask::new(2, 2).unwrap()), vec![0x04]);
}

#[test]
fn mask_runs_flush_at_125() {
    // 125 unset pixels fill the run counter; the lone set pixel follows.
    let mut mask = Mask::new(126, 1).unwrap();
    mask.set(125, 0, true);
    assert_eq!(mask::encode(&mask), vec![0x7D, 0x81]);

    let mut inverse = Mask::new(126, 1).unwrap();
    for x in 0..125 {
        inverse.set(x, 0, true);
    }
    assert_eq!(mask::encode(&inverse), vec![0xFD, 0x01]);
}

#[test]
fn mask_long_runs_split() {
    let mask = Mask::new(300, 1).unwrap();
    let encoded = mask::encode(&mask);
    assert_eq!(encoded, vec![0x7D, 0x7D, 0x32]);
    assert_eq!(mask::decode(&encoded, 300, 1).unwrap(), mask);
}

#[test]
fn mask_decode_short_stream_leaves_rest_unset() {
    let decoded = mask::decode(&[0x02], 2, 2).unwrap();
    assert_eq!(decoded, Mask::new(2, 2).unwrap());
}

#[test]
fn mask_decode_accepts_full_seven_bit_runs() {
    // The encoder never emits 0x7F, but streams carrying it still decode.
    let decoded = mask::decode(&[0xFF], 127, 1).unwrap();
    assert!(decoded.bits().iter().all(|&b| b));
}

#[test]
fn mask_decode_clips_overlong_set_run() {
    let decoded = mask::decode(&[0x90], 2, 2).unwrap();
    assert!(decoded.bits().iter().all(|&b| b));
}

#[test]
fn mask_decode_empty_stream() {
    let decoded = mask::decode(&[], 4, 4).unwrap();
    assert_eq!(decoded, Mask::new(4, 4).unwrap());
}

#[test]
fn preview_word_bit_layout() {
    assert_eq!(preview::pack(RGB8::new(255, 0, 0), false), 0x001F);
    assert_eq!(preview::pack(RGB8::new(0, 255, 0), false), 0x07C0);
    assert_eq!(preview::pack(RGB8::new(0, 0, 255), false), 0xF800);
    assert_eq!(preview::pack(RGB8::new(0, 0, 0), true), 0x0020);
    assert_eq!(preview::unpack(0x001F), (RGB8::new(255, 0, 0), false));
    assert_eq!(preview::unpack(0xFFDF), (RGB8::new(255, 255, 255), false));
    assert_eq!(preview::unpack(0x0020), (RGB8::new(0, 0, 0), true));
}

#[test]
fn preview_quantization_error_is_bounded() {
    for v in 0..=255u8 {
        let q = quantized(RGB8::new(v, v, v));
        assert!(
            (i32::from(q.r) - i32::from(v)).abs() <= 8,
            "channel {v} moved to {}",
            q.r
        );
        assert_eq!(quantized(q), q, "quantized {} must be a fixed point", q.r);
    }
}

#[test]
fn preview_quantization_is_monotone() {
    let mut prev = 0;
    for v in 0..=255u8 {
        let q = quantized(RGB8::new(v, v, v)).r;
        assert!(q >= prev, "quantizer went down from {prev} to {q} at input {v}");
        prev = q;
    }
}

#[test]
fn preview_roundtrip_solid() {
    let color = RGB8::new(37, 99, 201);
    let raster = Raster::filled(10, 10, color).unwrap();
    let decoded = preview::decode(&preview::encode(&raster), 10, 10).unwrap();
    assert_eq!(decoded, Raster::filled(10, 10, quantized(color)).unwrap());
}

#[test]
fn preview_roundtrip_noise() {
    let mut state = 0x2545F491;
    let mut pixels = Vec::new();
    for _ in 0..33 * 17 {
        let bits = xorshift(&mut state);
        pixels.push(RGB8::new(bits as u8, (bits >> 8) as u8, (bits >> 16) as u8));
    }
    let raster = Raster::from_pixels(33, 17, pixels).unwrap();
    let expect: Vec<RGB8> = raster.pixels().iter().map(|&px| quantized(px)).collect();
    let decoded = preview::decode(&preview::encode(&raster), 33, 17).unwrap();
    assert_eq!(decoded.pixels(), &expect[..]);
}

#[test]
fn preview_roundtrip_row_bands() {
    // Constant rows exercise the run path.
    let mut pixels = Vec::new();
    for y in 0..4u32 {
        let shade = (y * 60) as u8;
        for _ in 0..64 {
            pixels.push(RGB8::new(shade, 255 - shade, 128));
        }
    }
    let raster = Raster::from_pixels(64, 4, pixels).unwrap();
    let expect: Vec<RGB8> = raster.pixels().iter().map(|&px| quantized(px)).collect();
    let decoded = preview::decode(&preview::encode(&raster), 64, 4).unwrap();
    assert_eq!(decoded.pixels(), &expect[..]);
}

#[test]
fn preview_encoder_emits_trailing_word() {
    assert_eq!(preview::encode(&Raster::new(1, 1).unwrap()), vec![0x0000, 0x0000]);
    let white = Raster::filled(1, 1, RGB8::new(255, 255, 255)).unwrap();
    assert_eq!(preview::encode(&white), vec![0xFFDF, 0x0000]);
}

#[test]
fn preview_run_word_layout() {
    // Five reds and a black: fill word, run word, literal, trailing word.
    let mut pixels = vec![RGB8::new(255, 0, 0); 5];
    pixels.push(RGB8::new(0, 0, 0));
    let raster = Raster::from_pixels(6, 1, pixels).unwrap();
    let words = preview::encode(&raster);
    assert_eq!(words, vec![0x003F, 0x3004, 0x0000, 0x0000]);
    assert_eq!(preview::decode(&words, 6, 1).unwrap(), raster);
}

#[test]
fn preview_decode_keeps_white_background() {
    let white = Raster::filled(2, 2, RGB8::new(255, 255, 255)).unwrap();
    assert_eq!(preview::decode(&[], 2, 2).unwrap(), white);
}

#[test]
fn preview_decode_fill_without_run_word() {
    // A fill word at the end of the stream has no run length; decoding stops.
    let words = [preview::pack(RGB8::new(255, 0, 0), true)];
    let white = Raster::filled(2, 2, RGB8::new(255, 255, 255)).unwrap();
    assert_eq!(preview::decode(&words, 2, 2).unwrap(), white);
}

#[test]
fn preview_decode_drops_writes_past_the_grid() {
    // A fill word promising ten pixels against a four pixel grid.
    let decoded = preview::decode(&[0x003F, 0x300A], 2, 2).unwrap();
    assert_eq!(decoded, Raster::filled(2, 2, RGB8::new(255, 0, 0)).unwrap());
}

#[test]
fn raster_imgref_view() {
    let mut pixels = vec![RGB8::new(255, 0, 0); 6];
    pixels[4] = RGB8::new(0, 0, 255);
    let raster = Raster::from_pixels(3, 2, pixels).unwrap();
    let decoded = preview::decode(&preview::encode(&raster), 3, 2).unwrap();

    let view = decoded.as_imgref();
    assert_eq!((view.width(), view.height()), (3, 2));
    let bottom = &view.buf()[view.stride()..][..view.width()];
    assert_eq!(bottom[0], RGB8::new(255, 0, 0));
    assert_eq!(bottom[1], RGB8::new(0, 0, 255));
    assert_eq!(bottom[1], decoded.get(1, 1).unwrap());
}

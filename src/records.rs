//! Fixed-layout binary records of the `.photon`/`.cbddlp` container.
//!
//! Every record is a contiguous little-endian block, serialized field by
//! field at the byte offsets documented on each field. Reserved ranges are
//! written as zeros and ignored on read, so decode→encode does not preserve
//! whatever a slicer left in them.

use byteorder::{ByteOrder, LittleEndian};
use std::io::{Read, Write};

use crate::error::{PhotonError, Result};

/// First magic word of every `.photon`/`.cbddlp` file, at offset 0.
pub const MAGIC1: u32 = 0x12FD_0019;
/// Second magic word, fixed at 1.
pub const MAGIC2: u32 = 0x0000_0001;

/// Fill `buf` from `reader`, mapping a short read to
/// [`PhotonError::TruncatedStream`] naming the section.
pub(crate) fn read_exact_section<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    section: &'static str,
) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            PhotonError::TruncatedStream { section }
        } else {
            PhotonError::Io(e)
        }
    })
}

// ── File header ─────────────────────────────────────────────────────

/// The 108-byte record at the start of the file.
///
/// Offsets and layer counts live here; the print parameters are the ones a
/// printer applies to every layer unless a layer header overrides them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileHeader {
    /// Build plate X size in millimetres, at 0x08.
    pub plate_x: f32,
    /// Build plate Y size in millimetres, at 0x0C.
    pub plate_y: f32,
    /// Build plate Z size in millimetres, at 0x10.
    pub plate_z: f32,
    /// Layer height in millimetres, at 0x20.
    pub layer_thickness: f32,
    /// Exposure per normal layer in seconds, at 0x24.
    pub normal_exposure_time: f32,
    /// Exposure per bottom layer in seconds, at 0x28.
    pub bottom_exposure_time: f32,
    /// Light-off time between layers in seconds, at 0x2C.
    pub off_time: f32,
    /// Number of bottom layers, at 0x30.
    pub bottom_layers: u32,
    /// Screen height in pixels, at 0x34. Note height precedes width.
    pub screen_height: u32,
    /// Screen width in pixels, at 0x38.
    pub screen_width: u32,
    /// Offset of the preview header, at 0x3C.
    pub preview_header_offset: u32,
    /// Offset of the first layer header, at 0x40.
    pub layer_headers_offset: u32,
    /// Number of layer headers, at 0x44.
    pub total_layers: u32,
    /// Offset of the thumbnail header, at 0x48.
    pub thumbnail_header_offset: u32,
    /// Light-curing / projection type code, at 0x50. Observed 0 and 1.
    pub light_curing_type: u32,
}

impl FileHeader {
    /// Serialized size in bytes.
    pub const SIZE: usize = 108;

    /// Parse a raw record, validating both magic words.
    pub fn parse(buf: &[u8; Self::SIZE]) -> Result<Self> {
        let magic1 = LittleEndian::read_u32(&buf[0x00..]);
        if magic1 != MAGIC1 {
            return Err(PhotonError::MalformedHeader {
                expected: MAGIC1,
                found: magic1,
            });
        }
        let magic2 = LittleEndian::read_u32(&buf[0x04..]);
        if magic2 != MAGIC2 {
            return Err(PhotonError::MalformedHeader {
                expected: MAGIC2,
                found: magic2,
            });
        }
        Ok(FileHeader {
            plate_x: LittleEndian::read_f32(&buf[0x08..]),
            plate_y: LittleEndian::read_f32(&buf[0x0C..]),
            plate_z: LittleEndian::read_f32(&buf[0x10..]),
            // 0x14..0x20 reserved
            layer_thickness: LittleEndian::read_f32(&buf[0x20..]),
            normal_exposure_time: LittleEndian::read_f32(&buf[0x24..]),
            bottom_exposure_time: LittleEndian::read_f32(&buf[0x28..]),
            off_time: LittleEndian::read_f32(&buf[0x2C..]),
            bottom_layers: LittleEndian::read_u32(&buf[0x30..]),
            screen_height: LittleEndian::read_u32(&buf[0x34..]),
            screen_width: LittleEndian::read_u32(&buf[0x38..]),
            preview_header_offset: LittleEndian::read_u32(&buf[0x3C..]),
            layer_headers_offset: LittleEndian::read_u32(&buf[0x40..]),
            total_layers: LittleEndian::read_u32(&buf[0x44..]),
            thumbnail_header_offset: LittleEndian::read_u32(&buf[0x48..]),
            // 0x4C reserved
            light_curing_type: LittleEndian::read_u32(&buf[0x50..]),
            // 0x54..0x6C reserved
        })
    }

    /// Serialize into a raw record. Reserved ranges stay zero.
    pub fn write(&self, buf: &mut [u8; Self::SIZE]) {
        buf.fill(0);
        LittleEndian::write_u32(&mut buf[0x00..], MAGIC1);
        LittleEndian::write_u32(&mut buf[0x04..], MAGIC2);
        LittleEndian::write_f32(&mut buf[0x08..], self.plate_x);
        LittleEndian::write_f32(&mut buf[0x0C..], self.plate_y);
        LittleEndian::write_f32(&mut buf[0x10..], self.plate_z);
        LittleEndian::write_f32(&mut buf[0x20..], self.layer_thickness);
        LittleEndian::write_f32(&mut buf[0x24..], self.normal_exposure_time);
        LittleEndian::write_f32(&mut buf[0x28..], self.bottom_exposure_time);
        LittleEndian::write_f32(&mut buf[0x2C..], self.off_time);
        LittleEndian::write_u32(&mut buf[0x30..], self.bottom_layers);
        LittleEndian::write_u32(&mut buf[0x34..], self.screen_height);
        LittleEndian::write_u32(&mut buf[0x38..], self.screen_width);
        LittleEndian::write_u32(&mut buf[0x3C..], self.preview_header_offset);
        LittleEndian::write_u32(&mut buf[0x40..], self.layer_headers_offset);
        LittleEndian::write_u32(&mut buf[0x44..], self.total_layers);
        LittleEndian::write_u32(&mut buf[0x48..], self.thumbnail_header_offset);
        LittleEndian::write_u32(&mut buf[0x50..], self.light_curing_type);
    }

    /// Read exactly [`Self::SIZE`] bytes and parse them.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        read_exact_section(reader, &mut buf, "file header")?;
        Self::parse(&buf)
    }

    /// Write exactly [`Self::SIZE`] bytes.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut buf = [0u8; Self::SIZE];
        self.write(&mut buf);
        writer.write_all(&buf)?;
        Ok(())
    }
}

// ── Preview header ──────────────────────────────────────────────────

/// The 32-byte record in front of each packed preview raster. The preview
/// and the thumbnail use the same shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewHeader {
    /// Raster width in pixels, at 0x00.
    pub width: u32,
    /// Raster height in pixels, at 0x04.
    pub height: u32,
    /// Offset of the packed pixel words, at 0x08.
    pub data_offset: u32,
    /// Size of the packed pixel data in bytes, at 0x0C.
    pub data_size: u32,
}

impl PreviewHeader {
    /// Serialized size in bytes.
    pub const SIZE: usize = 32;

    /// Parse a raw record. Every bit pattern is a valid header.
    pub fn parse(buf: &[u8; Self::SIZE]) -> Self {
        PreviewHeader {
            width: LittleEndian::read_u32(&buf[0x00..]),
            height: LittleEndian::read_u32(&buf[0x04..]),
            data_offset: LittleEndian::read_u32(&buf[0x08..]),
            data_size: LittleEndian::read_u32(&buf[0x0C..]),
            // 0x10..0x20 reserved
        }
    }

    /// Serialize into a raw record. Reserved ranges stay zero.
    pub fn write(&self, buf: &mut [u8; Self::SIZE]) {
        buf.fill(0);
        LittleEndian::write_u32(&mut buf[0x00..], self.width);
        LittleEndian::write_u32(&mut buf[0x04..], self.height);
        LittleEndian::write_u32(&mut buf[0x08..], self.data_offset);
        LittleEndian::write_u32(&mut buf[0x0C..], self.data_size);
    }

    /// Read exactly [`Self::SIZE`] bytes and parse them.
    pub fn read_from<R: Read>(reader: &mut R, section: &'static str) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        read_exact_section(reader, &mut buf, section)?;
        Ok(Self::parse(&buf))
    }

    /// Write exactly [`Self::SIZE`] bytes.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut buf = [0u8; Self::SIZE];
        self.write(&mut buf);
        writer.write_all(&buf)?;
        Ok(())
    }
}

// ── Layer header ────────────────────────────────────────────────────

/// One of the 36-byte records in the contiguous layer-header table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerHeader {
    /// Z position of the layer in millimetres, at 0x00.
    pub absolute_height: f32,
    /// Exposure time for this layer in seconds, at 0x04.
    pub exposure_time: f32,
    /// Light-off time after this layer in seconds, at 0x08.
    pub off_time: f32,
    /// Offset of the layer's run-length data, at 0x0C. The top bit once
    /// selected relative addressing; only absolute offsets occur in the
    /// wild, and a set top bit falls outside the stream bounds check.
    pub data_offset: u32,
    /// Size of the layer's run-length data in bytes, at 0x10.
    pub data_size: u32,
}

impl LayerHeader {
    /// Serialized size in bytes.
    pub const SIZE: usize = 36;

    /// Parse a raw record. Every bit pattern is a valid header.
    pub fn parse(buf: &[u8; Self::SIZE]) -> Self {
        LayerHeader {
            absolute_height: LittleEndian::read_f32(&buf[0x00..]),
            exposure_time: LittleEndian::read_f32(&buf[0x04..]),
            off_time: LittleEndian::read_f32(&buf[0x08..]),
            data_offset: LittleEndian::read_u32(&buf[0x0C..]),
            data_size: LittleEndian::read_u32(&buf[0x10..]),
            // 0x14..0x24 reserved
        }
    }

    /// Serialize into a raw record. Reserved ranges stay zero.
    pub fn write(&self, buf: &mut [u8; Self::SIZE]) {
        buf.fill(0);
        LittleEndian::write_f32(&mut buf[0x00..], self.absolute_height);
        LittleEndian::write_f32(&mut buf[0x04..], self.exposure_time);
        LittleEndian::write_f32(&mut buf[0x08..], self.off_time);
        LittleEndian::write_u32(&mut buf[0x0C..], self.data_offset);
        LittleEndian::write_u32(&mut buf[0x10..], self.data_size);
    }

    /// Read exactly [`Self::SIZE`] bytes and parse them.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        read_exact_section(reader, &mut buf, "layer header")?;
        Ok(Self::parse(&buf))
    }

    /// Write exactly [`Self::SIZE`] bytes.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut buf = [0u8; Self::SIZE];
        self.write(&mut buf);
        writer.write_all(&buf)?;
        Ok(())
    }
}

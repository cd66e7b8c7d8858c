//! The decoded file model.

use std::io::{Read, Seek, Write};

use crate::error::Result;
use crate::raster::Raster;

/// A fully materialized `.photon`/`.cbddlp` file.
///
/// The model owns every section in memory. File offsets are not part of it:
/// encoding plans them from scratch, so stale offsets cannot survive a
/// decode→edit→encode pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotonFile {
    /// Build plate X size in millimetres.
    pub plate_x: f32,
    /// Build plate Y size in millimetres.
    pub plate_y: f32,
    /// Build plate Z size in millimetres.
    pub plate_z: f32,
    /// Layer height in millimetres.
    pub layer_thickness: f32,
    /// Exposure per normal layer in seconds.
    pub normal_exposure_time: f32,
    /// Exposure per bottom layer in seconds.
    pub bottom_exposure_time: f32,
    /// Light-off time between layers in seconds.
    pub off_time: f32,
    /// Number of bottom layers.
    pub bottom_layers: u32,
    /// Printer LCD height in pixels.
    pub screen_height: u32,
    /// Printer LCD width in pixels.
    pub screen_width: u32,
    /// Light-curing / projection type code.
    pub light_curing_type: u32,
    /// The large preview image.
    pub preview: Raster,
    /// The small preview image.
    pub thumbnail: Raster,
    /// Layers in print order, bottom first.
    pub layers: Vec<Layer>,
}

/// One printable layer: run-length image data plus its per-layer settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    /// Run-length mask data, byte for byte as stored in the file. Decode
    /// with [`mask::decode`](crate::mask::decode) against the screen
    /// bounds.
    pub data: Vec<u8>,
    /// Z position in millimetres.
    pub absolute_height: f32,
    /// Exposure in seconds.
    pub exposure_time: f32,
    /// Light-off time in seconds.
    pub off_time: f32,
}

impl PhotonFile {
    /// Decode a file from a seekable stream.
    pub fn decode<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        crate::decode::decode_file(reader)
    }

    /// Encode the file to a writer.
    ///
    /// Section offsets are planned before anything is written, so the
    /// writer never needs to seek.
    pub fn encode_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        crate::encode::encode_file(self, writer)
    }
}

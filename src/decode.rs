//! Whole-file decoding over a seekable stream.

use std::io::{Read, Seek, SeekFrom};

use log::debug;

use crate::error::{PhotonError, Result};
use crate::model::{Layer, PhotonFile};
use crate::preview;
use crate::raster::Raster;
use crate::records::{FileHeader, LayerHeader, PreviewHeader, read_exact_section};

/// Preview rasters past this pixel count are rejected before allocation.
/// Two orders of magnitude above any real slicer's previews.
const MAX_PREVIEW_PIXELS: u64 = 1 << 26;

pub(crate) fn decode_file<R: Read + Seek>(reader: &mut R) -> Result<PhotonFile> {
    let len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;
    debug!("decoding {len}-byte stream");

    let header = FileHeader::read_from(reader)?;
    debug!(
        "file header: screen {}x{}, {} layers",
        header.screen_width, header.screen_height, header.total_layers
    );

    // Layer header table first, as the reference readers do. The bounds
    // check runs before the table allocation, so a silly layer count in a
    // small file dies as InvalidOffset rather than as a huge Vec.
    let table_size = u64::from(header.total_layers) * LayerHeader::SIZE as u64;
    seek_section(reader, header.layer_headers_offset, table_size, len)?;
    let mut layer_headers = Vec::with_capacity(header.total_layers as usize);
    for _ in 0..header.total_layers {
        layer_headers.push(LayerHeader::read_from(reader)?);
    }

    let preview = read_preview(reader, header.preview_header_offset, len, "preview")?;
    let thumbnail = read_preview(reader, header.thumbnail_header_offset, len, "thumbnail")?;

    // Headers may alias one data region, so the per-section bounds check
    // does not cap the aggregate. Disjoint sections never sum past the
    // stream length; hold the running total to it before each allocation.
    let mut total_data = 0u64;
    let mut layers = Vec::with_capacity(layer_headers.len());
    for lh in &layer_headers {
        seek_section(reader, lh.data_offset, u64::from(lh.data_size), len)?;
        total_data += u64::from(lh.data_size);
        if total_data > len {
            return Err(PhotonError::LayerDataTooLarge {
                total: total_data,
                len,
            });
        }
        let mut data = vec![0u8; lh.data_size as usize];
        read_exact_section(reader, &mut data, "layer data")?;
        layers.push(Layer {
            data,
            absolute_height: lh.absolute_height,
            exposure_time: lh.exposure_time,
            off_time: lh.off_time,
        });
    }

    Ok(PhotonFile {
        plate_x: header.plate_x,
        plate_y: header.plate_y,
        plate_z: header.plate_z,
        layer_thickness: header.layer_thickness,
        normal_exposure_time: header.normal_exposure_time,
        bottom_exposure_time: header.bottom_exposure_time,
        off_time: header.off_time,
        bottom_layers: header.bottom_layers,
        screen_height: header.screen_height,
        screen_width: header.screen_width,
        light_curing_type: header.light_curing_type,
        preview,
        thumbnail,
        layers,
    })
}

/// Bounds-check a section against the stream, then seek to its start.
fn seek_section<R: Seek>(reader: &mut R, offset: u32, size: u64, len: u64) -> Result<()> {
    let offset = u64::from(offset);
    if offset + size > len {
        return Err(PhotonError::InvalidOffset { offset, size, len });
    }
    reader.seek(SeekFrom::Start(offset))?;
    Ok(())
}

fn read_preview<R: Read + Seek>(
    reader: &mut R,
    header_offset: u32,
    len: u64,
    section: &'static str,
) -> Result<Raster> {
    seek_section(reader, header_offset, PreviewHeader::SIZE as u64, len)?;
    let ph = PreviewHeader::read_from(reader, section)?;
    debug!(
        "{section}: {}x{}, {} packed bytes",
        ph.width, ph.height, ph.data_size
    );

    if u64::from(ph.width) * u64::from(ph.height) > MAX_PREVIEW_PIXELS {
        return Err(PhotonError::DimensionsTooLarge {
            width: ph.width,
            height: ph.height,
        });
    }

    seek_section(reader, ph.data_offset, u64::from(ph.data_size), len)?;
    let mut data = vec![0u8; ph.data_size as usize];
    read_exact_section(reader, &mut data, section)?;

    let words = preview::le_bytes_to_words(&data);
    preview::decode(&words, ph.width, ph.height)
}

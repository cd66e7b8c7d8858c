//! Offset planner: section sizes in, section offsets out.
//!
//! Sections are laid out in one fixed order: file header, preview header,
//! preview data, thumbnail header, thumbnail data, the contiguous layer
//! header table, then each layer's data. The plan runs to completion before
//! any header record is built, so records are only ever written with final
//! offsets.

use crate::error::{PhotonError, Result};
use crate::records::{FileHeader, LayerHeader, PreviewHeader};

/// Every section offset of an encoded file, plus its total size.
#[derive(Debug)]
pub(crate) struct FileLayout {
    pub preview_header: u32,
    pub preview_data: u32,
    pub thumbnail_header: u32,
    pub thumbnail_data: u32,
    /// Start of the layer header table. Meaningful even with no layers:
    /// the file header records it either way. Individual headers sit at
    /// fixed strides from here; only their data offsets need materializing.
    pub layer_headers_start: u32,
    pub layer_data: Vec<u32>,
    pub file_size: u64,
}

/// Plan the layout for the given section sizes in a single forward pass.
///
/// Fails with [`PhotonError::FileTooLarge`] when the file outgrows what the
/// format's u32 offset and size fields can address.
pub(crate) fn plan(
    preview_data_len: usize,
    thumbnail_data_len: usize,
    layer_data_lens: &[usize],
) -> Result<FileLayout> {
    let mut pos = FileHeader::SIZE as u64;

    let preview_header = offset32(pos)?;
    pos += PreviewHeader::SIZE as u64;
    let preview_data = offset32(pos)?;
    pos += preview_data_len as u64;

    let thumbnail_header = offset32(pos)?;
    pos += PreviewHeader::SIZE as u64;
    let thumbnail_data = offset32(pos)?;
    pos += thumbnail_data_len as u64;

    let layer_headers_start = offset32(pos)?;
    pos += LayerHeader::SIZE as u64 * layer_data_lens.len() as u64;

    let mut layer_data = Vec::with_capacity(layer_data_lens.len());
    for &len in layer_data_lens {
        layer_data.push(offset32(pos)?);
        pos += len as u64;
    }

    // Size fields are u32 like the offsets; requiring the total to fit
    // keeps every section size representable too.
    if pos > u64::from(u32::MAX) {
        return Err(PhotonError::FileTooLarge { size: pos });
    }

    Ok(FileLayout {
        preview_header,
        preview_data,
        thumbnail_header,
        thumbnail_data,
        layer_headers_start,
        layer_data,
        file_size: pos,
    })
}

fn offset32(pos: u64) -> Result<u32> {
    u32::try_from(pos).map_err(|_| PhotonError::FileTooLarge { size: pos })
}

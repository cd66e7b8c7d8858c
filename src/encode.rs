//! Whole-file encoding: plan the layout, then write every section in order.

use std::io::Write;

use log::debug;

use crate::error::Result;
use crate::layout;
use crate::model::PhotonFile;
use crate::preview;
use crate::records::{FileHeader, LayerHeader, PreviewHeader};

pub(crate) fn encode_file<W: Write>(file: &PhotonFile, writer: &mut W) -> Result<()> {
    let preview_bytes = preview::words_to_le_bytes(&preview::encode(&file.preview));
    let thumbnail_bytes = preview::words_to_le_bytes(&preview::encode(&file.thumbnail));
    let layer_lens: Vec<usize> = file.layers.iter().map(|l| l.data.len()).collect();

    let plan = layout::plan(preview_bytes.len(), thumbnail_bytes.len(), &layer_lens)?;
    debug!(
        "planned {} bytes for {} layers",
        plan.file_size,
        file.layers.len()
    );

    // plan() succeeded, so every section size and count below fits in u32.
    let header = FileHeader {
        plate_x: file.plate_x,
        plate_y: file.plate_y,
        plate_z: file.plate_z,
        layer_thickness: file.layer_thickness,
        normal_exposure_time: file.normal_exposure_time,
        bottom_exposure_time: file.bottom_exposure_time,
        off_time: file.off_time,
        bottom_layers: file.bottom_layers,
        screen_height: file.screen_height,
        screen_width: file.screen_width,
        preview_header_offset: plan.preview_header,
        layer_headers_offset: plan.layer_headers_start,
        total_layers: file.layers.len() as u32,
        thumbnail_header_offset: plan.thumbnail_header,
        light_curing_type: file.light_curing_type,
    };
    header.write_to(writer)?;

    PreviewHeader {
        width: file.preview.width(),
        height: file.preview.height(),
        data_offset: plan.preview_data,
        data_size: preview_bytes.len() as u32,
    }
    .write_to(writer)?;
    writer.write_all(&preview_bytes)?;

    PreviewHeader {
        width: file.thumbnail.width(),
        height: file.thumbnail.height(),
        data_offset: plan.thumbnail_data,
        data_size: thumbnail_bytes.len() as u32,
    }
    .write_to(writer)?;
    writer.write_all(&thumbnail_bytes)?;

    for (layer, &data_offset) in file.layers.iter().zip(&plan.layer_data) {
        LayerHeader {
            absolute_height: layer.absolute_height,
            exposure_time: layer.exposure_time,
            off_time: layer.off_time,
            data_offset,
            data_size: layer.data.len() as u32,
        }
        .write_to(writer)?;
    }
    for layer in &file.layers {
        writer.write_all(&layer.data)?;
    }

    Ok(())
}

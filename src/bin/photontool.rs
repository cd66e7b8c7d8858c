//! photontool: inspect and edit `.photon`/`.cbddlp` files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::{GrayImage, RgbImage};
use rgb::{ComponentBytes, FromSlice};

use photonfile::{PhotonFile, Raster, mask};

/// Inspect and edit .photon/.cbddlp resin printer files.
#[derive(Parser)]
#[command(name = "photontool", version, about)]
struct Args {
    /// Input .photon/.cbddlp file
    input: PathBuf,

    /// Re-encode the (possibly edited) file here
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the decoded print parameters and layer table
    #[arg(long)]
    dump: bool,

    /// Write preview.png and thumbnail.png
    #[arg(long)]
    extract_previews: bool,

    /// Decode layer N against the screen bounds and write layer_N.png
    #[arg(long, value_name = "N")]
    extract_layer: Option<usize>,

    /// Directory extracted images go to
    #[arg(long, value_name = "DIR", default_value = ".")]
    extract_dir: PathBuf,

    /// Replace the preview image with a PNG before re-encoding
    #[arg(long, value_name = "PNG")]
    replace_preview: Option<PathBuf>,

    /// Replace the thumbnail image with a PNG before re-encoding
    #[arg(long, value_name = "PNG")]
    replace_thumbnail: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut reader = BufReader::new(
        File::open(&args.input).with_context(|| format!("opening {}", args.input.display()))?,
    );
    let mut file = PhotonFile::decode(&mut reader)
        .with_context(|| format!("decoding {}", args.input.display()))?;

    if args.dump {
        dump(&file);
    }

    if args.extract_previews {
        save_raster(&file.preview, &args.extract_dir.join("preview.png"))?;
        save_raster(&file.thumbnail, &args.extract_dir.join("thumbnail.png"))?;
    }

    if let Some(index) = args.extract_layer {
        extract_layer(&file, index, &args.extract_dir)?;
    }

    if let Some(path) = &args.replace_preview {
        file.preview = load_raster(path)?;
    }
    if let Some(path) = &args.replace_thumbnail {
        file.thumbnail = load_raster(path)?;
    }

    if let Some(path) = &args.output {
        let mut writer = BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        );
        file.encode_to(&mut writer)
            .with_context(|| format!("encoding {}", path.display()))?;
        writer.flush()?;
    }

    Ok(())
}

fn dump(file: &PhotonFile) {
    println!(
        "plate:           {} x {} x {} mm",
        file.plate_x, file.plate_y, file.plate_z
    );
    println!(
        "screen:          {} x {} px",
        file.screen_width, file.screen_height
    );
    println!("layer thickness: {} mm", file.layer_thickness);
    println!(
        "exposure:        {} s normal, {} s bottom",
        file.normal_exposure_time, file.bottom_exposure_time
    );
    println!("off time:        {} s", file.off_time);
    println!("bottom layers:   {}", file.bottom_layers);
    println!("light curing:    {}", file.light_curing_type);
    println!(
        "preview:         {} x {} px",
        file.preview.width(),
        file.preview.height()
    );
    println!(
        "thumbnail:       {} x {} px",
        file.thumbnail.width(),
        file.thumbnail.height()
    );
    println!("layers:          {}", file.layers.len());
    for (i, layer) in file.layers.iter().enumerate() {
        println!(
            "  [{i:4}] z {:8.3} mm  exposure {:5.1} s  off {:4.1} s  {} bytes",
            layer.absolute_height,
            layer.exposure_time,
            layer.off_time,
            layer.data.len()
        );
    }
}

fn extract_layer(file: &PhotonFile, index: usize, dir: &Path) -> Result<()> {
    let Some(layer) = file.layers.get(index) else {
        bail!(
            "layer {index} out of range: file has {} layers",
            file.layers.len()
        );
    };
    let (w, h) = (file.screen_width, file.screen_height);
    if u64::from(w) * u64::from(h) > 1 << 28 {
        bail!("screen dimensions {w}x{h} look corrupt");
    }

    let mask = mask::decode(&layer.data, w, h)?;
    let img = GrayImage::from_fn(w, h, |x, y| {
        image::Luma([if mask.get(x, y) == Some(true) { 255 } else { 0 }])
    });
    let path = dir.join(format!("layer_{index}.png"));
    img.save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    let img = RgbImage::from_raw(
        raster.width(),
        raster.height(),
        raster.pixels().as_bytes().to_vec(),
    )
    .context("raster buffer disagrees with its bounds")?;
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)
        .with_context(|| format!("reading {}", path.display()))?
        .to_rgb8();
    let (width, height) = img.dimensions();
    let pixels = img.into_raw().as_rgb().to_vec();
    Ok(Raster::from_pixels(width, height, pixels)?)
}

/// Errors from `.photon`/`.cbddlp` decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PhotonError {
    #[error("bad magic: expected {expected:#010x}, found {found:#010x}")]
    MalformedHeader { expected: u32, found: u32 },

    #[error("unexpected end of stream while reading {section}")]
    TruncatedStream { section: &'static str },

    #[error("section at offset {offset:#x} ({size} bytes) lies outside the {len}-byte stream")]
    InvalidOffset { offset: u64, size: u64, len: u64 },

    #[error("layer headers declare {total} bytes of data, more than the {len}-byte stream holds")]
    LayerDataTooLarge { total: u64, len: u64 },

    #[error("raster declared {width}x{height} but carries {pixels} pixels")]
    DimensionMismatch {
        width: u32,
        height: u32,
        pixels: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("encoded file would span {size} bytes, beyond the format's u32 offsets")]
    FileTooLarge { size: u64 },

    #[error("i/o error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, PhotonError>;

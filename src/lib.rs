//! # photonfile
//!
//! Decoder and encoder for `.photon`/`.cbddlp` files, the container the
//! Anycubic Photon family of masked-SLA resin printers prints from.
//!
//! ## Layout
//!
//! A file is a fixed little-endian skeleton: a 108-byte file header, two
//! packed preview rasters (each behind a 32-byte header), a contiguous
//! table of 36-byte layer headers, then every layer's run-length 1-bit
//! mask. All cross-references are absolute byte offsets; encoding replans
//! them from scratch, so a decode→edit→encode pass can never leak stale
//! offsets.
//!
//! ## Codecs
//!
//! - [`mask`]: the per-layer 1-bit run-length codec, column-major.
//! - [`preview`]: the 16-bit packed preview pixel codec, row-major with
//!   fill runs.
//!
//! Layer images stay raw on decode ([`Layer::data`]); decode them against
//! the screen bounds only when needed.
//!
//! ## Non-Goals
//!
//! - Variant containers (`.ctb`, `.phz`, `.pws`): different header
//!   layouts, often encrypted
//! - Validating print physics (exposure times, layer heights)
//! - Streaming decode; a file is materialized whole
//!
//! ## Credits
//!
//! The wire layout follows the community reverse engineering around the
//! Photon File Validator and catibo projects.
//!
//! ## Usage
//!
//! ```no_run
//! use photonfile::PhotonFile;
//!
//! let mut input = std::fs::File::open("print.photon")?;
//! let mut file = PhotonFile::decode(&mut input)?;
//!
//! file.normal_exposure_time = 7.5;
//!
//! let mut output = std::fs::File::create("patched.photon")?;
//! file.encode_to(&mut output)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod decode;
mod encode;
mod error;
mod layout;
mod model;
mod raster;

pub mod mask;
pub mod preview;
pub mod records;

// Re-exports
pub use error::{PhotonError, Result};
pub use model::{Layer, PhotonFile};
pub use raster::{Mask, Raster};
pub use rgb::RGB8;

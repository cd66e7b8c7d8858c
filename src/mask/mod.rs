//! The 1-bit layer mask codec.
//!
//! Layer images are bilevel and run-length encoded, one byte per run, in
//! column-major order: pixel index `p` maps to `y = p % height`,
//! `x = p / height`. A byte below 0x80 skips that many unset pixels; a byte
//! with the top bit set marks `byte & 0x7F` consecutive pixels.
//!
//! [`PhotonFile::decode`](crate::PhotonFile::decode) keeps layer data as the
//! raw byte stream; this module is how callers turn it into pixels and back.

mod decode;
mod encode;

pub use self::decode::decode;
pub use self::encode::encode;

/// Top bit of a run byte: the run marks set pixels.
pub(crate) const FLAG_SET: u8 = 0x80;

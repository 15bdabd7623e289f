//! Error Types for Recframe
//!
//! This module defines all error types that can occur while reading or
//! writing record containers.
//!
//! ## Error Categories
//!
//! ### I/O Errors
//! - `Io`: the underlying stream failed mid-read (anything other than a
//!   clean end-of-stream, which is *not* an error)
//!
//! ### Framing Errors
//! - `TruncatedRecord`: a frame declared more bytes than the stream had
//!   left. Frame boundaries cannot be recovered past this point, so the
//!   rest of the stream is unreadable.
//!
//! ### Payload Errors
//! - `PayloadDecode`: the frame payload did not parse as a serialized
//!   feature map
//!
//! ### Integrity Errors
//! - `ChecksumMismatch`: a stored masked CRC32C did not match the
//!   recomputed one. Only raised when verification is enabled on the
//!   reader; the default reader carries the stored checksums through
//!   without checking them.
//!
//! ## Usage
//! All fallible operations return `Result<T>` which is aliased to
//! `Result<T, Error>`, so `?` propagation works throughout.
//!
//! Every error except `Io` carries the byte offset of the frame that
//! failed, measured from the start of the stream.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Truncated record at byte offset {offset}: stream ended {expected} bytes short")]
    TruncatedRecord { offset: u64, expected: u64 },

    #[error("Payload decode failed at byte offset {offset}: {reason}")]
    PayloadDecode { offset: u64, reason: String },

    #[error("Checksum mismatch at byte offset {offset}: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        offset: u64,
        stored: u32,
        computed: u32,
    },
}

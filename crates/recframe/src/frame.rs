//! Frame Codec - Binary Layout of One Record
//!
//! This module owns the exact byte layout of a record frame and nothing
//! else: no payload interpretation, no checksum policy.
//!
//! ## Frame Structure
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────────┬──────────────┐
//! │ length       │ length_crc   │ payload          │ payload_crc  │
//! │ u64 LE       │ u32 LE       │ `length` bytes   │ u32 LE       │
//! │ (8 bytes)    │ (4 bytes)    │                  │ (4 bytes)    │
//! └──────────────┴──────────────┴──────────────────┴──────────────┘
//!
//! length_crc  = mask(crc32c(length bytes))
//! payload_crc = mask(crc32c(payload))
//! ```
//!
//! A file is simply `frame*` with no file header, footer, or index. The
//! length field alone governs how many payload bytes the reader consumes,
//! which is why a truncated frame is unrecoverable: there is no magic
//! number to resynchronize on.
//!
//! ## End-of-Stream vs Truncation
//!
//! - Fewer than 8 bytes where a new length field should start: clean end
//!   of stream, `Ok(None)`.
//! - Stream ends anywhere after a complete length field: the frame
//!   declared bytes that never arrived, `Err(TruncatedRecord)`.

use std::io::{ErrorKind, Read};

use bytes::{BufMut, Bytes, BytesMut};
use recframe_core::crc::masked_crc32c;
use recframe_core::{Error, Result};

/// Size of the length field (8 bytes)
pub const LENGTH_SIZE: usize = 8;

/// Size of each CRC field (4 bytes)
pub const CRC_SIZE: usize = 4;

/// Fixed bytes added around every payload (8 + 4 + 4)
pub const FRAME_OVERHEAD: usize = LENGTH_SIZE + 2 * CRC_SIZE;

/// Largest up-front buffer reservation when reading a payload. A corrupt
/// length field must not size an allocation before any payload byte has
/// actually been read.
const MAX_PREALLOC: u64 = 1024 * 1024;

/// One frame as it sits on disk, checksums carried but not checked.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// The serialized feature-map payload
    pub payload: Bytes,

    /// Stored masked CRC32C of the length field
    pub length_crc: u32,

    /// Stored masked CRC32C of the payload
    pub payload_crc: u32,
}

/// Wrap a payload in a complete frame, ready to append to a stream.
pub fn pack(payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(FRAME_OVERHEAD + payload.len());

    let length_bytes = (payload.len() as u64).to_le_bytes();
    buf.put_slice(&length_bytes);
    buf.put_u32_le(masked_crc32c(&length_bytes));
    buf.put_slice(payload);
    buf.put_u32_le(masked_crc32c(payload));

    buf.freeze()
}

/// Read one frame from `reader`.
///
/// Returns `Ok(None)` on clean end-of-stream (fewer than 8 bytes left at a
/// frame boundary). `offset` is the byte position of this frame's length
/// field, used only for error reporting.
pub fn read_frame<R: Read>(reader: &mut R, offset: u64) -> Result<Option<RawFrame>> {
    // Length field. A partial read here still counts as clean EOF: the
    // stream ended at a frame boundary as far as framing is concerned.
    let mut length_bytes = [0u8; LENGTH_SIZE];
    match reader.read_exact(&mut length_bytes) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }
    let length = u64::from_le_bytes(length_bytes);

    // Length CRC
    let mut crc_bytes = [0u8; CRC_SIZE];
    match reader.read_exact(&mut crc_bytes) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            return Err(Error::TruncatedRecord {
                offset,
                expected: CRC_SIZE as u64 + length + CRC_SIZE as u64,
            });
        }
        Err(e) => return Err(e.into()),
    }
    let length_crc = u32::from_le_bytes(crc_bytes);

    // Payload. Read through `take` so the declared length bounds the read
    // but never drives the allocation: the buffer grows only as bytes
    // arrive.
    let mut payload = Vec::with_capacity(length.min(MAX_PREALLOC) as usize);
    let read = reader.by_ref().take(length).read_to_end(&mut payload)? as u64;
    if read < length {
        return Err(Error::TruncatedRecord {
            offset,
            expected: (length - read) + CRC_SIZE as u64,
        });
    }

    // Payload CRC
    match reader.read_exact(&mut crc_bytes) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            return Err(Error::TruncatedRecord {
                offset,
                expected: CRC_SIZE as u64,
            });
        }
        Err(e) => return Err(e.into()),
    }
    let payload_crc = u32::from_le_bytes(crc_bytes);

    Ok(Some(RawFrame {
        payload: Bytes::from(payload),
        length_crc,
        payload_crc,
    }))
}

//! Record Reader - Lazy Iteration over a Frame Stream
//!
//! [`RecordReader`] wraps any blocking `Read` source and yields one
//! decoded [`FeatureMap`] per frame. It is pull-based: each `next()` call
//! performs exactly one frame's worth of reads and nothing more, so the
//! caller controls pacing entirely. No prefetch, no internal buffering
//! beyond the current frame.
//!
//! ## Termination
//!
//! The iterator is finite and forward-only:
//! - Clean end-of-stream (fewer than 8 bytes at a frame boundary) ends the
//!   iteration without an error. An empty stream yields nothing.
//! - Any error (`TruncatedRecord`, `PayloadDecode`, `ChecksumMismatch`) is
//!   yielded once, after which the iterator is terminal. There is no
//!   skip-and-continue: frames carry no magic number, so boundaries cannot
//!   be re-found after a bad length field.
//!
//! Re-reading requires reopening or rewinding the underlying stream and
//! building a new reader.
//!
//! ## Checksum Verification
//!
//! Stored CRCs are read and carried but, by default, never compared
//! against recomputed values; writers compute checksums on the way out
//! and historically nothing checked them on the way back in. Set
//! [`ReaderConfig::verify_checksums`] to opt into verification of both the
//! length CRC and the payload CRC per frame.
//!
//! ## Example
//! ```ignore
//! use recframe::read_records;
//!
//! let file = std::fs::File::open("data.rec")?;
//! for map in read_records(std::io::BufReader::new(file)) {
//!     let map = map?;
//!     println!("{} features", map.len());
//! }
//! ```

use std::io::Read;

use recframe_core::crc::masked_crc32c;
use recframe_core::{Error, FeatureMap, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{codec, frame};

/// Reader behavior knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Recompute and compare both stored CRCs for every frame. Off by
    /// default: the default reader trusts the stream and only uses the
    /// length field for framing.
    #[serde(default)]
    pub verify_checksums: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            verify_checksums: false,
        }
    }
}

/// Iterate feature maps out of a frame stream with default configuration.
pub fn read_records<R: Read>(reader: R) -> RecordReader<R> {
    RecordReader::new(reader)
}

/// Lazy, finite, forward-only iterator over the frames in a byte stream.
///
/// NOT thread-safe (owns a stream cursor). For concurrent reads open
/// independent streams, one reader each; frames are self-contained so no
/// coordination between readers is needed.
pub struct RecordReader<R: Read> {
    inner: R,
    config: ReaderConfig,

    /// Byte offset of the next frame's length field
    offset: u64,

    /// Set on clean EOF or after the first error; the iterator is then
    /// permanently exhausted
    done: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    pub fn with_config(inner: R, config: ReaderConfig) -> Self {
        Self {
            inner,
            config,
            offset: 0,
            done: false,
        }
    }

    /// Byte offset of the next frame to be read.
    pub fn position(&self) -> u64 {
        self.offset
    }

    /// Give the stream back to the caller.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_next(&mut self) -> Result<Option<FeatureMap>> {
        let frame_offset = self.offset;

        let Some(raw) = frame::read_frame(&mut self.inner, frame_offset)? else {
            debug!(offset = frame_offset, "end of record stream");
            return Ok(None);
        };

        if self.config.verify_checksums {
            let length_bytes = (raw.payload.len() as u64).to_le_bytes();
            let computed = masked_crc32c(&length_bytes);
            if computed != raw.length_crc {
                return Err(Error::ChecksumMismatch {
                    offset: frame_offset,
                    stored: raw.length_crc,
                    computed,
                });
            }

            let computed = masked_crc32c(&raw.payload);
            if computed != raw.payload_crc {
                return Err(Error::ChecksumMismatch {
                    offset: frame_offset,
                    stored: raw.payload_crc,
                    computed,
                });
            }
        }

        let map = codec::decode(&raw.payload, frame_offset)?;

        self.offset = frame_offset + frame::FRAME_OVERHEAD as u64 + raw.payload.len() as u64;

        debug!(
            offset = frame_offset,
            payload_bytes = raw.payload.len(),
            features = map.len(),
            "record decoded"
        );

        Ok(Some(map))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<FeatureMap>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_next() {
            Ok(Some(map)) => Some(Ok(map)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                warn!(error = %e, "record stream ended with error");
                Some(Err(e))
            }
        }
    }
}

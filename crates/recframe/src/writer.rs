//! Record Writer - Producing Frames from Feature Maps
//!
//! [`write_record`] is the whole write path: serialize the feature map,
//! wrap it in a frame, hand back an immutable byte buffer. Each call is
//! atomic and independent; there is no partial or streaming state, so the
//! caller can append the returned frames to any stream in any order they
//! choose and the file stays well-formed.
//!
//! [`RecordWriter`] is a thin convenience over that for the common case of
//! appending to a single `Write` sink.
//!
//! ## Example
//! ```ignore
//! use recframe::{FeatureMap, FeatureValue, RecordWriter};
//!
//! let mut writer = RecordWriter::new(std::fs::File::create("data.rec")?);
//! let mut map = FeatureMap::new();
//! map.insert("label".to_string(), FeatureValue::int64_scalar(1));
//! writer.write(&map)?;
//! writer.flush()?;
//! ```

use std::io::Write;

use bytes::Bytes;
use recframe_core::{FeatureMap, Result};
use tracing::debug;

use crate::{codec, frame};

/// Produce one complete frame for a feature map.
pub fn write_record(map: &FeatureMap) -> Bytes {
    frame::pack(&codec::encode(map))
}

/// Appends frames to an underlying `Write` sink, one per feature map.
///
/// NOT thread-safe; wrap one writer per output stream. Buffering and
/// durability (flush/fsync) remain the sink's business.
pub struct RecordWriter<W: Write> {
    inner: W,

    /// Frames appended so far
    records_written: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            records_written: 0,
        }
    }

    /// Serialize `map` and append its frame to the sink.
    pub fn write(&mut self, map: &FeatureMap) -> Result<()> {
        let frame = write_record(map);
        self.inner.write_all(&frame)?;
        self.records_written += 1;

        debug!(
            records = self.records_written,
            frame_bytes = frame.len(),
            "record appended"
        );

        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Number of frames written through this writer.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Give the sink back to the caller.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recframe_core::FeatureValue;

    #[test]
    fn test_write_record_frame_overhead() {
        let mut map = FeatureMap::new();
        map.insert("x".to_string(), FeatureValue::int64_list(vec![1, 2, 3]));

        let frame_bytes = write_record(&map);
        let payload = codec::encode(&map);
        assert_eq!(frame_bytes.len(), frame::FRAME_OVERHEAD + payload.len());
    }

    #[test]
    fn test_write_record_empty_map() {
        // An empty feature map still produces a valid (payload-bearing) frame
        let frame_bytes = write_record(&FeatureMap::new());
        assert!(frame_bytes.len() >= frame::FRAME_OVERHEAD);
    }

    #[test]
    fn test_record_writer_appends_frames_back_to_back() {
        let mut map = FeatureMap::new();
        map.insert("n".to_string(), FeatureValue::int64_scalar(5));

        let mut writer = RecordWriter::new(Vec::new());
        writer.write(&map).unwrap();
        writer.write(&map).unwrap();
        assert_eq!(writer.records_written(), 2);

        let buf = writer.into_inner();
        let single = write_record(&map);
        assert_eq!(buf.len(), 2 * single.len());
        assert_eq!(&buf[..single.len()], single.as_ref());
        assert_eq!(&buf[single.len()..], single.as_ref());
    }
}

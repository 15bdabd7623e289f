//! Recframe - Checksummed Record Container for Feature Maps
//!
//! This crate reads and writes a simple append-only container format: a
//! stream of length-prefixed frames, each holding one serialized feature
//! map and guarded by masked CRC32C checksums.
//!
//! ## File Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Frame 1                                                 │
//! │ - Payload length (8 bytes, u64 LE)                      │
//! │ - Masked CRC32C of the length bytes (4 bytes, u32 LE)   │
//! │ - Payload: serialized Example message (length bytes)    │
//! │ - Masked CRC32C of the payload (4 bytes, u32 LE)        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Frame 2                                                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ ...                                                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! No file header, no footer, no index: frames are written back to back
//! and read back in order. That keeps appends trivially cheap (write one
//! self-contained buffer) at the cost of sequential-only reads.
//!
//! ## Main Components
//!
//! ### Writing
//! [`write_record`] turns one [`FeatureMap`] into one ready-to-append
//! frame; [`RecordWriter`] appends frames to any `Write` sink.
//!
//! ### Reading
//! [`read_records`] / [`RecordReader`] lazily iterate the frames of any
//! `Read` source, yielding one decoded [`FeatureMap`] per frame. Clean
//! end-of-stream ends the iteration; truncation and decode failures are
//! yielded as errors carrying the byte offset of the bad frame.
//!
//! ## Usage
//!
//! ```ignore
//! use recframe::{read_records, FeatureMap, FeatureValue, RecordWriter};
//!
//! // Write
//! let mut writer = RecordWriter::new(std::fs::File::create("data.rec")?);
//! let mut map = FeatureMap::new();
//! map.insert("label".to_string(), FeatureValue::int64_scalar(1));
//! map.insert("name".to_string(), FeatureValue::bytes_scalar("cat"));
//! writer.write(&map)?;
//!
//! // Read
//! let file = std::io::BufReader::new(std::fs::File::open("data.rec")?);
//! for map in read_records(file) {
//!     println!("{:?}", map?);
//! }
//! ```
//!
//! ## Design Decisions
//!
//! ### Checksums Are Written, Not Checked
//! Both CRC fields are always computed on write, but the default reader
//! never verifies them; it reads them and moves on. Verification is
//! available behind [`ReaderConfig::verify_checksums`] for callers that
//! want corruption to surface as [`Error::ChecksumMismatch`].
//!
//! ### Truncation Is Fatal
//! A frame that declares more bytes than the stream holds ends the read
//! with [`Error::TruncatedRecord`]. The format has no resync marker, so
//! skipping the bad frame and continuing is not possible.
//!
//! ### Synchronous by Construction
//! Every operation is a plain blocking call over `Read`/`Write`. There is
//! no internal concurrency or shared state; one reader or writer per
//! stream handle is the whole model.

pub mod codec;
pub mod frame;
pub mod reader;
pub mod writer;

pub use reader::{read_records, ReaderConfig, RecordReader};
pub use writer::{write_record, RecordWriter};

pub use recframe_core::crc::{mask, masked_crc32c, unmask};
pub use recframe_core::{Error, FeatureMap, FeatureValue, Result};

//! Recframe Protocol Buffer Definitions
//!
//! This crate defines the wire schema for a record payload: an `Example`
//! message holding named features, each carrying one typed value list.
//!
//! ## Message Hierarchy
//!
//! ```text
//! Example
//! └── Features
//!     └── map<string, Feature>
//!         └── Feature
//!             ├── bytes_list: BytesList   (tag 1)
//!             ├── float_list: FloatList   (tag 2)
//!             └── int64_list: Int64List   (tag 3)
//! ```
//!
//! The messages are hand-derived with `prost` rather than generated from a
//! `.proto` file: there are six small messages and no services, so a build
//! script and a protoc dependency would buy nothing. Field tags match the
//! canonical schema, so the wire format is interchangeable with files
//! produced by other implementations.
//!
//! ## Design Decisions
//!
//! - The canonical schema declares `Feature`'s three lists as a `oneof`.
//!   Here they are three optional fields (same tags, same wire format) so
//!   a message that carries more than one populated list still parses; the
//!   codec layer then applies a fixed precedence instead of letting
//!   last-field-wins decide.
//! - `Features.feature` is a `btree_map`, so re-encoding a parsed message
//!   is deterministic.
//! - Byte values decode into `bytes::Bytes`, shared with the rest of the
//!   workspace without copying.
//!
//! ## Usage
//!
//! ```ignore
//! use prost::Message;
//! use recframe_proto::{BytesList, Example, Feature, Features};
//!
//! let example = Example::decode(payload)?;
//! for (name, feature) in &example.features.unwrap().feature {
//!     // inspect feature.bytes_list / int64_list / float_list
//! }
//! ```

use std::collections::BTreeMap;

use bytes::Bytes;

/// Ordered list of byte strings.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BytesList {
    #[prost(bytes = "bytes", repeated, tag = "1")]
    pub value: Vec<Bytes>,
}

/// Ordered list of 32-bit floats (packed on the wire).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FloatList {
    #[prost(float, repeated, tag = "1")]
    pub value: Vec<f32>,
}

/// Ordered list of 64-bit signed integers (packed on the wire).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Int64List {
    #[prost(int64, repeated, tag = "1")]
    pub value: Vec<i64>,
}

/// One named feature's value. At most one list should be populated; the
/// codec decides what to do when that is violated.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Feature {
    #[prost(message, optional, tag = "1")]
    pub bytes_list: Option<BytesList>,

    #[prost(message, optional, tag = "2")]
    pub float_list: Option<FloatList>,

    #[prost(message, optional, tag = "3")]
    pub int64_list: Option<Int64List>,
}

/// Named feature collection.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Features {
    #[prost(btree_map = "string, message", tag = "1")]
    pub feature: BTreeMap<String, Feature>,
}

/// Top-level record payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Example {
    #[prost(message, optional, tag = "1")]
    pub features: Option<Features>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_empty_example_encodes_to_empty_or_minimal_bytes() {
        let example = Example { features: None };
        let bytes = example.encode_to_vec();
        assert!(bytes.is_empty());

        let decoded = Example::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, example);
    }

    #[test]
    fn test_feature_with_multiple_lists_survives_roundtrip() {
        // Deliberately violates the one-list convention; both lists must
        // come back so the codec can apply its precedence rule.
        let feature = Feature {
            bytes_list: Some(BytesList {
                value: vec![Bytes::from("a")],
            }),
            float_list: None,
            int64_list: Some(Int64List { value: vec![1] }),
        };

        let bytes = feature.encode_to_vec();
        let decoded = Feature::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, feature);
    }

    #[test]
    fn test_example_roundtrip() {
        let mut feature_map = BTreeMap::new();
        feature_map.insert(
            "x".to_string(),
            Feature {
                bytes_list: None,
                float_list: Some(FloatList {
                    value: vec![1.0, 2.5],
                }),
                int64_list: None,
            },
        );

        let example = Example {
            features: Some(Features {
                feature: feature_map,
            }),
        };

        let bytes = example.encode_to_vec();
        let decoded = Example::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, example);
    }
}

//! Feature Map Serializer
//!
//! Bidirectional conversion between a [`FeatureMap`] and the serialized
//! `Example` payload that goes inside a frame.
//!
//! ## Encode
//! Each `FeatureValue` becomes the matching list message (`BytesList`,
//! `Int64List`, `FloatList`) inside a `Feature`, assembled into
//! `Features` → `Example` and serialized with prost. Encoding is
//! deterministic because both the feature map and the proto map are
//! ordered.
//!
//! ## Decode
//! Parsing is lenient about the one-list-per-feature convention. When a
//! feature arrives with more than one populated list, the first non-empty
//! list in [`DECODE_PRECEDENCE`] order wins and the rest are silently
//! ignored. A feature whose lists are all empty contributes no entry to
//! the result.

use bytes::Bytes;
use prost::Message;
use recframe_core::{Error, FeatureMap, FeatureValue, Result};
use recframe_proto::{BytesList, Example, Feature, Features, FloatList, Int64List};

/// Order in which a feature's lists are probed during decode. The first
/// non-empty list wins; later lists are dropped even if populated. Keep
/// the decode match arms in this order.
pub const DECODE_PRECEDENCE: [&str; 3] = ["bytes_list", "int64_list", "float_list"];

/// Serialize a feature map into `Example` payload bytes.
pub fn encode(map: &FeatureMap) -> Bytes {
    let mut features = Features::default();

    for (name, value) in map {
        let mut feature = Feature::default();
        match value {
            FeatureValue::Bytes(v) => {
                feature.bytes_list = Some(BytesList { value: v.clone() });
            }
            FeatureValue::Int64(v) => {
                feature.int64_list = Some(Int64List { value: v.clone() });
            }
            FeatureValue::Float(v) => {
                feature.float_list = Some(FloatList { value: v.clone() });
            }
        }
        features.feature.insert(name.clone(), feature);
    }

    let example = Example {
        features: Some(features),
    };

    Bytes::from(example.encode_to_vec())
}

/// Parse `Example` payload bytes back into a feature map.
///
/// `offset` is the byte position of the enclosing frame, carried into the
/// error when the payload does not parse.
pub fn decode(payload: &[u8], offset: u64) -> Result<FeatureMap> {
    let example = Example::decode(payload).map_err(|e| Error::PayloadDecode {
        offset,
        reason: e.to_string(),
    })?;

    let mut map = FeatureMap::new();

    let Some(features) = example.features else {
        return Ok(map);
    };

    for (name, feature) in features.feature {
        // DECODE_PRECEDENCE: bytes, then int64, then float.
        let value = if let Some(list) = feature.bytes_list.filter(|l| !l.value.is_empty()) {
            FeatureValue::Bytes(list.value)
        } else if let Some(list) = feature.int64_list.filter(|l| !l.value.is_empty()) {
            FeatureValue::Int64(list.value)
        } else if let Some(list) = feature.float_list.filter(|l| !l.value.is_empty()) {
            FeatureValue::Float(list.value)
        } else {
            // Every list empty or absent: drop the feature entirely.
            continue;
        };
        map.insert(name, value);
    }

    Ok(map)
}

//! Feature Map Data Structures
//!
//! This module defines the logical payload of one record: a named mapping
//! of typed value lists.
//!
//! ## What is a Feature Map?
//! A feature map is the unit of one logical record, similar to:
//! - A row in a columnar dataset
//! - A training example with named fields
//! - A tagged sample in a telemetry stream
//!
//! ## Structure
//! Each entry maps a feature name (string, unique) to exactly one
//! [`FeatureValue`]:
//! - **Bytes**: ordered list of byte strings
//! - **Int64**: ordered list of 64-bit signed integers
//! - **Float**: ordered list of 32-bit floats
//!
//! ## Design Decisions
//! - `FeatureMap` is a `BTreeMap` so encoding is deterministic: the same
//!   map always serializes to the same bytes regardless of insertion order
//! - Byte strings use `bytes::Bytes` for cheap cloning and slicing
//! - Scalar convenience constructors (`int64_scalar` etc.) wrap a bare
//!   value in a single-element list at the API boundary, so callers never
//!   need to build one-element vectors by hand
//!
//! ## Example
//! ```ignore
//! let mut map = FeatureMap::new();
//! map.insert("label".to_string(), FeatureValue::int64_scalar(1));
//! map.insert("image".to_string(), FeatureValue::bytes_scalar(png_bytes));
//! map.insert("weights".to_string(), FeatureValue::float_list(vec![0.1, 0.9]));
//! ```

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One logical record: feature name → typed value list.
pub type FeatureMap = BTreeMap<String, FeatureValue>;

/// A typed value list, with exactly one active variant per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureValue {
    /// Ordered list of byte strings
    Bytes(Vec<Bytes>),

    /// Ordered list of 64-bit signed integers
    Int64(Vec<i64>),

    /// Ordered list of 32-bit floats
    Float(Vec<f32>),
}

impl FeatureValue {
    /// Single byte string, wrapped in a one-element list.
    pub fn bytes_scalar(value: impl Into<Bytes>) -> Self {
        FeatureValue::Bytes(vec![value.into()])
    }

    /// List of byte strings.
    pub fn bytes_list(values: Vec<Bytes>) -> Self {
        FeatureValue::Bytes(values)
    }

    /// Single integer, wrapped in a one-element list.
    pub fn int64_scalar(value: i64) -> Self {
        FeatureValue::Int64(vec![value])
    }

    /// List of integers.
    pub fn int64_list(values: Vec<i64>) -> Self {
        FeatureValue::Int64(values)
    }

    /// Single float, wrapped in a one-element list.
    pub fn float_scalar(value: f32) -> Self {
        FeatureValue::Float(vec![value])
    }

    /// List of floats.
    pub fn float_list(values: Vec<f32>) -> Self {
        FeatureValue::Float(values)
    }

    /// Number of elements in the active list.
    pub fn len(&self) -> usize {
        match self {
            FeatureValue::Bytes(v) => v.len(),
            FeatureValue::Int64(v) => v.len(),
            FeatureValue::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

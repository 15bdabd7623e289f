pub mod crc;
pub mod error;
pub mod feature;

pub use error::{Error, Result};
pub use feature::{FeatureMap, FeatureValue};

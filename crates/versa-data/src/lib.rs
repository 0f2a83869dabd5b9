//! Versa Data
//!
//! Everything the learning core deliberately leaves out: reading tabular
//! datasets, turning categorical values into attribute codes, and scoring a
//! trained classifier.
//!
//! # Architecture
//!
//! ```text
//! JSON file → Dataset → CategoricalEncoder → Examples → versa-domain
//!                                  ↑                         ↓
//!                          query / decode  ←──────  VersionSpace → ConfusionMatrix
//! ```

#![warn(missing_docs)]

mod dataset;
mod encoding;
mod error;
mod metrics;

pub use dataset::Dataset;
pub use encoding::{parse_label, AttributeEncoding, CategoricalEncoder};
pub use error::{DataError, Result};
pub use metrics::{ConfusionMatrix, Metrics};

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Preparation configuration types.
pub mod config;
/// Centralized constants used across decoding and the text pipeline.
pub mod constants;
/// Raw, merged, and decoded record types.
pub mod data;
/// Category-string decoding and duplicate removal.
pub mod decoder;
/// Batch feature-extraction facade.
pub mod features;
/// Label-balance metrics over decoded batches.
pub mod metrics;
/// Text normalization and starting-verb extraction.
pub mod text;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{ErrorPolicy, PrepConfig};
pub use data::{
    CategoryRow, CategorySchema, DecodedBatch, DecodedRecord, FeatureRecord, MessageRow, Record,
    merge_rows,
};
pub use decoder::{CategoryDecoder, DecodeReport};
pub use errors::PrepError;
pub use features::{ExtractReport, FeatureExtractor};
pub use metrics::{CategoryShare, LabelBalance, genre_counts, label_balance};
pub use text::{
    LinguisticResources, PennTag, PosTagger, StartingVerbExtractor, TokenNormalizer,
};
pub use types::{CategoryName, Genre, RecordId, Sentence, Token};

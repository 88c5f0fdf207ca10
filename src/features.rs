use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;
use tracing::warn;

use crate::config::{ErrorPolicy, PrepConfig};
use crate::data::FeatureRecord;
use crate::errors::PrepError;
use crate::text::{LinguisticResources, StartingVerbExtractor, TokenNormalizer};

/// Facade output for loader rows: features for the surviving inputs
/// plus, under [`ErrorPolicy::BestEffort`], the skipped per-row errors.
#[derive(Clone, Debug)]
pub struct ExtractReport {
    /// Features for the rows that carried usable text, in row order.
    pub features: Vec<FeatureRecord>,
    /// Errors for rows skipped in best-effort mode; empty when failing fast.
    pub skipped: Vec<PrepError>,
}

/// Batch feature extraction over the text pipeline.
///
/// Every input is processed independently, so batches fan out across a
/// thread pool; output order always matches input order.
#[derive(Clone, Debug)]
pub struct FeatureExtractor {
    normalizer: TokenNormalizer,
    verb: StartingVerbExtractor,
    config: PrepConfig,
}

impl FeatureExtractor {
    /// Build an extractor over shared linguistic resources.
    pub fn new(resources: Arc<LinguisticResources>, config: PrepConfig) -> Self {
        Self {
            normalizer: TokenNormalizer::new(Arc::clone(&resources)),
            verb: StartingVerbExtractor::new(resources),
            config,
        }
    }

    /// Features for one text.
    pub fn extract_one(&self, text: &str) -> FeatureRecord {
        FeatureRecord {
            tokens: self.normalizer.normalize(text),
            starts_with_verb: self.verb.starts_with_verb(text),
        }
    }

    /// Features for a batch of texts, in input order.
    ///
    /// Infallible: any well-formed string normalizes (possibly to an
    /// empty token sequence), and an empty batch yields an empty output.
    pub fn extract(&self, texts: &[String]) -> Vec<FeatureRecord> {
        texts
            .par_iter()
            .map(|text| self.extract_one(text))
            .collect()
    }

    /// Features for loader rows.
    ///
    /// A row is either a JSON string or an object with a string `message`
    /// field; anything else is reported as invalid input carrying the row
    /// index, honoring the configured error policy.
    pub fn extract_rows(&self, rows: &[Value]) -> Result<ExtractReport, PrepError> {
        let mut texts = Vec::with_capacity(rows.len());
        let mut skipped = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            match row_text(index, row) {
                Ok(text) => texts.push(text.to_string()),
                Err(err) => match self.config.error_policy {
                    ErrorPolicy::FailFast => return Err(err),
                    ErrorPolicy::BestEffort => {
                        warn!(index, %err, "skipping unextractable row");
                        skipped.push(err);
                    }
                },
            }
        }
        Ok(ExtractReport {
            features: self.extract(&texts),
            skipped,
        })
    }
}

fn row_text(index: usize, row: &Value) -> Result<&str, PrepError> {
    match row {
        Value::String(text) => Ok(text),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| PrepError::InvalidInput {
                index,
                reason: "missing or non-string 'message'".to_string(),
            }),
        _ => Err(PrepError::InvalidInput {
            index,
            reason: "row is neither text nor an object".to_string(),
        }),
    }
}

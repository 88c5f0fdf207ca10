use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::{ErrorPolicy, PrepConfig};
use crate::constants::categories::{PAIR_DELIMITER, VALUE_SUFFIX_LEN};
use crate::data::{CategorySchema, DecodedBatch, DecodedRecord, Record};
use crate::errors::PrepError;

/// Decoder output: the surviving tabular batch plus, under
/// [`ErrorPolicy::BestEffort`], the per-record errors that were skipped.
#[derive(Clone, Debug)]
pub struct DecodeReport {
    /// Decoded, deduplicated records with their column schema.
    pub batch: DecodedBatch,
    /// Errors for records skipped in best-effort mode; empty when failing fast.
    pub skipped: Vec<PrepError>,
}

/// Expands the encoded categories string into named integer columns.
///
/// The column schema is established once per batch from the first record
/// and applied positionally to every other record. Decoding is a pure
/// function of its input; the decoder itself holds only the fitted
/// schema.
#[derive(Clone, Debug)]
pub struct CategoryDecoder {
    schema: CategorySchema,
}

impl CategoryDecoder {
    /// Establish the category schema from the first record of a batch.
    ///
    /// An empty batch yields an empty schema, so transforming it returns
    /// an empty output rather than an error.
    pub fn fit(records: &[Record]) -> Self {
        let names = records
            .first()
            .map(|record| {
                record
                    .categories_encoded
                    .split(PAIR_DELIMITER)
                    .map(column_name)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            schema: CategorySchema::new(names),
        }
    }

    /// The fitted column schema.
    pub fn schema(&self) -> &CategorySchema {
        &self.schema
    }

    /// Decode every record against the fitted schema and drop exact
    /// duplicates, keeping the first occurrence.
    pub fn transform(
        &self,
        records: &[Record],
        config: &PrepConfig,
    ) -> Result<DecodeReport, PrepError> {
        let mut decoded = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();
        for record in records {
            match self.decode_record(record) {
                Ok(row) => decoded.push(row),
                Err(err) => match config.error_policy {
                    ErrorPolicy::FailFast => return Err(err),
                    ErrorPolicy::BestEffort => {
                        warn!(record_id = record.id, %err, "skipping undecodable record");
                        skipped.push(err);
                    }
                },
            }
        }

        let mut seen: HashSet<DecodedRecord> = HashSet::with_capacity(decoded.len());
        let mut surviving = Vec::with_capacity(decoded.len());
        for row in decoded {
            if seen.contains(&row) {
                debug!(record_id = row.id, "dropping exact duplicate record");
                continue;
            }
            seen.insert(row.clone());
            surviving.push(row);
        }

        Ok(DecodeReport {
            batch: DecodedBatch {
                schema: self.schema.clone(),
                records: surviving,
            },
            skipped,
        })
    }

    /// One-shot fit + transform over a batch.
    pub fn decode(records: &[Record], config: &PrepConfig) -> Result<DecodeReport, PrepError> {
        Self::fit(records).transform(records, config)
    }

    fn decode_record(&self, record: &Record) -> Result<DecodedRecord, PrepError> {
        let fields: Vec<&str> = record.categories_encoded.split(PAIR_DELIMITER).collect();
        if fields.len() != self.schema.len() {
            return Err(PrepError::SchemaMismatch {
                record_id: record.id,
                expected: self.schema.len(),
                found: fields.len(),
            });
        }

        let mut values = Vec::with_capacity(fields.len());
        for (field, name) in fields.iter().zip(self.schema.names()) {
            let digit = field.chars().last().and_then(|last| last.to_digit(10));
            let value = digit.ok_or_else(|| PrepError::MalformedCategory {
                record_id: record.id,
                category: name.clone(),
                value: field.chars().last().map(String::from).unwrap_or_default(),
            })? as i64;
            if value > 1 {
                // Observed in real batches (`related-2`); carried through
                // unmodified so consumers can decide how to treat it.
                warn!(
                    record_id = record.id,
                    category = name.as_str(),
                    value,
                    "category value outside 0/1 passed through"
                );
            }
            values.push(value);
        }

        Ok(DecodedRecord {
            id: record.id,
            message: record.message.clone(),
            original: record.original.clone(),
            genre: record.genre.clone(),
            values,
        })
    }
}

/// Strip the trailing `-<digit>` suffix from one encoded pair.
fn column_name(field: &str) -> String {
    let keep = field.chars().count().saturating_sub(VALUE_SUFFIX_LEN);
    field.chars().take(keep).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, message: &str, encoded: &str) -> Record {
        Record {
            id,
            message: message.to_string(),
            original: None,
            genre: "direct".to_string(),
            categories_encoded: encoded.to_string(),
        }
    }

    #[test]
    fn fit_takes_names_from_first_record() {
        let records = vec![record(1, "a", "related-1;request-0;offer-0")];
        let decoder = CategoryDecoder::fit(&records);
        assert_eq!(decoder.schema().names(), ["related", "request", "offer"]);
    }

    #[test]
    fn fit_on_empty_batch_yields_empty_schema() {
        let decoder = CategoryDecoder::fit(&[]);
        assert!(decoder.schema().is_empty());
        let report = decoder.transform(&[], &PrepConfig::default()).expect("empty ok");
        assert!(report.batch.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn decode_expands_values_by_position() {
        let records = vec![record(1, "a", "related-1;request-0;offer-0")];
        let report = CategoryDecoder::decode(&records, &PrepConfig::default()).expect("decodes");
        let row = &report.batch.records[0];
        assert_eq!(report.batch.value(row, "related"), Some(1));
        assert_eq!(report.batch.value(row, "request"), Some(0));
        assert_eq!(report.batch.value(row, "offer"), Some(0));
    }

    #[test]
    fn field_count_disagreement_is_a_schema_mismatch() {
        let records = vec![
            record(1, "a", "related-1;request-0"),
            record(2, "b", "related-1"),
        ];
        let err = CategoryDecoder::decode(&records, &PrepConfig::default())
            .expect_err("field counts differ");
        assert_eq!(
            err,
            PrepError::SchemaMismatch {
                record_id: 2,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let records = vec![record(9, "a", "related-x")];
        let err = CategoryDecoder::decode(&records, &PrepConfig::default())
            .expect_err("value is not a digit");
        assert_eq!(
            err,
            PrepError::MalformedCategory {
                record_id: 9,
                category: "related".to_string(),
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn best_effort_skips_bad_records_and_reports_them() {
        let config = PrepConfig {
            error_policy: ErrorPolicy::BestEffort,
        };
        let records = vec![
            record(1, "a", "related-1;request-0"),
            record(2, "b", "related-1"),
            record(3, "c", "related-0;request-1"),
        ];
        let report = CategoryDecoder::decode(&records, &config).expect("best effort");
        assert_eq!(report.batch.records.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(
            report.skipped[0],
            PrepError::SchemaMismatch {
                record_id: 2,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn exact_duplicates_drop_keeping_first_occurrence() {
        let records = vec![
            record(1, "water", "related-1;request-1"),
            record(2, "food", "related-1;request-0"),
            record(1, "water", "related-1;request-1"),
        ];
        let report = CategoryDecoder::decode(&records, &PrepConfig::default()).expect("decodes");
        assert_eq!(report.batch.records.len(), 2);
        assert_eq!(report.batch.records[0].id, 1);
        assert_eq!(report.batch.records[1].id, 2);
    }

    #[test]
    fn near_duplicates_differing_in_one_value_are_retained() {
        let records = vec![
            record(1, "water", "related-1;request-0;offer-0"),
            record(1, "water", "related-1;request-1;offer-0"),
        ];
        let report = CategoryDecoder::decode(&records, &PrepConfig::default()).expect("decodes");
        assert_eq!(report.batch.records.len(), 2);
    }

    #[test]
    fn out_of_range_values_pass_through_unclamped() {
        let records = vec![record(4, "a", "related-2;request-0")];
        let report = CategoryDecoder::decode(&records, &PrepConfig::default()).expect("decodes");
        let row = &report.batch.records[0];
        assert_eq!(report.batch.value(row, "related"), Some(2));
    }

    #[test]
    fn empty_field_reports_empty_value() {
        let records = vec![record(6, "a", "related-1;")];
        let err = CategoryDecoder::decode(&records, &PrepConfig::default())
            .expect_err("trailing delimiter leaves an empty field");
        assert_eq!(
            err,
            PrepError::MalformedCategory {
                record_id: 6,
                category: String::new(),
                value: String::new(),
            }
        );
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::PrepError;
use crate::types::{CategoryName, Genre, RecordId, Token};

/// One row of the raw messages table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageRow {
    /// Shared join key with the categories table.
    pub id: RecordId,
    /// Free text of the (translated) message.
    pub message: String,
    /// Untranslated text when the message was not originally English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// Collection channel label.
    pub genre: Genre,
}

/// One row of the raw categories table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryRow {
    /// Shared join key with the messages table.
    pub id: RecordId,
    /// Encoded categories string, e.g. `related-1;request-0;offer-0`.
    pub categories: String,
}

/// Merged raw record: decoder input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    pub genre: Genre,
    /// Semicolon-delimited `name-value` pairs covering every category.
    pub categories_encoded: String,
}

impl Record {
    /// Parse one loader row into a `Record`.
    ///
    /// Rows arrive as JSON objects from an external loader; a missing or
    /// non-string `message` (or any other malformed field) is reported
    /// with the row's position in the batch.
    pub fn from_row(index: usize, row: &Value) -> Result<Self, PrepError> {
        let invalid = |reason: &str| PrepError::InvalidInput {
            index,
            reason: reason.to_string(),
        };
        let id = row
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| invalid("missing or non-integer 'id'"))?;
        let message = row
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("missing or non-string 'message'"))?
            .to_string();
        let original = match row.get("original") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => return Err(invalid("non-string 'original'")),
        };
        let genre = row
            .get("genre")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("missing or non-string 'genre'"))?
            .to_string();
        let categories_encoded = row
            .get("categories")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("missing or non-string 'categories'"))?
            .to_string();
        Ok(Self {
            id,
            message,
            original,
            genre,
            categories_encoded,
        })
    }
}

/// Inner-join messages with their category rows on `id`.
///
/// Message order is preserved; when the categories table repeats an id,
/// the first row wins. Messages without a category row are dropped, as
/// are category rows without a message.
pub fn merge_rows(messages: &[MessageRow], categories: &[CategoryRow]) -> Vec<Record> {
    let mut by_id: IndexMap<RecordId, &CategoryRow> = IndexMap::with_capacity(categories.len());
    for row in categories {
        by_id.entry(row.id).or_insert(row);
    }
    messages
        .iter()
        .filter_map(|message| {
            by_id.get(&message.id).map(|row| Record {
                id: message.id,
                message: message.message.clone(),
                original: message.original.clone(),
                genre: message.genre.clone(),
                categories_encoded: row.categories.clone(),
            })
        })
        .collect()
}

/// Ordered category names established from the first record of a batch.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySchema {
    names: Vec<CategoryName>,
}

impl CategorySchema {
    /// Build a schema from an explicit name list.
    pub fn new(names: Vec<CategoryName>) -> Self {
        Self { names }
    }

    /// Ordered category names.
    pub fn names(&self) -> &[CategoryName] {
        &self.names
    }

    /// Number of category columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the schema holds no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a category column by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }
}

/// Record with the encoded column replaced by decoded integer values.
///
/// `values` aligns positionally with the batch [`CategorySchema`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DecodedRecord {
    pub id: RecordId,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    pub genre: Genre,
    /// One integer per category, in schema order. Values outside `{0,1}`
    /// are carried as-is; consumers decide how to treat them.
    pub values: Vec<i64>,
}

/// Tabular decoder output: schema plus surviving records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DecodedBatch {
    /// Ordered category columns shared by every record in the batch.
    pub schema: CategorySchema,
    /// Surviving records after decoding and duplicate removal.
    pub records: Vec<DecodedRecord>,
}

impl DecodedBatch {
    /// Look up one record's value for a named category.
    pub fn value(&self, record: &DecodedRecord, name: &str) -> Option<i64> {
        self.schema
            .position(name)
            .and_then(|idx| record.values.get(idx).copied())
    }

    /// Iterate `(name, value)` pairs for one record in schema order.
    pub fn named_values<'a>(
        &'a self,
        record: &'a DecodedRecord,
    ) -> impl Iterator<Item = (&'a str, i64)> + 'a {
        self.schema
            .names()
            .iter()
            .zip(record.values.iter())
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// True when no records survived decoding.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derived per-text features; recomputed on demand, never persisted here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Normalized token sequence.
    pub tokens: Vec<Token>,
    /// Whether any sentence opens with a verb or the retweet marker.
    pub starts_with_verb: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(id: RecordId, text: &str) -> MessageRow {
        MessageRow {
            id,
            message: text.to_string(),
            original: None,
            genre: "direct".to_string(),
        }
    }

    #[test]
    fn merge_preserves_message_order_and_drops_unmatched() {
        let messages = vec![message(2, "need water"), message(1, "storm"), message(3, "x")];
        let categories = vec![
            CategoryRow {
                id: 1,
                categories: "related-1".to_string(),
            },
            CategoryRow {
                id: 2,
                categories: "related-0".to_string(),
            },
        ];
        let merged = merge_rows(&messages, &categories);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, 2);
        assert_eq!(merged[0].categories_encoded, "related-0");
        assert_eq!(merged[1].id, 1);
    }

    #[test]
    fn merge_keeps_first_category_row_per_id() {
        let messages = vec![message(7, "flood")];
        let categories = vec![
            CategoryRow {
                id: 7,
                categories: "related-1".to_string(),
            },
            CategoryRow {
                id: 7,
                categories: "related-0".to_string(),
            },
        ];
        let merged = merge_rows(&messages, &categories);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].categories_encoded, "related-1");
    }

    #[test]
    fn from_row_parses_complete_rows() {
        let row = json!({
            "id": 12,
            "message": "we need tents",
            "original": "nou bezwen tant",
            "genre": "direct",
            "categories": "related-1;request-1",
        });
        let record = Record::from_row(0, &row).expect("row parses");
        assert_eq!(record.id, 12);
        assert_eq!(record.original.as_deref(), Some("nou bezwen tant"));
        assert_eq!(record.categories_encoded, "related-1;request-1");
    }

    #[test]
    fn from_row_reports_index_for_non_string_message() {
        let row = json!({
            "id": 12,
            "message": 44,
            "genre": "direct",
            "categories": "related-1",
        });
        let err = Record::from_row(3, &row).expect_err("message must be text");
        assert_eq!(
            err,
            PrepError::InvalidInput {
                index: 3,
                reason: "missing or non-string 'message'".to_string(),
            }
        );
    }

    #[test]
    fn from_row_accepts_null_original() {
        let row = json!({
            "id": 5,
            "message": "bridge out",
            "original": null,
            "genre": "news",
            "categories": "related-1",
        });
        let record = Record::from_row(0, &row).expect("row parses");
        assert_eq!(record.original, None);
    }

    #[test]
    fn schema_position_resolves_names() {
        let schema = CategorySchema::new(vec!["related".to_string(), "request".to_string()]);
        assert_eq!(schema.position("request"), Some(1));
        assert_eq!(schema.position("offer"), None);
        assert_eq!(schema.len(), 2);
    }
}

use std::collections::HashMap;

use crate::data::DecodedBatch;
use crate::types::{CategoryName, Genre};

/// Aggregate label-balance metrics for a decoded batch.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelBalance {
    /// Number of records in the batch.
    pub records: usize,
    /// Labeled share of the most frequent category.
    pub max_share: f64,
    /// Labeled share of the least frequent category.
    pub min_share: f64,
    /// Per-category counts, most frequent first.
    pub per_category: Vec<CategoryShare>,
}

/// Per-category labeled count and share for balance inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    /// Category column name.
    pub category: CategoryName,
    /// Records with a non-zero value for this category.
    pub labeled: usize,
    /// `labeled` over the batch record count.
    pub share: f64,
}

/// Compute label-balance metrics for a decoded batch.
///
/// A record counts toward a category when its value is non-zero, which
/// deliberately includes out-of-range values carried through by the
/// decoder. Returns `None` for a batch with no records or no columns.
pub fn label_balance(batch: &DecodedBatch) -> Option<LabelBalance> {
    let records = batch.records.len();
    if records == 0 || batch.schema.is_empty() {
        return None;
    }
    let mut per_category: Vec<CategoryShare> = batch
        .schema
        .names()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let labeled = batch
                .records
                .iter()
                .filter(|record| record.values.get(idx).copied().unwrap_or(0) != 0)
                .count();
            CategoryShare {
                category: name.clone(),
                labeled,
                share: labeled as f64 / records as f64,
            }
        })
        .collect();
    per_category.sort_by(|a, b| {
        b.labeled
            .cmp(&a.labeled)
            .then_with(|| a.category.cmp(&b.category))
    });
    let max_share = per_category.first().map(|entry| entry.share)?;
    let min_share = per_category.last().map(|entry| entry.share)?;
    Some(LabelBalance {
        records,
        max_share,
        min_share,
        per_category,
    })
}

/// Count records per genre label.
pub fn genre_counts(batch: &DecodedBatch) -> HashMap<Genre, usize> {
    let mut counts = HashMap::new();
    for record in &batch.records {
        *counts.entry(record.genre.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CategorySchema, DecodedRecord};

    fn record(id: i64, genre: &str, values: Vec<i64>) -> DecodedRecord {
        DecodedRecord {
            id,
            message: format!("message {id}"),
            original: None,
            genre: genre.to_string(),
            values,
        }
    }

    fn batch() -> DecodedBatch {
        DecodedBatch {
            schema: CategorySchema::new(vec!["related".to_string(), "request".to_string()]),
            records: vec![
                record(1, "direct", vec![1, 1]),
                record(2, "news", vec![1, 0]),
                record(3, "direct", vec![0, 0]),
                record(4, "social", vec![2, 0]),
            ],
        }
    }

    #[test]
    fn label_balance_orders_categories_by_frequency() {
        let balance = label_balance(&batch()).expect("non-empty batch");
        assert_eq!(balance.records, 4);
        assert_eq!(balance.per_category[0].category, "related");
        assert_eq!(balance.per_category[0].labeled, 3);
        assert_eq!(balance.per_category[1].labeled, 1);
        assert!((balance.max_share - 0.75).abs() < 1e-9);
        assert!((balance.min_share - 0.25).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_values_count_as_labeled() {
        let balance = label_balance(&batch()).expect("non-empty batch");
        let related = balance
            .per_category
            .iter()
            .find(|entry| entry.category == "related")
            .expect("related present");
        assert_eq!(related.labeled, 3);
    }

    #[test]
    fn empty_batches_have_no_balance() {
        let empty = DecodedBatch {
            schema: CategorySchema::new(Vec::new()),
            records: Vec::new(),
        };
        assert_eq!(label_balance(&empty), None);
    }

    #[test]
    fn genre_counts_tally_every_record() {
        let counts = genre_counts(&batch());
        assert_eq!(counts.get("direct"), Some(&2));
        assert_eq!(counts.get("news"), Some(&1));
        assert_eq!(counts.get("social"), Some(&1));
    }
}

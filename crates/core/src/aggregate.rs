//! Transaction aggregation pipeline.
//!
//! Joins raw vendor transactions against the review map and derives the
//! dashboard summaries. Everything is recomputed from scratch on each call;
//! counters are plain integers so identical input gives identical output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::review::ReviewMap;
use crate::transaction::{RawTransaction, TransactionRecord};

/// Manual review versus straight-through counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub with_manual_review: u64,
    pub straight_through: u64,
}

impl ReviewSummary {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.with_manual_review + self.straight_through
    }
}

/// Per-document-skill totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocSkillStats {
    pub page_total: u64,
    pub transaction_count: u64,
}

/// Document skill name -> totals, ordered by name.
pub type DocSkillSummary = BTreeMap<String, DocSkillStats>;

/// Output of [`aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    pub records: Vec<TransactionRecord>,
    pub review_summary: ReviewSummary,
    pub docskill_summary: DocSkillSummary,
}

impl Aggregation {
    /// Sum of page counts over every record.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        total_pages(&self.records)
    }
}

/// Joins `raw_items` with `review_map` and computes the summaries.
#[must_use]
pub fn aggregate(raw_items: &[RawTransaction], review_map: &ReviewMap) -> Aggregation {
    let mut review_summary = ReviewSummary::default();
    let mut docskill_summary = DocSkillSummary::new();

    let records: Vec<TransactionRecord> = raw_items
        .iter()
        .map(|raw| {
            let record = TransactionRecord::from_raw(raw, review_map.get(&raw.id()));
            if record.manual_review {
                review_summary.with_manual_review += 1;
            } else {
                review_summary.straight_through += 1;
            }
            if !record.document_skill_name.is_empty() {
                let stats = docskill_summary.entry(record.document_skill_name.clone()).or_default();
                stats.page_total = stats.page_total.saturating_add(record.page_count);
                stats.transaction_count += 1;
            }
            record
        })
        .collect();

    Aggregation { records, review_summary, docskill_summary }
}

/// Sum of page counts over `records`, saturating at `u64::MAX`.
#[must_use]
pub fn total_pages(records: &[TransactionRecord]) -> u64 {
    records.iter().fold(0_u64, |total, r| total.saturating_add(r.page_count))
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;

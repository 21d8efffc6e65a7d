//! Filter engine: derives the visible subset of the roster from a query.
//!
//! Matching is case-insensitive substring containment over the id, name,
//! email and role fields. Both sides are lower-cased before comparison.

use crate::model::UserRecord;

/// Check whether a record matches a query.
///
/// `query_lower` must already be lower-cased; the record's fields are
/// folded here. An empty query matches everything.
pub fn record_matches(record: &UserRecord, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }

    record.id.as_str().to_lowercase().contains(query_lower)
        || record.name.to_lowercase().contains(query_lower)
        || record.email.to_lowercase().contains(query_lower)
        || record.role.to_lowercase().contains(query_lower)
}

/// Derive the filtered view of a dataset for a raw (unfolded) query.
///
/// Result ordering preserves dataset order. An empty query returns the
/// entire dataset.
pub fn filter_records(dataset: &[UserRecord], query: &str) -> Vec<UserRecord> {
    if query.is_empty() {
        return dataset.to_vec();
    }

    let query_lower = query.to_lowercase();
    dataset
        .iter()
        .filter(|record| record_matches(record, &query_lower))
        .cloned()
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

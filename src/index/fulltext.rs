use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::EntryId;
use crate::index::posting::Posting;

/// Inverted full-text index: normalized token → posting list.
///
/// Posting lists are kept in ascending entry-id order, which is the order
/// the builder appends in; together with the BTreeMap key order this makes
/// the serialized form deterministic for identical source text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FullTextIndex {
    postings: BTreeMap<String, Vec<Posting>>,
    total_tokens: u64,
}

impl FullTextIndex {
    /// Record `count` occurrences of `token` in `entry_id`. Zero counts
    /// are not stored.
    pub fn add(&mut self, token: String, entry_id: EntryId, count: u32) {
        if count == 0 {
            return;
        }
        self.postings
            .entry(token)
            .or_default()
            .push(Posting::new(entry_id, count));
        self.total_tokens += count as u64;
    }

    pub fn get(&self, token: &str) -> Option<&[Posting]> {
        self.postings.get(token).map(|v| v.as_slice())
    }

    /// Number of distinct tokens.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

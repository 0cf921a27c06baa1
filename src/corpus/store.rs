use serde::{Deserialize, Serialize};

use crate::analysis::normalize::normalize;
use crate::core::types::{Entry, EntryId};
use crate::corpus::segmenter::RawEntry;

/// Immutable, id-addressed storage for all entries of one build.
/// Ids are dense and assigned in source order; they are the join key
/// between the headword index, the full-text index, and this store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn from_raw(raw: Vec<RawEntry>) -> Self {
        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                let normalized = normalize(&r.headword);
                Entry::new(EntryId(i as u32), r.headword, normalized, r.body)
            })
            .collect();

        EntryStore { entries }
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

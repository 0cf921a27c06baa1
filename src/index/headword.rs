use fst::{IntoStreamer, Map, MapBuilder, Streamer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::error::Result;
use crate::core::types::EntryId;

/// Ordered index from normalized headword to entry ids, with an FST over
/// the key set for prefix streaming.
///
/// Duplicate normalized headwords (homographs) keep all their ids, in
/// source order. Only the map is persisted; the FST is derived and must be
/// rebuilt with [`HeadwordIndex::build_fst`] after deserialization.
#[derive(Default, Serialize, Deserialize)]
pub struct HeadwordIndex {
    ids: BTreeMap<String, Vec<EntryId>>,

    #[serde(skip)]
    fst: Map<Vec<u8>>,
}

impl HeadwordIndex {
    pub fn insert(&mut self, normalized_headword: String, id: EntryId) {
        self.ids.entry(normalized_headword).or_default().push(id);
    }

    /// Build the FST from the current key set. FST input must be sorted;
    /// the BTreeMap already iterates in key order.
    pub fn build_fst(&mut self) -> Result<()> {
        let mut builder = MapBuilder::memory();

        for (key, ids) in &self.ids {
            builder.insert(key.as_bytes(), ids[0].0 as u64)?;
        }

        self.fst = builder.into_map();
        Ok(())
    }

    /// All distinct keys with the given prefix, in alphabetical order,
    /// at most `max_keys` of them.
    pub fn search_prefix(&self, prefix: &str, max_keys: usize) -> Vec<String> {
        let mut results = Vec::new();
        let prefix_bytes = prefix.as_bytes();

        let mut stream = self.fst.range().ge(prefix_bytes).into_stream();

        while let Some((key_bytes, _)) = stream.next() {
            if !key_bytes.starts_with(prefix_bytes) {
                break;
            }
            if let Ok(key) = String::from_utf8(key_bytes.to_vec()) {
                results.push(key);
            }
            if results.len() >= max_keys {
                break;
            }
        }

        results
    }

    pub fn ids(&self, normalized_headword: &str) -> Option<&[EntryId]> {
        self.ids.get(normalized_headword).map(|v| v.as_slice())
    }

    /// Distinct normalized headwords, in alphabetical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

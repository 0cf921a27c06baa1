use serde::{Deserialize, Serialize};

use crate::core::config::Config;
use crate::core::error::Result;
use crate::corpus::segmenter::EntrySegmenter;
use crate::corpus::store::EntryStore;
use crate::index::builder::IndexBuilder;
use crate::index::fulltext::FullTextIndex;
use crate::index::headword::HeadwordIndex;
use crate::search::fuzzy::FuzzyIndex;
use crate::storage::fingerprint::Fingerprint;

/// One complete, immutable view of the indexed dictionary: the entry store
/// plus all three index structures, tagged with the fingerprint of the
/// source text they were built from.
///
/// Built (or loaded) once before any lookup is reachable, then shared
/// read-only. A change to the source text means a full rebuild and an
/// atomic swap of the whole snapshot; no partial updates exist.
#[derive(Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub fingerprint: Fingerprint,
    pub store: EntryStore,
    pub headwords: HeadwordIndex,
    pub fulltext: FullTextIndex,
    pub fuzzy: FuzzyIndex,
}

impl IndexSnapshot {
    /// Build all structures from the raw source text in one pass.
    pub fn build(text: &str, fingerprint: Fingerprint, config: &Config) -> Result<Self> {
        let store = EntryStore::from_raw(EntrySegmenter::new().segment(text));
        let (headwords, fulltext) = IndexBuilder::new().build(&store)?;
        let fuzzy = FuzzyIndex::build(
            headwords.keys(),
            config.max_edit_distance,
            config.fuzzy_transpositions,
        );

        Ok(IndexSnapshot {
            fingerprint,
            store,
            headwords,
            fulltext,
            fuzzy,
        })
    }

    /// Rebuild derived structures (the headword FST) after deserialization.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.headwords.build_fst()
    }
}

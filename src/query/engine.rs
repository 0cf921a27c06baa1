use parking_lot::RwLock;
use std::sync::Arc;

use crate::analysis::normalize::normalize;
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::types::EntryId;
use crate::index::snapshot::IndexSnapshot;
use crate::search::results::{FullTextMatch, FuzzyMatch, LookupResult, PrefixMatch};
use crate::storage::cache::CacheManager;

/// The single entry point consumed by the surrounding request-handling
/// layer. Holds the current snapshot behind a swap slot; lookups are pure
/// reads over an immutable snapshot and need no coordination with each
/// other.
///
/// Lookup is strictly staged: prefix matches, then full-text matches, then
/// fuzzy matches, and a stage only runs when every earlier stage was empty.
/// At most one field of the result is non-empty.
pub struct QueryEngine {
    config: Config,
    snapshot: RwLock<Arc<IndexSnapshot>>,
}

impl std::fmt::Debug for QueryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl QueryEngine {
    /// Load the cached index for `config.source_path` or build it, then
    /// wrap it. Called once at process start, before any lookup.
    pub fn open(config: Config) -> Result<Self> {
        let snapshot = CacheManager::new(config.clone()).load_or_build()?;
        Ok(Self::with_snapshot(config, Arc::new(snapshot)))
    }

    pub fn with_snapshot(config: Config, snapshot: Arc<IndexSnapshot>) -> Self {
        QueryEngine {
            config,
            snapshot: RwLock::new(snapshot),
        }
    }

    /// The snapshot currently serving lookups.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshot.read().clone()
    }

    /// Rebuild from the source text and atomically install the fresh
    /// snapshot. In-flight lookups keep the snapshot they started with.
    pub fn rebuild(&self) -> Result<()> {
        let snapshot = CacheManager::new(self.config.clone()).load_or_build()?;
        *self.snapshot.write() = Arc::new(snapshot);
        Ok(())
    }

    /// Never fails: any input, including empty or non-alphabetic noise,
    /// produces a well-formed (possibly all-empty) result.
    pub fn lookup(&self, query: &str) -> LookupResult {
        let snapshot = self.snapshot();
        let q = normalize(query);
        if q.is_empty() {
            return LookupResult::default();
        }

        let prefix = self.prefix_stage(&snapshot, &q);
        if !prefix.is_empty() {
            return LookupResult {
                prefix,
                ..Default::default()
            };
        }

        let fulltext = self.fulltext_stage(&snapshot, &q);
        if !fulltext.is_empty() {
            return LookupResult {
                fulltext,
                ..Default::default()
            };
        }

        LookupResult {
            fuzzy: self.fuzzy_stage(&snapshot, &q),
            ..Default::default()
        }
    }

    /// Raw entry text by id. Unknown ids are NotFound, distinguishable
    /// from an entry with an empty body.
    pub fn entry(&self, id: EntryId) -> Result<String> {
        self.snapshot()
            .store
            .get(id)
            .map(|e| e.body.clone())
            .ok_or_else(|| Error::not_found(format!("no entry with id {}", id.0)))
    }

    /// Raw entry text by headword (normalized before matching). When the
    /// normalized headword is ambiguous, the first entry in source order
    /// wins; `lookup` surfaces all of them.
    pub fn entry_by_headword(&self, headword: &str) -> Result<String> {
        let snapshot = self.snapshot();
        let key = normalize(headword);

        snapshot
            .headwords
            .ids(&key)
            .and_then(|ids| ids.first())
            .and_then(|&id| snapshot.store.get(id))
            .map(|e| e.body.clone())
            .ok_or_else(|| Error::not_found(format!("no entry for headword {:?}", headword)))
    }

    /// Stage 1: headwords whose normalized form starts with the query,
    /// alphabetically, all ids of a duplicated headword included.
    fn prefix_stage(&self, snapshot: &IndexSnapshot, q: &str) -> Vec<PrefixMatch> {
        let limit = self.config.max_prefix_results;
        let mut matches = Vec::new();

        'keys: for key in snapshot.headwords.search_prefix(q, limit) {
            for &id in snapshot.headwords.ids(&key).unwrap_or(&[]) {
                if let Some(entry) = snapshot.store.get(id) {
                    matches.push(PrefixMatch {
                        headword: entry.headword.clone(),
                        entry_id: id,
                    });
                }
                if matches.len() >= limit {
                    break 'keys;
                }
            }
        }

        matches
    }

    /// Stage 2: the query as an exact token key, ranked by occurrence
    /// count descending, ties alphabetical by normalized headword.
    fn fulltext_stage(&self, snapshot: &IndexSnapshot, q: &str) -> Vec<FullTextMatch> {
        let Some(postings) = snapshot.fulltext.get(q) else {
            return Vec::new();
        };

        let mut ranked: Vec<(&str, FullTextMatch)> = postings
            .iter()
            .filter_map(|p| {
                snapshot.store.get(p.entry_id).map(|entry| {
                    (
                        entry.normalized_headword.as_str(),
                        FullTextMatch {
                            headword: entry.headword.clone(),
                            entry_id: p.entry_id,
                            count: p.count,
                        },
                    )
                })
            })
            .collect();

        ranked.sort_by(|(ka, a), (kb, b)| b.count.cmp(&a.count).then_with(|| ka.cmp(kb)));
        ranked.truncate(self.config.max_fulltext_results);
        ranked.into_iter().map(|(_, m)| m).collect()
    }

    /// Stage 3: nearest headwords by edit distance.
    fn fuzzy_stage(&self, snapshot: &IndexSnapshot, q: &str) -> Vec<FuzzyMatch> {
        let limit = self.config.max_fuzzy_results;
        let mut matches = Vec::new();

        'keys: for (key, distance) in snapshot.fuzzy.top_k(q, limit) {
            for &id in snapshot.headwords.ids(&key).unwrap_or(&[]) {
                if let Some(entry) = snapshot.store.get(id) {
                    matches.push(FuzzyMatch {
                        headword: entry.headword.clone(),
                        entry_id: id,
                        distance,
                    });
                }
                if matches.len() >= limit {
                    break 'keys;
                }
            }
        }

        matches
    }
}

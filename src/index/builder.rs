use rayon::prelude::*;
use std::collections::HashMap;

use crate::analysis::tokenizer::{LatinTokenizer, Tokenizer};
use crate::core::error::Result;
use crate::core::types::EntryId;
use crate::corpus::store::EntryStore;
use crate::index::fulltext::FullTextIndex;
use crate::index::headword::HeadwordIndex;

/// Builds the headword index and the full-text index from the complete
/// ordered entry set in one pass over the corpus.
///
/// Per-entry tokenization runs in parallel; the merge happens in entry-id
/// order so that rebuilding from identical source text always produces the
/// same index content.
pub struct IndexBuilder {
    tokenizer: Box<dyn Tokenizer>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        IndexBuilder {
            tokenizer: Box::new(LatinTokenizer::default()),
        }
    }

    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        IndexBuilder { tokenizer }
    }

    pub fn build(&self, store: &EntryStore) -> Result<(HeadwordIndex, FullTextIndex)> {
        let mut headwords = HeadwordIndex::default();
        for entry in store.iter() {
            headwords.insert(entry.normalized_headword.clone(), entry.id);
        }
        headwords.build_fst()?;

        // Tokenize bodies in parallel; par_iter + collect keeps id order.
        let counted: Vec<(EntryId, Vec<(String, u32)>)> = store
            .entries()
            .par_iter()
            .map(|entry| (entry.id, self.count_tokens(&entry.body)))
            .collect();

        let mut fulltext = FullTextIndex::default();
        for (entry_id, counts) in counted {
            for (token, count) in counts {
                fulltext.add(token, entry_id, count);
            }
        }

        log::info!(
            "built index: {} headwords, {} distinct tokens, {} token occurrences",
            headwords.len(),
            fulltext.term_count(),
            fulltext.total_tokens()
        );

        Ok((headwords, fulltext))
    }

    fn count_tokens(&self, body: &str) -> Vec<(String, u32)> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in self.tokenizer.tokenize(body) {
            *counts.entry(token.text).or_insert(0) += 1;
        }

        // Sorted so the posting append order never depends on hash state.
        let mut counts: Vec<(String, u32)> = counts.into_iter().collect();
        counts.sort_by(|a, b| a.0.cmp(&b.0));
        counts
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

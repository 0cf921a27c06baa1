use levenshtein_automata::{Distance, LevenshteinAutomatonBuilder, DFA};
use serde::{Deserialize, Serialize};

/// Fallback matcher over the set of distinct normalized headwords, invoked
/// only when both prefix search and full-text search come up empty.
///
/// Reference semantics is Damerau-Levenshtein distance within a fixed
/// budget. Matching uses a Levenshtein DFA built per query and scanned over
/// the headword set; the only prefilter is a character-count window, which
/// cannot exclude a candidate within the budget (one edit changes the
/// character count by at most one).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuzzyIndex {
    /// Distinct normalized headwords, sorted.
    keys: Vec<String>,
    max_distance: u8,
    transpositions: bool,
}

impl FuzzyIndex {
    pub fn build<'a, I>(keys: I, max_distance: u8, transpositions: bool) -> Self
    where
        I: Iterator<Item = &'a str>,
    {
        let mut keys: Vec<String> = keys.map(str::to_string).collect();
        keys.sort();
        keys.dedup();

        FuzzyIndex {
            keys,
            max_distance,
            transpositions,
        }
    }

    /// The `k` nearest headwords to `query`, ordered by ascending distance
    /// with alphabetical tie-breaks. Empty if nothing is within the budget.
    pub fn top_k(&self, query: &str, k: usize) -> Vec<(String, u8)> {
        if query.is_empty() || k == 0 {
            return Vec::new();
        }

        let dfa = self.automaton_for(query);
        let query_chars = query.chars().count();
        let budget = self.max_distance as usize;

        let mut hits: Vec<(String, u8)> = Vec::new();
        for key in &self.keys {
            if key.chars().count().abs_diff(query_chars) > budget {
                continue;
            }
            if let Some(d) = Self::distance(&dfa, key) {
                if d <= self.max_distance {
                    hits.push((key.clone(), d));
                }
            }
        }

        hits.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        hits.truncate(k);
        hits
    }

    fn automaton_for(&self, query: &str) -> DFA {
        LevenshteinAutomatonBuilder::new(self.max_distance, self.transpositions).build_dfa(query)
    }

    fn distance(dfa: &DFA, candidate: &str) -> Option<u8> {
        let mut state = dfa.initial_state();
        for &byte in candidate.as_bytes() {
            state = dfa.transition(state, byte);
        }
        match dfa.distance(state) {
            Distance::Exact(d) => Some(d),
            Distance::AtLeast(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

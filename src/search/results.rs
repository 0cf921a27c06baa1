use serde::Serialize;

use crate::core::types::EntryId;

/// A headword whose normalized form starts with the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixMatch {
    /// Original headword, diacritics intact.
    pub headword: String,
    pub entry_id: EntryId,
}

/// An entry whose body contains the query token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullTextMatch {
    pub headword: String,
    pub entry_id: EntryId,
    /// Occurrences of the query token in this entry's body.
    pub count: u32,
}

/// A headword orthographically close to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyMatch {
    pub headword: String,
    pub entry_id: EntryId,
    /// Edit distance from the normalized query.
    pub distance: u8,
}

/// Result of one lookup. All three fields are always present; the staged
/// lookup guarantees at most one of them is non-empty per query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub prefix: Vec<PrefixMatch>,
    pub fulltext: Vec<FullTextMatch>,
    pub fuzzy: Vec<FuzzyMatch>,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.fulltext.is_empty() && self.fuzzy.is_empty()
    }
}

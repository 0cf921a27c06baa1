use serde::{Deserialize, Serialize};

/// Dense, zero-based entry identifier, stable within one index build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    pub fn new(id: u32) -> Self {
        EntryId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        EntryId(id)
    }
}

/// One dictionary entry. `headword` keeps the original diacritics;
/// `normalized_headword` is the comparison key. `body` is the raw entry
/// text including the headword line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub headword: String,
    pub normalized_headword: String,
    pub body: String,
}

impl Entry {
    pub fn new(id: EntryId, headword: String, normalized_headword: String, body: String) -> Self {
        Entry {
            id,
            headword,
            normalized_headword,
            body,
        }
    }
}

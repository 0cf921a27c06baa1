use serde::{Deserialize, Serialize};

use crate::core::types::EntryId;

/// One (entry, occurrence count) pair in a full-text posting list.
/// `count` is always >= 1: tokens that do not occur in an entry have no
/// posting at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub entry_id: EntryId,
    pub count: u32,
}

impl Posting {
    pub fn new(entry_id: EntryId, count: u32) -> Self {
        Posting { entry_id, count }
    }
}

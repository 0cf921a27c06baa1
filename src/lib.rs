//! lexidex — lookup engine over a single large semi-structured dictionary
//! text (Lewis & Short style: tens of thousands of entries, one headword
//! marker per entry).
//!
//! Lookup is strictly staged per query: headword prefix matches first,
//! then full-text matches ranked by occurrence count, then fuzzy headword
//! matches as a last resort. The whole index is built in one pass, persisted
//! with a source-text fingerprint, and served as an immutable snapshot.

pub mod analysis;
pub mod core;
pub mod corpus;
pub mod index;
pub mod query;
pub mod search;
pub mod storage;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{Entry, EntryId};
pub use crate::index::snapshot::IndexSnapshot;
pub use crate::query::engine::QueryEngine;
pub use crate::search::results::{FullTextMatch, FuzzyMatch, LookupResult, PrefixMatch};
pub use crate::storage::cache::CacheManager;
pub use crate::storage::fingerprint::Fingerprint;

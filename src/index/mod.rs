pub mod builder;
pub mod fulltext;
pub mod headword;
pub mod posting;
pub mod snapshot;

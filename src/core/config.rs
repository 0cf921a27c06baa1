use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub cache_path: PathBuf,

    /// Result limits per lookup stage.
    pub max_prefix_results: usize,
    pub max_fulltext_results: usize,
    pub max_fuzzy_results: usize,

    /// Fuzzy matching budget.
    pub max_edit_distance: u8,
    pub fuzzy_transpositions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_path: PathBuf::from("./dictionary.txt"),
            cache_path: PathBuf::from("./dictionary.idx"),

            max_prefix_results: 25,
            max_fulltext_results: 6,
            max_fuzzy_results: 8,

            max_edit_distance: 2,
            fuzzy_transpositions: true,
        }
    }
}

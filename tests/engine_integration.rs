//! End-to-end tests for the staged lookup pipeline and the cache
//! lifecycle, driven through the public `QueryEngine` surface.

use std::fs;
use std::path::Path;

use lexidex::{Config, EntryId, ErrorKind, QueryEngine};
use tempfile::TempDir;

const CORPUS: &str = "\
abalieno āvi, ātum, to alienate, to estrange, Cic.
amīcĭo icui, ictum, to wrap about; texit texit, Plaut.
cēlo āvi, ātum, to hide, to conceal; texit texit, Verg.
tĕgo texi, tectum, to cover; texit texit texit texit texit, Verg.
verbum a word, a saying, an expression, Cic.
";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_corpus(dir: &Path, text: &str) -> Config {
    init_logging();
    let source_path = dir.join("dictionary.txt");
    fs::write(&source_path, text).unwrap();
    Config {
        source_path,
        cache_path: dir.join("dictionary.idx"),
        ..Config::default()
    }
}

fn engine_for(text: &str) -> (TempDir, QueryEngine) {
    let dir = TempDir::new().unwrap();
    let engine = QueryEngine::open(write_corpus(dir.path(), text)).unwrap();
    (dir, engine)
}

#[test]
fn prefix_match_without_diacritics() {
    let (_dir, engine) = engine_for(CORPUS);

    let result = engine.lookup("abalieno");
    assert_eq!(result.prefix.len(), 1);
    assert_eq!(result.prefix[0].headword, "abalieno");
    assert!(result.fulltext.is_empty());
    assert!(result.fuzzy.is_empty());

    // A diacritic-bearing headword is retrievable by its stripped form,
    // and the original spelling comes back out.
    let result = engine.lookup("tego");
    assert_eq!(result.prefix[0].headword, "tĕgo");
}

#[test]
fn prefix_results_are_alphabetical() {
    let (_dir, engine) = engine_for(CORPUS);

    let result = engine.lookup("a");
    let heads: Vec<&str> = result.prefix.iter().map(|m| m.headword.as_str()).collect();
    assert_eq!(heads, vec!["abalieno", "amīcĭo"]);
}

#[test]
fn fulltext_ranked_by_count_with_alphabetical_ties() {
    let (_dir, engine) = engine_for(CORPUS);

    // No headword starts with "texit"; three bodies contain it 5, 2, 2
    // times.
    let result = engine.lookup("texit");
    assert!(result.prefix.is_empty());
    assert!(result.fuzzy.is_empty());

    let ranked: Vec<(&str, u32)> = result
        .fulltext
        .iter()
        .map(|m| (m.headword.as_str(), m.count))
        .collect();
    assert_eq!(ranked, vec![("tĕgo", 5), ("amīcĭo", 2), ("cēlo", 2)]);
}

#[test]
fn fuzzy_fallback_finds_the_nearest_headword() {
    let corpus = "\
texit wove, pf. of texo, q.v.
tĕgo texi, tectum, to cover, Verg.
verbum a word, Cic.
";
    let (_dir, engine) = engine_for(corpus);

    let result = engine.lookup("texxit");
    assert!(result.prefix.is_empty());
    assert!(result.fulltext.is_empty());
    assert!(!result.fuzzy.is_empty());
    assert_eq!(result.fuzzy[0].headword, "texit");
    assert_eq!(result.fuzzy[0].distance, 1);
}

#[test]
fn at_most_one_stage_is_populated() {
    let (_dir, engine) = engine_for(CORPUS);

    for query in ["tego", "texit", "texxit", "verbum", "zzzzzzzz", "", "½¾"] {
        let result = engine.lookup(query);
        let populated = [
            !result.prefix.is_empty(),
            !result.fulltext.is_empty(),
            !result.fuzzy.is_empty(),
        ]
        .iter()
        .filter(|&&p| p)
        .count();
        assert!(populated <= 1, "staging violated for query {:?}", query);
    }
}

#[test]
fn hostile_queries_never_fail() {
    let (_dir, engine) = engine_for(CORPUS);

    let long = "x".repeat(100_000);
    for query in ["", " ", "---", "…—…", "\u{0}", long.as_str()] {
        let result = engine.lookup(query);
        assert!(result.is_empty(), "noise query {:?} matched something", query);
    }
}

#[test]
fn entry_lookup_and_not_found() {
    let (_dir, engine) = engine_for(CORPUS);

    let body = engine.entry_by_headword("tĕgo").unwrap();
    assert!(body.contains("to cover"));
    // Same entry via its stripped form and via its id.
    assert_eq!(engine.entry_by_headword("tego").unwrap(), body);
    assert_eq!(engine.entry(EntryId(3)).unwrap(), body);

    let err = engine.entry_by_headword("nonexistent").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    let err = engine.entry(EntryId(999)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn duplicate_headwords_are_all_surfaced() {
    let corpus = "\
occīdo cidi, casum, to strike down, to kill.
occĭdo cidi, occasum, to fall, to perish, to set.
";
    let (_dir, engine) = engine_for(corpus);

    let result = engine.lookup("occido");
    assert_eq!(result.prefix.len(), 2);
    assert_eq!(result.prefix[0].entry_id, EntryId(0));
    assert_eq!(result.prefix[1].entry_id, EntryId(1));
}

#[test]
fn cache_round_trip_serves_identical_results() {
    let dir = TempDir::new().unwrap();
    let config = write_corpus(dir.path(), CORPUS);

    let built = QueryEngine::open(config.clone()).unwrap();
    assert!(config.cache_path.exists());

    // Second open must go through the persisted cache.
    let loaded = QueryEngine::open(config).unwrap();
    for query in ["tego", "texit", "texxit"] {
        assert_eq!(built.lookup(query), loaded.lookup(query));
    }
}

#[test]
fn rebuild_is_byte_identical() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let config_a = write_corpus(dir_a.path(), CORPUS);
    let config_b = write_corpus(dir_b.path(), CORPUS);

    QueryEngine::open(config_a.clone()).unwrap();
    QueryEngine::open(config_b.clone()).unwrap();

    assert_eq!(
        fs::read(&config_a.cache_path).unwrap(),
        fs::read(&config_b.cache_path).unwrap()
    );
}

#[test]
fn stale_cache_triggers_rebuild() {
    let dir = TempDir::new().unwrap();
    let config = write_corpus(dir.path(), CORPUS);
    QueryEngine::open(config.clone()).unwrap();

    // Change the source text behind the cache's back.
    let extended = format!("{}novus a um, new, fresh, young, Cic.\n", CORPUS);
    fs::write(&config.source_path, &extended).unwrap();

    let engine = QueryEngine::open(config).unwrap();
    let result = engine.lookup("novus");
    assert_eq!(result.prefix.len(), 1, "stale cache served old results");
}

#[test]
fn corrupted_cache_falls_back_to_rebuild() {
    let dir = TempDir::new().unwrap();
    let config = write_corpus(dir.path(), CORPUS);
    QueryEngine::open(config.clone()).unwrap();

    // Truncate, then garbage.
    let bytes = fs::read(&config.cache_path).unwrap();
    fs::write(&config.cache_path, &bytes[..bytes.len() / 2]).unwrap();
    let engine = QueryEngine::open(config.clone()).unwrap();
    assert_eq!(engine.lookup("verbum").prefix.len(), 1);

    fs::write(&config.cache_path, b"not a cache file at all").unwrap();
    let engine = QueryEngine::open(config).unwrap();
    assert_eq!(engine.lookup("verbum").prefix.len(), 1);
}

#[test]
fn missing_or_empty_source_is_fatal() {
    init_logging();
    let dir = TempDir::new().unwrap();

    let config = Config {
        source_path: dir.path().join("missing.txt"),
        cache_path: dir.path().join("missing.idx"),
        ..Config::default()
    };
    let err = QueryEngine::open(config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);

    let source_path = dir.path().join("empty.txt");
    fs::write(&source_path, "").unwrap();
    let config = Config {
        source_path,
        cache_path: dir.path().join("empty.idx"),
        ..Config::default()
    };
    let err = QueryEngine::open(config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptySource);
}

#[test]
fn rebuild_swaps_in_new_snapshot_while_old_readers_continue() {
    let dir = TempDir::new().unwrap();
    let config = write_corpus(dir.path(), CORPUS);
    let engine = QueryEngine::open(config.clone()).unwrap();

    let old_snapshot = engine.snapshot();

    let extended = format!("{}novus a um, new, fresh, young, Cic.\n", CORPUS);
    fs::write(&config.source_path, &extended).unwrap();
    engine.rebuild().unwrap();

    assert_eq!(engine.lookup("novus").prefix.len(), 1);
    // The snapshot captured before the swap is untouched.
    assert_eq!(old_snapshot.store.len(), 5);
}

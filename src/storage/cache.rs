use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::index::snapshot::IndexSnapshot;
use crate::storage::fingerprint::Fingerprint;

const MAGIC: [u8; 4] = *b"LXDX";
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct CacheHeader {
    magic: [u8; 4],
    version: u32,
    fingerprint: Fingerprint,
    payload_crc32: u32,
    payload_len: u64,
}

/// Loads a persisted index snapshot when it still matches the current
/// source text, and rebuilds (then persists) otherwise.
///
/// Every way a cache can be unusable — absent, truncated, unknown format
/// version, checksum failure, fingerprint mismatch — is treated the same:
/// log it and rebuild. A corrupted cache never crashes the engine and never
/// serves a partial index. The only fatal startup error is a source text
/// that cannot be read or is empty.
pub struct CacheManager {
    config: Config,
}

impl CacheManager {
    pub fn new(config: Config) -> Self {
        CacheManager { config }
    }

    pub fn load_or_build(&self) -> Result<IndexSnapshot> {
        let source_path = &self.config.source_path;
        let source = fs::read(source_path).map_err(|e| {
            Error::new(
                ErrorKind::Io,
                format!("cannot read source text {}: {}", source_path.display(), e),
            )
        })?;
        if source.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptySource,
                format!("source text {} is empty", source_path.display()),
            ));
        }

        let fingerprint = Fingerprint::of_bytes(&source);

        if let Some(snapshot) = self.try_load(&fingerprint) {
            info!(
                "loaded index cache from {}",
                self.config.cache_path.display()
            );
            return Ok(snapshot);
        }

        info!(
            "building index from {} ({})",
            source_path.display(),
            fingerprint
        );
        let text = String::from_utf8_lossy(&source);
        let snapshot = IndexSnapshot::build(&text, fingerprint, &self.config)?;

        match self.persist(&snapshot) {
            Ok(()) => info!("wrote index cache to {}", self.config.cache_path.display()),
            Err(err) => warn!("failed to persist index cache: {}", err),
        }

        Ok(snapshot)
    }

    fn try_load(&self, expected: &Fingerprint) -> Option<IndexSnapshot> {
        let path = &self.config.cache_path;
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => return None,
        };

        match Self::decode(&bytes, expected) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(
                    "discarding index cache {}: {}; rebuilding",
                    path.display(),
                    err
                );
                None
            }
        }
    }

    fn decode(bytes: &[u8], expected: &Fingerprint) -> Result<IndexSnapshot> {
        let mut cursor = Cursor::new(bytes);
        let header: CacheHeader = bincode::deserialize_from(&mut cursor)?;

        if header.magic != MAGIC || header.version != FORMAT_VERSION {
            return Err(Error::new(ErrorKind::Parse, "unrecognized cache format"));
        }
        if header.fingerprint != *expected {
            return Err(Error::new(
                ErrorKind::InvalidState,
                format!(
                    "fingerprint mismatch (cache built from {}; source is {})",
                    header.fingerprint, expected
                ),
            ));
        }

        let payload = &bytes[cursor.position() as usize..];
        if payload.len() as u64 != header.payload_len {
            return Err(Error::new(ErrorKind::Parse, "truncated cache payload"));
        }
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(payload);
        if hasher.finalize() != header.payload_crc32 {
            return Err(Error::new(
                ErrorKind::Parse,
                "cache payload checksum mismatch",
            ));
        }

        let raw = lz4_flex::decompress_size_prepended(payload)
            .map_err(|e| Error::new(ErrorKind::Parse, e.to_string()))?;
        let mut snapshot: IndexSnapshot = bincode::deserialize(&raw)?;
        snapshot.rehydrate()?;
        Ok(snapshot)
    }

    fn persist(&self, snapshot: &IndexSnapshot) -> Result<()> {
        let raw = bincode::serialize(snapshot)?;
        let payload = lz4_flex::compress_prepend_size(&raw);

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&payload);
        let header = CacheHeader {
            magic: MAGIC,
            version: FORMAT_VERSION,
            fingerprint: snapshot.fingerprint,
            payload_crc32: hasher.finalize(),
            payload_len: payload.len() as u64,
        };

        let path = &self.config.cache_path;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        // Write to a temp file in the target directory, then rename, so an
        // interrupted build never leaves a half-written cache file.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&bincode::serialize(&header)?)?;
        tmp.write_all(&payload)?;
        tmp.persist(path)
            .map_err(|e| Error::new(ErrorKind::Io, e.to_string()))?;

        Ok(())
    }
}

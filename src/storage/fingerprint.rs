use serde::{Deserialize, Serialize};
use std::fmt;

/// Content fingerprint of the source text: byte length plus CRC32.
/// Used to decide whether a persisted index still matches the text it was
/// built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub len: u64,
    pub crc32: u32,
}

impl Fingerprint {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(bytes);
        Fingerprint {
            len: bytes.len() as u64,
            crc32: hasher.finalize(),
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} bytes, crc32 {:08x}", self.len, self.crc32)
    }
}

//! Anchor ids
//!
//! An anchor id is `<source index>_<text hash>`. The index alone keeps ids unique within a
//! document, even for repeated heading text; the hash changes whenever the heading line changes.
//! The hash is the first eight bytes of the SHA-256 digest of the raw line, read big-endian, so it
//! is non-negative and stable across runs and platforms.

use sha2::{Digest, Sha256};

/// Hash of a raw heading line, markers included.
pub fn text_hash(raw: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Fragment identifier for the heading on line `source_index`.
pub fn anchor_id(source_index: usize, raw: &str) -> String {
    format!("{}_{}", source_index, text_hash(raw))
}

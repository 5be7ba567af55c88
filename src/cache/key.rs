//! Cache key derivation.
//!
//! Two logically identical requests must always derive the same key; this
//! is the sole correctness property here. Keys are built from a canonical
//! `BTreeMap` of semantic parameters (stable field order) hashed with
//! SHA-256, plus a human-readable label that only ever appears in logs.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    hash: String,
    label: String,
}

impl CacheKey {
    /// Start composing a key for the given namespace (one per content kind).
    pub fn compose(namespace: impl Into<String>) -> KeyComposer {
        KeyComposer {
            namespace: namespace.into(),
            parts: BTreeMap::new(),
        }
    }

    /// The hex digest used as the storage key.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Human-readable form for logs; never used for lookup.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Accumulates named parameters and finishes into a [`CacheKey`].
#[derive(Debug, Clone)]
pub struct KeyComposer {
    namespace: String,
    parts: BTreeMap<String, String>,
}

impl KeyComposer {
    pub fn field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.parts.insert(name.into(), value.to_string());
        self
    }

    pub fn finish(self) -> CacheKey {
        let canonical =
            serde_json::to_string(&(&self.namespace, &self.parts)).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());

        let label = {
            let values: Vec<&str> = self.parts.values().map(String::as_str).collect();
            format!("{}:{}", self.namespace, values.join(":"))
        };
        CacheKey {
            hash: hex_digest(hasher),
            label,
        }
    }
}

fn hex_digest(hasher: Sha256) -> String {
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Normalization for free-text parameters (location queries): trimmed,
/// lowercased, inner whitespace collapsed, so "  New   Delhi " and
/// "new delhi" are the same request.
pub(crate) fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

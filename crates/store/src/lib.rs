// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gw-store: Persistence for the Gridwatch engine.
//!
//! Two JSON-file stores: the TTL'd graph cache and the bounded history
//! ledger. Both are replaced wholesale on every write using a
//! write-to-temp-then-rename discipline, so readers never observe a
//! half-written file. Missing or corrupt files read as absent/empty —
//! only write failures are surfaced.

mod cache;
mod ledger;

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

pub use cache::{default_ttl, CacheRecord, GraphCache, CURRENT_CACHE_VERSION};
pub use ledger::{HistoryLedger, DEFAULT_RETENTION};

/// Errors that can occur in store operations.
///
/// Reads never produce these (corrupt state degrades to absent); a write
/// failure is fatal to the sync that caused it, because a lost save after
/// a ledger append would desynchronize cache and ledger.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `value` and atomically replace the file at `path`.
fn replace_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Read and parse the file at `path`, treating missing or corrupt state
/// as absent. Corruption is logged; it must never fail a sync.
fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read store file");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt store file");
            None
        }
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Graph cache persistence.
//!
//! Stores the last-built dependency graph with its fetch timestamp.
//! Freshness derives from the persisted `fetched_at` field rather than
//! file metadata, so the check is a pure function of the record.

use crate::{load_json, replace_json, StoreError};
use chrono::{DateTime, Duration, Utc};
use gw_core::JobGraph;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current cache schema version
pub const CURRENT_CACHE_VERSION: u32 = 1;

/// Default time-to-live for a cached graph: 24 hours.
pub fn default_ttl() -> Duration {
    Duration::hours(24)
}

/// A cached graph snapshot with its fetch timestamp.
///
/// Replaced wholesale on every refresh; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Schema version for migrations
    #[serde(rename = "v")]
    pub version: u32,
    pub graph: JobGraph,
    /// When the graph was fetched from the remote source
    pub fetched_at: DateTime<Utc>,
}

impl CacheRecord {
    /// Pure freshness check: valid while `now - fetched_at < ttl`.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < ttl
    }
}

/// File-backed cache for the last-built job graph.
pub struct GraphCache {
    path: PathBuf,
    ttl: Duration,
}

impl GraphCache {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self { path: path.into(), ttl }
    }

    /// Cache at `path` with the default 24h TTL.
    pub fn with_default_ttl(path: impl Into<PathBuf>) -> Self {
        Self::new(path, default_ttl())
    }

    /// Load the persisted record. Missing or corrupt files read as absent.
    pub fn load(&self) -> Option<CacheRecord> {
        let record: CacheRecord = load_json(&self.path)?;
        if record.version != CURRENT_CACHE_VERSION {
            tracing::warn!(
                path = %self.path.display(),
                version = record.version,
                "ignoring cache record with unsupported schema version"
            );
            return None;
        }
        Some(record)
    }

    /// Load only if the record is still fresh at `now`.
    pub fn load_fresh(&self, now: DateTime<Utc>) -> Option<CacheRecord> {
        self.load().filter(|record| record.is_fresh(self.ttl, now))
    }

    /// Atomically replace the persisted record with `{graph, now}`.
    pub fn save(&self, graph: &JobGraph, now: DateTime<Utc>) -> Result<CacheRecord, StoreError> {
        let record = CacheRecord {
            version: CURRENT_CACHE_VERSION,
            graph: graph.clone(),
            fetched_at: now,
        };
        replace_json(&self.path, &record)?;
        Ok(record)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded append-only history ledger.
//!
//! The ledger file holds status observations oldest-first, capped at a
//! retention limit with FIFO eviction. Appends rewrite the whole file in
//! one atomic replacement; there is no incremental write path, so a crash
//! leaves either the old ledger or the new one, never a mix.

use crate::{load_json, replace_json, StoreError};
use gw_core::{last_status_index, HistoryEntry, JobStatus};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default maximum number of retained entries
pub const DEFAULT_RETENTION: usize = 1000;

/// File-backed, size-bounded log of status observations.
pub struct HistoryLedger {
    path: PathBuf,
    retention: usize,
}

impl HistoryLedger {
    pub fn new(path: impl Into<PathBuf>, retention: usize) -> Self {
        Self { path: path.into(), retention }
    }

    /// Ledger at `path` retaining the default 1000 entries.
    pub fn with_default_retention(path: impl Into<PathBuf>) -> Self {
        Self::new(path, DEFAULT_RETENTION)
    }

    /// Load all entries, oldest first. Missing or corrupt files read as empty.
    pub fn load(&self) -> Vec<HistoryEntry> {
        load_json(&self.path).unwrap_or_default()
    }

    /// Append a batch of entries and persist in a single atomic write.
    ///
    /// Retention overflow is not an error: the oldest entries are evicted
    /// until the total is back at the cap. Returns the retained length.
    pub fn append(&self, entries: Vec<HistoryEntry>) -> Result<usize, StoreError> {
        if entries.is_empty() {
            return Ok(self.load().len());
        }

        let mut all = self.load();
        all.extend(entries);
        if all.len() > self.retention {
            let excess = all.len() - self.retention;
            all.drain(..excess);
        }
        replace_json(&self.path, &all)?;
        Ok(all.len())
    }

    /// Query entries, newest first.
    ///
    /// `job_name` filters by exact match; `limit` caps the number of
    /// returned entries (default: all). Storage order stays oldest-first;
    /// newest-first here is the documented API ordering.
    pub fn query(&self, job_name: Option<&str>, limit: Option<usize>) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> = self
            .load()
            .into_iter()
            .filter(|e| job_name.map_or(true, |name| e.job_name == name))
            .collect();
        entries.reverse();
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }

    /// Last recorded status per job, rebuilt by scanning the ledger.
    pub fn last_status_index(&self) -> HashMap<String, JobStatus> {
        last_status_index(&self.load())
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;

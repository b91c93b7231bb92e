// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status-change history records.
//!
//! The ledger itself (persistence, retention) lives in `gw-store`; this
//! module holds the entry type and the pure index derivation so both can
//! be tested without IO.

use crate::status::JobStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One observed status change: at `timestamp`, `job_name` was in `status`.
///
/// Immutable once written to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub job_name: String,
    pub status: JobStatus,
}

impl HistoryEntry {
    pub fn new(timestamp: DateTime<Utc>, job_name: impl Into<String>, status: JobStatus) -> Self {
        Self { timestamp, job_name: job_name.into(), status }
    }
}

/// Derive the last-known-status index from ledger entries.
///
/// Keeps, per job, the status of the entry with the greatest timestamp.
/// Entries sharing a timestamp resolve to the later one in ledger order.
/// Never persisted — always rebuilt from the ledger, so there is no second
/// source of truth to drift.
pub fn last_status_index(entries: &[HistoryEntry]) -> HashMap<String, JobStatus> {
    let mut index: HashMap<String, (DateTime<Utc>, JobStatus)> = HashMap::new();
    for entry in entries {
        match index.get(&entry.job_name) {
            Some((ts, _)) if *ts > entry.timestamp => {}
            _ => {
                index.insert(entry.job_name.clone(), (entry.timestamp, entry.status));
            }
        }
    }
    index.into_iter().map(|(name, (_, status))| (name, status)).collect()
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;

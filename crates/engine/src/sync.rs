// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Graph synchronization.
//!
//! One `sync` call either serves a fresh cache record untouched or runs
//! the full pipeline: fetch → build → diff against the ledger → append
//! the delta batch → save the cache. No intermediate state is observable;
//! a failed fetch mutates nothing.

use chrono::{DateTime, Utc};
use gw_core::{Clock, HistoryEntry, JobGraph, SystemClock};
use gw_remote::{FetchError, JobSource};
use gw_store::{CacheRecord, GraphCache, HistoryLedger, StoreError};
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors surfaced by a sync.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote fetch failed; cache and ledger were left untouched.
    /// Callers may fall back to [`SyncEngine::stale`] after seeing this.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Persisting the cache or ledger failed after a successful fetch.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a sync: the graph plus freshness metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    pub graph: JobGraph,
    /// When the graph was fetched from the remote source
    pub fetched_at: DateTime<Utc>,
    /// True when the graph came from the cache without a remote call
    pub from_cache: bool,
}

impl From<CacheRecord> for SyncOutcome {
    fn from(record: CacheRecord) -> Self {
        SyncOutcome { graph: record.graph, fetched_at: record.fetched_at, from_cache: true }
    }
}

/// Orchestrates cache, remote source, graph builder, and history ledger
/// for one job-directory scope.
///
/// At most one sync runs at a time: a scheduled refresh and a manual
/// force-refresh serialize through the internal mutex, so there is never
/// a pair of divergent append batches or a lost cache update.
pub struct SyncEngine<S: JobSource, C: Clock = SystemClock> {
    source: S,
    cache: GraphCache,
    ledger: HistoryLedger,
    scope: String,
    clock: C,
    write_lock: Mutex<()>,
}

impl<S: JobSource> SyncEngine<S> {
    pub fn new(source: S, cache: GraphCache, ledger: HistoryLedger, scope: impl Into<String>) -> Self {
        Self::with_clock(source, cache, ledger, scope, SystemClock)
    }
}

impl<S: JobSource, C: Clock> SyncEngine<S, C> {
    /// Engine over an explicit clock; tests drive time through a fake.
    pub fn with_clock(
        source: S,
        cache: GraphCache,
        ledger: HistoryLedger,
        scope: impl Into<String>,
        clock: C,
    ) -> Self {
        Self { source, cache, ledger, scope: scope.into(), clock, write_lock: Mutex::new(()) }
    }

    /// Synchronize the job graph.
    ///
    /// With `force_refresh` false a fresh cache record is returned as-is —
    /// no remote call, no ledger mutation. Otherwise the remote source is
    /// fetched, the graph rebuilt, status changes appended to the ledger
    /// in one batch, and the cache replaced.
    pub async fn sync(&self, force_refresh: bool) -> Result<SyncOutcome, SyncError> {
        let _guard = self.write_lock.lock().await;
        let now = self.clock.now();

        if !force_refresh {
            if let Some(record) = self.cache.load_fresh(now) {
                tracing::debug!(scope = %self.scope, fetched_at = %record.fetched_at, "serving cached graph");
                return Ok(record.into());
            }
        }

        let snapshot = self.source.fetch_jobs(&self.scope).await?;
        let (jobs, triggers) = snapshot.into_parts();
        let graph = JobGraph::build(jobs, triggers);
        if graph.dropped_edge_count() > 0 {
            tracing::warn!(
                scope = %self.scope,
                dropped = graph.dropped_edge_count(),
                "dropped trigger edges referencing unknown jobs"
            );
        }

        let delta = self.diff(&graph, now);
        let appended = delta.len();
        if !delta.is_empty() {
            self.ledger.append(delta)?;
        }
        self.cache.save(&graph, now)?;

        tracing::info!(
            scope = %self.scope,
            jobs = graph.job_count(),
            edges = graph.edge_count(),
            appended,
            "synced job graph"
        );
        Ok(SyncOutcome { graph, fetched_at: now, from_cache: false })
    }

    /// One history entry per job whose status differs from the last
    /// recorded value, including jobs with no prior record. History is
    /// keyed by job name, the same key the query API filters on.
    fn diff(&self, graph: &JobGraph, now: DateTime<Utc>) -> Vec<HistoryEntry> {
        let index = self.ledger.last_status_index();
        graph
            .jobs()
            .filter(|job| index.get(&job.name) != Some(&job.status))
            .map(|job| HistoryEntry::new(now, job.name.clone(), job.status))
            .collect()
    }

    /// The cache record regardless of age.
    ///
    /// `sync` never silently serves stale data after a fetch failure;
    /// callers that prefer a stale graph over an error opt in here.
    pub fn stale(&self) -> Option<CacheRecord> {
        self.cache.load()
    }

    /// Read access to the history ledger for the dashboard layer.
    pub fn history(&self) -> &HistoryLedger {
        &self.ledger
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;

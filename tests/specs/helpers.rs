// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(dead_code)] // not every helper is used by every spec module

use chrono::{DateTime, Utc};
use gw_core::FakeClock;
use gw_engine::SyncEngine;
use gw_remote::{FakeJobSource, JobSnapshot, RawJob, RawTrigger};
use gw_store::{GraphCache, HistoryLedger};
use tempfile::TempDir;

pub fn raw_job(id: &str, status: &str) -> RawJob {
    RawJob {
        id: Some(id.into()),
        name: Some(id.into()),
        status: Some(status.into()),
        ..Default::default()
    }
}

pub fn raw_trigger(up: &str, down: &str) -> RawTrigger {
    RawTrigger { upstream: Some(up.into()), downstream: Some(down.into()) }
}

pub fn snapshot(jobs: Vec<RawJob>, triggers: Vec<RawTrigger>) -> JobSnapshot {
    JobSnapshot::new(jobs, triggers)
}

pub fn base_time() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_700_000_000_000).expect("valid timestamp")
}

/// Engine over a scripted source and clock with stores in `dir`, scope "prod/etl".
pub fn engine(
    dir: &TempDir,
    source: FakeJobSource,
    clock: FakeClock,
) -> SyncEngine<FakeJobSource, FakeClock> {
    SyncEngine::with_clock(
        source,
        GraphCache::with_default_ttl(dir.path().join("cache.json")),
        HistoryLedger::with_default_retention(dir.path().join("history.json")),
        "prod/etl",
        clock,
    )
}

/// Same engine but with a small history retention cap.
pub fn engine_with_retention(
    dir: &TempDir,
    source: FakeJobSource,
    clock: FakeClock,
    retention: usize,
) -> SyncEngine<FakeJobSource, FakeClock> {
    SyncEngine::with_clock(
        source,
        GraphCache::with_default_ttl(dir.path().join("cache.json")),
        HistoryLedger::new(dir.path().join("history.json"), retention),
        "prod/etl",
        clock,
    )
}

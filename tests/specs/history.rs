// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History retention and recovery scenarios.

use super::helpers::*;
use chrono::Duration;
use gw_core::{Clock, FakeClock, JobStatus};
use gw_remote::FakeJobSource;
use tempfile::tempdir;

#[tokio::test]
async fn retention_cap_holds_across_many_syncs() {
    let dir = tempdir().unwrap();
    let clock = FakeClock::at(base_time());
    let source = FakeJobSource::new();
    // Alternating statuses, so every sync appends one entry.
    for i in 0..10 {
        let status = if i % 2 == 0 { "running" } else { "success" };
        source.push_snapshot(snapshot(vec![raw_job("etl", status)], vec![]));
    }
    let engine = engine_with_retention(&dir, source, clock.clone(), 4);

    for _ in 0..10 {
        engine.sync(true).await.unwrap();
        clock.advance(Duration::minutes(1));
    }

    let history = engine.history().load();
    assert_eq!(history.len(), 4);
    // The newest observations survive eviction.
    let newest = engine.history().query(None, Some(1));
    assert_eq!(newest[0].timestamp, clock.now() - Duration::minutes(1));
}

#[tokio::test]
async fn query_filters_and_orders_for_the_api() {
    let dir = tempdir().unwrap();
    let clock = FakeClock::at(base_time());
    let source = FakeJobSource::new();
    source.push_snapshot(snapshot(
        vec![raw_job("etl", "running"), raw_job("report", "waiting")],
        vec![],
    ));
    source.push_snapshot(snapshot(
        vec![raw_job("etl", "success"), raw_job("report", "waiting")],
        vec![],
    ));
    let engine = engine(&dir, source, clock.clone());

    engine.sync(true).await.unwrap();
    clock.advance(Duration::minutes(10));
    engine.sync(true).await.unwrap();

    let etl = engine.history().query(Some("etl"), None);
    assert_eq!(etl.len(), 2);
    assert_eq!(etl[0].status, JobStatus::Success); // newest first
    assert_eq!(etl[1].status, JobStatus::Running);

    assert!(engine.history().query(Some("nope"), None).is_empty());
    assert_eq!(engine.history().query(None, Some(1)).len(), 1);
}

#[tokio::test]
async fn corrupt_files_recover_on_next_sync() {
    let dir = tempdir().unwrap();
    let clock = FakeClock::at(base_time());
    let source = FakeJobSource::new();
    source.push_snapshot(snapshot(vec![raw_job("etl", "running")], vec![]));
    source.push_snapshot(snapshot(vec![raw_job("etl", "running")], vec![]));
    let engine = engine(&dir, source, clock.clone());

    engine.sync(false).await.unwrap();

    // Clobber both stores; the engine must treat them as absent/empty.
    std::fs::write(dir.path().join("cache.json"), "garbage").unwrap();
    std::fs::write(dir.path().join("history.json"), "garbage").unwrap();

    clock.advance(Duration::minutes(1));
    let outcome = engine.sync(false).await.unwrap();

    assert!(!outcome.from_cache); // corrupt cache was not served
    assert_eq!(outcome.graph.job_count(), 1);
    // With the ledger lost, the still-running job reads as a fresh observation.
    let history = engine.history().load();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].job_name, "etl");
}

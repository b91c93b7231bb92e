// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end sync scenarios.

use super::helpers::*;
use chrono::Duration;
use gw_core::{Clock, FakeClock, JobStatus};
use gw_remote::FakeJobSource;
use tempfile::tempdir;

#[tokio::test]
async fn first_sync_then_status_change_after_expiry() {
    let dir = tempdir().unwrap();
    let clock = FakeClock::at(base_time());
    let source = FakeJobSource::new();
    source.push_snapshot(snapshot(
        vec![raw_job("J1", "success"), raw_job("J2", "running")],
        vec![],
    ));
    source.push_snapshot(snapshot(
        vec![raw_job("J1", "success"), raw_job("J2", "failed")],
        vec![],
    ));
    let engine = engine(&dir, source, clock.clone());

    // First sync on an empty ledger records every job once.
    engine.sync(false).await.unwrap();
    assert_eq!(engine.history().load().len(), 2);
    let index = engine.history().last_status_index();
    assert_eq!(index["J1"], JobStatus::Success);
    assert_eq!(index["J2"], JobStatus::Running);

    // After cache expiry only J2's change produces a new entry.
    clock.advance(Duration::hours(25));
    engine.sync(false).await.unwrap();

    let history = engine.history().load();
    assert_eq!(history.len(), 3);
    let newest = engine.history().query(None, Some(1));
    assert_eq!(newest[0].job_name, "J2");
    assert_eq!(newest[0].status, JobStatus::Failed);
    assert_eq!(newest[0].timestamp, clock.now());
    assert_eq!(engine.history().last_status_index()["J2"], JobStatus::Failed);
}

#[tokio::test]
async fn graph_survives_engine_restart_via_cache() {
    let dir = tempdir().unwrap();
    let clock = FakeClock::at(base_time());
    let source = FakeJobSource::new();
    source.push_snapshot(snapshot(
        vec![raw_job("a", "success"), raw_job("b", "waiting")],
        vec![raw_trigger("a", "b")],
    ));

    let first_outcome = {
        let engine = engine(&dir, source.clone(), clock.clone());
        engine.sync(false).await.unwrap()
    };

    // A new engine over the same files serves the cached graph.
    clock.advance(Duration::minutes(30));
    let engine = engine(&dir, FakeJobSource::new(), clock.clone());
    let outcome = engine.sync(false).await.unwrap();

    assert!(outcome.from_cache);
    assert_eq!(outcome.graph, first_outcome.graph);
    assert_eq!(outcome.fetched_at, first_outcome.fetched_at);
}

#[tokio::test]
async fn dashboard_view_of_a_synced_graph() {
    let dir = tempdir().unwrap();
    let source = FakeJobSource::new();
    source.push_snapshot(snapshot(
        vec![
            raw_job("extract", "success"),
            raw_job("transform", "running"),
            raw_job("load", "pending"),
        ],
        vec![
            raw_trigger("extract", "transform"),
            raw_trigger("transform", "load"),
            raw_trigger("transform", "archive"), // unknown downstream
        ],
    ));
    let engine = engine(&dir, source, FakeClock::at(base_time()));

    let outcome = engine.sync(false).await.unwrap();
    let graph = &outcome.graph;

    assert_eq!(graph.job_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.dropped_edge_count(), 1);
    assert_eq!(graph.get("load").unwrap().status, JobStatus::Waiting);
    assert_eq!(graph.downstream_of("extract").collect::<Vec<_>>(), vec!["transform"]);
    assert_eq!(graph.upstream_of("load").collect::<Vec<_>>(), vec!["transform"]);
    // Id set exposed for correlation with per-job output stores.
    assert_eq!(graph.job_ids().count(), 3);
}

#[tokio::test]
async fn concurrent_syncs_serialize_to_one_fetch_each() {
    let dir = tempdir().unwrap();
    let source = FakeJobSource::new();
    source.push_snapshot(snapshot(vec![raw_job("a", "running")], vec![]));
    source.push_snapshot(snapshot(vec![raw_job("a", "running")], vec![]));
    let engine = std::sync::Arc::new(engine(&dir, source.clone(), FakeClock::at(base_time())));

    // A scheduled refresh and a manual force-refresh racing: both complete,
    // appends never interleave, and the ledger holds exactly one entry.
    let scheduled = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.sync(false).await })
    };
    let manual = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.sync(true).await })
    };

    let scheduled = scheduled.await.unwrap();
    let manual = manual.await.unwrap();

    assert!(scheduled.is_ok());
    assert!(manual.is_ok());
    assert!(source.fetch_count() <= 2);
    assert_eq!(engine.history().load().len(), 1);
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directed job dependency graph.
//!
//! Built once per sync from the raw job and trigger records. Construction
//! is a pure transformation — no fetching, no persistence — so the builder
//! can be tested in isolation.

use crate::job::Job;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A trigger relationship: completion of `upstream` initiates `downstream`.
///
/// Edges reference jobs by identifier rather than owning them, so a graph
/// serializes cleanly even when trigger relationships form cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerEdge {
    pub upstream: String,
    pub downstream: String,
}

impl TriggerEdge {
    pub fn new(upstream: impl Into<String>, downstream: impl Into<String>) -> Self {
        Self { upstream: upstream.into(), downstream: downstream.into() }
    }
}

/// An immutable snapshot of the job dependency graph.
///
/// Invariant: every retained edge's endpoints exist in the job set. Edges
/// that referenced unknown jobs at build time are counted in
/// `dropped_edge_count` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobGraph {
    jobs: BTreeMap<String, Job>,
    edges: Vec<TriggerEdge>,
    #[serde(default)]
    dropped_edge_count: u32,
}

impl JobGraph {
    /// Build a graph from raw job and trigger records.
    ///
    /// Duplicate job ids resolve last-record-wins. Edges whose endpoints
    /// are not in the job set are dropped and counted; duplicate edges are
    /// retained once. Cycles are tolerated — triggers are not assumed to
    /// form a DAG.
    pub fn build(
        jobs: impl IntoIterator<Item = Job>,
        triggers: impl IntoIterator<Item = TriggerEdge>,
    ) -> JobGraph {
        let mut job_map = BTreeMap::new();
        for job in jobs {
            job_map.insert(job.id.clone(), job);
        }

        let mut edges = Vec::new();
        let mut seen = HashSet::new();
        let mut dropped = 0u32;
        for edge in triggers {
            if !job_map.contains_key(&edge.upstream) || !job_map.contains_key(&edge.downstream) {
                dropped += 1;
                continue;
            }
            if seen.insert((edge.upstream.clone(), edge.downstream.clone())) {
                edges.push(edge);
            }
        }

        JobGraph { jobs: job_map, edges, dropped_edge_count: dropped }
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of trigger records excluded because an endpoint was unknown
    pub fn dropped_edge_count(&self) -> u32 {
        self.dropped_edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// Jobs in stable (id) order
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    /// The job identifier set, for correlation with per-job output stores
    pub fn job_ids(&self) -> impl Iterator<Item = &str> {
        self.jobs.keys().map(String::as_str)
    }

    pub fn edges(&self) -> &[TriggerEdge] {
        &self.edges
    }

    /// Ids of jobs triggered by the given job
    pub fn downstream_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> {
        self.edges.iter().filter(move |e| e.upstream == id).map(|e| e.downstream.as_str())
    }

    /// Ids of jobs whose completion triggers the given job
    pub fn upstream_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> {
        self.edges.iter().filter(move |e| e.downstream == id).map(|e| e.upstream.as_str())
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw wire records and their conversion into domain types.
//!
//! The remote API is loosely typed; every field arrives optional. Records
//! missing the fields we need are quarantined here (skipped with a warning)
//! so untyped data never propagates past this boundary.

use chrono::DateTime;
use gw_core::{Job, JobStatus, TriggerEdge};
use serde::{Deserialize, Serialize};

/// A job record as returned by the remote API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// ISO-8601 start of the last run
    #[serde(default)]
    pub start_time: Option<String>,
    /// ISO-8601 end of the last run
    #[serde(default)]
    pub end_time: Option<String>,
}

impl RawJob {
    /// Convert to a domain [`Job`], or `None` if the record is unusable.
    ///
    /// A job needs an id and a name; everything else degrades gracefully
    /// (missing status becomes `Unknown`, unparsable timestamps are
    /// dropped).
    pub fn into_job(self) -> Option<Job> {
        let (Some(id), Some(name)) = (self.id, self.name) else {
            return None;
        };
        let status = self.status.as_deref().map(JobStatus::parse).unwrap_or(JobStatus::Unknown);
        Some(Job {
            id,
            name,
            status,
            started_at_ms: self.start_time.as_deref().and_then(parse_epoch_ms),
            finished_at_ms: self.end_time.as_deref().and_then(parse_epoch_ms),
        })
    }
}

/// A trigger record as returned by the remote API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTrigger {
    /// Id of the job whose completion fires the trigger
    #[serde(default, alias = "job_id")]
    pub upstream: Option<String>,
    /// Id of the job the trigger starts
    #[serde(default, alias = "triggered_job_id")]
    pub downstream: Option<String>,
}

impl RawTrigger {
    pub fn into_edge(self) -> Option<TriggerEdge> {
        match (self.upstream, self.downstream) {
            (Some(up), Some(down)) => Some(TriggerEdge::new(up, down)),
            _ => None,
        }
    }
}

/// One fetch's worth of raw data for a job-directory scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSnapshot {
    #[serde(default)]
    pub jobs: Vec<RawJob>,
    #[serde(default)]
    pub triggers: Vec<RawTrigger>,
}

impl JobSnapshot {
    pub fn new(jobs: Vec<RawJob>, triggers: Vec<RawTrigger>) -> Self {
        Self { jobs, triggers }
    }

    /// Convert to domain records, quarantining anything unusable.
    pub fn into_parts(self) -> (Vec<Job>, Vec<TriggerEdge>) {
        let mut jobs = Vec::with_capacity(self.jobs.len());
        for raw in self.jobs {
            let id = raw.id.clone();
            match raw.into_job() {
                Some(job) => jobs.push(job),
                None => tracing::warn!(?id, "skipping job record missing id or name"),
            }
        }

        let mut edges = Vec::with_capacity(self.triggers.len());
        for raw in self.triggers {
            match raw.into_edge() {
                Some(edge) => edges.push(edge),
                None => tracing::warn!("skipping trigger record missing an endpoint"),
            }
        }

        (jobs, edges)
    }
}

fn parse_epoch_ms(iso: &str) -> Option<u64> {
    let ms = DateTime::parse_from_rfc3339(iso).ok()?.timestamp_millis();
    u64::try_from(ms).ok()
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job snapshot records.

use crate::status::JobStatus;
use serde::{Deserialize, Serialize};

/// A job as observed in one sync of the remote scheduler.
///
/// Immutable once placed into a [`JobGraph`](crate::graph::JobGraph);
/// the next sync produces a fresh snapshot rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier assigned by the remote scheduler
    pub id: String,
    /// Display name
    pub name: String,
    pub status: JobStatus,
    /// Epoch ms when the last run started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at_ms: Option<u64>,
    /// Epoch ms when the last run finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at_ms: Option<u64>,
}

impl Job {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            started_at_ms: None,
            finished_at_ms: None,
        }
    }
}

crate::builder! {
    pub struct JobBuilder => Job {
        into {
            id: String = "job-1",
            name: String = "test-job",
        }
        set {
            status: JobStatus = JobStatus::Success,
        }
        option {
            started_at_ms: u64 = None,
            finished_at_ms: u64 = None,
        }
    }
}

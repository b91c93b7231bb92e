// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job status as reported by the remote scheduler.

use serde::{Deserialize, Serialize};

/// Observed status of a scheduled job.
///
/// The remote API reports statuses as free-form strings; anything we don't
/// recognize maps to `Unknown` rather than failing the sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Success,
    Failed,
    Running,
    /// Scheduled or queued but not yet running
    Waiting,
    Unknown,
}

impl JobStatus {
    /// Parse a status string from the remote API.
    ///
    /// Lenient by design: unrecognized strings become `Unknown` so a new
    /// status value on the remote side never breaks a sync.
    pub fn parse(s: &str) -> JobStatus {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" | "succeeded" | "completed" => JobStatus::Success,
            "failed" | "failure" | "error" => JobStatus::Failed,
            "running" | "active" => JobStatus::Running,
            "waiting" | "pending" | "scheduled" | "queued" => JobStatus::Waiting,
            _ => JobStatus::Unknown,
        }
    }
}

crate::simple_display! {
    JobStatus {
        Success => "success",
        Failed => "failed",
        Running => "running",
        Waiting => "waiting",
        Unknown => "unknown",
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

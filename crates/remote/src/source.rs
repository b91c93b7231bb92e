// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The job source seam.

use crate::records::JobSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from the remote job-scheduling API.
///
/// The engine never retries these; the caller's scheduler tries again on
/// its next tick.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unable to connect to the scheduler: {0}")]
    Connection(String),
    #[error("request to the scheduler timed out")]
    Timeout,
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("scheduler returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("malformed scheduler response: {0}")]
    Malformed(String),
}

/// Supplies job and trigger snapshots for a job-directory scope.
///
/// Implemented by the transport client outside this workspace and by
/// [`FakeJobSource`](crate::FakeJobSource) in tests. A fetch is the only
/// operation the sync engine awaits; timeouts are the implementation's
/// responsibility.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self, scope: &str) -> Result<JobSnapshot, FetchError>;
}

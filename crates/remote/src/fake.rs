// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted job source for engine and integration tests.

use crate::records::JobSnapshot;
use crate::source::{FetchError, JobSource};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// A [`JobSource`] that replays scripted responses in order.
///
/// An unscripted fetch fails with a connection error rather than blocking,
/// which doubles as an assertion that cache hits never reach the source.
#[derive(Clone, Default)]
pub struct FakeJobSource {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: VecDeque<Result<JobSnapshot, FetchError>>,
    fetches: u32,
    last_scope: Option<String>,
}

impl FakeJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful snapshot for the next fetch.
    pub fn push_snapshot(&self, snapshot: JobSnapshot) {
        self.inner.lock().responses.push_back(Ok(snapshot));
    }

    /// Script a failure for the next fetch.
    pub fn push_failure(&self, error: FetchError) {
        self.inner.lock().responses.push_back(Err(error));
    }

    /// Number of fetches the engine has issued.
    pub fn fetch_count(&self) -> u32 {
        self.inner.lock().fetches
    }

    /// Scope of the most recent fetch, if any.
    pub fn last_scope(&self) -> Option<String> {
        self.inner.lock().last_scope.clone()
    }
}

#[async_trait]
impl JobSource for FakeJobSource {
    async fn fetch_jobs(&self, scope: &str) -> Result<JobSnapshot, FetchError> {
        let mut inner = self.inner.lock();
        inner.fetches += 1;
        inner.last_scope = Some(scope.to_string());
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Connection("no scripted response".into())))
    }
}

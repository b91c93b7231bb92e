// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gw-core: Domain types for the Gridwatch job-graph engine

pub mod macros;

pub mod clock;
pub mod graph;
pub mod history;
pub mod job;
pub mod status;

pub use clock::{Clock, FakeClock, SystemClock};
pub use graph::{JobGraph, TriggerEdge};
pub use history::{last_status_index, HistoryEntry};
#[cfg(any(test, feature = "test-support"))]
pub use job::JobBuilder;
pub use job::Job;
pub use status::JobStatus;

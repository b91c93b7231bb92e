// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gw-remote: Contract for the remote job-scheduling API.
//!
//! The concrete transport client (HTTP, auth, timeouts) lives outside this
//! workspace; this crate defines the [`JobSource`] seam the engine consumes,
//! the raw wire records with boundary validation, and a scripted fake for
//! tests.

mod records;
mod source;

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeJobSource;
pub use records::{JobSnapshot, RawJob, RawTrigger};
pub use source::{FetchError, JobSource};

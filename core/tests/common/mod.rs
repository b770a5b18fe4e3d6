// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - An in-memory event API that counts calls

mod fake_api;
mod fixtures;

#[allow(unused_imports)]
pub use fake_api::FakeApi;
#[allow(unused_imports)]
pub use fixtures::{fill_draft, test_config, test_event};

// ABOUTME: Shared test helpers and fixtures for integration tests
// ABOUTME: Exports patient fixtures and hand-built weekly histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod fixtures;

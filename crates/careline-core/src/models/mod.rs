// ABOUTME: Core data models shared across the Careline workspace
// ABOUTME: Re-exports the patient snapshot and blood pressure reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

/// Patient snapshot consumed by the health predictor
pub mod patient;

pub use patient::{BloodPressure, Patient};

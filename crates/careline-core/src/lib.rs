// ABOUTME: Core types and constants for the Careline health platform
// ABOUTME: Foundation crate with error handling, the patient model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

#![deny(unsafe_code)]

//! # Careline Core
//!
//! Foundation crate providing shared types and constants for the Careline
//! health trend prediction workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Prediction horizon, history length, and service names
//! - **models**: The `Patient` snapshot consumed by the predictor

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Patient`, `BloodPressure`)
pub mod models;

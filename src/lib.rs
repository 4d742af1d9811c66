// ABOUTME: Main library entry point for the Careline health trend tools
// ABOUTME: Re-exports the core and intelligence crates and owns logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

#![deny(unsafe_code)]

//! # Careline
//!
//! Health trend prediction for patient snapshots. The heavy lifting lives in
//! two workspace crates:
//!
//! - **careline-core**: errors, constants, and the `Patient` model
//! - **careline-intelligence**: regression, metric analyzers, synthetic
//!   history, and the `HealthPredictor` facade
//!
//! This crate re-exports both under stable paths and provides logging setup
//! plus the `careline-predict` binary.
//!
//! ## Example Usage
//!
//! ```rust
//! use careline::intelligence::HealthPredictor;
//! use careline::models::Patient;
//! use uuid::Uuid;
//!
//! let patient = Patient {
//!     weight: Some(150.0),
//!     weight_goal: Some(140.0),
//!     body_fat: Some(20.0),
//!     body_fat_goal: Some(15.0),
//!     adherence: Some(95.0),
//!     ..Patient::new(Uuid::new_v4())
//! };
//! let prediction = HealthPredictor::with_seed(42).predict_health_trends(&patient);
//! assert_eq!(prediction.trends.len(), 4);
//! ```

/// Unified error handling with standard error codes
pub use careline_core::errors;

/// Application constants
pub use careline_core::constants;

/// Core data models (`Patient`, `BloodPressure`)
pub use careline_core::models;

/// Health trend intelligence engine
pub use careline_intelligence as intelligence;

/// Argument parsing and prediction flow for `careline-predict`
pub mod cli;

/// Structured logging configuration
pub mod logging;

/// Patient snapshot loading for the prediction CLI
pub mod patient_input;

// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for health trend prediction and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

//! Constants module
//!
//! Constants are grouped by domain. Values that operators may want to tune
//! live in the intelligence crate's `PredictionConfig`, which uses these as
//! its defaults.

/// Service names used in structured logging
pub mod service_names {
    /// Prediction CLI service name
    pub const CARELINE_PREDICT: &str = "careline-predict";
}

/// Time window of the synthetic history and of the projection
pub mod horizon {
    /// Weeks of synthetic history generated before "now"
    pub const HISTORY_WEEKS: u32 = 12;
    /// Weeks ahead a trend is projected
    pub const PROJECTION_WEEKS: u32 = 4;
    /// Longest synthetic history accepted from configuration (ten years)
    pub const MAX_HISTORY_WEEKS: u32 = 520;
    /// Longest projection horizon accepted from configuration (one year)
    pub const MAX_PROJECTION_WEEKS: u32 = 52;
}

/// Trend calculator defaults
pub mod trend {
    /// Minimum samples before a regression is attempted
    pub const MIN_DATA_POINTS: usize = 3;
    /// Absolute slope below which a series is considered stable
    pub const STABLE_SLOPE_THRESHOLD: f64 = 0.1;
    /// Confidence reported when there are too few samples
    pub const INSUFFICIENT_DATA_CONFIDENCE: f64 = 0.3;
    /// Lower clamp applied to R² when used as confidence
    pub const MIN_CONFIDENCE: f64 = 0.1;
    /// Upper clamp applied to R² when used as confidence
    pub const MAX_CONFIDENCE: f64 = 1.0;
}

/// Overall score bounds and heuristics
pub mod scoring {
    /// Score before any trend adjustments
    pub const BASE_SCORE: f64 = 70.0;
    /// Lowest possible overall score
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest possible overall score
    pub const MAX_SCORE: f64 = 100.0;
    /// Score reported by the demo prediction
    pub const DEMO_OVERALL_SCORE: u8 = 83;
}

/// Clinical reference values
pub mod clinical {
    /// Systolic pressure (mmHg) at or above which blood pressure is elevated
    pub const ELEVATED_SYSTOLIC: u16 = 140;
    /// Diastolic pressure (mmHg) at or above which blood pressure is elevated
    pub const ELEVATED_DIASTOLIC: u16 = 90;
    /// Recommended weekly moderate exercise (minutes)
    pub const RECOMMENDED_WEEKLY_EXERCISE_MINUTES: f64 = 150.0;
}

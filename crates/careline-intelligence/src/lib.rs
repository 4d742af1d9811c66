// ABOUTME: Health trend intelligence engine for patient snapshots
// ABOUTME: Shared trend types plus regression, analyzers, history synthesis, and prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

#![deny(unsafe_code)]

//! # Careline Intelligence
//!
//! Turns a patient's current snapshot into a [`HealthPrediction`]: a
//! synthetic weekly history is generated, each tracked metric is fitted with
//! ordinary least squares, and the per-metric trends are folded into an
//! overall 0-100 score with risk factors and interventions.
//!
//! ```rust
//! use careline_core::models::Patient;
//! use careline_intelligence::HealthPredictor;
//! use uuid::Uuid;
//!
//! let patient = Patient {
//!     weight: Some(150.0),
//!     weight_goal: Some(140.0),
//!     adherence: Some(95.0),
//!     ..Patient::new(Uuid::new_v4())
//! };
//! let prediction = HealthPredictor::with_seed(7).predict_health_trends(&patient);
//! assert!(prediction.overall_score <= 100);
//! ```

/// Prediction configuration with environment overrides
pub mod config;
/// Hand-authored prediction for demo mode
pub mod demo;
/// Synthetic weekly history generation
pub mod history;
/// Per-metric trend analyzers
pub mod metric_analyzers;
/// Prediction facade: score, risk factors, interventions
pub mod predictor;
/// Canned recommendation, risk factor, and intervention text
pub mod recommendations;
/// Least-squares regression and trend classification
pub mod statistical_analysis;

pub use config::{ConfigError, PredictionConfig};
pub use demo::generate_demo_health_prediction;
pub use history::synthesize_history;
pub use metric_analyzers::MetricAnalyzer;
pub use predictor::HealthPredictor;
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer, TrendCalculation};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Direction of a fitted trend
///
/// Derived from the sign of the slope only: a rising series is `Improving`
/// for every metric, including weight and body fat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Slope above the stability threshold
    Improving,
    /// Slope below the negative stability threshold
    Declining,
    /// Slope magnitude under the stability threshold
    Stable,
}

/// Coarse risk classification of a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No action needed
    Low,
    /// Worth discussing at the next review
    Medium,
    /// Needs provider attention
    High,
}

/// Metrics tracked by the predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthMetric {
    /// Body weight in lbs
    Weight,
    /// Body fat percentage
    BodyFat,
    /// Plan adherence percentage
    Adherence,
    /// Weekly exercise minutes
    Exercise,
}

impl HealthMetric {
    /// Every analyzed metric, in report order
    pub const ALL: [Self; 4] = [Self::Weight, Self::BodyFat, Self::Adherence, Self::Exercise];

    /// Read this metric from a data point
    #[must_use]
    pub const fn value_of(self, point: &HealthDataPoint) -> Option<f64> {
        match self {
            Self::Weight => point.weight,
            Self::BodyFat => point.body_fat,
            Self::Adherence => point.adherence,
            Self::Exercise => point.exercise_minutes,
        }
    }

    /// Extract the finite readings of this metric in chronological order
    #[must_use]
    pub fn series(self, data: &[HealthDataPoint]) -> Vec<f64> {
        data.iter()
            .filter_map(|point| self.value_of(point))
            .filter(|value| value.is_finite())
            .collect()
    }

    /// Human-readable label used in messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::BodyFat => "body fat",
            Self::Adherence => "adherence",
            Self::Exercise => "exercise",
        }
    }
}

impl fmt::Display for HealthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One week of (synthetic) patient readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDataPoint {
    /// When the readings were taken
    pub timestamp: DateTime<Utc>,
    /// Body weight (lbs)
    pub weight: Option<f64>,
    /// Body fat percentage
    pub body_fat: Option<f64>,
    /// Plan adherence percentage
    pub adherence: Option<f64>,
    /// Exercise minutes for the week
    pub exercise_minutes: Option<f64>,
    /// Average daily steps
    pub steps: Option<f64>,
    /// Average nightly sleep
    pub sleep_hours: Option<f64>,
}

/// Fitted trend for a single metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthTrend {
    /// Metric the trend describes
    pub metric: HealthMetric,
    /// Raw slope direction
    pub direction: TrendDirection,
    /// Goodness of fit in [0, 1]
    pub confidence: f64,
    /// Units per week
    pub change_rate: f64,
    /// Latest reading
    pub current_value: Option<f64>,
    /// Value projected at the end of the prediction horizon
    pub predicted_value: Option<f64>,
    /// Coarse risk classification
    pub risk_level: RiskLevel,
    /// Canned guidance for the patient
    pub recommendations: Vec<String>,
}

/// Complete trend report for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPrediction {
    /// Patient the report belongs to
    pub patient_id: Uuid,
    /// One trend per analyzed metric
    pub trends: Vec<HealthTrend>,
    /// Overall health score in [0, 100]
    pub overall_score: u8,
    /// Findings that warrant attention
    pub risk_factors: Vec<String>,
    /// Suggested provider actions
    pub interventions: Vec<String>,
    /// Weeks ahead the trends are projected
    pub prediction_horizon_weeks: u32,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Whether this is hand-authored demo data
    pub is_demo: bool,
}

impl HealthPrediction {
    /// Find the trend for a metric
    #[must_use]
    pub fn trend(&self, metric: HealthMetric) -> Option<&HealthTrend> {
        self.trends.iter().find(|trend| trend.metric == metric)
    }
}

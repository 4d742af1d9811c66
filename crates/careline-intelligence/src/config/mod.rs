// ABOUTME: Prediction configuration: trend, history, risk, and scoring parameters
// ABOUTME: Provides defaults, CARELINE_* environment overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

//! Prediction Configuration Module
//!
//! Every threshold used by the trend calculator, the metric analyzers, the
//! synthetic history generator, and the overall score lives here. Defaults
//! come from `careline_core::constants`; operators can override individual
//! values through `CARELINE_*` environment variables.

pub mod error;

pub use error::ConfigError;

use careline_core::constants::{clinical, horizon, scoring, trend};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PREDICTION_CONFIG: OnceLock<PredictionConfig> = OnceLock::new();

/// Main prediction configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Trend calculator parameters
    pub trend: TrendConfig,
    /// Synthetic history parameters
    pub history: HistoryConfig,
    /// Metric-specific risk thresholds
    pub risk: RiskThresholds,
    /// Overall score heuristic
    pub scoring: ScoringConfig,
    /// Serve the hand-authored demo prediction instead of analyzing
    pub demo_mode: bool,
}

/// Trend calculator parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Minimum samples before a regression is attempted
    pub min_data_points: usize,
    /// Absolute slope below which a trend is stable
    pub stable_slope_threshold: f64,
    /// Confidence reported when there are too few samples
    pub insufficient_data_confidence: f64,
    /// Lower clamp for R²-derived confidence
    pub min_confidence: f64,
    /// Upper clamp for R²-derived confidence
    pub max_confidence: f64,
    /// Weeks ahead the projection extends
    pub projection_weeks: u32,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_data_points: trend::MIN_DATA_POINTS,
            stable_slope_threshold: trend::STABLE_SLOPE_THRESHOLD,
            insufficient_data_confidence: trend::INSUFFICIENT_DATA_CONFIDENCE,
            min_confidence: trend::MIN_CONFIDENCE,
            max_confidence: trend::MAX_CONFIDENCE,
            projection_weeks: horizon::PROJECTION_WEEKS,
        }
    }
}

/// Synthetic history parameters
///
/// Noise values are half-widths of a uniform distribution; progress values
/// are per-week drifts scaled by the patient's adherence fraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Weeks of history before "now"
    pub weeks: u32,
    /// Adherence assumed when the patient has none recorded
    pub default_adherence: f64,
    /// Weight noise (lbs)
    pub weight_noise: f64,
    /// Body fat noise (percentage points)
    pub body_fat_noise: f64,
    /// Adherence noise (percentage points)
    pub adherence_noise: f64,
    /// Exercise noise (minutes)
    pub exercise_noise: f64,
    /// Step count noise
    pub steps_noise: f64,
    /// Sleep noise (hours)
    pub sleep_noise: f64,
    /// Weight drift toward goal per week (lbs)
    pub weight_progress_per_week: f64,
    /// Body fat drift toward goal per week (percentage points)
    pub body_fat_progress_per_week: f64,
    /// Adherence drift per week (percentage points)
    pub adherence_progress_per_week: f64,
    /// Exercise drift per week (minutes)
    pub exercise_progress_per_week: f64,
    /// Weekly exercise minutes at 100% adherence
    pub exercise_target_minutes: f64,
    /// Daily steps at 100% adherence
    pub steps_target: f64,
    /// Typical nightly sleep
    pub baseline_sleep_hours: f64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            weeks: horizon::HISTORY_WEEKS,
            default_adherence: 70.0,
            weight_noise: 2.0,
            body_fat_noise: 1.0,
            adherence_noise: 10.0,
            exercise_noise: 20.0,
            steps_noise: 1500.0,
            sleep_noise: 1.0,
            weight_progress_per_week: 0.5,
            body_fat_progress_per_week: 0.2,
            adherence_progress_per_week: 0.5,
            exercise_progress_per_week: 2.0,
            exercise_target_minutes: clinical::RECOMMENDED_WEEKLY_EXERCISE_MINUTES,
            steps_target: 8000.0,
            baseline_sleep_hours: 7.0,
        }
    }
}

/// Metric-specific risk thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Weight decline (lbs/week) above which risk is high
    pub weight_decline_high: f64,
    /// Weight increase (lbs/week) above which risk is medium
    pub weight_increase_medium: f64,
    /// Body fat increase (points/week) above which risk is high
    pub body_fat_increase_high: f64,
    /// Body fat decline (points/week) above which risk is medium
    pub body_fat_decline_medium: f64,
    /// Adherence below which risk is high
    pub adherence_high_risk_below: f64,
    /// Adherence below which risk is medium
    pub adherence_medium_risk_below: f64,
    /// Weekly exercise minutes below which risk is high
    pub exercise_high_risk_below: f64,
    /// Weekly exercise minutes below which risk is medium
    pub exercise_medium_risk_below: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            weight_decline_high: 0.5,
            weight_increase_medium: 0.5,
            body_fat_increase_high: 0.2,
            body_fat_decline_medium: 0.5,
            adherence_high_risk_below: 60.0,
            adherence_medium_risk_below: 80.0,
            exercise_high_risk_below: 75.0,
            exercise_medium_risk_below: clinical::RECOMMENDED_WEEKLY_EXERCISE_MINUTES,
        }
    }
}

/// Overall score heuristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Score before adjustments
    pub base_score: f64,
    /// Points for a fully confident improving or declining trend
    pub direction_adjustment: f64,
    /// Share of the direction adjustment given to weight
    pub weight_weight: f64,
    /// Share of the direction adjustment given to body fat
    pub body_fat_weight: f64,
    /// Share of the direction adjustment given to adherence
    pub adherence_weight: f64,
    /// Share of the direction adjustment given to exercise
    pub exercise_weight: f64,
    /// Points subtracted per high-risk trend
    pub high_risk_penalty: f64,
    /// Points subtracted per medium-risk trend
    pub medium_risk_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: scoring::BASE_SCORE,
            direction_adjustment: 10.0,
            weight_weight: 0.3,
            body_fat_weight: 0.25,
            adherence_weight: 0.3,
            exercise_weight: 0.15,
            high_risk_penalty: 15.0,
            medium_risk_penalty: 7.0,
        }
    }
}

impl PredictionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PREDICTION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load prediction config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent parameter
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_trend()?;
        self.validate_history()?;
        self.validate_risk()?;
        self.validate_scoring()
    }

    fn validate_trend(&self) -> Result<(), ConfigError> {
        let trend = &self.trend;
        if trend.min_data_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_data_points must be at least 2 for a regression",
            ));
        }
        ensure_finite(
            &[
                trend.stable_slope_threshold,
                trend.insufficient_data_confidence,
                trend.min_confidence,
                trend.max_confidence,
            ],
            "trend parameters must be finite numbers",
        )?;
        if trend.stable_slope_threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stable_slope_threshold must not be negative",
            ));
        }
        if !(0.0..=1.0).contains(&trend.min_confidence)
            || !(0.0..=1.0).contains(&trend.max_confidence)
            || !(0.0..=1.0).contains(&trend.insufficient_data_confidence)
        {
            return Err(ConfigError::ValueOutOfRange(
                "confidence values must be within 0.0-1.0",
            ));
        }
        if trend.min_confidence >= trend.max_confidence {
            return Err(ConfigError::InvalidRange(
                "min_confidence must be < max_confidence",
            ));
        }
        if !(1..=horizon::MAX_PROJECTION_WEEKS).contains(&trend.projection_weeks) {
            return Err(ConfigError::ValueOutOfRange(
                "projection_weeks must be within 1-52",
            ));
        }
        Ok(())
    }

    fn validate_history(&self) -> Result<(), ConfigError> {
        let history = &self.history;
        if !(1..=horizon::MAX_HISTORY_WEEKS).contains(&history.weeks) {
            return Err(ConfigError::ValueOutOfRange(
                "history weeks must be within 1-520",
            ));
        }
        ensure_finite(
            &[
                history.weight_progress_per_week,
                history.body_fat_progress_per_week,
                history.adherence_progress_per_week,
                history.exercise_progress_per_week,
                history.exercise_target_minutes,
                history.steps_target,
                history.baseline_sleep_hours,
            ],
            "history progress and target values must be finite numbers",
        )?;
        if !(0.0..=100.0).contains(&history.default_adherence) {
            return Err(ConfigError::ValueOutOfRange(
                "default_adherence must be within 0-100",
            ));
        }
        let noise = [
            history.weight_noise,
            history.body_fat_noise,
            history.adherence_noise,
            history.exercise_noise,
            history.steps_noise,
            history.sleep_noise,
        ];
        if noise.iter().any(|n| !n.is_finite() || *n < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "history noise amplitudes must be finite and non-negative",
            ));
        }
        Ok(())
    }

    fn validate_risk(&self) -> Result<(), ConfigError> {
        let risk = &self.risk;
        ensure_finite(
            &[
                risk.weight_decline_high,
                risk.weight_increase_medium,
                risk.body_fat_increase_high,
                risk.body_fat_decline_medium,
                risk.adherence_high_risk_below,
                risk.adherence_medium_risk_below,
                risk.exercise_high_risk_below,
                risk.exercise_medium_risk_below,
            ],
            "risk thresholds must be finite numbers",
        )?;
        if risk.adherence_high_risk_below >= risk.adherence_medium_risk_below {
            return Err(ConfigError::InvalidRange(
                "adherence_high_risk_below must be < adherence_medium_risk_below",
            ));
        }
        if risk.exercise_high_risk_below >= risk.exercise_medium_risk_below {
            return Err(ConfigError::InvalidRange(
                "exercise_high_risk_below must be < exercise_medium_risk_below",
            ));
        }
        let rates = [
            risk.weight_decline_high,
            risk.weight_increase_medium,
            risk.body_fat_increase_high,
            risk.body_fat_decline_medium,
        ];
        if rates.iter().any(|r| *r < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "risk rate thresholds must not be negative",
            ));
        }
        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let weights = &self.scoring;
        ensure_finite(
            &[
                weights.base_score,
                weights.direction_adjustment,
                weights.weight_weight,
                weights.body_fat_weight,
                weights.adherence_weight,
                weights.exercise_weight,
                weights.high_risk_penalty,
                weights.medium_risk_penalty,
            ],
            "scoring parameters must be finite numbers",
        )?;
        if !(scoring::MIN_SCORE..=scoring::MAX_SCORE).contains(&weights.base_score) {
            return Err(ConfigError::ValueOutOfRange("base_score must be within 0-100"));
        }

        let weight_sum = weights.weight_weight
            + weights.body_fat_weight
            + weights.adherence_weight
            + weights.exercise_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Score weights must sum to 1.0",
            ));
        }

        if weights.high_risk_penalty < 0.0 || weights.medium_risk_penalty < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "risk penalties must not be negative",
            ));
        }
        if weights.high_risk_penalty < weights.medium_risk_penalty {
            return Err(ConfigError::InvalidRange(
                "high_risk_penalty must be >= medium_risk_penalty",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("CARELINE_MIN_DATA_POINTS", &mut self.trend.min_data_points)?;
        Self::apply_env_var(
            "CARELINE_STABLE_SLOPE_THRESHOLD",
            &mut self.trend.stable_slope_threshold,
        )?;
        Self::apply_env_var("CARELINE_PROJECTION_WEEKS", &mut self.trend.projection_weeks)?;

        Self::apply_env_var("CARELINE_HISTORY_WEEKS", &mut self.history.weeks)?;
        Self::apply_env_var(
            "CARELINE_DEFAULT_ADHERENCE",
            &mut self.history.default_adherence,
        )?;

        Self::apply_env_var(
            "CARELINE_ADHERENCE_HIGH_RISK_BELOW",
            &mut self.risk.adherence_high_risk_below,
        )?;
        Self::apply_env_var(
            "CARELINE_ADHERENCE_MEDIUM_RISK_BELOW",
            &mut self.risk.adherence_medium_risk_below,
        )?;
        Self::apply_env_var(
            "CARELINE_EXERCISE_HIGH_RISK_BELOW",
            &mut self.risk.exercise_high_risk_below,
        )?;
        Self::apply_env_var(
            "CARELINE_EXERCISE_MEDIUM_RISK_BELOW",
            &mut self.risk.exercise_medium_risk_below,
        )?;

        Self::apply_env_var("CARELINE_BASE_SCORE", &mut self.scoring.base_score)?;
        Self::apply_env_var(
            "CARELINE_HIGH_RISK_PENALTY",
            &mut self.scoring.high_risk_penalty,
        )?;
        Self::apply_env_var(
            "CARELINE_MEDIUM_RISK_PENALTY",
            &mut self.scoring.medium_risk_penalty,
        )?;

        if let Ok(val) = env::var("CARELINE_DEMO_MODE") {
            self.demo_mode = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        Ok(self)
    }
}

/// Rejects `NaN` and infinities, which pass ordered range checks
fn ensure_finite(values: &[f64], message: &'static str) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}

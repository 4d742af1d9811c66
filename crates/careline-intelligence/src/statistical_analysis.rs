// ABOUTME: Least-squares regression and trend classification for weekly health series
// ABOUTME: Computes slope, intercept, R-squared, and the direction/confidence of a trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are tiny

use crate::config::TrendConfig;
use crate::TrendDirection;
use careline_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Linear regression of samples against their index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (units per sample)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination, `1 - SSres/SStot`
    pub r_squared: f64,
    /// Number of samples fitted
    pub sample_count: usize,
}

impl RegressionResult {
    /// Evaluate the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Direction, rate, and confidence of a trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendCalculation {
    /// Raw slope direction
    pub direction: TrendDirection,
    /// Slope in units per sample
    pub rate: f64,
    /// R² clamped to the configured confidence range
    pub confidence: f64,
}

/// Statistical analyzer for short, evenly spaced series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least-squares regression against x = 0..n-1
    ///
    /// R² is reported as 0 when every sample is identical.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 samples or any sample is not finite
    pub fn linear_regression(values: &[f64]) -> AppResult<RegressionResult> {
        if values.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(AppError::invalid_input(
                "Regression samples must be finite numbers",
            ));
        }

        let n = values.len() as f64;
        let sum_x = (0..values.len()).map(|i| i as f64).sum::<f64>();
        let sum_y = values.iter().sum::<f64>();
        let sum_xx = (0..values.len()).map(|i| (i * i) as f64).sum::<f64>();
        let sum_x_y = values
            .iter()
            .enumerate()
            .map(|(i, y)| i as f64 * y)
            .sum::<f64>();

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
        let slope = (n * mean_x).mul_add(-mean_y, sum_x_y) / denominator;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let (ss_res, ss_tot) = values.iter().enumerate().fold(
            (0.0_f64, 0.0_f64),
            |(res, tot), (i, y)| {
                let residual = y - slope.mul_add(i as f64, intercept);
                let deviation = y - mean_y;
                (residual.mul_add(residual, res), deviation.mul_add(deviation, tot))
            },
        );

        let r_squared = if ss_tot.abs() < f64::EPSILON {
            0.0
        } else {
            1.0 - ss_res / ss_tot
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
            sample_count: values.len(),
        })
    }

    /// Classify a slope against the stability threshold
    ///
    /// Positive is always `Improving`; callers that care about metric
    /// semantics must interpret the direction themselves.
    #[must_use]
    pub fn classify_direction(slope: f64, stable_threshold: f64) -> TrendDirection {
        if slope.abs() < stable_threshold {
            TrendDirection::Stable
        } else if slope > 0.0 {
            TrendDirection::Improving
        } else {
            TrendDirection::Declining
        }
    }

    /// Calculate a trend with the default parameters
    #[must_use]
    pub fn calculate_trend(values: &[f64]) -> TrendCalculation {
        Self::calculate_trend_with_config(values, &TrendConfig::default())
    }

    /// Calculate a trend
    ///
    /// Short series yield `{stable, 0, insufficient_data_confidence}`
    /// regardless of their values.
    #[must_use]
    pub fn calculate_trend_with_config(values: &[f64], config: &TrendConfig) -> TrendCalculation {
        let insufficient = TrendCalculation {
            direction: TrendDirection::Stable,
            rate: 0.0,
            confidence: config.insufficient_data_confidence,
        };

        if values.len() < config.min_data_points {
            return insufficient;
        }

        // Non-finite samples are rejected upstream; fall back rather than panic
        let Ok(regression) = Self::linear_regression(values) else {
            return insufficient;
        };

        TrendCalculation {
            direction: Self::classify_direction(regression.slope, config.stable_slope_threshold),
            rate: regression.slope,
            confidence: regression
                .r_squared
                .clamp(config.min_confidence, config.max_confidence),
        }
    }
}

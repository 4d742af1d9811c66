// ABOUTME: Per-metric trend analyzers for weight, body fat, adherence, and exercise
// ABOUTME: Wraps the trend calculator with projections, risk thresholds, and canned advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

use crate::config::PredictionConfig;
use crate::recommendations;
use crate::statistical_analysis::{StatisticalAnalyzer, TrendCalculation};
use crate::{HealthDataPoint, HealthMetric, HealthTrend, RiskLevel, TrendDirection};
use tracing::debug;

/// Table-driven analyzer applying metric-specific thresholds
pub struct MetricAnalyzer<'a> {
    config: &'a PredictionConfig,
}

impl<'a> MetricAnalyzer<'a> {
    /// Create an analyzer bound to a configuration
    #[must_use]
    pub const fn new(config: &'a PredictionConfig) -> Self {
        Self { config }
    }

    /// Analyze body weight
    #[must_use]
    pub fn analyze_weight_trend(&self, data: &[HealthDataPoint]) -> HealthTrend {
        self.analyze(HealthMetric::Weight, data)
    }

    /// Analyze body fat percentage
    #[must_use]
    pub fn analyze_body_fat_trend(&self, data: &[HealthDataPoint]) -> HealthTrend {
        self.analyze(HealthMetric::BodyFat, data)
    }

    /// Analyze plan adherence
    #[must_use]
    pub fn analyze_adherence_trend(&self, data: &[HealthDataPoint]) -> HealthTrend {
        self.analyze(HealthMetric::Adherence, data)
    }

    /// Analyze weekly exercise minutes
    #[must_use]
    pub fn analyze_exercise_trend(&self, data: &[HealthDataPoint]) -> HealthTrend {
        self.analyze(HealthMetric::Exercise, data)
    }

    /// Analyze every tracked metric in report order
    #[must_use]
    pub fn analyze_all(&self, data: &[HealthDataPoint]) -> Vec<HealthTrend> {
        HealthMetric::ALL
            .iter()
            .map(|&metric| self.analyze(metric, data))
            .collect()
    }

    /// Analyze a single metric
    #[must_use]
    pub fn analyze(&self, metric: HealthMetric, data: &[HealthDataPoint]) -> HealthTrend {
        let values = metric.series(data);

        let Some(&current) = values.last() else {
            return HealthTrend {
                metric,
                direction: TrendDirection::Stable,
                confidence: 0.0,
                change_rate: 0.0,
                current_value: None,
                predicted_value: None,
                risk_level: RiskLevel::Low,
                recommendations: vec![recommendations::no_data(metric)],
            };
        };

        if values.len() < self.config.trend.min_data_points {
            return HealthTrend {
                metric,
                direction: TrendDirection::Stable,
                confidence: self.config.trend.insufficient_data_confidence,
                change_rate: 0.0,
                current_value: Some(current),
                predicted_value: Some(current),
                risk_level: RiskLevel::Low,
                recommendations: vec![recommendations::insufficient_data(metric)],
            };
        }

        let trend = StatisticalAnalyzer::calculate_trend_with_config(&values, &self.config.trend);
        let projected = trend
            .rate
            .mul_add(f64::from(self.config.trend.projection_weeks), current);
        let risk_level = self.assess_risk(metric, &trend, current);

        debug!(
            metric = %metric,
            direction = ?trend.direction,
            rate = trend.rate,
            confidence = trend.confidence,
            risk = ?risk_level,
            "analyzed metric trend"
        );

        HealthTrend {
            metric,
            direction: trend.direction,
            confidence: trend.confidence,
            change_rate: trend.rate,
            current_value: Some(current),
            predicted_value: Some(clamp_to_metric(metric, projected)),
            risk_level,
            recommendations: recommendations::for_trend(metric, trend.direction),
        }
    }

    /// Metric-specific risk rules
    ///
    /// Direction is the raw slope sign, so for weight and body fat
    /// `Declining` means the number is going down.
    fn assess_risk(
        &self,
        metric: HealthMetric,
        trend: &TrendCalculation,
        current: f64,
    ) -> RiskLevel {
        let risk = &self.config.risk;
        match metric {
            HealthMetric::Weight => match trend.direction {
                TrendDirection::Declining if trend.rate.abs() > risk.weight_decline_high => {
                    RiskLevel::High
                }
                TrendDirection::Improving if trend.rate > risk.weight_increase_medium => {
                    RiskLevel::Medium
                }
                _ => RiskLevel::Low,
            },
            HealthMetric::BodyFat => match trend.direction {
                TrendDirection::Improving if trend.rate > risk.body_fat_increase_high => {
                    RiskLevel::High
                }
                TrendDirection::Declining if trend.rate.abs() > risk.body_fat_decline_medium => {
                    RiskLevel::Medium
                }
                _ => RiskLevel::Low,
            },
            HealthMetric::Adherence => level_by_floor(
                current,
                trend.direction,
                risk.adherence_high_risk_below,
                risk.adherence_medium_risk_below,
            ),
            HealthMetric::Exercise => level_by_floor(
                current,
                trend.direction,
                risk.exercise_high_risk_below,
                risk.exercise_medium_risk_below,
            ),
        }
    }
}

/// Risk for metrics where higher is better
fn level_by_floor(
    current: f64,
    direction: TrendDirection,
    high_below: f64,
    medium_below: f64,
) -> RiskLevel {
    if current < high_below {
        RiskLevel::High
    } else if current < medium_below || direction == TrendDirection::Declining {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Keep projections physically meaningful
fn clamp_to_metric(metric: HealthMetric, value: f64) -> f64 {
    match metric {
        HealthMetric::BodyFat | HealthMetric::Adherence => value.clamp(0.0, 100.0),
        HealthMetric::Weight | HealthMetric::Exercise => value.max(0.0),
    }
}

// ABOUTME: Patient fixtures and deterministic weekly histories for prediction tests
// ABOUTME: Builds single-metric series so analyzer thresholds can be hit exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::cast_possible_wrap)] // Week offsets are small

use careline::intelligence::config::HistoryConfig;
use careline::intelligence::{
    HealthDataPoint, HealthMetric, HealthTrend, RiskLevel, TrendDirection,
};
use careline::models::Patient;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

/// Fixed reference instant so generated timestamps are comparable
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
}

/// Adherent patient working toward weight and body fat goals
pub fn adherent_patient() -> Patient {
    Patient {
        weight: Some(150.0),
        weight_goal: Some(140.0),
        body_fat: Some(20.0),
        body_fat_goal: Some(15.0),
        adherence: Some(95.0),
        ..Patient::new(Uuid::new_v4())
    }
}

/// Patient with an identifier and nothing else
pub fn empty_patient() -> Patient {
    Patient::new(Uuid::new_v4())
}

/// History configuration with every noise amplitude set to zero
pub fn noiseless_history() -> HistoryConfig {
    HistoryConfig {
        weight_noise: 0.0,
        body_fat_noise: 0.0,
        adherence_noise: 0.0,
        exercise_noise: 0.0,
        steps_noise: 0.0,
        sleep_noise: 0.0,
        ..HistoryConfig::default()
    }
}

/// Weekly points carrying only `metric`, oldest first
pub fn series_points(metric: HealthMetric, values: &[f64]) -> Vec<HealthDataPoint> {
    let now = reference_now();
    let weeks = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let mut point = empty_point(now - Duration::weeks((weeks - 1 - i) as i64));
            match metric {
                HealthMetric::Weight => point.weight = Some(value),
                HealthMetric::BodyFat => point.body_fat = Some(value),
                HealthMetric::Adherence => point.adherence = Some(value),
                HealthMetric::Exercise => point.exercise_minutes = Some(value),
            }
            point
        })
        .collect()
}

/// `count` values starting at `start` and changing by `step` each week
pub fn linear(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| step.mul_add(i as f64, start)).collect()
}

/// A data point with no readings
pub fn empty_point(timestamp: DateTime<Utc>) -> HealthDataPoint {
    HealthDataPoint {
        timestamp,
        weight: None,
        body_fat: None,
        adherence: None,
        exercise_minutes: None,
        steps: None,
        sleep_hours: None,
    }
}

/// Hand-built trend for scoring and risk factor tests
pub fn trend(
    metric: HealthMetric,
    direction: TrendDirection,
    confidence: f64,
    risk_level: RiskLevel,
) -> HealthTrend {
    HealthTrend {
        metric,
        direction,
        confidence,
        change_rate: 0.0,
        current_value: None,
        predicted_value: None,
        risk_level,
        recommendations: Vec::new(),
    }
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ABOUTME: Hand-authored health prediction served in demo mode
// ABOUTME: Fixed trends and an overall score of 83, flagged with is_demo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

use crate::recommendations::interventions;
use crate::{HealthMetric, HealthPrediction, HealthTrend, RiskLevel, TrendDirection};
use careline_core::constants::horizon::PROJECTION_WEEKS;
use careline_core::constants::scoring::DEMO_OVERALL_SCORE;
use chrono::Utc;
use uuid::Uuid;

/// Demo prediction used when real analysis is unavailable
///
/// Everything except `patient_id` and `generated_at` is constant.
#[must_use]
pub fn generate_demo_health_prediction(patient_id: Uuid) -> HealthPrediction {
    HealthPrediction {
        patient_id,
        trends: vec![
            demo_trend(
                HealthMetric::Weight,
                TrendDirection::Declining,
                0.87,
                -0.8,
                (182.0, 178.8),
                RiskLevel::Low,
                &[
                    "Great progress! Weight is trending steadily toward your goal",
                    "Keep following the current nutrition plan",
                ],
            ),
            demo_trend(
                HealthMetric::BodyFat,
                TrendDirection::Declining,
                0.79,
                -0.3,
                (28.5, 27.3),
                RiskLevel::Low,
                &["Body fat is dropping; keep up the resistance training"],
            ),
            demo_trend(
                HealthMetric::Adherence,
                TrendDirection::Improving,
                0.72,
                1.5,
                (88.0, 94.0),
                RiskLevel::Low,
                &[
                    "Plan adherence is improving week over week",
                    "Meal logging consistency is excellent",
                ],
            ),
            demo_trend(
                HealthMetric::Exercise,
                TrendDirection::Stable,
                0.65,
                0.05,
                (145.0, 145.2),
                RiskLevel::Medium,
                &["Exercise is consistent; add one short session to reach 150 minutes per week"],
            ),
        ],
        overall_score: DEMO_OVERALL_SCORE,
        risk_factors: vec![
            "Exercise volume slightly below the 150 minutes/week guideline".to_owned(),
        ],
        interventions: vec![
            interventions::WALKING_PROGRAM.to_owned(),
            interventions::MAINTAIN_PLAN.to_owned(),
        ],
        prediction_horizon_weeks: PROJECTION_WEEKS,
        generated_at: Utc::now(),
        is_demo: true,
    }
}

fn demo_trend(
    metric: HealthMetric,
    direction: TrendDirection,
    confidence: f64,
    change_rate: f64,
    (current, predicted): (f64, f64),
    risk_level: RiskLevel,
    recommendations: &[&str],
) -> HealthTrend {
    HealthTrend {
        metric,
        direction,
        confidence,
        change_rate,
        current_value: Some(current),
        predicted_value: Some(predicted),
        risk_level,
        recommendations: recommendations.iter().map(|&s| s.to_owned()).collect(),
    }
}

// ABOUTME: Canned recommendation, risk factor, and intervention text
// ABOUTME: Lookup tables keyed by metric and trend direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

use crate::{HealthMetric, TrendDirection};

const WEIGHT_RISING: &[&str] = &[
    "Weight is trending upward; review portion sizes and meal timing",
    "Add 10-15 minutes of daily walking to raise energy expenditure",
];
const WEIGHT_FALLING: &[&str] = &[
    "Weight is trending downward; keep following the current nutrition plan",
    "Aim for a steady loss of 1-2 lbs per week to preserve lean mass",
];
const WEIGHT_STABLE: &[&str] =
    &["Weight is stable; revisit calorie targets if progress toward your goal has stalled"];

const BODY_FAT_RISING: &[&str] = &[
    "Body fat is trending upward; prioritize protein at every meal",
    "Add two resistance training sessions per week",
    "Limit refined carbohydrates and added sugars",
];
const BODY_FAT_FALLING: &[&str] = &[
    "Body fat is trending downward; keep up the current training routine",
    "Maintain protein intake to protect muscle while losing fat",
];
const BODY_FAT_STABLE: &[&str] =
    &["Body fat is holding steady; vary training intensity to break the plateau"];

const ADHERENCE_RISING: &[&str] = &[
    "Plan adherence is improving; keep the routines that are working",
    "Log meals consistently to lock in the habit",
];
const ADHERENCE_FALLING: &[&str] = &[
    "Plan adherence is slipping; pick one meal per day to follow exactly",
    "Set reminders for planned meals and workouts",
    "Message your provider about obstacles to following the plan",
];
const ADHERENCE_STABLE: &[&str] =
    &["Adherence is steady; small weekly goals can help push it higher"];

const EXERCISE_RISING: &[&str] = &[
    "Exercise volume is increasing; schedule a rest day each week",
    "Progress intensity gradually to avoid injury",
];
const EXERCISE_FALLING: &[&str] = &[
    "Exercise volume is dropping; book workouts in your calendar like appointments",
    "Short 10-minute sessions still count toward the weekly target",
];
const EXERCISE_STABLE: &[&str] =
    &["Exercise is consistent; work toward 150 minutes of moderate activity per week"];

/// Recommendations for a fitted trend
#[must_use]
pub fn for_trend(metric: HealthMetric, direction: TrendDirection) -> Vec<String> {
    let bank = match (metric, direction) {
        (HealthMetric::Weight, TrendDirection::Improving) => WEIGHT_RISING,
        (HealthMetric::Weight, TrendDirection::Declining) => WEIGHT_FALLING,
        (HealthMetric::Weight, TrendDirection::Stable) => WEIGHT_STABLE,
        (HealthMetric::BodyFat, TrendDirection::Improving) => BODY_FAT_RISING,
        (HealthMetric::BodyFat, TrendDirection::Declining) => BODY_FAT_FALLING,
        (HealthMetric::BodyFat, TrendDirection::Stable) => BODY_FAT_STABLE,
        (HealthMetric::Adherence, TrendDirection::Improving) => ADHERENCE_RISING,
        (HealthMetric::Adherence, TrendDirection::Declining) => ADHERENCE_FALLING,
        (HealthMetric::Adherence, TrendDirection::Stable) => ADHERENCE_STABLE,
        (HealthMetric::Exercise, TrendDirection::Improving) => EXERCISE_RISING,
        (HealthMetric::Exercise, TrendDirection::Declining) => EXERCISE_FALLING,
        (HealthMetric::Exercise, TrendDirection::Stable) => EXERCISE_STABLE,
    };
    bank.iter().map(|&s| s.to_owned()).collect()
}

/// Message for a metric with no readings at all
#[must_use]
pub fn no_data(metric: HealthMetric) -> String {
    match metric {
        HealthMetric::Weight => {
            "No weight data available; log weekly weigh-ins to enable trend analysis"
        }
        HealthMetric::BodyFat => {
            "No body fat data available; record a body composition measurement to enable trend analysis"
        }
        HealthMetric::Adherence => {
            "No adherence data available; check in on the plan to enable trend analysis"
        }
        HealthMetric::Exercise => {
            "No exercise data available; log workouts to enable trend analysis"
        }
    }
    .to_owned()
}

/// Message for a metric with too few readings to fit a trend
#[must_use]
pub fn insufficient_data(metric: HealthMetric) -> String {
    format!(
        "Insufficient {} data for trend analysis; keep logging to build a history",
        metric.label()
    )
}

/// Risk factor labels
pub mod risk_factors {
    /// Weight changing faster than the configured rate
    pub const RAPID_WEIGHT_CHANGE: &str = "Rapid weight change detected";
    /// Weight trending up quickly
    pub const WEIGHT_GAIN: &str = "Weight increasing faster than expected";
    /// Body fat trending up
    pub const BODY_FAT_INCREASE: &str = "Body fat percentage increasing";
    /// Adherence below the high-risk threshold
    pub const LOW_ADHERENCE: &str = "Low treatment plan adherence";
    /// Adherence trending down
    pub const DECLINING_ADHERENCE: &str = "Declining plan adherence";
    /// Exercise below the high-risk threshold
    pub const INSUFFICIENT_ACTIVITY: &str = "Insufficient physical activity";
    /// Exercise trending down
    pub const DECLINING_ACTIVITY: &str = "Declining exercise volume";
    /// Blood pressure at or above 140/90
    pub const ELEVATED_BLOOD_PRESSURE: &str = "Elevated blood pressure";
    /// Diagnosed insulin resistance
    pub const INSULIN_RESISTANCE: &str = "Insulin resistance";
}

/// Intervention suggestions for providers
pub mod interventions {
    /// For weight changing too fast
    pub const MODERATE_WEIGHT_CHANGE: &str =
        "Review caloric intake with a dietitian to moderate the rate of weight change";
    /// For body fat rising
    pub const RESISTANCE_TRAINING: &str =
        "Add resistance training twice weekly to support lean mass";
    /// For weak adherence
    pub const ADHERENCE_CHECK_IN: &str =
        "Schedule a check-in to address barriers to plan adherence";
    /// For low activity
    pub const WALKING_PROGRAM: &str =
        "Introduce a progressive walking program, adding 10 minutes per week";
    /// For elevated blood pressure
    pub const BLOOD_PRESSURE_MONITORING: &str =
        "Monitor blood pressure weekly and review sodium intake";
    /// For insulin resistance
    pub const GLUCOSE_MONITORING: &str =
        "Review carbohydrate intake and consider continuous glucose monitoring";
    /// When nothing needs attention
    pub const MAINTAIN_PLAN: &str = "Continue the current plan and reassess in 4 weeks";
}

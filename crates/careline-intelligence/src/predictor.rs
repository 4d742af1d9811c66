// ABOUTME: Health prediction facade combining history, analyzers, and scoring
// ABOUTME: Produces a HealthPrediction with overall score, risk factors, and interventions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

use crate::config::{PredictionConfig, ScoringConfig};
use crate::demo::generate_demo_health_prediction;
use crate::history::synthesize_history;
use crate::metric_analyzers::MetricAnalyzer;
use crate::recommendations::{interventions, risk_factors};
use crate::{
    HealthDataPoint, HealthMetric, HealthPrediction, HealthTrend, RiskLevel, TrendDirection,
};
use careline_core::constants::scoring::{MAX_SCORE, MIN_SCORE};
use careline_core::models::Patient;
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

/// Health trend predictor
///
/// Owns its configuration and random source; create one per request or keep
/// one per worker. Seeded predictors are fully reproducible.
pub struct HealthPredictor<R: Rng = ChaCha8Rng> {
    config: PredictionConfig,
    rng: R,
}

impl Default for HealthPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthPredictor {
    /// Create a predictor with the global configuration and an entropy-seeded RNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(PredictionConfig::global().clone(), ChaCha8Rng::from_entropy())
    }

    /// Create a reproducible predictor with the global configuration
    ///
    /// Use [`HealthPredictor::with_rng`] to pin a specific configuration.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(
            PredictionConfig::global().clone(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> HealthPredictor<R> {
    /// Create a predictor with explicit configuration and random source
    #[must_use]
    pub fn with_rng(config: PredictionConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Predict health trends for a patient as of now
    pub fn predict_health_trends(&mut self, patient: &Patient) -> HealthPrediction {
        self.predict_health_trends_at(patient, Utc::now())
    }

    /// Predict health trends for a patient as of `now`
    pub fn predict_health_trends_at(
        &mut self,
        patient: &Patient,
        now: DateTime<Utc>,
    ) -> HealthPrediction {
        let history = synthesize_history(patient, &self.config.history, &mut self.rng, now);
        self.analyze_history(patient, &history, now)
    }

    /// Serve the demo prediction when demo mode is on, otherwise analyze
    pub fn predict_or_demo(&mut self, patient: &Patient) -> HealthPrediction {
        if self.config.demo_mode {
            warn!(patient_id = %patient.id, "demo mode enabled, returning demo prediction");
            return generate_demo_health_prediction(patient.id);
        }
        self.predict_health_trends(patient)
    }

    /// Analyze an existing history without generating one
    #[must_use]
    pub fn analyze_history(
        &self,
        patient: &Patient,
        history: &[HealthDataPoint],
        now: DateTime<Utc>,
    ) -> HealthPrediction {
        let trends = MetricAnalyzer::new(&self.config).analyze_all(history);
        let overall_score = calculate_overall_score(&trends, &self.config.scoring);
        let risk_factors = identify_risk_factors(&trends, patient);
        let interventions = recommend_interventions(&trends, patient);

        info!(
            patient_id = %patient.id,
            overall_score,
            risk_factor_count = risk_factors.len(),
            data_points = history.len(),
            "health prediction generated"
        );

        HealthPrediction {
            patient_id: patient.id,
            trends,
            overall_score,
            risk_factors,
            interventions,
            prediction_horizon_weeks: self.config.trend.projection_weeks,
            generated_at: now,
            is_demo: false,
        }
    }
}

/// Weighted-sum score: base, plus/minus direction adjustments, minus risk penalties
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: clamped to 0-100
pub fn calculate_overall_score(trends: &[HealthTrend], config: &ScoringConfig) -> u8 {
    let score = trends.iter().fold(config.base_score, |score, trend| {
        let weight = metric_weight(trend.metric, config);
        let direction = match trend.direction {
            TrendDirection::Improving => 1.0,
            TrendDirection::Declining => -1.0,
            TrendDirection::Stable => 0.0,
        };
        let penalty = match trend.risk_level {
            RiskLevel::High => config.high_risk_penalty,
            RiskLevel::Medium => config.medium_risk_penalty,
            RiskLevel::Low => 0.0,
        };
        (direction * config.direction_adjustment * weight).mul_add(trend.confidence, score)
            - penalty
    });

    score.clamp(MIN_SCORE, MAX_SCORE).round() as u8
}

const fn metric_weight(metric: HealthMetric, config: &ScoringConfig) -> f64 {
    match metric {
        HealthMetric::Weight => config.weight_weight,
        HealthMetric::BodyFat => config.body_fat_weight,
        HealthMetric::Adherence => config.adherence_weight,
        HealthMetric::Exercise => config.exercise_weight,
    }
}

/// Risk factors from trend metric, direction, and risk, plus patient conditions
#[must_use]
pub fn identify_risk_factors(trends: &[HealthTrend], patient: &Patient) -> Vec<String> {
    let mut factors = Vec::new();

    for trend in trends {
        let label = match (trend.metric, trend.direction, trend.risk_level) {
            (HealthMetric::Weight, _, RiskLevel::High) => Some(risk_factors::RAPID_WEIGHT_CHANGE),
            (HealthMetric::Weight, TrendDirection::Improving, RiskLevel::Medium) => {
                Some(risk_factors::WEIGHT_GAIN)
            }
            (
                HealthMetric::BodyFat,
                TrendDirection::Improving,
                RiskLevel::High | RiskLevel::Medium,
            ) => Some(risk_factors::BODY_FAT_INCREASE),
            (HealthMetric::Adherence, _, RiskLevel::High) => Some(risk_factors::LOW_ADHERENCE),
            (HealthMetric::Adherence, TrendDirection::Declining, _) => {
                Some(risk_factors::DECLINING_ADHERENCE)
            }
            (HealthMetric::Exercise, _, RiskLevel::High) => {
                Some(risk_factors::INSUFFICIENT_ACTIVITY)
            }
            (HealthMetric::Exercise, TrendDirection::Declining, _) => {
                Some(risk_factors::DECLINING_ACTIVITY)
            }
            _ => None,
        };
        if let Some(label) = label {
            factors.push(label.to_owned());
        }
    }

    if has_elevated_blood_pressure(patient) {
        factors.push(risk_factors::ELEVATED_BLOOD_PRESSURE.to_owned());
    }
    if patient.has_insulin_resistance() {
        factors.push(risk_factors::INSULIN_RESISTANCE.to_owned());
    }

    factors
}

/// Provider interventions matching the trends and patient conditions
#[must_use]
pub fn recommend_interventions(trends: &[HealthTrend], patient: &Patient) -> Vec<String> {
    let mut actions: Vec<&str> = Vec::new();
    let mut push = |action: &'static str| {
        if !actions.contains(&action) {
            actions.push(action);
        }
    };

    for trend in trends {
        match (trend.metric, trend.risk_level) {
            (_, RiskLevel::Low) => {}
            (HealthMetric::Weight, RiskLevel::High) => {
                push(interventions::MODERATE_WEIGHT_CHANGE);
            }
            (HealthMetric::Weight, RiskLevel::Medium) => {}
            (HealthMetric::BodyFat, _) => push(interventions::RESISTANCE_TRAINING),
            (HealthMetric::Adherence, _) => push(interventions::ADHERENCE_CHECK_IN),
            (HealthMetric::Exercise, _) => push(interventions::WALKING_PROGRAM),
        }
    }

    if has_elevated_blood_pressure(patient) {
        push(interventions::BLOOD_PRESSURE_MONITORING);
    }
    if patient.has_insulin_resistance() {
        push(interventions::GLUCOSE_MONITORING);
    }

    if actions.is_empty() {
        actions.push(interventions::MAINTAIN_PLAN);
    }

    actions.into_iter().map(str::to_owned).collect()
}

fn has_elevated_blood_pressure(patient: &Patient) -> bool {
    match patient.parsed_blood_pressure() {
        Ok(reading) => reading.is_some_and(|bp| bp.is_elevated()),
        Err(e) => {
            warn!(patient_id = %patient.id, error = %e, "ignoring unparseable blood pressure");
            false
        }
    }
}

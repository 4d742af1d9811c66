// ABOUTME: Synthetic weekly history built from a patient's current snapshot
// ABOUTME: Adds uniform noise and an adherence-scaled progress drift toward goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

//! Synthetic history generation.
//!
//! The platform does not store a time series of readings, so the predictor
//! reconstructs a plausible one: starting from the current snapshot and
//! walking backwards one week at a time, each reading is shifted by a drift
//! proportional to the patient's adherence (adherent patients have been
//! moving toward their goals) plus uniform noise. The newest point is the
//! snapshot itself, without noise.
//!
//! Randomness is injected so callers control reproducibility.

use crate::config::HistoryConfig;
use crate::HealthDataPoint;
use careline_core::models::Patient;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Build `config.weeks + 1` weekly data points ending at `now`
pub fn synthesize_history<R: Rng + ?Sized>(
    patient: &Patient,
    config: &HistoryConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<HealthDataPoint> {
    let adherence_now = patient
        .adherence
        .filter(|a| a.is_finite())
        .unwrap_or(config.default_adherence)
        .clamp(0.0, 100.0);
    let progress = adherence_now / 100.0;

    let exercise_now = config.exercise_target_minutes * progress;
    let steps_now = config.steps_target * progress;

    (0..=config.weeks)
        .map(|index| {
            let weeks_ago = config.weeks - index;
            let elapsed = f64::from(weeks_ago);
            let is_current = weeks_ago == 0;

            let weight = patient.weight.filter(|w| w.is_finite()).map(|current| {
                let drift = goal_direction(current, patient.weight_goal)
                    * elapsed
                    * config.weight_progress_per_week
                    * progress;
                let noise = jitter(rng, config.weight_noise, is_current);
                (current + drift + noise).max(0.0)
            });

            let body_fat = patient.body_fat.filter(|b| b.is_finite()).map(|current| {
                let drift = goal_direction(current, patient.body_fat_goal)
                    * elapsed
                    * config.body_fat_progress_per_week
                    * progress;
                let noise = jitter(rng, config.body_fat_noise, is_current);
                (current + drift + noise).clamp(0.0, 100.0)
            });

            let adherence = {
                let drift = elapsed * config.adherence_progress_per_week * progress;
                let noise = jitter(rng, config.adherence_noise, is_current);
                (adherence_now - drift + noise).clamp(0.0, 100.0)
            };

            let exercise_minutes = {
                let drift = elapsed * config.exercise_progress_per_week * progress;
                let noise = jitter(rng, config.exercise_noise, is_current);
                (exercise_now - drift + noise).max(0.0)
            };

            let steps = (steps_now + jitter(rng, config.steps_noise, is_current)).max(0.0);
            let sleep_hours =
                (config.baseline_sleep_hours + jitter(rng, config.sleep_noise, is_current))
                    .max(0.0);

            HealthDataPoint {
                timestamp: weeks_before(now, weeks_ago),
                weight,
                body_fat,
                adherence: Some(adherence),
                exercise_minutes: Some(exercise_minutes),
                steps: Some(steps),
                sleep_hours: Some(sleep_hours),
            }
        })
        .collect()
}

/// Saturates at the earliest representable instant instead of overflowing
fn weeks_before(now: DateTime<Utc>, weeks: u32) -> DateTime<Utc> {
    Duration::try_weeks(i64::from(weeks))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// +1 when the patient is above goal (past readings were higher), -1 when
/// below, 0 without a goal
fn goal_direction(current: f64, goal: Option<f64>) -> f64 {
    match goal.filter(|g| g.is_finite()) {
        Some(goal) if current > goal => 1.0,
        Some(goal) if current < goal => -1.0,
        _ => 0.0,
    }
}

/// Uniform noise in `[-amplitude, amplitude]`; the current week is exact
fn jitter<R: Rng + ?Sized>(rng: &mut R, amplitude: f64, is_current: bool) -> f64 {
    if is_current || amplitude <= 0.0 {
        0.0
    } else {
        rng.gen_range(-amplitude..=amplitude)
    }
}

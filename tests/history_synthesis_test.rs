// ABOUTME: Tests for synthetic weekly history generation
// ABOUTME: Checks length, timestamps, exact current readings, bounds, and reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use careline::intelligence::config::HistoryConfig;
use careline::intelligence::{synthesize_history, HealthMetric};
use careline::models::Patient;
use chrono::{DateTime, Duration, Utc};
use helpers::fixtures::{
    adherent_patient, assert_close, empty_patient, noiseless_history, reference_now,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_history_spans_weeks_plus_one_points() {
    let config = HistoryConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let now = reference_now();

    let history = synthesize_history(&adherent_patient(), &config, &mut rng, now);

    assert_eq!(history.len(), 13);
    assert_eq!(history.first().unwrap().timestamp, now - Duration::weeks(12));
    assert_eq!(history.last().unwrap().timestamp, now);
    for pair in history.windows(2) {
        assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::weeks(1));
    }
}

#[test]
fn test_newest_point_is_the_snapshot() {
    let patient = adherent_patient();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let config = HistoryConfig::default();
    let history = synthesize_history(&patient, &config, &mut rng, reference_now());
    let newest = history.last().unwrap();

    assert_eq!(newest.weight, Some(150.0));
    assert_eq!(newest.body_fat, Some(20.0));
    assert_eq!(newest.adherence, Some(95.0));
    assert_close(newest.exercise_minutes.unwrap(), 142.5);
    assert_close(newest.steps.unwrap(), 7600.0);
    assert_close(newest.sleep_hours.unwrap(), 7.0);
}

#[test]
fn test_missing_adherence_defaults_to_seventy_percent() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let config = HistoryConfig::default();
    let history = synthesize_history(&empty_patient(), &config, &mut rng, reference_now());
    let newest = history.last().unwrap();

    assert_eq!(newest.adherence, Some(70.0));
    assert_close(newest.exercise_minutes.unwrap(), 105.0);
}

#[test]
fn test_missing_readings_stay_missing() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let config = HistoryConfig::default();
    let history = synthesize_history(&empty_patient(), &config, &mut rng, reference_now());

    assert!(history.iter().all(|p| p.weight.is_none() && p.body_fat.is_none()));
    assert!(history.iter().all(|p| p.adherence.is_some() && p.exercise_minutes.is_some()));
}

#[test]
fn test_past_readings_drift_away_from_goal() {
    let patient = adherent_patient();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let history = synthesize_history(&patient, &noiseless_history(), &mut rng, reference_now());
    let oldest = history.first().unwrap();

    // 12 weeks × 0.5 lbs × 95% adherence
    assert_close(oldest.weight.unwrap(), 155.7);
    assert_close(oldest.body_fat.unwrap(), 22.28);
    assert_close(oldest.adherence.unwrap(), 89.3);
    assert_close(oldest.exercise_minutes.unwrap(), 119.7);
}

#[test]
fn test_patient_below_goal_drifts_upward() {
    let patient = Patient {
        weight: Some(120.0),
        weight_goal: Some(130.0),
        adherence: Some(100.0),
        ..empty_patient()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let history = synthesize_history(&patient, &noiseless_history(), &mut rng, reference_now());

    assert_close(history.first().unwrap().weight.unwrap(), 114.0);
}

#[test]
fn test_no_goal_means_no_drift() {
    let patient = Patient {
        weight: Some(180.0),
        ..empty_patient()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let history = synthesize_history(&patient, &noiseless_history(), &mut rng, reference_now());

    assert!(history.iter().all(|p| p.weight == Some(180.0)));
}

#[test]
fn test_readings_stay_within_bounds() {
    let patient = Patient {
        weight: Some(1.0),
        body_fat: Some(99.5),
        body_fat_goal: Some(98.0),
        adherence: Some(2.0),
        ..empty_patient()
    };
    let config = HistoryConfig {
        weight_noise: 20.0,
        body_fat_noise: 10.0,
        adherence_noise: 30.0,
        exercise_noise: 200.0,
        ..HistoryConfig::default()
    };

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let history = synthesize_history(&patient, &config, &mut rng, reference_now());

        for point in &history {
            assert!(point.weight.unwrap() >= 0.0);
            assert!((0.0..=100.0).contains(&point.body_fat.unwrap()));
            assert!((0.0..=100.0).contains(&point.adherence.unwrap()));
            assert!(point.exercise_minutes.unwrap() >= 0.0);
            assert!(point.steps.unwrap() >= 0.0);
            assert!(point.sleep_hours.unwrap() >= 0.0);
        }
    }
}

#[test]
fn test_same_seed_same_history() {
    let patient = adherent_patient();
    let config = HistoryConfig::default();
    let now = reference_now();

    let first = synthesize_history(&patient, &config, &mut ChaCha8Rng::seed_from_u64(99), now);
    let second = synthesize_history(&patient, &config, &mut ChaCha8Rng::seed_from_u64(99), now);

    assert_eq!(first, second);
}

#[test]
fn test_history_length_follows_config() {
    let config = HistoryConfig {
        weeks: 4,
        ..HistoryConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let history = synthesize_history(&adherent_patient(), &config, &mut rng, reference_now());

    assert_eq!(history.len(), 5);
    assert_eq!(HealthMetric::Weight.series(&history).len(), 5);
}

#[test]
fn test_timestamps_saturate_near_the_earliest_instant() {
    let now = DateTime::<Utc>::MIN_UTC + Duration::weeks(2);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let history = synthesize_history(&adherent_patient(), &HistoryConfig::default(), &mut rng, now);

    assert_eq!(history.len(), 13);
    assert_eq!(history.first().unwrap().timestamp, DateTime::<Utc>::MIN_UTC);
    assert_eq!(history[10].timestamp, now - Duration::weeks(2));
    assert_eq!(history.last().unwrap().timestamp, now);
}

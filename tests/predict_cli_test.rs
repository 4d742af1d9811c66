// ABOUTME: Tests for careline-predict argument parsing and the prediction flow behind it
// ABOUTME: Covers flag conflicts, seeded reproducibility, demo short-circuits, and input errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use careline::cli::{render, PredictArgs};
use careline::errors::ErrorCode;
use careline::intelligence::PredictionConfig;
use clap::error::ErrorKind;
use clap::Parser;
use serial_test::serial;
use std::env;
use std::fs;
use std::iter;
use tempfile::TempDir;
use uuid::Uuid;

const PATIENT_ID: &str = "0b5c1a52-3f2e-4d8a-9c71-6f0e2d4b8a13";

fn parse(args: &[&str]) -> PredictArgs {
    PredictArgs::try_parse_from(iter::once("careline-predict").chain(args.iter().copied()))
        .unwrap()
}

fn inline_args(seed: &str) -> PredictArgs {
    parse(&[
        "--patient-id",
        PATIENT_ID,
        "--weight",
        "182",
        "--weight-goal",
        "165",
        "--body-fat",
        "28",
        "--body-fat-goal",
        "22",
        "--adherence",
        "85",
        "--seed",
        seed,
    ])
}

#[test]
fn test_patient_file_conflicts_with_inline_readings() {
    for flag in [
        ["--weight", "150"],
        ["--adherence", "90"],
        ["--blood-pressure", "120/80"],
    ] {
        let result = PredictArgs::try_parse_from([
            "careline-predict",
            "--patient-file",
            "patient.json",
            flag[0],
            flag[1],
        ]);

        assert_eq!(result.unwrap_err().kind(), ErrorKind::ArgumentConflict, "{flag:?}");
    }

    let result = PredictArgs::try_parse_from([
        "careline-predict",
        "--patient-file",
        "patient.json",
        "--insulin-resistance",
    ]);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_patient_file_combines_with_seed_and_output_flags() {
    let args = parse(&["--patient-file", "patient.json", "--seed", "3", "--pretty", "-v"]);

    assert_eq!(args.seed, Some(3));
    assert!(args.pretty);
    assert!(args.verbose);
}

#[test]
fn test_inline_flags_build_the_patient() {
    let args = parse(&[
        "--patient-id",
        PATIENT_ID,
        "--weight",
        "150",
        "--blood-pressure",
        "128/82",
        "--insulin-resistance",
    ]);

    let patient = args.load_patient().unwrap();

    assert_eq!(patient.id, Uuid::parse_str(PATIENT_ID).unwrap());
    assert_eq!(patient.weight, Some(150.0));
    assert_eq!(patient.blood_pressure.as_deref(), Some("128/82"));
    assert_eq!(patient.insulin_resistance, Some(true));
}

#[test]
fn test_same_seed_reproduces_the_prediction() {
    let first = inline_args("42")
        .predict_with_config(PredictionConfig::default())
        .unwrap();
    let second = inline_args("42")
        .predict_with_config(PredictionConfig::default())
        .unwrap();

    assert!(!first.is_demo);
    assert_eq!(first.patient_id, Uuid::parse_str(PATIENT_ID).unwrap());
    assert_eq!(first.trends, second.trends);
    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.risk_factors, second.risk_factors);
}

#[test]
fn test_demo_flag_returns_the_demo_prediction() {
    let args = parse(&["--patient-id", PATIENT_ID, "--demo"]);

    let prediction = args
        .predict_with_config(PredictionConfig::default())
        .unwrap();

    assert!(prediction.is_demo);
    assert_eq!(prediction.overall_score, 83);
    assert_eq!(prediction.patient_id, Uuid::parse_str(PATIENT_ID).unwrap());
}

#[test]
fn test_demo_mode_config_returns_the_demo_prediction() {
    let config = PredictionConfig {
        demo_mode: true,
        ..PredictionConfig::default()
    };

    let prediction = inline_args("7").predict_with_config(config).unwrap();

    assert!(prediction.is_demo);
    assert_eq!(prediction.overall_score, 83);
}

#[test]
#[serial]
fn test_demo_flag_ignores_broken_overrides() {
    env::set_var("CARELINE_BASE_SCORE", "NaN");

    let result = parse(&["--demo"]).predict();
    env::remove_var("CARELINE_BASE_SCORE");

    assert!(result.unwrap().is_demo);
}

#[test]
#[serial]
fn test_broken_overrides_fail_the_prediction() {
    env::set_var("CARELINE_BASE_SCORE", "NaN");

    let result = inline_args("1").predict();
    env::remove_var("CARELINE_BASE_SCORE");

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_patient_file_is_predicted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patient.json");
    fs::write(
        &path,
        format!(r#"{{"id":"{PATIENT_ID}","weight":182,"weightGoal":165,"adherence":88}}"#),
    )
    .unwrap();
    let path = path.to_str().unwrap();

    let prediction = parse(&["--patient-file", path, "--seed", "5"])
        .predict_with_config(PredictionConfig::default())
        .unwrap();

    assert_eq!(prediction.patient_id, Uuid::parse_str(PATIENT_ID).unwrap());
    assert_eq!(prediction.trends.len(), 4);
    assert!(!prediction.is_demo);
}

#[test]
fn test_missing_patient_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let error = parse(&["--patient-file", path.to_str().unwrap(), "--demo"])
        .predict_with_config(PredictionConfig::default())
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_bad_blood_pressure_is_invalid_format() {
    let error = parse(&["--weight", "150", "--blood-pressure", "high"])
        .predict_with_config(PredictionConfig::default())
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_render_compact_and_pretty() {
    let prediction = parse(&["--demo"])
        .predict_with_config(PredictionConfig::default())
        .unwrap();

    let compact = render(&prediction, false).unwrap();
    let pretty = render(&prediction, true).unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    assert!(compact.contains("\"overallScore\":83"));
    assert!(compact.contains("\"isDemo\":true"));
}

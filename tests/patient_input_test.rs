// ABOUTME: Tests for loading patient snapshots from files and inline values
// ABOUTME: Uses temporary files to cover missing, malformed, and invalid documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use careline::errors::ErrorCode;
use careline::intelligence::HealthPredictor;
use careline::patient_input::{parse_patient_json, read_patient_file, InlinePatient};
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

#[test]
fn test_read_patient_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patient.json");
    let id = Uuid::new_v4();
    fs::write(
        &path,
        format!(r#"{{"id":"{id}","weight":182,"weightGoal":165,"adherence":88}}"#),
    )
    .unwrap();

    let patient = read_patient_file(&path).unwrap();

    assert_eq!(patient.id, id);
    assert_eq!(patient.weight, Some(182.0));
    assert_eq!(patient.adherence, Some(88.0));

    let prediction = HealthPredictor::with_seed(1).predict_health_trends(&patient);
    assert_eq!(prediction.patient_id, id);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();

    let error = read_patient_file(&dir.path().join("absent.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_malformed_json_is_invalid_format() {
    let error = parse_patient_json("{not json").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    // id is required
    let error = parse_patient_json(r#"{"weight":150}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_document_is_validated() {
    let json = format!(r#"{{"id":"{}","adherence":140}}"#, Uuid::new_v4());

    let error = parse_patient_json(&json).unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_inline_patient_generates_an_id() {
    let patient = InlinePatient {
        weight: Some(150.0),
        weight_goal: Some(140.0),
        ..InlinePatient::default()
    }
    .into_patient()
    .unwrap();

    assert!(!patient.id.is_nil());
    assert_eq!(patient.insulin_resistance, None);
}

#[test]
fn test_inline_patient_keeps_given_values() {
    let id = Uuid::new_v4();
    let patient = InlinePatient {
        id: Some(id),
        blood_pressure: Some("150/95".to_owned()),
        insulin_resistance: true,
        ..InlinePatient::default()
    }
    .into_patient()
    .unwrap();

    assert_eq!(patient.id, id);
    assert!(patient.has_insulin_resistance());
    assert_eq!(patient.blood_pressure.as_deref(), Some("150/95"));
}

#[test]
fn test_inline_patient_is_validated() {
    let error = InlinePatient {
        blood_pressure: Some("120-80".to_owned()),
        ..InlinePatient::default()
    }
    .into_patient()
    .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

// ABOUTME: Loads and validates patient snapshots for the prediction CLI
// ABOUTME: Reads camelCase patient JSON files or assembles a patient from inline values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

use crate::errors::{AppError, AppResult};
use crate::models::Patient;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Read a patient JSON document and validate it
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `InvalidFormat` if
/// it is not a patient document, or a validation error for bad readings
pub fn read_patient_file(path: &Path) -> AppResult<Patient> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("Patient file {}", path.display()))
        } else {
            AppError::internal(format!("Failed to read {}", path.display())).with_source(e)
        }
    })?;
    parse_patient_json(&contents)
}

/// Parse a patient JSON document and validate it
///
/// # Errors
///
/// Returns `InvalidFormat` for malformed JSON or a validation error for bad readings
pub fn parse_patient_json(json: &str) -> AppResult<Patient> {
    let patient: Patient = serde_json::from_str(json).map_err(|e| {
        AppError::invalid_format(format!("Invalid patient document: {e}")).with_source(e)
    })?;
    patient.validate()?;
    debug!(patient_id = %patient.id, "patient document loaded");
    Ok(patient)
}

/// Patient readings given directly on the command line
#[derive(Debug, Clone, Default)]
pub struct InlinePatient {
    /// Patient identifier; a random one is generated when absent
    pub id: Option<Uuid>,
    /// Current weight (lbs)
    pub weight: Option<f64>,
    /// Target weight (lbs)
    pub weight_goal: Option<f64>,
    /// Current body fat percentage
    pub body_fat: Option<f64>,
    /// Target body fat percentage
    pub body_fat_goal: Option<f64>,
    /// Plan adherence percentage
    pub adherence: Option<f64>,
    /// Blood pressure, e.g. `"128/82"`
    pub blood_pressure: Option<String>,
    /// Insulin resistance diagnosis
    pub insulin_resistance: bool,
}

impl InlinePatient {
    /// Build and validate the patient
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad readings
    pub fn into_patient(self) -> AppResult<Patient> {
        let patient = Patient {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            weight: self.weight,
            weight_goal: self.weight_goal,
            body_fat: self.body_fat,
            body_fat_goal: self.body_fat_goal,
            adherence: self.adherence,
            blood_pressure: self.blood_pressure,
            insulin_resistance: self.insulin_resistance.then_some(true),
        };
        patient.validate()?;
        Ok(patient)
    }
}

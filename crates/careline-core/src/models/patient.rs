// ABOUTME: Patient snapshot model supplied by the persistence layer
// ABOUTME: Patient, BloodPressure, and input validation for prediction requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

use crate::constants::clinical::{ELEVATED_DIASTOLIC, ELEVATED_SYSTOLIC};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Current health snapshot of a patient
///
/// Every reading is optional: a patient who has never logged body fat simply
/// has `body_fat: None`, and the predictor reports "no data" for that metric.
///
/// # Examples
///
/// ```rust
/// use careline_core::models::Patient;
/// use uuid::Uuid;
///
/// let patient = Patient {
///     weight: Some(150.0),
///     weight_goal: Some(140.0),
///     adherence: Some(95.0),
///     ..Patient::new(Uuid::new_v4())
/// };
/// assert!(patient.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Patient identifier
    pub id: Uuid,
    /// Current body weight (lbs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Target body weight (lbs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_goal: Option<f64>,
    /// Current body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    /// Target body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_goal: Option<f64>,
    /// Plan adherence percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adherence: Option<f64>,
    /// Latest blood pressure reading, e.g. `"128/82"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    /// Whether the patient has been diagnosed with insulin resistance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulin_resistance: Option<bool>,
}

impl Patient {
    /// Create a patient with no recorded readings
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Validate readings before they reach the predictor
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite readings, `ValueOutOfRange` for
    /// negative weights or percentages outside 0-100, and `InvalidFormat`
    /// for an unparseable blood pressure string.
    pub fn validate(&self) -> AppResult<()> {
        Self::validate_non_negative("weight", self.weight)?;
        Self::validate_non_negative("weightGoal", self.weight_goal)?;
        Self::validate_percentage("bodyFat", self.body_fat)?;
        Self::validate_percentage("bodyFatGoal", self.body_fat_goal)?;
        Self::validate_percentage("adherence", self.adherence)?;

        if self.blood_pressure.is_some() {
            self.parsed_blood_pressure()?;
        }
        Ok(())
    }

    /// Parse the blood pressure string, if present
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the reading is not `systolic/diastolic`
    pub fn parsed_blood_pressure(&self) -> AppResult<Option<BloodPressure>> {
        self.blood_pressure
            .as_deref()
            .map(BloodPressure::parse)
            .transpose()
    }

    /// Whether the patient has a known insulin resistance diagnosis
    #[must_use]
    pub fn has_insulin_resistance(&self) -> bool {
        self.insulin_resistance.unwrap_or(false)
    }

    fn validate_finite(field: &str, value: Option<f64>) -> AppResult<Option<f64>> {
        match value {
            Some(v) if !v.is_finite() => Err(AppError::invalid_input(format!(
                "{field} must be a finite number"
            ))
            .with_field(field)),
            other => Ok(other),
        }
    }

    fn validate_non_negative(field: &str, value: Option<f64>) -> AppResult<()> {
        if let Some(v) = Self::validate_finite(field, value)? {
            if v < 0.0 {
                return Err(AppError::value_out_of_range(
                    field,
                    format!("{field} must not be negative, got {v}"),
                ));
            }
        }
        Ok(())
    }

    fn validate_percentage(field: &str, value: Option<f64>) -> AppResult<()> {
        if let Some(v) = Self::validate_finite(field, value)? {
            if !(0.0..=100.0).contains(&v) {
                return Err(AppError::value_out_of_range(
                    field,
                    format!("{field} must be within 0-100, got {v}"),
                ));
            }
        }
        Ok(())
    }
}

/// A single blood pressure reading in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic pressure
    pub systolic: u16,
    /// Diastolic pressure
    pub diastolic: u16,
}

impl BloodPressure {
    /// Parse a `"systolic/diastolic"` reading such as `"128/82"`
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the string is not two integers separated by `/`
    pub fn parse(reading: &str) -> AppResult<Self> {
        let invalid = || {
            AppError::invalid_format(format!(
                "Blood pressure must look like 120/80, got '{reading}'"
            ))
            .with_field("bloodPressure")
        };

        let (systolic, diastolic) = reading.trim().split_once('/').ok_or_else(invalid)?;
        let systolic = systolic.trim().parse::<u16>().map_err(|_| invalid())?;
        let diastolic = diastolic.trim().parse::<u16>().map_err(|_| invalid())?;

        if systolic == 0 || diastolic == 0 || diastolic >= systolic {
            return Err(invalid());
        }

        Ok(Self {
            systolic,
            diastolic,
        })
    }

    /// Stage 2 hypertension or worse on either number
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        self.systolic >= ELEVATED_SYSTOLIC || self.diastolic >= ELEVATED_DIASTOLIC
    }
}

impl FromStr for BloodPressure {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

// ABOUTME: Argument model and prediction flow for the careline-predict command
// ABOUTME: Resolves the patient from a file or flags, then runs the predictor or the demo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

//! Command-line surface of the prediction tool. The binary parses
//! [`PredictArgs`] and calls [`PredictArgs::predict`].

use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    generate_demo_health_prediction, HealthPrediction, HealthPredictor, PredictionConfig,
};
use crate::models::Patient;
use crate::patient_input::{read_patient_file, InlinePatient};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Arguments of `careline-predict`
#[derive(Parser, Debug)]
#[command(
    name = "careline-predict",
    about = "Careline health trend predictor",
    long_about = "Project weight, body fat, adherence, and exercise trends for a patient snapshot"
)]
pub struct PredictArgs {
    /// Patient JSON document (camelCase fields)
    #[arg(
        long,
        conflicts_with_all = [
            "patient_id",
            "weight",
            "weight_goal",
            "body_fat",
            "body_fat_goal",
            "adherence",
            "blood_pressure",
            "insulin_resistance",
        ]
    )]
    pub patient_file: Option<PathBuf>,

    /// Patient identifier for inline readings
    #[arg(long)]
    pub patient_id: Option<Uuid>,

    /// Current weight (lbs)
    #[arg(long)]
    pub weight: Option<f64>,

    /// Target weight (lbs)
    #[arg(long)]
    pub weight_goal: Option<f64>,

    /// Current body fat percentage
    #[arg(long)]
    pub body_fat: Option<f64>,

    /// Target body fat percentage
    #[arg(long)]
    pub body_fat_goal: Option<f64>,

    /// Plan adherence percentage (0-100)
    #[arg(long)]
    pub adherence: Option<f64>,

    /// Blood pressure reading, e.g. 128/82
    #[arg(long)]
    pub blood_pressure: Option<String>,

    /// Patient has insulin resistance
    #[arg(long)]
    pub insulin_resistance: bool,

    /// Seed for the synthetic history (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Return the hand-authored demo prediction
    #[arg(long)]
    pub demo: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl PredictArgs {
    /// Resolve the patient from `--patient-file` or the inline reading flags
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or a reading is invalid
    pub fn load_patient(&self) -> AppResult<Patient> {
        if let Some(path) = &self.patient_file {
            return read_patient_file(path);
        }

        InlinePatient {
            id: self.patient_id,
            weight: self.weight,
            weight_goal: self.weight_goal,
            body_fat: self.body_fat,
            body_fat_goal: self.body_fat_goal,
            adherence: self.adherence,
            blood_pressure: self.blood_pressure.clone(),
            insulin_resistance: self.insulin_resistance,
        }
        .into_patient()
    }

    /// Predict with configuration loaded from the environment
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid patient or invalid configuration overrides
    pub fn predict(&self) -> AppResult<HealthPrediction> {
        if self.demo {
            return self.predict_with_config(PredictionConfig::default());
        }
        let config = PredictionConfig::load().map_err(AppError::from)?;
        self.predict_with_config(config)
    }

    /// Predict with an explicit configuration
    ///
    /// `--demo` short-circuits before any history is synthesized.
    ///
    /// # Errors
    ///
    /// Returns an error when the patient cannot be loaded
    pub fn predict_with_config(&self, config: PredictionConfig) -> AppResult<HealthPrediction> {
        let patient = self.load_patient()?;
        info!(
            patient_id = %patient.id,
            seed = ?self.seed,
            demo = self.demo,
            "predicting health trends"
        );

        if self.demo {
            return Ok(generate_demo_health_prediction(patient.id));
        }

        let rng = self
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Ok(HealthPredictor::with_rng(config, rng).predict_or_demo(&patient))
    }
}

/// Serialize a value as compact or pretty JSON
///
/// # Errors
///
/// Returns a serialization error if the value cannot be encoded
pub fn render<T: Serialize>(value: &T, pretty: bool) -> AppResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

// ABOUTME: Command-line health trend predictor for a single patient snapshot
// ABOUTME: Loads a patient from JSON or flags and prints the prediction as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Careline Health

//! Health trend prediction CLI.
//!
//! Usage:
//! ```bash
//! # Predict from a patient document
//! cargo run --bin careline-predict -- --patient-file patient.json
//!
//! # Predict from inline readings with a fixed seed
//! cargo run --bin careline-predict -- --weight 150 --weight-goal 140 --adherence 95 --seed 42
//!
//! # Hand-authored demo output
//! cargo run --bin careline-predict -- --demo --pretty
//! ```

use careline::cli::{render, PredictArgs};
use careline::errors::{AppError, ErrorResponse};
use careline::logging::LoggingConfig;
use clap::Parser;
use std::process::ExitCode;
use thiserror::Error;
use tracing::error;

/// CLI-specific error type for the prediction binary
#[derive(Error, Debug)]
enum PredictError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] anyhow::Error),
}

type PredictResult<T> = Result<T, PredictError>;

fn run(args: &PredictArgs) -> PredictResult<()> {
    let logging = LoggingConfig::from_env();
    let logging = if args.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let prediction = args.predict()?;
    println!("{}", render(&prediction, args.pretty)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = PredictArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PredictError::App(e)) => {
            error!(code = ?e.code, "prediction failed: {e}");
            let response = ErrorResponse::from(e);
            match render(&response, args.pretty) {
                Ok(json) => eprintln!("{json}"),
                Err(render_error) => eprintln!("{render_error}"),
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

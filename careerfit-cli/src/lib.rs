//! Command-line interface for the Careerfit recommendation engine.
#![forbid(unsafe_code)]

use std::io::{self, Write};

use clap::{Parser, Subcommand};

mod check;
mod error;
mod recommend;
mod setup;

pub use error::CliError;

use check::{CheckArgs, run_check_with};
use recommend::{RecommendArgs, run_recommend_with};

const ARG_DATASET: &str = "dataset";
const ARG_SCHEMA: &str = "schema";
const ARG_QUIZ: &str = "quiz";
const ARG_LANGUAGE: &str = "language";
const ARG_MAX_FEATURES: &str = "max-features";
const ARG_ALPHA: &str = "alpha";
const ARG_BETA: &str = "beta";
const ARG_GAMMA: &str = "gamma";
const ARG_REQUEST: &str = "request";
const ENV_RECOMMEND_DATASET: &str = "CAREERFIT_CMDS_RECOMMEND_DATASET";
const ENV_RECOMMEND_REQUEST: &str = "CAREERFIT_CMDS_RECOMMEND_REQUEST_PATH";
const ENV_CHECK_DATASET: &str = "CAREERFIT_CMDS_CHECK_DATASET";

/// Largest `k` a request may ask for.
pub const MAX_RESULT_COUNT: usize = 100;

/// Run the Careerfit CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    dispatch(cli.command, &mut handle)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Check(args) => run_check_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "careerfit",
    about = "Rank job postings against a candidate profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a dataset for the profile in a JSON request file.
    Recommend(RecommendArgs),
    /// Load the dataset, build the index and report readiness.
    Check(CheckArgs),
}

/// Serialise `value` as pretty JSON followed by a newline.
fn write_json<T: serde::Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

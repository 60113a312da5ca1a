// ABOUTME: LeanLoop CLI - weekly scoreboard, next-week targets, and habit logging
// ABOUTME: Loads a JSON snapshot store, runs one command through the progress service, saves on writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LeanLoop Contributors
//!
//! Usage:
//! ```bash
//! # Show the last four weeks
//! leanloop-cli report
//!
//! # Log today's protein and steps
//! leanloop-cli log-habits --protein 140 --steps 9200
//!
//! # Record a workout and this week's weigh-in
//! leanloop-cli log-workout
//! leanloop-cli checkin --weight 81.4 --note "slept badly"
//!
//! # Preview, then apply, next week's targets
//! leanloop-cli adjust --goal fat-loss
//! leanloop-cli apply
//!
//! # Change goals or goal mode
//! leanloop-cli goals --protein 150 --steps 8000 --mode lean-gain
//! ```

mod commands;
mod helpers;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use leanloop::constants::{limits::DEFAULT_REPORT_WEEKS, storage};
use leanloop::data_store::memory::InMemoryStore;
use leanloop::errors::{AppError, AppResult};
use leanloop::intelligence::EngineConfig;
use leanloop::logging::LoggingConfig;
use leanloop::models::GoalMode;
use leanloop::services::ProgressService;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use commands::CommandContext;
use helpers::display::print_error;

type Result<T> = AppResult<T>;

/// Environment variable naming the snapshot file
const DATA_PATH_ENV: &str = "LEANLOOP_DATA";

#[derive(Parser)]
#[command(
    name = "leanloop-cli",
    about = "LeanLoop weekly progress CLI",
    long_about = "Grade weekly consistency and propose next week's protein and steps targets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot file (defaults to $LEANLOOP_DATA, then ./leanloop.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show graded weekly stats, most recent week first
    Report {
        /// Number of weeks to show, including the current one
        #[arg(long, default_value_t = DEFAULT_REPORT_WEEKS)]
        weeks: usize,

        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Preview next week's targets without saving them
    Adjust {
        /// Goal mode (fat-loss, maintenance, lean-gain); defaults to the stored mode
        #[arg(long)]
        goal: Option<GoalMode>,

        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Compute next week's targets and save them as the active goals
    Apply {
        /// Goal mode (fat-loss, maintenance, lean-gain); defaults to the stored mode
        #[arg(long)]
        goal: Option<GoalMode>,

        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Log protein and/or steps for a day
    LogHabits {
        /// Day to log (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Protein eaten, in grams
        #[arg(long)]
        protein: Option<f64>,

        /// Steps walked
        #[arg(long)]
        steps: Option<f64>,
    },

    /// Record a completed workout
    LogWorkout {
        /// Completion time (RFC 3339, defaults to now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// Record this week's weigh-in and note
    Checkin {
        /// Body weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Free-form note
        #[arg(long)]
        note: Option<String>,

        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Show or change daily goals and goal mode
    Goals {
        /// Daily protein goal in grams
        #[arg(long)]
        protein: Option<f64>,

        /// Daily steps goal
        #[arg(long)]
        steps: Option<f64>,

        /// Goal mode (fat-loss, maintenance, lean-gain)
        #[arg(long)]
        mode: Option<GoalMode>,
    },
}

fn data_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path
        .or_else(|| env::var_os(DATA_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(storage::DEFAULT_SNAPSHOT_PATH))
}

async fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::load().map_err(AppError::from)?;
    let data_path = data_path(cli.data);
    debug!(path = %data_path.display(), "Using snapshot file");

    let store = InMemoryStore::load(&data_path).await?;
    let ctx = CommandContext {
        targets: config.grading.targets.clone(),
        service: ProgressService::with_config(store, config),
        data_path,
        json: cli.json,
    };

    match cli.command {
        Command::Report { weeks, today } => commands::progress::report(&ctx, weeks, today).await,
        Command::Adjust { goal, today } => commands::progress::adjust(&ctx, goal, today).await,
        Command::Apply { goal, today } => commands::progress::apply(&ctx, goal, today).await,
        Command::LogHabits {
            date,
            protein,
            steps,
        } => commands::tracking::log_habits(&ctx, date, protein, steps).await,
        Command::LogWorkout { at } => commands::tracking::log_workout(&ctx, at).await,
        Command::Checkin {
            weight,
            note,
            today,
        } => commands::tracking::checkin(&ctx, weight, note, today).await,
        Command::Goals {
            protein,
            steps,
            mode,
        } => commands::goals::goals(&ctx, protein, steps, mode).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let json = cli.json;
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(e, json);
            ExitCode::FAILURE
        }
    }
}

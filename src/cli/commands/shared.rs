//! Shared components for CLI commands
//!
//! This module contains the command statistics, logging setup, configuration
//! loading and output helpers used across the command implementations.

use crate::app::models::ClimateReport;
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::PROGRESS_BAR_THRESHOLD;
use crate::{Error, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Command statistics for reporting across all commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandStats {
    /// Number of files read successfully
    pub files_processed: usize,
    /// Number of files that failed to decode or parse
    pub files_failed: usize,
    /// Number of reports written to the archive
    pub reports_stored: usize,
}

impl CommandStats {
    /// Whether every file handled by the command succeeded
    pub fn is_success(&self) -> bool {
        self.files_failed == 0
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from flags and configuration.
pub fn setup_logging(args: &Args, configured_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level(configured_level);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nws_climate={}", log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Config file in effect: the `--config` path, or the default location if it exists
pub fn config_file_path(args: &Args) -> Option<PathBuf> {
    match &args.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    }
}

/// Load configuration using layered approach (defaults -> file -> args)
///
/// Runs before logging is initialized, since the log level is itself configurable.
pub fn load_configuration(args: &Args, config_file: Option<&Path>) -> Result<Config> {
    Config::load_layered(
        config_file,
        args.command.cli_root(),
        args.command.one_minute_root(),
    )
}

/// Report where the configuration came from
pub fn log_config_source(config_file: Option<&Path>) {
    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }
}

/// Create a progress bar for multi-file commands
///
/// Hidden in quiet mode and for batches too small to be worth one.
pub fn create_progress_bar(total: usize, message: &str, show_progress: bool) -> ProgressBar {
    if !show_progress || total < PROGRESS_BAR_THRESHOLD {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print reports as pretty JSON, without their raw text
pub fn print_reports_json(reports: &[ClimateReport]) -> Result<()> {
    let redacted: Vec<ClimateReport> = reports.iter().map(ClimateReport::redacted).collect();
    println!("{}", serde_json::to_string_pretty(&redacted)?);
    Ok(())
}

/// One-line human-readable summary of a report
pub fn format_report(report: &ClimateReport) -> String {
    fn temperature(value: Option<i32>, time: Option<&chrono::DateTime<chrono_tz::Tz>>) -> String {
        match (value, time) {
            (Some(value), Some(time)) => format!("{:>4} @ {}", value, time.format("%H:%M")),
            (Some(value), None) => format!("{:>4}", value),
            (None, _) => format!("{:>4}", "MM"),
        }
    }

    let mut line = format!(
        "{} {}  issued {} by {}  max {}  min {}  avg {}",
        report.station.as_str().bright_white().bold(),
        report.summary_date,
        report.issuance_time.format("%Y-%m-%d %H:%M %Z"),
        report.issuing_office,
        temperature(report.max_temp, report.max_temp_time.as_ref()),
        temperature(report.min_temp, report.min_temp_time.as_ref()),
        temperature(report.avg_temp, None),
    );
    if report.is_afternoon_report {
        line.push_str(&format!("  {}", "afternoon".cyan()));
    }
    if report.is_correction {
        line.push_str(&format!("  {}", "corrected".yellow()));
    }
    line
}

/// Print a failed file with its error
pub fn print_failure(path: &Path, error: &Error) {
    eprintln!("{} {}: {}", "failed".bright_red().bold(), path.display(), error);
}

/// Print the closing summary line for a multi-file command
pub fn print_summary(title: &str, stats: &CommandStats) {
    let failed = if stats.files_failed > 0 {
        stats.files_failed.to_string().bright_red().bold()
    } else {
        stats.files_failed.to_string().bright_white().bold()
    };
    eprintln!(
        "{}: {} succeeded, {} failed",
        title.bright_green().bold(),
        stats.files_processed.to_string().bright_white().bold(),
        failed
    );
}

use crate::benchmarks::ComparisonRunner;
use crate::core::BenchReporter;
use crate::services::{BenchConfig, ConsoleReporter};
use crate::strategy::Strategy;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration struct for run command to reduce argument count
pub struct RunConfig {
    pub bench: BenchConfig,
    pub report: Option<PathBuf>,
    pub quiet: bool,
}

impl RunConfig {
    pub fn new(mut bench: BenchConfig, iterations: Option<u64>, strategies: Vec<Strategy>) -> Self {
        if let Some(iterations) = iterations {
            bench.iterations = iterations;
        }
        if !strategies.is_empty() {
            bench.strategies = strategies;
        }
        Self {
            bench,
            report: None,
            quiet: false,
        }
    }

    pub fn with_report(mut self, report: Option<PathBuf>) -> Self {
        self.report = report;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Execute run command with the console reporter
pub fn execute_run(config: RunConfig) -> Result<()> {
    let reporter: Box<dyn BenchReporter> = if config.quiet {
        Box::new(ConsoleReporter::quiet())
    } else {
        Box::new(ConsoleReporter::new())
    };
    execute_run_with_reporter(config, reporter)
}

/// Generic run execution with any reporter
pub fn execute_run_with_reporter<R: BenchReporter>(config: RunConfig, reporter: R) -> Result<()> {
    let mut runner =
        ComparisonRunner::new(config.bench, reporter).context("Invalid benchmark configuration")?;
    let summary = runner.run_all();

    if let Some(path) = &config.report {
        runner
            .export_json_report(path)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        if !config.quiet {
            println!("📄 Report written to {}", path.display());
        }
    }

    if summary.error_count > 0 {
        anyhow::bail!(
            "{} of {} strategies failed",
            summary.error_count,
            summary.strategy_count
        );
    }

    Ok(())
}

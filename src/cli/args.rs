use crate::services::BenchConfig;
use crate::strategy::Strategy;
use crate::unswitch::{LengthPolicy, PassOrder};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch_bench")]
#[command(about = "Compare virtual, static and unswitched dispatch over polymorphic objects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time every dispatch strategy and report throughput
    Run {
        #[command(flatten)]
        setup: SetupArgs,

        /// Rounds per strategy
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Strategy to run (repeatable, default: all)
        #[arg(short, long = "strategy", value_enum)]
        strategies: Vec<Strategy>,

        /// Write a JSON report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run each strategy once and check every object was updated exactly once
    Verify {
        #[command(flatten)]
        setup: SetupArgs,

        /// Strategy to verify (repeatable, default: all)
        #[arg(short, long = "strategy", value_enum)]
        strategies: Vec<Strategy>,
    },

    /// Print object sizes and alignments
    Info,
}

/// フィクスチャとアンスイッチの共通オプション
#[derive(Args, Debug, Clone, Default)]
pub struct SetupArgs {
    /// JSON configuration file (flags override its values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of objects
    #[arg(short = 'n', long)]
    pub len: Option<usize>,

    /// Probability that an object is of kind `up`
    #[arg(long)]
    pub up_probability: Option<f64>,

    /// Random seed for the kind sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Handling of lengths that are not a multiple of 64
    #[arg(long, value_enum)]
    pub policy: Option<LengthPolicy>,

    /// Which unswitched pass runs first
    #[arg(long, value_enum)]
    pub order: Option<PassOrder>,
}

impl SetupArgs {
    /// 設定ファイル（あれば）を読み込み、フラグで上書きする
    pub fn resolve(&self) -> Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => BenchConfig::default(),
        };

        let fixture = &mut config.fixture;
        if let Some(len) = self.len {
            fixture.len = len;
        }
        if let Some(up_probability) = self.up_probability {
            fixture.up_probability = up_probability;
        }
        if let Some(seed) = self.seed {
            fixture.seed = seed;
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if let Some(order) = self.order {
            config.order = order;
        }

        Ok(config)
    }
}

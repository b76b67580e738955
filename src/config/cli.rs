//! CLI argument parsing using clap

use crate::config::cli_convert::convert_distribution;
use crate::config::validator::validate_distribution;
use crate::engine::Direction;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// diskseek - disk head scheduling simulator
///
/// Simulates FCFS, SSTF, SCAN and C-SCAN over one request queue and compares
/// total head movement, average seek time and throughput.
#[derive(Parser, Debug)]
#[command(name = "diskseek")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (CLI options override its values)
    #[arg(short = 'c', long, env = "DISKSEEK_CONFIG")]
    pub config: Option<PathBuf>,

    // === Disk Options ===
    /// Number of cylinders on the disk [default: 200]
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub disk_size: Option<i64>,

    /// Initial head position [default: 0]
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub head: Option<i64>,

    /// First sweep direction for SCAN and C-SCAN [default: right]
    /// (right/up or left/down, any case)
    #[arg(short = 'd', long, value_parser = str::parse::<Direction>)]
    pub direction: Option<Direction>,

    // === Workload Options ===
    /// Comma-separated request queue (e.g., "98, 183, 37, 122")
    #[arg(short = 'r', long, allow_hyphen_values = true)]
    pub requests: Option<String>,

    /// Generate N random requests instead of passing --requests
    #[arg(long, value_name = "N", conflicts_with = "requests")]
    pub random: Option<usize>,

    /// Distribution for generated requests
    #[arg(long, value_enum, default_value = "uniform")]
    pub distribution: DistributionArg,

    /// Zipf theta parameter (0.0-3.0]
    #[arg(long, default_value = "1.2")]
    pub zipf_theta: f64,

    /// Gaussian standard deviation, as a fraction of the disk
    #[arg(long, default_value = "0.1")]
    pub gaussian_stddev: f64,

    /// Gaussian center point (0.0-1.0, fraction of the disk)
    #[arg(long, default_value = "0.5")]
    pub gaussian_center: f64,

    /// Seed for generated requests
    #[arg(long)]
    pub seed: Option<u64>,

    /// Policies to simulate: fcfs, sstf, scan, c-scan or all (repeatable, comma-separated)
    #[arg(short = 'p', long = "policy", value_delimiter = ',')]
    pub policies: Vec<String>,

    // === Output Options ===
    /// Chart to draw after the report
    #[arg(long, value_enum)]
    pub chart: Option<ChartArg>,

    /// Chart height in terminal rows
    #[arg(long)]
    pub chart_height: Option<usize>,

    /// Write a JSON report to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Write step-indexed sequences as CSV to this path
    #[arg(long)]
    pub csv_output: Option<PathBuf>,

    /// Only print errors and files written
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long)]
    pub debug: bool,
}

/// Random request distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionArg {
    /// Every cylinder equally likely
    Uniform,
    /// Power law, hot low cylinders
    Zipf,
    /// Clustered around a center cylinder
    Gaussian,
}

/// Chart selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartArg {
    /// No chart
    None,
    /// Head position per step
    Steps,
    /// Average seek time per policy
    AvgSeekTime,
    /// Throughput per policy
    Throughput,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments that do not depend on the config file
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.random.is_some() {
            validate_distribution(&convert_distribution(self))?;
        }

        if self.chart_height == Some(0) {
            anyhow::bail!("chart_height must be at least 1");
        }

        Ok(())
    }
}

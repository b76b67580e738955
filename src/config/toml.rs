//! TOML configuration file parsing
//!
//! ```toml
//! [disk]
//! size = 200
//! head = 53
//! direction = "right"
//!
//! [workload]
//! requests = [98, 183, 37, 122, 14, 124, 65, 67]
//! policies = ["FCFS", "SSTF", "SCAN", "C-SCAN"]
//!
//! [output]
//! chart = "steps"
//! json_output = "report.json"
//! ```

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{
    convert_chart, convert_distribution, parse_policies, parse_queue,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents).context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Build the effective configuration: config file (if any) overlaid with CLI
pub fn build_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => parse_toml_file(path)?,
        None => Config::default(),
    };
    merge_cli_with_config(cli, config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Disk
    if let Some(size) = cli.disk_size {
        config.disk.size = size;
    }
    if let Some(head) = cli.head {
        config.disk.head = head;
    }
    if let Some(direction) = cli.direction {
        config.disk.direction = direction;
    }

    // An explicit queue on either side replaces a random one and vice versa
    if let Some(ref requests) = cli.requests {
        config.workload.requests = parse_queue(requests).context("Failed to parse --requests")?;
        config.workload.random = None;
    }
    if let Some(count) = cli.random {
        config.workload.requests.clear();
        config.workload.random = Some(RandomQueueConfig {
            count,
            distribution: convert_distribution(cli),
            seed: cli.seed,
        });
    } else if let (Some(seed), Some(random)) = (cli.seed, config.workload.random.as_mut()) {
        random.seed = Some(seed);
    }

    if !cli.policies.is_empty() {
        config.workload.policies = parse_policies(&cli.policies).context("Failed to parse --policy")?;
    }

    // Output
    if let Some(chart) = cli.chart {
        config.output.chart = convert_chart(chart);
    }
    if let Some(height) = cli.chart_height {
        config.output.chart_height = height;
    }
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if let Some(ref path) = cli.csv_output {
        config.output.csv_output = Some(path.clone());
    }
    if cli.quiet {
        config.output.quiet = true;
    }

    Ok(config)
}

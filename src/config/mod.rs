//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, raw text parsing and
//! validation. Values are kept in their raw (signed) form until validation so
//! that an out-of-range head or request is reported with the offending value
//! rather than as a deserialization failure.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::distribution::{generate_queue, DistributionKind};
use crate::engine::{
    Cylinder, Direction, PolicyKind, SimulationEngine, SimulationRequest, DEFAULT_DISK_SIZE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub disk: DiskConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Disk geometry and head state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskConfig {
    /// Number of cylinders
    #[serde(default = "default_disk_size")]
    pub size: i64,
    /// Initial head position
    #[serde(default)]
    pub head: i64,
    /// First sweep direction for SCAN and C-SCAN
    #[serde(default)]
    pub direction: Direction,
}

fn default_disk_size() -> i64 {
    i64::from(DEFAULT_DISK_SIZE)
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            size: default_disk_size(),
            head: 0,
            direction: Direction::default(),
        }
    }
}

/// Request queue and policy selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Explicit request queue, in submission order
    #[serde(default)]
    pub requests: Vec<i64>,
    /// Generate the queue instead of listing it
    #[serde(default)]
    pub random: Option<RandomQueueConfig>,
    /// Policies to simulate, in report order
    #[serde(default = "default_policies")]
    pub policies: Vec<PolicyKind>,
}

fn default_policies() -> Vec<PolicyKind> {
    PolicyKind::ALL.to_vec()
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            random: None,
            policies: default_policies(),
        }
    }
}

/// Random queue parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomQueueConfig {
    /// Number of requests to generate
    pub count: usize,
    #[serde(default)]
    pub distribution: DistributionKind,
    /// Seed for reproducible queues
    pub seed: Option<u64>,
}

/// Which chart to render after the text report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    None,
    /// Head position per step, one series per policy
    Steps,
    /// Average seek time per policy
    AvgSeekTime,
    /// Throughput per policy
    Throughput,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::None => "none",
            ChartKind::Steps => "steps",
            ChartKind::AvgSeekTime => "avg_seek_time",
            ChartKind::Throughput => "throughput",
        };
        f.write_str(name)
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub chart: ChartKind,
    /// Chart height in terminal rows
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
    /// JSON report path
    pub json_output: Option<PathBuf>,
    /// Step-indexed CSV path
    pub csv_output: Option<PathBuf>,
    /// Suppress the text report
    #[serde(default)]
    pub quiet: bool,
}

fn default_chart_height() -> usize {
    16
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart: ChartKind::default(),
            chart_height: default_chart_height(),
            json_output: None,
            csv_output: None,
            quiet: false,
        }
    }
}

impl OutputConfig {
    /// Whether a chart goes to the console; `quiet` suppresses it
    pub fn shows_chart(&self) -> bool {
        !self.quiet && self.chart != ChartKind::None
    }
}

impl Config {
    /// Turn a validated config into engine input
    ///
    /// Generates the request queue when `workload.random` is set. Call
    /// [`validator::validate_config`] first; this only converts.
    pub fn build_request(&self) -> Result<(SimulationEngine, SimulationRequest)> {
        let disk_size = Cylinder::try_from(self.disk.size)
            .with_context(|| format!("disk size {} does not fit a cylinder index", self.disk.size))?;
        let head = Cylinder::try_from(self.disk.head)
            .with_context(|| format!("head position {} is not a valid cylinder", self.disk.head))?;

        let queue = match &self.workload.random {
            Some(random) if self.workload.requests.is_empty() => {
                generate_queue(&random.distribution, random.count, disk_size, random.seed)
            }
            _ => self
                .workload
                .requests
                .iter()
                .map(|&c| {
                    Cylinder::try_from(c)
                        .with_context(|| format!("request {} is not a valid cylinder", c))
                })
                .collect::<Result<Vec<_>>>()?,
        };

        let engine = SimulationEngine::new(disk_size)?;
        let request = SimulationRequest {
            queue,
            head,
            direction: self.disk.direction,
            policies: self.workload.policies.clone(),
        };

        Ok((engine, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.disk.size, 200);
        assert_eq!(config.disk.head, 0);
        assert_eq!(config.disk.direction, Direction::Right);
        assert_eq!(config.workload.policies, PolicyKind::ALL.to_vec());
        assert_eq!(config.output.chart, ChartKind::None);
    }

    #[test]
    fn test_quiet_suppresses_chart() {
        let mut output = OutputConfig::default();
        assert!(!output.shows_chart());

        output.chart = ChartKind::Steps;
        assert!(output.shows_chart());

        output.quiet = true;
        assert!(!output.shows_chart());
    }

    #[test]
    fn test_build_request_explicit_queue() {
        let mut config = Config::default();
        config.disk.head = 53;
        config.workload.requests = vec![98, 183, 37];
        config.workload.policies = vec![PolicyKind::Sstf];

        let (engine, request) = config.build_request().unwrap();
        assert_eq!(engine.disk_size(), 200);
        assert_eq!(request.head, 53);
        assert_eq!(request.queue, vec![98, 183, 37]);
        assert_eq!(request.policies, vec![PolicyKind::Sstf]);
    }

    #[test]
    fn test_build_request_random_queue() {
        let mut config = Config::default();
        config.disk.size = 50;
        config.workload.random = Some(RandomQueueConfig {
            count: 12,
            distribution: DistributionKind::Uniform,
            seed: Some(4),
        });

        let (_, first) = config.build_request().unwrap();
        let (_, second) = config.build_request().unwrap();
        assert_eq!(first.queue.len(), 12);
        assert!(first.queue.iter().all(|&c| c < 50));
        assert_eq!(first.queue, second.queue);
    }

    #[test]
    fn test_build_request_rejects_negative_values() {
        let mut config = Config::default();
        config.workload.requests = vec![5, -1];
        assert!(config.build_request().is_err());

        let mut config = Config::default();
        config.disk.size = 0;
        assert!(config.build_request().is_err());
    }
}

//! CLI to Config conversion utilities
//!
//! Parses the raw text a user types into typed values. Range checks against
//! the disk happen later in the validator, once the disk size is known.

use crate::config::cli;
use crate::config::ChartKind;
use crate::distribution::DistributionKind;
use crate::engine::PolicyKind;
use anyhow::{Context, Result};

/// Parse a comma-separated cylinder list (e.g., "98, 183, 37")
///
/// Whitespace around values is ignored and an empty string is an empty
/// queue. Negative values parse here and are rejected by validation.
pub fn parse_queue(s: &str) -> Result<Vec<i64>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }

    s.split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            if token.is_empty() {
                anyhow::bail!("empty value at position {} in request list", i + 1);
            }
            token
                .parse::<i64>()
                .with_context(|| format!("Invalid cylinder '{}' at position {}", token, i + 1))
        })
        .collect()
}

/// Parse policy names; "all" expands to every policy
pub fn parse_policies<S: AsRef<str>>(names: &[S]) -> Result<Vec<PolicyKind>> {
    let mut policies = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.eq_ignore_ascii_case("all") {
            policies.extend(PolicyKind::ALL);
        } else {
            policies.push(name.parse::<PolicyKind>()?);
        }
    }
    Ok(policies)
}

pub fn convert_chart(arg: cli::ChartArg) -> ChartKind {
    match arg {
        cli::ChartArg::None => ChartKind::None,
        cli::ChartArg::Steps => ChartKind::Steps,
        cli::ChartArg::AvgSeekTime => ChartKind::AvgSeekTime,
        cli::ChartArg::Throughput => ChartKind::Throughput,
    }
}

pub fn convert_distribution(cli: &cli::Cli) -> DistributionKind {
    match cli.distribution {
        cli::DistributionArg::Uniform => DistributionKind::Uniform,
        cli::DistributionArg::Zipf => DistributionKind::Zipf {
            theta: cli.zipf_theta,
        },
        cli::DistributionArg::Gaussian => DistributionKind::Gaussian {
            stddev: cli.gaussian_stddev,
            center: cli.gaussian_center,
        },
    }
}

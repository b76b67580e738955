//! Configuration validation
//!
//! Checks raw user input before anything reaches the engine, so that errors
//! are phrased in terms of what the user typed.

use super::*;
use anyhow::Result;

/// Largest disk accepted; cylinders are stored as `u32`
const MAX_DISK_SIZE: i64 = u32::MAX as i64;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_disk(&config.disk)?;
    validate_workload(&config.workload, config.disk.size, config.disk.head)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate disk geometry
pub fn validate_disk(disk: &DiskConfig) -> Result<()> {
    if disk.size <= 0 {
        anyhow::bail!("disk size must be greater than 0, got {}", disk.size);
    }
    if disk.size > MAX_DISK_SIZE {
        anyhow::bail!("disk size must be at most {}, got {}", MAX_DISK_SIZE, disk.size);
    }

    Ok(())
}

/// Validate request queue, policies and head position against the disk
pub fn validate_workload(workload: &WorkloadConfig, disk_size: i64, head: i64) -> Result<()> {
    let in_range = |c: i64| (0..disk_size).contains(&c);

    if !in_range(head) || workload.requests.iter().any(|&c| !in_range(c)) {
        let offending: Vec<String> = std::iter::once(head)
            .filter(|&h| !in_range(h))
            .map(|h| format!("head {}", h))
            .chain(
                workload
                    .requests
                    .iter()
                    .filter(|&&c| !in_range(c))
                    .map(|c| c.to_string()),
            )
            .collect();
        anyhow::bail!(
            "Head and queue must be between 0 and {} (offending: {})",
            disk_size - 1,
            offending.join(", ")
        );
    }

    if workload.policies.is_empty() {
        anyhow::bail!("at least one policy must be selected");
    }

    if let Some(ref random) = workload.random {
        if !workload.requests.is_empty() {
            anyhow::bail!("workload.requests and workload.random are mutually exclusive");
        }
        validate_distribution(&random.distribution)?;
    }

    Ok(())
}

/// Validate distribution parameters
///
/// Written as positive range checks so NaN is rejected too.
pub fn validate_distribution(dist: &DistributionKind) -> Result<()> {
    match dist {
        DistributionKind::Zipf { theta } => {
            if !(*theta > 0.0 && *theta <= 3.0) {
                anyhow::bail!("Zipf theta must be in (0.0, 3.0], got {}", theta);
            }
        }
        DistributionKind::Gaussian { stddev, center } => {
            if !(*stddev > 0.0 && stddev.is_finite()) {
                anyhow::bail!("Gaussian stddev must be positive and finite, got {}", stddev);
            }
            if !(0.0..=1.0).contains(center) {
                anyhow::bail!("Gaussian center must be between 0.0 and 1.0, got {}", center);
            }
        }
        DistributionKind::Uniform => {}
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if output.chart_height == 0 {
        anyhow::bail!("chart_height must be at least 1");
    }

    if let (Some(json), Some(csv)) = (&output.json_output, &output.csv_output) {
        if json == csv {
            anyhow::bail!(
                "json_output and csv_output point to the same file: {}",
                json.display()
            );
        }
    }

    Ok(())
}

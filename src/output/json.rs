//! JSON output formatting
//!
//! Serializes a simulation report together with the input that produced it, so
//! a saved report can be compared against later runs or fed to plotting tools.

use crate::engine::{Cylinder, SimulationRequest};
use crate::stats::{SimulationReport, SimulationResult};
use crate::Result;
use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Complete JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// RFC 3339 timestamp (UTC)
    pub generated_at: String,
    pub input: JsonInput,
    pub results: Vec<JsonPolicyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub least_movement: Option<String>,
}

/// Input echo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonInput {
    pub disk_size: Cylinder,
    pub head: Cylinder,
    pub direction: String,
    pub queue: Vec<Cylinder>,
}

/// One policy's outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPolicyResult {
    pub policy: String,
    pub sequence: Vec<Cylinder>,
    pub seek_distances: Vec<u64>,
    pub total_movement: u64,
    pub average_seek_time: f64,
    pub throughput: f64,
}

impl JsonPolicyResult {
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            policy: result.policy().name().to_string(),
            sequence: result.sequence().to_vec(),
            seek_distances: result.seek_distances().collect(),
            total_movement: result.total_movement(),
            average_seek_time: result.average_seek_time(),
            throughput: result.throughput(),
        }
    }
}

/// Build the JSON document for a finished run
pub fn build_json_report(
    report: &SimulationReport,
    request: &SimulationRequest,
    disk_size: Cylinder,
) -> JsonReport {
    JsonReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        input: JsonInput {
            disk_size,
            head: request.head,
            direction: request.direction.to_string(),
            queue: request.queue.clone(),
        },
        results: report.iter().map(JsonPolicyResult::from_result).collect(),
        least_movement: report
            .best_by_movement()
            .map(|r| r.policy().name().to_string()),
    }
}

/// Write JSON report to file
pub fn write_json_output(output_path: &Path, report: &JsonReport, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write JSON output: {}", output_path.display()))?;

    Ok(())
}

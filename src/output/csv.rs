//! CSV output formatting
//!
//! One row per head position per policy, indexed by step. Step 0 is the
//! starting head position with a seek distance of 0. The layout loads
//! directly into pandas or a spreadsheet for plotting head movement over time.

use crate::stats::{SimulationReport, SimulationResult};
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &str = "policy,step,cylinder,seek_distance,cumulative_movement";

/// CSV writer for per-step head positions
pub struct CsvWriter<W: Write> {
    out: W,
    rows: usize,
}

impl CsvWriter<BufWriter<File>> {
    /// Create the file and write the header row
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV output: {}", path.display()))?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "{}", HEADER)?;
        Ok(Self { out, rows: 0 })
    }

    /// Append every step of one policy's run
    pub fn append_result(&mut self, result: &SimulationResult) -> Result<()> {
        let policy = result.policy().name();
        let mut cumulative = 0u64;

        let distances = std::iter::once(0).chain(result.seek_distances());
        for (step, (&cylinder, distance)) in result.sequence().iter().zip(distances).enumerate() {
            cumulative += distance;
            writeln!(
                self.out,
                "{},{},{},{},{}",
                policy, step, cylinder, distance, cumulative
            )?;
            self.rows += 1;
        }

        Ok(())
    }

    /// Data rows written so far (header excluded)
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Write every policy in the report to a CSV file
pub fn write_csv_output(path: &Path, report: &SimulationReport) -> Result<()> {
    let mut writer = CsvWriter::create(path)?;
    for result in report {
        writer.append_result(result)?;
    }
    log::debug!("wrote {} CSV rows to {}", writer.rows(), path.display());
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, PolicyKind, SimulationEngine, SimulationRequest};

    fn report() -> SimulationReport {
        let request = SimulationRequest {
            queue: vec![82, 43],
            head: 50,
            direction: Direction::Right,
            policies: vec![PolicyKind::Fcfs, PolicyKind::Scan],
        };
        SimulationEngine::new(100).unwrap().simulate_all(&request).unwrap()
    }

    #[test]
    fn test_csv_rows() {
        let report = report();
        let mut writer = CsvWriter::new(Vec::new()).unwrap();
        for result in &report {
            writer.append_result(result).unwrap();
        }
        assert_eq!(writer.rows(), 3 + 4);

        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "FCFS,0,50,0,0");
        assert_eq!(lines[2], "FCFS,1,82,32,32");
        assert_eq!(lines[3], "FCFS,2,43,39,71");
        assert_eq!(lines[4], "SCAN,0,50,0,0");
        assert_eq!(lines[6], "SCAN,2,99,17,49");
        assert_eq!(lines[7], "SCAN,3,43,56,105");
    }

    #[test]
    fn test_write_csv_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("steps.csv");
        write_csv_output(&path, &report()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1 + 7);
        assert!(text.ends_with("SCAN,3,43,56,105\n"));
    }
}

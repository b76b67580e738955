//! Terminal charts
//!
//! Three renderings of a finished report:
//! - `steps`: head position (y) against step index (x), one marker per policy
//! - `avg_seek_time`: horizontal bars, one per policy
//! - `throughput`: horizontal bars, one per policy
//!
//! # Example
//!
//! ```text
//!  199 |       *
//!      |    *
//!      | *
//!    0 |          *
//!      +-------------
//!        0  1  2  3
//! ```

use crate::config::ChartKind;
use crate::engine::Cylinder;
use crate::stats::{SimulationReport, SimulationResult};
use std::fmt::Write;

/// Markers assigned to policies in report order
const MARKERS: [char; 4] = ['*', 'o', '+', 'x'];

/// Drawn where two policies land on the same cell
const OVERLAP: char = '#';

/// Columns per step in the steps chart
const STEP_WIDTH: usize = 3;

/// Width of the longest bar
const BAR_WIDTH: usize = 40;

/// Render the requested chart; `ChartKind::None` renders nothing
pub fn render_chart(
    kind: ChartKind,
    report: &SimulationReport,
    disk_size: Cylinder,
    height: usize,
) -> String {
    match kind {
        ChartKind::None => String::new(),
        ChartKind::Steps => render_steps(report, disk_size, height),
        ChartKind::AvgSeekTime => render_bars(
            "Average seek time (cylinders per request)",
            report,
            SimulationResult::average_seek_time,
        ),
        ChartKind::Throughput => render_bars(
            "Throughput (requests per cylinder travelled)",
            report,
            SimulationResult::throughput,
        ),
    }
}

/// Map a cylinder to a grid row, row 0 being the last cylinder
fn row_for(cylinder: Cylinder, disk_size: Cylinder, height: usize) -> usize {
    let last = u64::from(disk_size.saturating_sub(1));
    if last == 0 || height <= 1 {
        return 0;
    }
    let from_top = last - u64::from(cylinder).min(last);
    let rows = (height - 1) as u64;
    ((from_top * rows + last / 2) / last) as usize
}

fn render_steps(report: &SimulationReport, disk_size: Cylinder, height: usize) -> String {
    let height = height.max(1);
    let steps = report.max_steps();
    let width = steps * STEP_WIDTH;
    let mut grid = vec![vec![' '; width]; height];

    for (i, result) in report.iter().enumerate() {
        let marker = MARKERS[i % MARKERS.len()];
        for (step, &cylinder) in result.sequence().iter().enumerate() {
            let cell = &mut grid[row_for(cylinder, disk_size, height)][step * STEP_WIDTH + 1];
            *cell = if *cell == ' ' || *cell == marker { marker } else { OVERLAP };
        }
    }

    let last = disk_size.saturating_sub(1);
    let label_width = last.to_string().len();
    let mut out = String::new();

    let _ = writeln!(out, "Head position by step");
    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 {
            last.to_string()
        } else if r == height - 1 {
            "0".to_string()
        } else {
            String::new()
        };
        let line: String = row.iter().collect();
        let _ = writeln!(out, " {:>w$} |{}", label, line.trim_end(), w = label_width);
    }

    let _ = writeln!(out, " {:>w$} +{}", "", "-".repeat(width), w = label_width);
    let axis: String = (0..steps).map(|s| format!("{:>3}", s % 1000)).collect();
    let _ = writeln!(out, " {:>w$}  {}", "", axis.trim_start(), w = label_width);

    let legend: Vec<String> = report
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{} {}", MARKERS[i % MARKERS.len()], r.policy()))
        .collect();
    let _ = writeln!(out, " {}  ({} overlap)", legend.join("  "), OVERLAP);
    out
}

fn render_bars<F>(title: &str, report: &SimulationReport, metric: F) -> String
where
    F: Fn(&SimulationResult) -> f64,
{
    let max = report.iter().map(&metric).fold(0.0_f64, f64::max);
    let mut out = String::new();

    let _ = writeln!(out, "{}", title);
    for result in report {
        let value = metric(result);
        let len = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            " {:<7}|{:<w$}| {:.4}",
            result.policy().name(),
            "█".repeat(len),
            value,
            w = BAR_WIDTH
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, PolicyKind, SimulationEngine, SimulationRequest};

    fn report(policies: Vec<PolicyKind>) -> SimulationReport {
        let request = SimulationRequest {
            queue: vec![82, 170, 43],
            head: 50,
            direction: Direction::Right,
            policies,
        };
        SimulationEngine::new(200).unwrap().simulate_all(&request).unwrap()
    }

    #[test]
    fn test_none_is_empty() {
        assert!(render_chart(ChartKind::None, &report(vec![PolicyKind::Fcfs]), 200, 10).is_empty());
    }

    #[test]
    fn test_row_mapping() {
        assert_eq!(row_for(199, 200, 11), 0);
        assert_eq!(row_for(0, 200, 11), 10);
        assert_eq!(row_for(5, 1, 11), 0);
        assert_eq!(row_for(0, 200, 1), 0);
    }

    #[test]
    fn test_steps_chart_shape() {
        let chart = render_chart(
            ChartKind::Steps,
            &report(vec![PolicyKind::Scan, PolicyKind::CScan]),
            200,
            8,
        );
        let lines: Vec<&str> = chart.lines().collect();
        // title + 8 rows + axis + step labels + legend
        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with(" 199 |"));
        assert!(lines[8].starts_with("   0 |"));
        assert!(lines[11].contains("* SCAN"));
        assert!(lines[11].contains("o C-SCAN"));
        // both policies visit 199 at step 3
        assert!(lines[1].contains(OVERLAP));
        // only C-SCAN touches cylinder 0 (step 4)
        assert!(lines[8].contains('o'));
    }

    #[test]
    fn test_bar_chart_scales_to_max() {
        let chart = render_chart(
            ChartKind::AvgSeekTime,
            &report(vec![PolicyKind::Fcfs, PolicyKind::CScan]),
            200,
            8,
        );
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        let cscan_bar = lines[2].matches('█').count();
        let fcfs_bar = lines[1].matches('█').count();
        assert_eq!(cscan_bar, BAR_WIDTH);
        assert!(fcfs_bar < cscan_bar);
        assert!(lines[2].ends_with("130.3333"));
    }

    #[test]
    fn test_bar_chart_all_zero() {
        let request = SimulationRequest {
            queue: vec![],
            head: 3,
            direction: Direction::Left,
            policies: vec![PolicyKind::Sstf],
        };
        let report = SimulationEngine::new(10).unwrap().simulate_all(&request).unwrap();
        let chart = render_chart(ChartKind::Throughput, &report, 10, 4);
        assert!(chart.contains(" SSTF   |"));
        assert!(!chart.contains('█'));
    }
}

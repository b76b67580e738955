//! Human-readable text output

use crate::engine::{Cylinder, SimulationRequest};
use crate::stats::{SimulationReport, SimulationResult};
use std::fmt::Write;

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Print simulation results to console
///
/// Displays, for every policy in report order:
/// - Visit sequence
/// - Total head movement
/// - Average seek time
/// - Throughput
///
/// followed by a side-by-side comparison when more than one policy ran.
pub fn print_results(report: &SimulationReport, request: &SimulationRequest, disk_size: Cylinder) {
    print!("{}", render_results(report, request, disk_size));
}

/// Render the text report into a string
pub fn render_results(
    report: &SimulationReport,
    request: &SimulationRequest,
    disk_size: Cylinder,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "                  SIMULATION RESULTS");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);
    let _ = writeln!(out, "Disk:      {} cylinders (0-{})", format_number(u64::from(disk_size)), disk_size - 1);
    let _ = writeln!(out, "Head:      {}", request.head);
    let _ = writeln!(out, "Direction: {}", request.direction);
    let _ = writeln!(out, "Requests:  {}", request.queue.len());
    let _ = writeln!(out);

    for result in report {
        render_policy(&mut out, result);
    }

    if report.len() > 1 {
        render_comparison(&mut out, report);
    }

    let _ = writeln!(out, "{}", RULE);
    out
}

fn render_policy(out: &mut String, result: &SimulationResult) {
    let _ = writeln!(out, "{}:", result.policy());
    let _ = writeln!(out, "  Sequence: {}", format_sequence(result.sequence()));
    let _ = writeln!(out, "  Total Head Movement: {}", format_number(result.total_movement()));
    let _ = writeln!(out, "  Avg Seek Time: {:.2} units", result.average_seek_time());
    let _ = writeln!(out, "  Throughput: {:.2} requests/ms", result.throughput());
    let _ = writeln!(out);
}

fn render_comparison(out: &mut String, report: &SimulationReport) {
    let _ = writeln!(out, "Comparison:");
    let _ = writeln!(
        out,
        "  {:<8} {:>10} {:>14} {:>12}",
        "Policy", "Movement", "Avg Seek", "Throughput"
    );
    for result in report {
        let _ = writeln!(
            out,
            "  {:<8} {:>10} {:>14.2} {:>12.4}",
            result.policy().name(),
            format_number(result.total_movement()),
            result.average_seek_time(),
            result.throughput()
        );
    }

    if let Some(best) = report.best_by_movement() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  Least head movement: {} ({} cylinders)",
            best.policy(),
            format_number(best.total_movement())
        );
    }
    let _ = writeln!(out);
}

/// Format a visit sequence as `[53, 65, 67]`
fn format_sequence(sequence: &[Cylinder]) -> String {
    let items: Vec<String> = sequence.iter().map(|c| c.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, PolicyKind, SimulationEngine};

    fn sample() -> (SimulationReport, SimulationRequest) {
        let request = SimulationRequest {
            queue: vec![82, 170, 43],
            head: 50,
            direction: Direction::Right,
            policies: vec![PolicyKind::Scan, PolicyKind::CScan],
        };
        let report = SimulationEngine::new(200).unwrap().simulate_all(&request).unwrap();
        (report, request)
    }

    #[test]
    fn test_render_results_policy_blocks() {
        let (report, request) = sample();
        let text = render_results(&report, &request, 200);

        assert!(text.contains("SCAN:\n  Sequence: [50, 82, 170, 199, 43]\n"));
        assert!(text.contains("  Total Head Movement: 305\n"));
        assert!(text.contains("  Avg Seek Time: 101.67 units\n"));
        assert!(text.contains("C-SCAN:\n  Sequence: [50, 82, 170, 199, 0, 43]\n"));
        assert!(text.contains("Least head movement: SCAN (305 cylinders)"));
    }

    #[test]
    fn test_render_results_single_policy_has_no_comparison() {
        let request = SimulationRequest {
            queue: vec![],
            head: 7,
            direction: Direction::Left,
            policies: vec![PolicyKind::Fcfs],
        };
        let report = SimulationEngine::new(10).unwrap().simulate_all(&request).unwrap();
        let text = render_results(&report, &request, 10);

        assert!(text.contains("  Sequence: [7]\n"));
        assert!(text.contains("  Throughput: 0.00 requests/ms\n"));
        assert!(!text.contains("Comparison:"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[]), "[]");
        assert_eq!(format_sequence(&[1, 2]), "[1, 2]");
    }
}

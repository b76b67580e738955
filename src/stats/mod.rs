//! Simulation metrics
//!
//! Every policy produces a visit sequence; everything else is derived from that
//! sequence and the number of queued requests by the functions in this module.
//! Keeping the math in one place means total movement always agrees with the
//! sequence a policy returned, including synthetic edge stops and C-SCAN wraps.
//!
//! # Metrics
//!
//! - **Total movement**: sum of `|sequence[i] - sequence[i-1]|`
//! - **Average seek time**: total movement / request count (0 with no requests)
//! - **Throughput**: request count / total movement (0 with no movement)
//!
//! # Example
//!
//! ```
//! use diskseek::engine::PolicyKind;
//! use diskseek::stats::SimulationResult;
//!
//! let result = SimulationResult::from_sequence(PolicyKind::Fcfs, vec![50, 82, 43], 2);
//! assert_eq!(result.total_movement(), 32 + 39);
//! assert_eq!(result.average_seek_time(), 35.5);
//! ```

pub mod aggregator;

pub use aggregator::SimulationReport;

use crate::engine::{Cylinder, PolicyKind};

/// Outcome of running one policy over one request queue
///
/// Immutable once built: fields are private and only exposed through
/// accessors. Owns its sequence outright.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    policy: PolicyKind,
    sequence: Vec<Cylinder>,
    request_count: usize,
    total_movement: u64,
    average_seek_time: f64,
    throughput: f64,
}

impl SimulationResult {
    /// Derive every metric from a finished visit sequence
    ///
    /// `request_count` is the length of the original queue, not of the
    /// sequence (which also holds the start position and edge stops).
    pub fn from_sequence(policy: PolicyKind, sequence: Vec<Cylinder>, request_count: usize) -> Self {
        let total_movement = total_movement(&sequence);
        Self {
            policy,
            average_seek_time: average_seek_time(total_movement, request_count),
            throughput: throughput(request_count, total_movement),
            sequence,
            request_count,
            total_movement,
        }
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Every stop the head makes, starting with its initial position
    pub fn sequence(&self) -> &[Cylinder] {
        &self.sequence
    }

    /// Initial head position
    pub fn head(&self) -> Cylinder {
        self.sequence[0]
    }

    pub fn request_count(&self) -> usize {
        self.request_count
    }

    pub fn total_movement(&self) -> u64 {
        self.total_movement
    }

    pub fn average_seek_time(&self) -> f64 {
        self.average_seek_time
    }

    pub fn throughput(&self) -> f64 {
        self.throughput
    }

    /// Distance travelled to reach each stop after the first
    pub fn seek_distances(&self) -> impl Iterator<Item = u64> + '_ {
        self.sequence.windows(2).map(|w| seek_distance(w[0], w[1]))
    }
}

/// Cost of moving the head between two cylinders
#[inline]
pub fn seek_distance(from: Cylinder, to: Cylinder) -> u64 {
    u64::from(from.abs_diff(to))
}

/// Sum of consecutive seek distances over a visit sequence
pub fn total_movement(sequence: &[Cylinder]) -> u64 {
    sequence.windows(2).map(|w| seek_distance(w[0], w[1])).sum()
}

/// Mean head movement per serviced request
pub fn average_seek_time(total_movement: u64, request_count: usize) -> f64 {
    if request_count == 0 {
        0.0
    } else {
        total_movement as f64 / request_count as f64
    }
}

/// Requests serviced per cylinder of head movement
pub fn throughput(request_count: usize, total_movement: u64) -> f64 {
    if total_movement == 0 {
        0.0
    } else {
        request_count as f64 / total_movement as f64
    }
}

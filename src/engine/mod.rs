//! Disk head scheduling engine
//!
//! This module defines the core abstraction of diskseek: a scheduling policy
//! decides the order in which the disk head visits a batch of queued cylinder
//! requests. The engine validates the caller's input once, asks the selected
//! policy for its visit order, and hands the finished sequence to the shared
//! metrics routine in [`crate::stats`].
//!
//! # Architecture
//!
//! The `SchedulingPolicy` trait provides a uniform interface that every policy
//! implements. Policies are selected through the closed [`PolicyKind`] enum, so
//! an unknown policy name is rejected when it is parsed rather than falling
//! through a string match at simulation time.
//!
//! # Policies
//!
//! - **FCFS**: visit requests in submission order (baseline)
//! - **SSTF**: always visit the nearest pending request
//! - **SCAN**: sweep to one disk edge, reverse, service the rest
//! - **C-SCAN**: sweep to one disk edge, jump to the other edge, keep sweeping
//!
//! # Example
//!
//! ```
//! use diskseek::engine::{Direction, SimulationEngine};
//!
//! let engine = SimulationEngine::new(200)?;
//! let result = engine.scan(&[82, 170, 43], 50, Some(Direction::Right))?;
//!
//! assert_eq!(result.sequence(), &[50, 82, 170, 199, 43]);
//! assert_eq!(result.total_movement(), 305);
//! # Ok::<(), diskseek::InvalidInput>(())
//! ```

pub mod cscan;
pub mod fcfs;
pub mod scan;
pub mod sstf;

use crate::error::InvalidInput;
use crate::stats::{SimulationReport, SimulationResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Track position on the disk, in `[0, disk_size)`
pub type Cylinder = u32;

/// Disk size used when the caller does not configure one
pub const DEFAULT_DISK_SIZE: Cylinder = 200;

/// Initial sweep direction for SCAN and C-SCAN
///
/// `Right` moves toward higher cylinder numbers, `Left` toward cylinder 0.
/// FCFS and SSTF ignore the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "right" | "up" | "r" => Ok(Direction::Right),
            "left" | "down" | "l" => Ok(Direction::Left),
            _ => Err(InvalidInput::UnknownDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = InvalidInput;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Scheduling policy selector
///
/// Display names match the conventional spelling used in reports
/// ("FCFS", "SSTF", "SCAN", "C-SCAN"). Parsing, from config files included,
/// goes through [`FromStr`] and ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PolicyKind {
    /// First-Come-First-Served
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator algorithm
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN
    #[serde(rename = "C-SCAN")]
    CScan,
}

impl PolicyKind {
    /// Every policy, in the order reports list them by default
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::Sstf,
        PolicyKind::Scan,
        PolicyKind::CScan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sstf => "SSTF",
            PolicyKind::Scan => "SCAN",
            PolicyKind::CScan => "C-SCAN",
        }
    }

    /// Whether the policy's visit order depends on [`Direction`]
    pub fn uses_direction(&self) -> bool {
        matches!(self, PolicyKind::Scan | PolicyKind::CScan)
    }

    /// Resolve the selector to its implementation
    pub fn policy(&self) -> &'static dyn SchedulingPolicy {
        match self {
            PolicyKind::Fcfs => &fcfs::Fcfs,
            PolicyKind::Sstf => &sstf::Sstf,
            PolicyKind::Scan => &scan::Scan,
            PolicyKind::CScan => &cscan::CScan,
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(PolicyKind::Fcfs),
            "sstf" => Ok(PolicyKind::Sstf),
            "scan" | "elevator" => Ok(PolicyKind::Scan),
            "c-scan" | "cscan" | "c_scan" => Ok(PolicyKind::CScan),
            _ => Err(InvalidInput::UnknownPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for PolicyKind {
    type Error = InvalidInput;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Head-movement policy
///
/// Implementations are pure: the visit order depends only on the arguments.
/// The engine guarantees that `head` and every queued cylinder lie in
/// `[0, disk_size)` and that `disk_size > 0` before calling `visit_order`.
///
/// # Contract
///
/// The returned sequence must start with `head` and contain every queued
/// request exactly as many times as it was queued. Sweep policies may add
/// boundary stops (0 or `disk_size - 1`).
pub trait SchedulingPolicy: Send + Sync {
    /// Selector this implementation answers to
    fn kind(&self) -> PolicyKind;

    /// Produce the full visit sequence, starting at `head`
    fn visit_order(
        &self,
        queue: &[Cylinder],
        head: Cylinder,
        disk_size: Cylinder,
        direction: Direction,
    ) -> Vec<Cylinder>;
}

/// One batch of work for [`SimulationEngine::simulate_all`]
///
/// All selected policies share the same queue, head and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub queue: Vec<Cylinder>,
    pub head: Cylinder,
    #[serde(default)]
    pub direction: Direction,
    pub policies: Vec<PolicyKind>,
}

impl SimulationRequest {
    /// Whether any selected policy depends on `direction`
    pub fn uses_direction(&self) -> bool {
        self.policies.iter().any(PolicyKind::uses_direction)
    }
}

/// Stateless simulation engine bound to one disk geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationEngine {
    disk_size: Cylinder,
}

impl SimulationEngine {
    /// Create an engine for a disk with `disk_size` cylinders
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPositiveDiskSize`] when `disk_size` is 0.
    pub fn new(disk_size: Cylinder) -> Result<Self, InvalidInput> {
        if disk_size == 0 {
            return Err(InvalidInput::NonPositiveDiskSize);
        }
        Ok(Self { disk_size })
    }

    pub fn disk_size(&self) -> Cylinder {
        self.disk_size
    }

    /// Outermost cylinder (`disk_size - 1`)
    pub fn last_cylinder(&self) -> Cylinder {
        self.disk_size - 1
    }

    /// Check the head and every queued request against the disk bounds
    pub fn validate(&self, queue: &[Cylinder], head: Cylinder) -> Result<(), InvalidInput> {
        if head >= self.disk_size {
            return Err(InvalidInput::HeadOutOfRange {
                head,
                disk_size: self.disk_size,
            });
        }

        if let Some((index, &cylinder)) = queue
            .iter()
            .enumerate()
            .find(|(_, c)| **c >= self.disk_size)
        {
            return Err(InvalidInput::CylinderOutOfRange {
                index,
                cylinder,
                disk_size: self.disk_size,
            });
        }

        Ok(())
    }

    /// Run a single policy
    ///
    /// `direction` only matters for SCAN and C-SCAN and defaults to
    /// [`Direction::Right`].
    pub fn simulate(
        &self,
        kind: PolicyKind,
        queue: &[Cylinder],
        head: Cylinder,
        direction: Option<Direction>,
    ) -> Result<SimulationResult, InvalidInput> {
        self.validate(queue, head)?;
        Ok(self.run_validated(kind, queue, head, direction.unwrap_or_default()))
    }

    /// First-Come-First-Served
    pub fn fcfs(&self, queue: &[Cylinder], head: Cylinder) -> Result<SimulationResult, InvalidInput> {
        self.simulate(PolicyKind::Fcfs, queue, head, None)
    }

    /// Shortest Seek Time First
    pub fn sstf(&self, queue: &[Cylinder], head: Cylinder) -> Result<SimulationResult, InvalidInput> {
        self.simulate(PolicyKind::Sstf, queue, head, None)
    }

    /// SCAN (elevator)
    pub fn scan(
        &self,
        queue: &[Cylinder],
        head: Cylinder,
        direction: Option<Direction>,
    ) -> Result<SimulationResult, InvalidInput> {
        self.simulate(PolicyKind::Scan, queue, head, direction)
    }

    /// Circular SCAN
    pub fn c_scan(
        &self,
        queue: &[Cylinder],
        head: Cylinder,
        direction: Option<Direction>,
    ) -> Result<SimulationResult, InvalidInput> {
        self.simulate(PolicyKind::CScan, queue, head, direction)
    }

    /// Run every policy in `request` against the same queue
    ///
    /// Input is validated once up front. Policies are computed in parallel and
    /// merged into a report that keeps the order in which they were requested;
    /// a policy listed twice is only simulated once.
    pub fn simulate_all(&self, request: &SimulationRequest) -> Result<SimulationReport, InvalidInput> {
        self.validate(&request.queue, request.head)?;

        let mut policies: Vec<PolicyKind> = Vec::with_capacity(request.policies.len());
        for &kind in &request.policies {
            if !policies.contains(&kind) {
                policies.push(kind);
            }
        }

        let results: Vec<SimulationResult> = policies
            .par_iter()
            .map(|&kind| self.run_validated(kind, &request.queue, request.head, request.direction))
            .collect();

        Ok(SimulationReport::from_results(results))
    }

    fn run_validated(
        &self,
        kind: PolicyKind,
        queue: &[Cylinder],
        head: Cylinder,
        direction: Direction,
    ) -> SimulationResult {
        let sequence = kind
            .policy()
            .visit_order(queue, head, self.disk_size, direction);
        debug_assert_eq!(sequence.first(), Some(&head));

        let result = SimulationResult::from_sequence(kind, sequence, queue.len());
        log::debug!(
            "{}: {} requests, {} stops, total movement {}",
            kind,
            queue.len(),
            result.sequence().len(),
            result.total_movement()
        );
        log::trace!("{} sequence: {:?}", kind, result.sequence());
        result
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self {
            disk_size: DEFAULT_DISK_SIZE,
        }
    }
}

/// Run one policy without keeping an engine around
pub fn simulate(
    kind: PolicyKind,
    queue: &[Cylinder],
    head: Cylinder,
    disk_size: Cylinder,
    direction: Option<Direction>,
) -> Result<SimulationResult, InvalidInput> {
    SimulationEngine::new(disk_size)?.simulate(kind, queue, head, direction)
}

/// Split a queue into the requests on either side of the head, both sorted
/// ascending
///
/// `head_goes_left` decides which side keeps requests sitting exactly on the
/// head: SCAN and C-SCAN service them in the first pass, so they belong to the
/// side being swept first.
pub(crate) fn partition_around(
    queue: &[Cylinder],
    head: Cylinder,
    head_goes_left: bool,
) -> (Vec<Cylinder>, Vec<Cylinder>) {
    let mut sorted = queue.to_vec();
    sorted.sort_unstable();

    sorted.into_iter().partition(|&c| {
        if head_goes_left {
            c <= head
        } else {
            c < head
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_rejects_zero_disk_size() {
        assert_eq!(SimulationEngine::new(0), Err(InvalidInput::NonPositiveDiskSize));
        assert!(simulate(PolicyKind::Fcfs, &[], 0, 0, None).is_err());
    }

    #[test]
    fn test_engine_default_disk_size() {
        let engine = SimulationEngine::default();
        assert_eq!(engine.disk_size(), 200);
        assert_eq!(engine.last_cylinder(), 199);
    }

    #[test]
    fn test_validate_head_out_of_range() {
        let engine = SimulationEngine::new(200).unwrap();
        let err = engine.fcfs(&[10, 20], 200).unwrap_err();
        assert_eq!(err, InvalidInput::HeadOutOfRange { head: 200, disk_size: 200 });
    }

    #[test]
    fn test_validate_reports_first_bad_request() {
        let engine = SimulationEngine::new(100).unwrap();
        let err = engine.sstf(&[10, 100, 150], 50).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::CylinderOutOfRange {
                index: 1,
                cylinder: 100,
                disk_size: 100
            }
        );
    }

    #[test]
    fn test_invalid_input_blocks_every_policy() {
        let engine = SimulationEngine::new(50).unwrap();
        for kind in PolicyKind::ALL {
            assert!(engine.simulate(kind, &[49, 50], 0, None).is_err());
        }
    }

    #[test]
    fn test_direction_defaults_to_right() {
        let engine = SimulationEngine::new(200).unwrap();
        let implicit = engine.scan(&[82, 170, 43], 50, None).unwrap();
        let explicit = engine.scan(&[82, 170, 43], 50, Some(Direction::Right)).unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("fcfs".parse::<PolicyKind>().unwrap(), PolicyKind::Fcfs);
        assert_eq!("SSTF".parse::<PolicyKind>().unwrap(), PolicyKind::Sstf);
        assert_eq!(" Scan ".parse::<PolicyKind>().unwrap(), PolicyKind::Scan);
        assert_eq!("C-SCAN".parse::<PolicyKind>().unwrap(), PolicyKind::CScan);
        assert_eq!("cscan".parse::<PolicyKind>().unwrap(), PolicyKind::CScan);
        assert_eq!("c_scan".parse::<PolicyKind>().unwrap(), PolicyKind::CScan);
        assert_eq!(
            "look".parse::<PolicyKind>(),
            Err(InvalidInput::UnknownPolicy("look".to_string()))
        );
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("down".parse::<Direction>().unwrap(), Direction::Left);
        assert!("".parse::<Direction>().is_err());
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_request_uses_direction() {
        let mut request = SimulationRequest {
            queue: vec![10],
            head: 0,
            direction: Direction::Left,
            policies: vec![PolicyKind::Fcfs, PolicyKind::Sstf],
        };
        assert!(!request.uses_direction());

        request.policies.push(PolicyKind::CScan);
        assert!(request.uses_direction());
    }

    #[test]
    fn test_policy_names_round_trip() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.name().parse::<PolicyKind>().unwrap(), kind);
            assert_eq!(kind.policy().kind(), kind);
        }
    }

    #[test]
    fn test_simulate_all_preserves_request_order() {
        let engine = SimulationEngine::new(200).unwrap();
        let request = SimulationRequest {
            queue: vec![98, 183, 37, 122, 14, 124, 65, 67],
            head: 53,
            direction: Direction::Right,
            policies: vec![PolicyKind::CScan, PolicyKind::Fcfs, PolicyKind::Sstf],
        };

        let report = engine.simulate_all(&request).unwrap();
        let order: Vec<PolicyKind> = report.policies().collect();
        assert_eq!(order, vec![PolicyKind::CScan, PolicyKind::Fcfs, PolicyKind::Sstf]);
    }

    #[test]
    fn test_simulate_all_collapses_duplicates() {
        let engine = SimulationEngine::new(200).unwrap();
        let request = SimulationRequest {
            queue: vec![10, 20],
            head: 0,
            direction: Direction::Left,
            policies: vec![PolicyKind::Scan, PolicyKind::Fcfs, PolicyKind::Scan],
        };

        let report = engine.simulate_all(&request).unwrap();
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_simulate_all_matches_single_calls() {
        let engine = SimulationEngine::new(200).unwrap();
        let queue = vec![98, 183, 37, 122, 14, 124, 65, 67];
        let request = SimulationRequest {
            queue: queue.clone(),
            head: 53,
            direction: Direction::Left,
            policies: PolicyKind::ALL.to_vec(),
        };

        let report = engine.simulate_all(&request).unwrap();
        for kind in PolicyKind::ALL {
            let single = engine.simulate(kind, &queue, 53, Some(Direction::Left)).unwrap();
            assert_eq!(report.get(kind), Some(&single));
        }
    }

    #[test]
    fn test_simulate_all_rejects_invalid_input() {
        let engine = SimulationEngine::new(200).unwrap();
        let request = SimulationRequest {
            queue: vec![10, 500],
            head: 0,
            direction: Direction::Right,
            policies: PolicyKind::ALL.to_vec(),
        };
        assert!(engine.simulate_all(&request).is_err());
    }

    #[test]
    fn test_partition_around_head() {
        let (left, right) = partition_around(&[82, 50, 170, 43], 50, false);
        assert_eq!(left, vec![43]);
        assert_eq!(right, vec![50, 82, 170]);

        let (left, right) = partition_around(&[82, 50, 170, 43], 50, true);
        assert_eq!(left, vec![43, 50]);
        assert_eq!(right, vec![82, 170]);
    }
}

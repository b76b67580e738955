//! diskseek - Disk head scheduling simulator
//!
//! Simulates how a disk arm services a queue of cylinder requests under the
//! classic scheduling policies and reports the cost of each visit order.
//!
//! # Architecture
//!
//! - **Engine**: FCFS, SSTF, SCAN and C-SCAN as pure functions of their input
//! - **Stats**: seek distances, total head movement, average seek time, throughput
//! - **Distributions**: uniform, Zipf and Gaussian generators for random queues
//! - **Config**: CLI flags layered over an optional TOML file
//! - **Output**: text report, JSON, CSV and terminal charts
//!
//! # Example
//!
//! ```
//! use diskseek::engine::{Direction, PolicyKind, SimulationEngine};
//!
//! let engine = SimulationEngine::new(200)?;
//! let result = engine.simulate(PolicyKind::Scan, &[82, 170, 43], 50, Some(Direction::Right))?;
//! assert_eq!(result.sequence(), &[50, 82, 170, 199, 43]);
//! assert_eq!(result.total_movement(), 305);
//! # Ok::<(), diskseek::InvalidInput>(())
//! ```

pub mod config;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod output;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use engine::{SimulationEngine, SimulationRequest};
pub use error::InvalidInput;
pub use stats::{SimulationReport, SimulationResult};

/// Result type used throughout the application layer
pub type Result<T> = anyhow::Result<T>;

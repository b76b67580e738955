//! Engine error type
//!
//! The scheduling engine has exactly one failure mode: the caller handed it
//! input that violates a precondition. Each variant names the violated
//! constraint so the presentation layer can report it without guessing.

use crate::engine::Cylinder;
use thiserror::Error;

/// Precondition violation detected at the engine boundary
///
/// Returned before any policy runs; no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Disk must have at least one cylinder
    #[error("disk size must be greater than 0")]
    NonPositiveDiskSize,

    /// Initial head position lies outside the disk
    #[error("head position {head} is outside the disk (valid range 0..={max})", max = .disk_size.saturating_sub(1))]
    HeadOutOfRange { head: Cylinder, disk_size: Cylinder },

    /// A queued request targets a cylinder outside the disk
    #[error("request #{index} targets cylinder {cylinder}, outside the disk (valid range 0..={max})", max = .disk_size.saturating_sub(1))]
    CylinderOutOfRange {
        index: usize,
        cylinder: Cylinder,
        disk_size: Cylinder,
    },

    /// Policy name outside {FCFS, SSTF, SCAN, C-SCAN}
    #[error("unknown scheduling policy '{0}' (expected one of FCFS, SSTF, SCAN, C-SCAN)")]
    UnknownPolicy(String),

    /// Direction name missing or not one of {right, left}
    #[error("invalid sweep direction '{0}' (expected 'right' or 'left')")]
    UnknownDirection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_identify_constraint() {
        let err = InvalidInput::CylinderOutOfRange {
            index: 2,
            cylinder: 250,
            disk_size: 200,
        };
        assert_eq!(
            err.to_string(),
            "request #2 targets cylinder 250, outside the disk (valid range 0..=199)"
        );

        let err = InvalidInput::HeadOutOfRange { head: 200, disk_size: 200 };
        assert!(err.to_string().contains("head position 200"));

        assert_eq!(
            InvalidInput::UnknownDirection(String::new()).to_string(),
            "invalid sweep direction '' (expected 'right' or 'left')"
        );
    }
}

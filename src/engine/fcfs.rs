//! First-Come-First-Served policy
//!
//! Visits requests strictly in submission order. No reordering and no
//! deduplication, so repeated requests to the same cylinder produce
//! zero-distance stops. This is the baseline the other policies are judged
//! against.

use super::{Cylinder, Direction, PolicyKind, SchedulingPolicy};

/// FCFS policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn visit_order(
        &self,
        queue: &[Cylinder],
        head: Cylinder,
        _disk_size: Cylinder,
        _direction: Direction,
    ) -> Vec<Cylinder> {
        let mut sequence = Vec::with_capacity(queue.len() + 1);
        sequence.push(head);
        sequence.extend_from_slice(queue);
        sequence
    }
}

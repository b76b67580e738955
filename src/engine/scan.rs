//! SCAN (elevator) policy
//!
//! The head sweeps toward one edge of the disk, servicing every request it
//! passes in cylinder order, stops at the edge cylinder itself, then reverses
//! and services the remaining requests on the way back.
//!
//! - `Right`: requests `>= head` ascending, stop at `disk_size - 1`, then
//!   requests `< head` descending.
//! - `Left`: requests `<= head` descending, stop at 0, then requests `> head`
//!   ascending.
//!
//! The edge stop is appended whenever at least one request is pending, even if
//! nothing lies beyond the last request serviced on the first pass. An empty
//! queue leaves the head where it is.

use super::{partition_around, Cylinder, Direction, PolicyKind, SchedulingPolicy};

/// SCAN policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan;

impl SchedulingPolicy for Scan {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Scan
    }

    fn visit_order(
        &self,
        queue: &[Cylinder],
        head: Cylinder,
        disk_size: Cylinder,
        direction: Direction,
    ) -> Vec<Cylinder> {
        let mut sequence = Vec::with_capacity(queue.len() + 2);
        sequence.push(head);
        if queue.is_empty() {
            return sequence;
        }

        match direction {
            Direction::Right => {
                let (below, at_or_above) = partition_around(queue, head, false);
                sequence.extend(at_or_above);
                sequence.push(disk_size - 1);
                sequence.extend(below.into_iter().rev());
            }
            Direction::Left => {
                let (at_or_below, above) = partition_around(queue, head, true);
                sequence.extend(at_or_below.into_iter().rev());
                sequence.push(0);
                sequence.extend(above);
            }
        }

        sequence
    }
}

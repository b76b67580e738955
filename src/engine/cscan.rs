//! Circular SCAN policy
//!
//! Like SCAN, but the return trip services nothing: after the first pass the
//! head jumps to the opposite edge and keeps sweeping in its original
//! direction. The jump is real head travel and counts toward total movement.
//!
//! # Edge stops
//!
//! With `Right`:
//!
//! 1. Service requests `>= head` ascending.
//! 2. Stop at `disk_size - 1` if step 1 serviced anything, or if nothing lies
//!    below the head. When every request is below the head the head wraps
//!    straight from its start position.
//! 3. Stop at 0.
//! 4. Service requests `< head` ascending.
//!
//! `Left` mirrors this (`<= head` descending, 0, `disk_size - 1`, `> head`
//! descending). An empty queue leaves the head where it is.

use super::{partition_around, Cylinder, Direction, PolicyKind, SchedulingPolicy};

/// C-SCAN policy
#[derive(Debug, Clone, Copy, Default)]
pub struct CScan;

impl SchedulingPolicy for CScan {
    fn kind(&self) -> PolicyKind {
        PolicyKind::CScan
    }

    fn visit_order(
        &self,
        queue: &[Cylinder],
        head: Cylinder,
        disk_size: Cylinder,
        direction: Direction,
    ) -> Vec<Cylinder> {
        let mut sequence = Vec::with_capacity(queue.len() + 3);
        sequence.push(head);
        if queue.is_empty() {
            return sequence;
        }

        let last = disk_size - 1;
        match direction {
            Direction::Right => {
                let (below, at_or_above) = partition_around(queue, head, false);
                if !at_or_above.is_empty() || below.is_empty() {
                    sequence.extend(at_or_above);
                    sequence.push(last);
                }
                sequence.push(0);
                sequence.extend(below);
            }
            Direction::Left => {
                let (at_or_below, above) = partition_around(queue, head, true);
                if !at_or_below.is_empty() || above.is_empty() {
                    sequence.extend(at_or_below.into_iter().rev());
                    sequence.push(0);
                }
                sequence.push(last);
                sequence.extend(above.into_iter().rev());
            }
        }

        sequence
    }
}

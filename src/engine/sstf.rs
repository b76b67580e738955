//! Shortest-Seek-Time-First policy
//!
//! At every step the head moves to the pending request closest to its
//! current position. When two requests are equally close the smaller
//! cylinder wins, so the order is the same on every run.
//!
//! # Performance
//!
//! O(n²) in the queue length: each step scans the remaining requests. Queues
//! are dozens to low hundreds of requests, so a linear scan beats keeping a
//! sorted structure in sync.

use super::{Cylinder, Direction, PolicyKind, SchedulingPolicy};

/// SSTF policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl SchedulingPolicy for Sstf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sstf
    }

    fn visit_order(
        &self,
        queue: &[Cylinder],
        head: Cylinder,
        _disk_size: Cylinder,
        _direction: Direction,
    ) -> Vec<Cylinder> {
        let mut remaining = queue.to_vec();
        let mut sequence = Vec::with_capacity(queue.len() + 1);
        sequence.push(head);

        let mut current = head;
        while let Some(index) = nearest(&remaining, current) {
            let next = remaining.swap_remove(index);
            sequence.push(next);
            current = next;
        }

        sequence
    }
}

/// Index of the request nearest to `current`, smaller cylinder on ties
fn nearest(remaining: &[Cylinder], current: Cylinder) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .min_by_key(|&(_, &c)| (c.abs_diff(current), c))
        .map(|(index, _)| index)
}

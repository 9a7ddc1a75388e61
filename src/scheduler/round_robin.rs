//! Quantum-based round-robin scheduling.
//!
//! # Algorithm
//!
//! FIFO ready queue plus an arrival-sorted pending list. Each turn:
//!
//! 1. Admit every pending process whose arrival has been reached to the
//!    back of the queue, preserving arrival order.
//! 2. Queue empty but arrivals pending → the clock jumps to the next
//!    arrival. Queue and pending both empty → the loop exits (guarded
//!    explicitly, not assumed from the loop invariant).
//! 3. Otherwise the head runs `min(remaining, quantum)` ticks, emitting
//!    one timeline slice per quantum slice.
//! 4. An unfinished process goes back to the tail *before* processes
//!    that arrived during its slice are admitted.
//!
//! Wait time is not tracked per slice; it falls out of
//! `turnaround - burst` at completion.

use std::collections::VecDeque;

use crate::models::{Process, ProcessMetrics, SimProcess, TimeSlice, Timeline};
use crate::policies::{ArrivalOrder, OrderingPolicy};

/// Runs round-robin with the given quantum.
///
/// A quantum below 1 is treated as 1.
pub(crate) fn run(processes: &[Process], quantum: i64) -> (Timeline, Vec<ProcessMetrics>) {
    let quantum = quantum.max(1);
    let mut timeline = Timeline::new();
    let mut metrics = Vec::with_capacity(processes.len());

    let mut pending: Vec<SimProcess> = processes.iter().map(SimProcess::from).collect();
    pending.sort_by(|a, b| ArrivalOrder.compare(a, b));

    let mut queue: VecDeque<SimProcess> = VecDeque::new();
    let mut next = 0usize;
    let mut clock: i64 = 0;

    while !queue.is_empty() || next < pending.len() {
        while next < pending.len() && pending[next].arrival <= clock {
            queue.push_back(pending[next]);
            next += 1;
        }

        let Some(mut p) = queue.pop_front() else {
            if next < pending.len() {
                // Idle skip to the next arrival.
                clock = pending[next].arrival;
                continue;
            }
            break;
        };

        let slice = p.remaining.min(quantum);
        timeline.push(TimeSlice::new(p.id, clock, clock + slice));
        clock += slice;
        p.remaining -= slice;

        if p.is_finished() {
            metrics.push(ProcessMetrics::at_completion(
                p.id, p.priority, p.burst, p.arrival, clock,
            ));
        } else {
            queue.push_back(p);
        }
    }

    (timeline, metrics)
}

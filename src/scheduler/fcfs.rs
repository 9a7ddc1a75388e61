//! Non-preemptive first-come-first-served scheduling.
//!
//! # Algorithm
//!
//! 1. Take processes strictly in input order (callers pre-sort by
//!    arrival; the engine does not re-sort).
//! 2. Each process runs its full burst on a service clock that
//!    accumulates bursts; `wait = max(0, clock - arrival)` is recomputed
//!    every iteration.
//! 3. On an idle gap the clock advances to the arrival, so slices stay
//!    well-formed and work is conserved.
//!
//! The historical engine only updated wait when `arrival > 0`, carrying
//! the previous process's wait over to later zero-arrival processes.
//! That is a defect, not semantics; the corrected rule above replaces it
//! (see `idle_gap_recomputes_wait` and `wait_recomputed_for_zero_arrival`).
//!
//! # Complexity
//! O(n) over the process count.

use crate::models::{Process, ProcessMetrics, TimeSlice, Timeline};

/// Runs FCFS over processes in input order.
///
/// Returns one timeline slice per process and one metrics row per
/// process, in input order.
pub(crate) fn run(processes: &[Process]) -> (Timeline, Vec<ProcessMetrics>) {
    let mut timeline = Timeline::new();
    let mut metrics = Vec::with_capacity(processes.len());
    let mut clock: i64 = 0;

    for p in processes {
        // start = wait + arrival with wait = max(0, clock - arrival).
        let start = clock.max(p.arrival);
        clock = start + p.burst;

        timeline.push(TimeSlice::new(p.id, start, clock));
        metrics.push(ProcessMetrics::at_completion(
            p.id, p.priority, p.burst, p.arrival, clock,
        ));
    }

    (timeline, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_process_trace() {
        // Arrival-sorted input: (1, arr 0, burst 5), (2, arr 1, burst 3).
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let (timeline, metrics) = run(&processes);

        assert_eq!(metrics[0].wait, 0);
        assert_eq!(metrics[0].completion, 5);
        assert_eq!(metrics[1].wait, 4);
        assert_eq!(metrics[1].turnaround, 7);
        assert_eq!(metrics[1].completion, 8);

        assert_eq!(timeline.slices[0], TimeSlice::new(1, 0, 5));
        assert_eq!(timeline.slices[1], TimeSlice::new(2, 5, 8));
    }

    #[test]
    fn test_input_order_is_execution_order() {
        // Not arrival-sorted on purpose: FCFS must not re-sort.
        let processes = vec![Process::new(2, 3, 2), Process::new(1, 0, 4)];
        let (timeline, _) = run(&processes);
        assert_eq!(timeline.slices[0].pid, 2);
        assert_eq!(timeline.slices[1].pid, 1);
    }

    #[test]
    fn test_wait_recomputed_for_zero_arrival() {
        // Historical defect: the second zero-arrival process would reuse
        // the first's wait (0) instead of the accumulated service time.
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        let (_, metrics) = run(&processes);
        assert_eq!(metrics[1].wait, 5);
        assert_eq!(metrics[1].completion, 8);
    }

    #[test]
    fn test_idle_gap_recomputes_wait() {
        // Process 2 arrives after process 1 finished: wait is 0, not a
        // stale carry-over, and its slice starts at its arrival.
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 10, 3)];
        let (timeline, metrics) = run(&processes);
        assert_eq!(metrics[1].wait, 0);
        assert_eq!(metrics[1].completion, 13);
        assert_eq!(timeline.slices[1], TimeSlice::new(2, 10, 13));
    }

    #[test]
    fn test_conservation_of_work() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 7),
        ];
        let (timeline, _) = run(&processes);
        for p in &processes {
            assert_eq!(timeline.busy_ticks(p.id), p.burst);
        }
    }

    #[test]
    fn test_empty_input() {
        let (timeline, metrics) = run(&[]);
        assert!(timeline.is_empty());
        assert!(metrics.is_empty());
    }
}

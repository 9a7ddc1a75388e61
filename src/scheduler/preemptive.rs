//! Generic preemptive tick-stepped engine.
//!
//! One discrete-clock state machine shared by SRTF and preemptive
//! priority scheduling; the injected [`OrderingPolicy`] is the only
//! difference between the two.
//!
//! # Algorithm
//!
//! Two sets: *pending* (not yet arrived, sorted once by arrival) and
//! *ready* (eligible, head ordered by the policy). Each tick:
//!
//! 1. decrement the running head's remaining time,
//! 2. check completion (completion is observed before same-tick
//!    arrivals; the order matters for correctness),
//! 3. admit every pending process whose arrival has been reached, then
//!    re-resolve the head via the policy.
//!
//! A stable sort keeps the incumbent ahead of an equal-keyed arrival, so
//! preemption requires a strictly smaller key. When the ready set drains
//! while processes are still pending, the clock fast-forwards to the
//! next arrival.
//!
//! # Complexity
//! O(total_burst * n log n) worst case; workloads here are small.

use crate::models::{Process, ProcessMetrics, SimProcess, TimeSlice, Timeline};
use crate::policies::{ArrivalOrder, OrderingPolicy};

/// Runs the preemptive engine under the given policy.
///
/// Timeline slices fragment wherever the running process changes;
/// metrics rows are emitted in completion order.
pub(crate) fn run(
    processes: &[Process],
    policy: &dyn OrderingPolicy,
) -> (Timeline, Vec<ProcessMetrics>) {
    let mut timeline = Timeline::new();
    let mut metrics = Vec::with_capacity(processes.len());
    if processes.is_empty() {
        return (timeline, metrics);
    }

    let mut pending: Vec<SimProcess> = processes.iter().map(SimProcess::from).collect();
    pending.sort_by(|a, b| ArrivalOrder.compare(a, b));

    let mut ready: Vec<SimProcess> = Vec::new();
    let mut clock = pending[0].arrival;
    admit_arrived(&mut pending, &mut ready, clock);
    ready.sort_by(|a, b| policy.compare(a, b));

    // Open slice for the currently running process, if any.
    let mut slice_pid: Option<i64> = None;
    let mut slice_start = clock;

    while !ready.is_empty() || !pending.is_empty() {
        if ready.is_empty() {
            // Idle gap: nothing eligible until the next arrival.
            clock = pending[0].arrival;
            admit_arrived(&mut pending, &mut ready, clock);
            ready.sort_by(|a, b| policy.compare(a, b));
            continue;
        }

        let head_id = ready[0].id;
        if slice_pid != Some(head_id) {
            if let Some(pid) = slice_pid {
                timeline.push(TimeSlice::new(pid, slice_start, clock));
            }
            slice_pid = Some(head_id);
            slice_start = clock;
        }

        ready[0].remaining -= 1;
        clock += 1;

        if ready[0].is_finished() {
            let done = ready.remove(0);
            timeline.push(TimeSlice::new(done.id, slice_start, clock));
            slice_pid = None;
            metrics.push(ProcessMetrics::at_completion(
                done.id,
                done.priority,
                done.burst,
                done.arrival,
                clock,
            ));
        }

        if admit_arrived(&mut pending, &mut ready, clock) {
            // Stable sort: an equal-keyed arrival never displaces the
            // incumbent head.
            ready.sort_by(|a, b| policy.compare(a, b));
        }
    }

    (timeline, metrics)
}

/// Moves every pending process with `arrival <= clock` into the ready
/// set. Returns whether anything was admitted.
fn admit_arrived(pending: &mut Vec<SimProcess>, ready: &mut Vec<SimProcess>, clock: i64) -> bool {
    let arrived = pending.iter().take_while(|p| p.arrival <= clock).count();
    if arrived == 0 {
        return false;
    }
    ready.extend(pending.drain(..arrived));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{PriorityOrder, RemainingOrder};

    fn srtf(processes: &[Process]) -> (Timeline, Vec<ProcessMetrics>) {
        run(processes, &RemainingOrder)
    }

    #[test]
    fn test_srtf_textbook_trace() {
        // Classic four-process SRTF example.
        let processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
            Process::new(4, 3, 5),
        ];
        let (timeline, metrics) = srtf(&processes);

        let completion = |pid| {
            metrics
                .iter()
                .find(|m| m.pid == pid)
                .map(|m| m.completion)
                .unwrap()
        };
        assert_eq!(completion(2), 5);
        assert_eq!(completion(4), 10);
        assert_eq!(completion(1), 17);
        assert_eq!(completion(3), 26);

        // Process 1 is preempted at tick 1 in favor of process 2.
        assert_eq!(timeline.slices[0], TimeSlice::new(1, 0, 1));
        assert_eq!(timeline.slices[1], TimeSlice::new(2, 1, 5));

        // Conservation of work across fragments.
        for p in &processes {
            assert_eq!(timeline.busy_ticks(p.id), p.burst);
        }
    }

    #[test]
    fn test_srtf_metric_identities() {
        let processes = vec![
            Process::new(1, 0, 8),
            Process::new(2, 1, 4),
            Process::new(3, 2, 9),
            Process::new(4, 3, 5),
        ];
        let (_, metrics) = srtf(&processes);
        for m in &metrics {
            assert_eq!(m.turnaround, m.completion - m.arrival);
            assert_eq!(m.wait, m.turnaround - m.burst);
            assert!(m.wait >= 0);
        }
        // Metrics come out in completion order.
        assert_eq!(
            metrics.iter().map(|m| m.pid).collect::<Vec<_>>(),
            vec![2, 4, 1, 3]
        );
    }

    #[test]
    fn test_priority_preempts_on_arrival() {
        // Lower value = higher priority: process 2 preempts at tick 1.
        let processes = vec![
            Process::new(1, 0, 4).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
        ];
        let (timeline, metrics) = run(&processes, &PriorityOrder);

        assert_eq!(timeline.slices[0], TimeSlice::new(1, 0, 1));
        assert_eq!(timeline.slices[1], TimeSlice::new(2, 1, 4));
        assert_eq!(timeline.slices[2], TimeSlice::new(1, 4, 7));

        let p1 = metrics.iter().find(|m| m.pid == 1).unwrap();
        assert_eq!(p1.completion, 7);
        assert_eq!(p1.wait, 3);
    }

    #[test]
    fn test_equal_key_arrival_does_not_preempt() {
        // At tick 2 both have remaining 2, but the incumbent arrived
        // earlier and keeps the CPU.
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 2, 2)];
        let (timeline, _) = srtf(&processes);
        assert_eq!(timeline.slices[0], TimeSlice::new(1, 0, 4));
        assert_eq!(timeline.slices[1], TimeSlice::new(2, 4, 6));
    }

    #[test]
    fn test_completion_checked_before_same_tick_arrival() {
        // Process 1 finishes exactly when process 2 arrives; the
        // completion lands at tick 2 and process 2 starts fresh.
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 2, 1)];
        let (timeline, metrics) = srtf(&processes);
        assert_eq!(metrics[0].pid, 1);
        assert_eq!(metrics[0].completion, 2);
        assert_eq!(timeline.slices[1], TimeSlice::new(2, 2, 3));
    }

    #[test]
    fn test_idle_gap_fast_forwards() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 10, 3)];
        let (timeline, metrics) = srtf(&processes);
        assert_eq!(timeline.slices[1], TimeSlice::new(2, 10, 13));
        let p2 = metrics.iter().find(|m| m.pid == 2).unwrap();
        assert_eq!(p2.wait, 0);
    }

    #[test]
    fn test_late_first_arrival() {
        // Clock starts at the earliest arrival, never before it.
        let processes = vec![Process::new(1, 5, 3)];
        let (timeline, metrics) = srtf(&processes);
        assert_eq!(timeline.slices[0], TimeSlice::new(1, 5, 8));
        assert_eq!(metrics[0].wait, 0);
    }

    #[test]
    fn test_simultaneous_arrivals_all_admitted() {
        // Three processes arriving together; SRTF runs them shortest
        // first and none is lost.
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 2),
            Process::new(3, 0, 3),
        ];
        let (_, metrics) = srtf(&processes);
        assert_eq!(metrics.len(), 3);
        assert_eq!(
            metrics.iter().map(|m| m.pid).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );
        assert_eq!(metrics.last().unwrap().completion, 10);
    }

    #[test]
    fn test_empty_input() {
        let (timeline, metrics) = srtf(&[]);
        assert!(timeline.is_empty());
        assert!(metrics.is_empty());
    }
}

//! Execution timeline model.
//!
//! A timeline records which process held the CPU during which interval —
//! the data behind a Gantt chart. Non-preemptive algorithms produce one
//! slice per process; preemptive and quantum-based algorithms fragment a
//! process into several slices.

use serde::{Deserialize, Serialize};

/// One contiguous interval of CPU time granted to a process.
///
/// Half-open `[start, stop)` with `start < stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that held the CPU.
    pub pid: i64,
    /// First tick of the interval.
    pub start: i64,
    /// First tick after the interval.
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a slice.
    pub fn new(pid: i64, start: i64, stop: i64) -> Self {
        Self { pid, start, stop }
    }

    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// An ordered sequence of [`TimeSlice`]s describing a full run.
///
/// Slices are ordered by `start` non-decreasing and are pairwise
/// non-overlapping (a single CPU).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution intervals in chronological order.
    pub slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: TimeSlice) {
        self.slices.push(slice);
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// All slices granted to one process, in order.
    pub fn slices_for(&self, pid: i64) -> Vec<&TimeSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Total ticks a process spent on the CPU.
    ///
    /// Equals the process's burst once a run completes (conservation of
    /// work).
    pub fn busy_ticks(&self, pid: i64) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.pid == pid)
            .map(TimeSlice::duration)
            .sum()
    }

    /// Last tick covered by any slice (0 for an empty timeline).
    pub fn span_end(&self) -> i64 {
        self.slices.iter().map(|s| s.stop).max().unwrap_or(0)
    }
}

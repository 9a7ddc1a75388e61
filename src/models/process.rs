//! Process model.
//!
//! A process is the unit of work fed to the scheduling engine: a fixed
//! CPU demand (burst) that becomes eligible at a known arrival tick.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process descriptor (immutable simulation input).
///
/// Describes one process of a fully-known workload. The engine never
/// mutates descriptors; each algorithm run works on its own
/// [`SimProcess`] copies.
///
/// # Time Representation
/// All times are integer simulation ticks relative to t=0. The consumer
/// defines what one tick means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (positive).
    pub id: i64,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU ticks required to complete.
    pub burst: i64,
    /// Scheduling priority (lower = more urgent). 0 when the workload
    /// carries no priority column.
    pub priority: i64,
}

impl Process {
    /// Creates a process with the given id, arrival tick, and burst.
    ///
    /// Priority defaults to 0 (the "no priority supplied" sentinel).
    pub fn new(id: i64, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// A per-run working copy of a [`Process`].
///
/// Adds the mutable `remaining` counter the preemptive engines decrement
/// tick by tick. Invariant: `0 <= remaining <= burst`. Created fresh for
/// every algorithm run so concurrent runs over the same descriptors never
/// alias mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimProcess {
    /// Descriptor id.
    pub id: i64,
    /// Original arrival tick.
    pub arrival: i64,
    /// Original burst duration.
    pub burst: i64,
    /// Original priority.
    pub priority: i64,
    /// Ticks of burst left to execute.
    pub remaining: i64,
}

impl From<&Process> for SimProcess {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id,
            arrival: p.arrival,
            burst: p.burst,
            priority: p.priority,
            remaining: p.burst,
        }
    }
}

impl SimProcess {
    /// Whether the process has executed its full burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

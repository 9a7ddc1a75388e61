//! Scheduling engine.
//!
//! Four classical disciplines behind one entry point, [`simulate`]:
//! non-preemptive FCFS, preemptive shortest-remaining-time (SRTF),
//! preemptive priority, and quantum-based round-robin. The algorithm set
//! is closed — a caller picks a variant of [`Algorithm`], never wires
//! loops together.
//!
//! SRTF and priority share one generic tick-stepped engine
//! (`preemptive`) parameterized by an ordering policy; only the
//! comparator differs.
//!
//! The engine is stateless between invocations: each run copies the
//! descriptors into its own working set, so running several algorithms
//! over the same workload for comparison never aliases mutable state.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod preemptive;
mod round_robin;

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessMetrics, RunKpi, Timeline};
use crate::policies::{PriorityOrder, RemainingOrder};
use crate::validation::{validate_processes, ValidationError};

/// Round-robin quantum used by [`Algorithm::round_robin`].
pub const DEFAULT_QUANTUM: i64 = 2;

/// The closed set of scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Non-preemptive first-come-first-served. Input order is execution
    /// order; callers pre-sort by arrival.
    Fcfs,
    /// Preemptive shortest-remaining-time-first (SRTF).
    ShortestRemaining,
    /// Preemptive priority (lower value = more urgent).
    PreemptivePriority,
    /// Round-robin with a fixed quantum (ticks).
    RoundRobin {
        /// Maximum ticks a process runs before being preempted.
        quantum: i64,
    },
}

impl Algorithm {
    /// Round-robin with the default quantum.
    pub fn round_robin() -> Self {
        Self::RoundRobin {
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::ShortestRemaining => "SRTF",
            Self::PreemptivePriority => "PRIORITY",
            Self::RoundRobin { .. } => "RR",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete output of one algorithm run.
///
/// Per-process rows are sorted by pid ascending regardless of the order
/// the algorithm completed them in, so results compare across
/// algorithms row by row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// The discipline that produced this result.
    pub algorithm: Algorithm,
    /// Execution intervals in chronological order.
    pub timeline: Timeline,
    /// Per-process timing rows, pid ascending.
    pub processes: Vec<ProcessMetrics>,
    /// Aggregate indicators.
    pub kpi: RunKpi,
}

/// Simulates one scheduling discipline over a workload.
///
/// Validates the input contract first; on violation no partial output is
/// produced. An empty workload is not an error and yields an empty
/// result with all-zero KPIs.
///
/// # Example
///
/// ```
/// use cpu_sched::{simulate, Algorithm, Process};
///
/// let workload = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let result = simulate(Algorithm::Fcfs, &workload).unwrap();
/// assert_eq!(result.processes[0].completion, 5);
/// assert_eq!(result.timeline.busy_ticks(2), 3);
/// ```
pub fn simulate(
    algorithm: Algorithm,
    processes: &[Process],
) -> Result<ScheduleResult, Vec<ValidationError>> {
    validate_processes(processes)?;

    let (timeline, mut rows) = match algorithm {
        Algorithm::Fcfs => fcfs::run(processes),
        Algorithm::ShortestRemaining => preemptive::run(processes, &RemainingOrder),
        Algorithm::PreemptivePriority => preemptive::run(processes, &PriorityOrder),
        Algorithm::RoundRobin { quantum } => round_robin::run(processes, quantum),
    };
    rows.sort_by_key(|m| m.pid);
    let kpi = RunKpi::calculate(&rows);

    Ok(ScheduleResult {
        algorithm,
        timeline,
        processes: rows,
        kpi,
    })
}

//! Timing metrics.
//!
//! Per-process timing derived from a completed run, plus the aggregate
//! indicators shared by every algorithm.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Tick at which the process finished |
//! | Turnaround | completion - arrival |
//! | Wait | turnaround - burst |
//! | Avg Wait / Turnaround | Arithmetic mean over all processes |
//! | Throughput | process count / latest completion |

use serde::{Deserialize, Serialize};

/// Timing record for one completed process.
///
/// Invariants: `turnaround = completion - arrival` and
/// `wait = turnaround - burst`, both non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process id.
    pub pid: i64,
    /// Priority as supplied in the input.
    pub priority: i64,
    /// Original burst duration.
    pub burst: i64,
    /// Original arrival tick.
    pub arrival: i64,
    /// Ticks spent eligible but not running.
    pub wait: i64,
    /// Ticks from arrival to completion.
    pub turnaround: i64,
    /// Tick at which the process finished.
    pub completion: i64,
}

impl ProcessMetrics {
    /// Derives the record for a process completing at `completion`.
    ///
    /// Applies the turnaround/wait identities; callers supply only the
    /// completion tick and the original descriptor fields.
    pub fn at_completion(
        pid: i64,
        priority: i64,
        burst: i64,
        arrival: i64,
        completion: i64,
    ) -> Self {
        let turnaround = completion - arrival;
        Self {
            pid,
            priority,
            burst,
            arrival,
            wait: turnaround - burst,
            turnaround,
            completion,
        }
    }
}

/// Aggregate indicators for one algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// Mean wait across all processes.
    pub avg_wait: f64,
    /// Mean turnaround across all processes.
    pub avg_turnaround: f64,
    /// Completed processes per tick: count / latest completion.
    pub throughput: f64,
}

impl RunKpi {
    /// Computes aggregates from per-process records.
    ///
    /// An empty slice yields all-zero KPIs (never NaN): the empty-input
    /// contract defines the averages as 0.
    pub fn calculate(processes: &[ProcessMetrics]) -> Self {
        if processes.is_empty() {
            return Self {
                avg_wait: 0.0,
                avg_turnaround: 0.0,
                throughput: 0.0,
            };
        }

        let count = processes.len() as f64;
        let total_wait: i64 = processes.iter().map(|m| m.wait).sum();
        let total_turnaround: i64 = processes.iter().map(|m| m.turnaround).sum();
        let last_completion = processes.iter().map(|m| m.completion).max().unwrap_or(0);

        let throughput = if last_completion > 0 {
            count / last_completion as f64
        } else {
            0.0
        };

        Self {
            avg_wait: total_wait as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
            throughput,
        }
    }
}

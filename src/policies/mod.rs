//! Ordering policies for picking the next process to run.
//!
//! Each policy is a pure comparator over [`SimProcess`] — a total order
//! with an explicit tie-break chain, so every "who runs next" decision is
//! deterministic regardless of input order. No policy mutates a process.
//!
//! # Policies
//!
//! - [`ArrivalOrder`]: arrival asc, then burst asc (FCFS-style admission).
//! - [`RemainingOrder`]: remaining asc, then arrival asc (SRTF).
//! - [`PriorityOrder`]: priority asc, then burst asc, then arrival asc.
//!
//! # Convention
//! `Ordering::Less` means the first process must run before the second.
//! Comparators are exact integer chains, not floating-point scores: ties
//! must break the same way on every run.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::SimProcess;

/// A total order over simulation processes.
///
/// `compare` returning [`Ordering::Less`] means `a` runs before `b`.
pub trait OrderingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "ARRIVAL", "REMAINING").
    fn name(&self) -> &'static str;

    /// Compares two processes under this policy.
    fn compare(&self, a: &SimProcess, b: &SimProcess) -> Ordering;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Arrival order: arrival tick ascending, burst ascending on ties.
///
/// Used to order the not-yet-arrived (pending) set in every algorithm.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl OrderingPolicy for ArrivalOrder {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn compare(&self, a: &SimProcess, b: &SimProcess) -> Ordering {
        a.arrival
            .cmp(&b.arrival)
            .then(a.burst.cmp(&b.burst))
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival First"
    }
}

/// Remaining-time order: remaining ticks ascending, arrival ascending on
/// ties. The SRTF ready-set order.
#[derive(Debug, Clone, Copy)]
pub struct RemainingOrder;

impl OrderingPolicy for RemainingOrder {
    fn name(&self) -> &'static str {
        "REMAINING"
    }

    fn compare(&self, a: &SimProcess, b: &SimProcess) -> Ordering {
        a.remaining
            .cmp(&b.remaining)
            .then(a.arrival.cmp(&b.arrival))
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Priority order: priority ascending (lower = more urgent), then burst
/// ascending, then arrival ascending.
#[derive(Debug, Clone, Copy)]
pub struct PriorityOrder;

impl OrderingPolicy for PriorityOrder {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn compare(&self, a: &SimProcess, b: &SimProcess) -> Ordering {
        a.priority
            .cmp(&b.priority)
            .then(a.burst.cmp(&b.burst))
            .then(a.arrival.cmp(&b.arrival))
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}

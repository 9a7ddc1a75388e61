//! Offline CPU-scheduling simulator.
//!
//! Simulates classical scheduling disciplines over a fixed, fully-known
//! workload and reports per-process timing plus an execution timeline.
//! There is no real concurrency: all arrivals are known up front and a
//! plain integer clock advances deterministically, so every run is
//! exactly reproducible.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `SimProcess`, `TimeSlice`,
//!   `Timeline`, `ProcessMetrics`, `RunKpi`
//! - **`policies`**: Ordering policies (total orders with deterministic
//!   tie-break chains) used to pick the next process to run
//! - **`scheduler`**: The four disciplines — FCFS, SRTF, preemptive
//!   priority, round-robin — behind the [`simulate`] entry point
//! - **`validation`**: Input-contract checks (positive bursts,
//!   non-negative arrivals)
//!
//! # Boundary
//!
//! The crate consumes an ordered sequence of process descriptors and
//! produces timing results; parsing workload files and rendering tables
//! or Gantt charts belong to the caller.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod policies;
pub mod scheduler;
pub mod validation;

pub use models::{Process, ProcessMetrics, RunKpi, TimeSlice, Timeline};
pub use scheduler::{simulate, Algorithm, ScheduleResult, DEFAULT_QUANTUM};
pub use validation::{ValidationError, ValidationErrorKind};

//! Simulation domain models.
//!
//! Core data types for the CPU-scheduling simulator: the immutable input
//! descriptors, the per-run working copies, and the timing output the
//! engine hands to external reporting.
//!
//! # Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | [`Process`] |
//! | Working state | [`SimProcess`] |
//! | Output | [`Timeline`], [`ProcessMetrics`], [`RunKpi`] |

mod metrics;
mod process;
mod timeline;

pub use metrics::{ProcessMetrics, RunKpi};
pub use process::{Process, SimProcess};
pub use timeline::{TimeSlice, Timeline};

//! Input validation for simulation workloads.
//!
//! Checks the input contract before any algorithm runs. Violations are
//! all collected and reported together; the engine produces either a
//! complete result or an error, never partial output.
//!
//! Checked:
//! - Burst duration must be positive (a zero burst cannot be scheduled).
//! - Arrival tick must be non-negative.
//!
//! Id uniqueness is deliberately not checked: the engine is agnostic to
//! duplicate ids and callers own that contract.

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error, naming the offending process and field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process id.
    pub pid: i64,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Burst duration is zero or negative.
    NonPositiveBurst,
    /// Arrival tick is negative.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, pid: i64, message: impl Into<String>) -> Self {
        Self {
            kind,
            pid,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "process {}: {}", self.pid, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a workload against the input contract.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
/// An empty workload passes (it yields an empty result, not an error).
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    for p in processes {
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                p.id,
                format!("burst duration must be positive, got {}", p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.id,
                format!("arrival tick must be non-negative, got {}", p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! # tagkeeper-observability
//!
//! Subscriber installation, span macros for each evaluation stage, and
//! thread-safe outcome counters for health summaries.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{EvaluationOutcome, EvaluationStats, StatsSnapshot};
pub use tracing_setup::init_tracing;

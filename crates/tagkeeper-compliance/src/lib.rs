//! # tagkeeper-compliance
//!
//! Decides whether a resource's observed tags agree with its catalog record,
//! remediates when they don't, and reports the verdict.
//!
//! ## Evaluation order
//! 1. **Lookup**: fetch the catalog record for the observed `ObjectId`
//! 2. **Evaluate**: completeness of the observed tags, then agreement with the catalog
//! 3. **Remediate**: re-apply the catalog tag set when either check fails
//! 4. **Report**: exactly one verdict per evaluation
//!
//! A catalog miss or lookup error short-circuits to a NON_COMPLIANT report
//! without remediation.

pub mod decision;
pub mod engine;
pub mod matcher;
pub mod phase;

pub use decision::{decide, Decision, RemediationReason};
pub use engine::ComplianceEngine;
pub use matcher::{is_well_formed, matches, TagPolicy};
pub use phase::{EvaluationPhase, PhaseTrace};

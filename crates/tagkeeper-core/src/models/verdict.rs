use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Compliance code understood by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceType {
    Compliant,
    NonCompliant,
}

impl ComplianceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "COMPLIANT",
            Self::NonCompliant => "NON_COMPLIANT",
        }
    }
}

impl fmt::Display for ComplianceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPLIANT" => Ok(Self::Compliant),
            "NON_COMPLIANT" => Ok(Self::NonCompliant),
            other => Err(format!("unknown compliance type '{other}'")),
        }
    }
}

/// Compliance outcome plus a human-readable annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub compliance: ComplianceType,
    pub annotation: String,
}

impl Verdict {
    pub fn compliant(annotation: impl Into<String>) -> Self {
        Self {
            compliance: ComplianceType::Compliant,
            annotation: annotation.into(),
        }
    }

    pub fn non_compliant(annotation: impl Into<String>) -> Self {
        Self {
            compliance: ComplianceType::NonCompliant,
            annotation: annotation.into(),
        }
    }

    pub fn is_compliant(&self) -> bool {
        self.compliance == ComplianceType::Compliant
    }
}

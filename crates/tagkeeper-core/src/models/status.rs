use std::fmt;

use crate::constants::STATUS_CONFORMANT;

/// Terminal status of an evaluation that did not end in an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationStatus {
    /// A COMPLIANT verdict was reported.
    Conformant,
    /// The catalog had no record; a NON_COMPLIANT verdict was reported and
    /// the lookup itself produced no error.
    Unresolved,
}

impl InvocationStatus {
    /// Status string handed back to the invoking framework.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conformant => STATUS_CONFORMANT,
            Self::Unresolved => "",
        }
    }
}

impl fmt::Display for InvocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

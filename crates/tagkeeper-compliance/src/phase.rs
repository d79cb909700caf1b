//! Forward-only evaluation state machine.

use std::fmt;

/// Stages of one evaluation, in the only order they may be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvaluationPhase {
    LookupPending,
    Evaluating,
    Remediating,
    Reporting,
    Done,
}

impl fmt::Display for EvaluationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LookupPending => "lookup_pending",
            Self::Evaluating => "evaluating",
            Self::Remediating => "remediating",
            Self::Reporting => "reporting",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Records the phases an evaluation passed through.
///
/// Transitions only move forward; a stage may be skipped but never revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTrace {
    visited: Vec<EvaluationPhase>,
}

impl Default for PhaseTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseTrace {
    pub fn new() -> Self {
        Self {
            visited: vec![EvaluationPhase::LookupPending],
        }
    }

    pub fn current(&self) -> EvaluationPhase {
        // `visited` is never empty.
        self.visited
            .last()
            .copied()
            .unwrap_or(EvaluationPhase::LookupPending)
    }

    /// Move to `next`. Backward or repeated transitions are refused and return false.
    pub fn advance(&mut self, next: EvaluationPhase) -> bool {
        let current = self.current();
        if next <= current {
            tracing::error!(%current, %next, "refused backward phase transition");
            return false;
        }
        tracing::debug!(from = %current, to = %next, "phase transition");
        self.visited.push(next);
        true
    }

    /// Enter `Done` unless already there.
    pub fn finish(&mut self) {
        if self.current() != EvaluationPhase::Done {
            self.advance(EvaluationPhase::Done);
        }
    }

    pub fn is_done(&self) -> bool {
        self.current() == EvaluationPhase::Done
    }

    pub fn visited(&self) -> &[EvaluationPhase] {
        &self.visited
    }

    pub fn contains(&self, phase: EvaluationPhase) -> bool {
        self.visited.contains(&phase)
    }
}

use std::fmt::Display;

use prlabel_models::{LabelOperation, PullRequestFacts};

/// Why a pull request was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Pull request is a draft.
    Draft,
    /// Triggering action is not handled.
    UnsupportedAction,
    /// Repository is not in the managed list.
    UnmanagedRepository,
}

impl SkipReason {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Draft => "draft pull request",
            Self::UnsupportedAction => "unsupported action",
            Self::UnmanagedRepository => "unmanaged repository",
        }
    }
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Result of a label evaluation, before any mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEvaluation {
    Skipped(SkipReason),
    Planned {
        facts: PullRequestFacts,
        operations: Vec<LabelOperation>,
    },
}

/// Applied label mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Labels added.
    pub added: Vec<String>,
    /// Labels removed.
    pub removed: Vec<String>,
    /// Labels which could not be removed.
    pub failed_removals: Vec<String>,
}

impl ApplyReport {
    /// Nothing was attempted.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.failed_removals.is_empty()
    }
}

impl Display for ApplyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_noop() {
            return f.write_str("Labels already in sync.");
        }

        for label in &self.added {
            writeln!(f, "+ {label}")?;
        }
        for label in &self.removed {
            writeln!(f, "- {label}")?;
        }
        for label in &self.failed_removals {
            writeln!(f, "! {label} (removal failed)")?;
        }

        Ok(())
    }
}

/// Result of a label reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Skipped(SkipReason),
    Applied(ApplyReport),
}

impl From<SkipReason> for ReconcileOutcome {
    fn from(reason: SkipReason) -> Self {
        Self::Skipped(reason)
    }
}

use std::collections::BTreeSet;

use crate::{PullRequestAction, TargetBranch};

/// Facts about a pull request, derived once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestFacts {
    /// Pull request number.
    pub number: u64,
    /// PR is in draft?
    pub is_draft: bool,
    /// Triggering action, `None` when unsupported.
    pub action: Option<PullRequestAction>,
    /// Base branch.
    pub base_branch: String,
    /// Head branch.
    pub head_branch: String,
    /// Lowercased title.
    pub title_lower: String,
    /// Diff contains the changeset marker?
    pub has_changeset: bool,
    /// Active approvals.
    pub approval_count: usize,
    /// Approvals needed to be approved.
    pub needed_approvals: usize,
    /// At least one active review requests changes?
    pub changes_requested_present: bool,
    /// Title flags a hotfix?
    pub is_hotfix: bool,
    /// Release routing.
    pub target_branch: Option<TargetBranch>,
    /// Labels attached at invocation time.
    pub current_labels: BTreeSet<String>,
}

impl Default for PullRequestFacts {
    fn default() -> Self {
        Self {
            number: 0,
            is_draft: false,
            action: None,
            base_branch: String::new(),
            head_branch: String::new(),
            title_lower: String::new(),
            has_changeset: false,
            approval_count: 0,
            needed_approvals: 2,
            changes_requested_present: false,
            is_hotfix: false,
            target_branch: None,
            current_labels: BTreeSet::new(),
        }
    }
}

impl PullRequestFacts {
    /// Enough approvals.
    pub fn is_approved(&self) -> bool {
        self.approval_count >= self.needed_approvals.max(1)
    }

    /// Some approvals, but not enough.
    pub fn needs_additional_approval(&self) -> bool {
        self.approval_count > 0 && !self.is_approved()
    }

    /// No approval yet.
    pub fn is_ready_for_review(&self) -> bool {
        self.approval_count == 0
    }
}

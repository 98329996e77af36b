use prlabel_config::PolicyConfig;
use prlabel_ghapi_interface::types::GhPullRequest;
use prlabel_models::{ActiveReviews, PullRequestAction, PullRequestFacts, TargetBranch};

/// Derives pull request facts from upstream data and policy options.
pub struct FactsDeriver<'a> {
    policy: &'a PolicyConfig,
}

impl<'a> FactsDeriver<'a> {
    pub fn new(policy: &'a PolicyConfig) -> Self {
        Self { policy }
    }

    /// Build the facts snapshot for one invocation.
    pub fn derive(
        &self,
        upstream_pr: &GhPullRequest,
        action: Option<PullRequestAction>,
        diff: &str,
        reviews: &ActiveReviews,
    ) -> PullRequestFacts {
        let base_branch = upstream_pr.base.reference.clone();
        let head_branch = upstream_pr.head.reference.clone();
        let title_lower = upstream_pr.title.to_lowercase();

        PullRequestFacts {
            number: upstream_pr.number,
            is_draft: upstream_pr.draft,
            action,
            target_branch: self.target_branch(&base_branch, &head_branch),
            base_branch,
            head_branch,
            is_hotfix: self.is_hotfix(&title_lower),
            title_lower,
            has_changeset: self.has_changeset(upstream_pr.number, diff),
            approval_count: reviews.approval_count(),
            needed_approvals: self.policy.needed_approvals,
            changes_requested_present: reviews.changes_requested_present(),
            current_labels: upstream_pr.label_names().map(ToOwned::to_owned).collect(),
        }
    }

    /// Exact, case-sensitive search of the changeset marker in the diff.
    ///
    /// `pr-1` also matches a diff mentioning `pr-10`.
    pub fn has_changeset(&self, pr_number: u64, diff: &str) -> bool {
        let marker = format!("{}{}", self.policy.changeset_prefix, pr_number);
        diff.contains(&marker)
    }

    /// Search of the hotfix keyword in an already lowercased title.
    pub fn is_hotfix(&self, title_lower: &str) -> bool {
        let keyword = self.policy.hotfix_keyword.to_lowercase();
        !keyword.is_empty() && title_lower.contains(&keyword)
    }

    /// Release routing, first match wins.
    pub fn target_branch(&self, base_branch: &str, head_branch: &str) -> Option<TargetBranch> {
        if base_branch == self.policy.staging_branch {
            Some(TargetBranch::Staging)
        } else if base_branch == self.policy.release_branch {
            Some(TargetBranch::Release)
        } else if self.policy.three_branch_flow
            && base_branch == self.policy.develop_branch
            && head_branch == self.policy.release_branch
        {
            Some(TargetBranch::MasterToDevelop)
        } else {
            None
        }
    }
}

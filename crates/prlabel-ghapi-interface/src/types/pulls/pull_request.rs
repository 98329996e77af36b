use serde::{Deserialize, Serialize};

use super::GhPullRequestState;
use crate::types::common::{GhBranch, GhLabel, GhUser};

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// State.
    #[serde(default)]
    pub state: GhPullRequestState,
    /// Title.
    pub title: String,
    /// User.
    pub user: GhUser,
    /// Body.
    #[serde(default)]
    pub body: Option<String>,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<GhLabel>,
    /// Draft.
    #[serde(default)]
    pub draft: bool,
    /// Head branch.
    pub head: GhBranch,
    /// Base branch.
    pub base: GhBranch,
}

impl GhPullRequest {
    /// Label names currently set on the pull request.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.name.as_str())
    }
}

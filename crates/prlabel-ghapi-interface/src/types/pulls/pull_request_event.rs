use serde::{Deserialize, Serialize};

use super::{GhPullRequest, GhPullRequestAction};
use crate::types::common::{GhLabel, GhRepository, GhUser};

/// GitHub Pull request event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct GhPullRequestEvent {
    /// Action.
    pub action: GhPullRequestAction,
    /// Number.
    pub number: u64,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Label.
    #[serde(default)]
    pub label: Option<GhLabel>,
    /// Repository.
    pub repository: GhRepository,
    /// Organization.
    #[serde(default)]
    pub organization: Option<GhUser>,
    /// Sender.
    pub sender: GhUser,
}

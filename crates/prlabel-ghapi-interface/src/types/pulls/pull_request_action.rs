use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// GitHub Pull request action.
///
/// Actions the bot never reacts to collapse into `Other`, so new webhook
/// actions never break payload parsing.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhPullRequestAction {
    /// Assigned.
    Assigned,
    /// Closed.
    Closed,
    /// Converted to draft.
    ConvertedToDraft,
    /// Edited.
    Edited,
    /// Labeled.
    Labeled,
    /// Opened.
    Opened,
    /// Ready for review.
    ReadyForReview,
    /// Reopened.
    Reopened,
    /// Review requested.
    ReviewRequested,
    /// Synchronize.
    Synchronize,
    /// Unlabeled.
    Unlabeled,
    /// Any other action.
    #[default]
    #[serde(other)]
    Other,
}

impl GhPullRequestAction {
    /// Webhook name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Closed => "closed",
            Self::ConvertedToDraft => "converted_to_draft",
            Self::Edited => "edited",
            Self::Labeled => "labeled",
            Self::Opened => "opened",
            Self::ReadyForReview => "ready_for_review",
            Self::Reopened => "reopened",
            Self::ReviewRequested => "review_requested",
            Self::Synchronize => "synchronize",
            Self::Unlabeled => "unlabeled",
            Self::Other => "other",
        }
    }
}

impl Display for GhPullRequestAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_actions() {
        let action: GhPullRequestAction = serde_json::from_str(r#""auto_merge_enabled""#).unwrap();
        assert_eq!(action, GhPullRequestAction::Other);

        let action: GhPullRequestAction = serde_json::from_str(r#""ready_for_review""#).unwrap();
        assert_eq!(action, GhPullRequestAction::ReadyForReview);
        assert_eq!(action.to_string(), "ready_for_review");
    }
}

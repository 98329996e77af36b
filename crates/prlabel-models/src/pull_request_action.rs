use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PullRequestActionError {
    #[error("Unsupported pull request action: {}", action)]
    UnsupportedAction { action: String },
}

/// Pull request actions the label policy reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PullRequestAction {
    /// Opened.
    Opened,
    /// Title, body or base branch edited.
    Edited,
    /// Reopened.
    Reopened,
    /// New commits pushed.
    Synchronize,
    /// Draft marked as ready.
    ReadyForReview,
    /// A review was submitted or dismissed.
    ReviewSubmitted,
}

impl PullRequestAction {
    /// Convert action to static str.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Edited => "edited",
            Self::Reopened => "reopened",
            Self::Synchronize => "synchronize",
            Self::ReadyForReview => "ready_for_review",
            Self::ReviewSubmitted => "review_submitted",
        }
    }

    /// Fresh opens re-flag a missing changeset.
    pub fn is_fresh_open(self) -> bool {
        matches!(self, Self::Opened | Self::Reopened)
    }
}

impl Display for PullRequestAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for PullRequestAction {
    type Error = PullRequestActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "opened" => Ok(Self::Opened),
            "edited" => Ok(Self::Edited),
            "reopened" => Ok(Self::Reopened),
            "synchronize" => Ok(Self::Synchronize),
            "ready_for_review" => Ok(Self::ReadyForReview),
            "review_submitted" => Ok(Self::ReviewSubmitted),
            other => Err(PullRequestActionError::UnsupportedAction {
                action: other.to_string(),
            }),
        }
    }
}

impl FromStr for PullRequestAction {
    type Err = PullRequestActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

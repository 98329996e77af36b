use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{GhReviewState, GhUser};

/// Review state (API version)
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhReviewStateApi {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
}

impl From<GhReviewStateApi> for GhReviewState {
    fn from(state_api: GhReviewStateApi) -> Self {
        match state_api {
            GhReviewStateApi::Approved => Self::Approved,
            GhReviewStateApi::ChangesRequested => Self::ChangesRequested,
            GhReviewStateApi::Commented => Self::Commented,
            GhReviewStateApi::Dismissed => Self::Dismissed,
            GhReviewStateApi::Pending => Self::Pending,
        }
    }
}

/// Review (API version)
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GhReviewApi {
    /// Review ID, increasing with submission.
    pub id: u64,
    /// User, `null` when the account was deleted.
    #[serde(default)]
    pub user: Option<GhUser>,
    /// Submitted at (absent for pending reviews).
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// State.
    pub state: GhReviewStateApi,
}

impl Default for GhReviewApi {
    fn default() -> Self {
        Self {
            id: 0,
            user: None,
            submitted_at: None,
            state: GhReviewStateApi::Pending,
        }
    }
}

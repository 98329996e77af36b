use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::GhReviewState;
use crate::types::common::GhUser;

/// GitHub Review.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhReview {
    /// Review ID.
    pub id: u64,
    /// User.
    pub user: GhUser,
    /// Submitted at.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// State.
    pub state: GhReviewState,
}

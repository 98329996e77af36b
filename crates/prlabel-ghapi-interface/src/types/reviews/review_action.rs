use serde::{Deserialize, Serialize};

/// GitHub Review action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewAction {
    /// Dismissed.
    Dismissed,
    /// Edited.
    Edited,
    /// Submitted.
    #[default]
    Submitted,
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// GitHub Review state.
#[derive(Debug, Deserialize, Serialize, PartialEq, Default, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewState {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    #[default]
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
}

impl Display for GhReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        serde_plain::to_string(self)
            .map_err(|_| std::fmt::Error)
            .and_then(|s| f.write_str(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(GhReviewState::ChangesRequested.to_string(), "changes_requested");
        assert_eq!(GhReviewState::Approved.to_string(), "approved");
    }
}

//! Label types.

use std::{convert::TryFrom, fmt::Display};

use thiserror::Error;

/// Type error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PolicyLabelError {
    /// Unknown policy label.
    #[error("Unknown policy label: {}", label)]
    UnknownPolicyLabel { label: String },
}

/// Label owned by the label policy.
///
/// Declaration order is the order in which decisions and operations are
/// listed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolicyLabel {
    /// No changeset file in the diff.
    MissingChangeset,
    /// No approval yet.
    ReadyForReview,
    /// Approved, but not by enough reviewers.
    AdditionalApprovalNeeded,
    /// Approved by enough reviewers.
    Approved,
    /// At least one reviewer requested changes.
    RequiresChanges,
    /// Targets the staging branch.
    ReleaseToStaging,
    /// Targets the release branch.
    Release,
    /// Back-merge from the release branch into develop.
    MasterToDevelop,
    /// Hotfix.
    Hotfix,
}

impl PolicyLabel {
    /// Every policy label, in declaration order.
    pub const ALL: [PolicyLabel; 9] = [
        Self::MissingChangeset,
        Self::ReadyForReview,
        Self::AdditionalApprovalNeeded,
        Self::Approved,
        Self::RequiresChanges,
        Self::ReleaseToStaging,
        Self::Release,
        Self::MasterToDevelop,
        Self::Hotfix,
    ];

    /// Review status labels. At most one is desired at a time.
    pub const REVIEW_STATUS: [PolicyLabel; 3] = [
        Self::ReadyForReview,
        Self::AdditionalApprovalNeeded,
        Self::Approved,
    ];

    /// Release routing labels. At most one is desired at a time.
    pub const RELEASE_ROUTING: [PolicyLabel; 3] =
        [Self::ReleaseToStaging, Self::Release, Self::MasterToDevelop];

    /// Convert policy label to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Display for PolicyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for PolicyLabel {
    type Error = PolicyLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|label| label.to_str() == value)
            .ok_or_else(|| PolicyLabelError::UnknownPolicyLabel {
                label: value.to_string(),
            })
    }
}

impl TryFrom<&String> for PolicyLabel {
    type Error = PolicyLabelError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(&value[..])
    }
}

impl From<PolicyLabel> for &'static str {
    fn from(label: PolicyLabel) -> Self {
        match label {
            PolicyLabel::MissingChangeset => "Missing Changeset",
            PolicyLabel::ReadyForReview => "Ready for Review",
            PolicyLabel::AdditionalApprovalNeeded => "Add'tl Approval Needed",
            PolicyLabel::Approved => "Approved",
            PolicyLabel::RequiresChanges => "Requires Changes",
            PolicyLabel::ReleaseToStaging => "Release → Staging",
            PolicyLabel::Release => "Release",
            PolicyLabel::MasterToDevelop => "Master → Develop",
            PolicyLabel::Hotfix => "Hotfix",
        }
    }
}

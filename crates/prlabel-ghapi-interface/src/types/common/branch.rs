use serde::{Deserialize, Serialize};

use super::GhUser;

/// GitHub Branch.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhBranch {
    /// Label.
    #[serde(default)]
    pub label: Option<String>,
    /// Reference.
    #[serde(rename = "ref")]
    pub reference: String,
    /// SHA.
    #[serde(default)]
    pub sha: String,
    /// User.
    #[serde(default)]
    pub user: Option<GhUser>,
}

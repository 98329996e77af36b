use serde::{Deserialize, Serialize};

use super::GhUser;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Owner.
    pub owner: GhUser,
}

impl GhRepository {
    /// Create a repository from its owner and name.
    pub fn new<T: Into<String>>(owner: T, name: T) -> Self {
        let owner = owner.into();
        let name = name.into();

        Self {
            full_name: format!("{owner}/{name}"),
            owner: GhUser { login: owner },
            name,
        }
    }
}

use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq, Hash)]
pub struct GhUser {
    /// Username.
    pub login: String,
}

impl GhUser {
    pub fn new<T: Into<String>>(login: T) -> Self {
        Self {
            login: login.into(),
        }
    }
}

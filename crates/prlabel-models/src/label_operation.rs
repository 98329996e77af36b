use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOperationKind {
    Add,
    Remove,
}

/// Label mutation to apply on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelOperation {
    pub kind: LabelOperationKind,
    pub label: String,
}

impl LabelOperation {
    pub fn add<T: Into<String>>(label: T) -> Self {
        Self {
            kind: LabelOperationKind::Add,
            label: label.into(),
        }
    }

    pub fn remove<T: Into<String>>(label: T) -> Self {
        Self {
            kind: LabelOperationKind::Remove,
            label: label.into(),
        }
    }
}

impl Display for LabelOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LabelOperationKind::Add => write!(f, "+ {}", self.label),
            LabelOperationKind::Remove => write!(f, "- {}", self.label),
        }
    }
}

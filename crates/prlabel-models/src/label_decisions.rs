use std::collections::BTreeMap;

use crate::PolicyLabel;

/// Desired presence per policy label.
///
/// A label without decision is left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDecisions {
    decisions: BTreeMap<PolicyLabel, bool>,
}

impl LabelDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set desired presence for a label.
    pub fn set(&mut self, label: PolicyLabel, desired: bool) {
        self.decisions.insert(label, desired);
    }

    /// Select one label of an exclusive group, undesire the others.
    pub fn select_exclusive(&mut self, group: &[PolicyLabel], selected: Option<PolicyLabel>) {
        for label in group {
            self.set(*label, Some(*label) == selected);
        }
    }

    /// Get decision for a label.
    pub fn get(&self, label: PolicyLabel) -> Option<bool> {
        self.decisions.get(&label).copied()
    }

    /// Iterate on decisions, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (PolicyLabel, bool)> + '_ {
        self.decisions.iter().map(|(label, desired)| (*label, *desired))
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

impl FromIterator<(PolicyLabel, bool)> for LabelDecisions {
    fn from_iter<T: IntoIterator<Item = (PolicyLabel, bool)>>(iter: T) -> Self {
        Self {
            decisions: iter.into_iter().collect(),
        }
    }
}

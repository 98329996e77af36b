use std::collections::BTreeSet;

use prlabel_models::{LabelDecisions, LabelOperation};

/// Computes label operations from desired and current labels.
#[derive(Default)]
pub struct LabelSyncEngine {
    _private: (),
}

impl LabelSyncEngine {
    /// Every add first, then every remove, each in policy label order.
    pub fn diff(&self, decisions: &LabelDecisions, current: &BTreeSet<String>) -> Vec<LabelOperation> {
        let adds = decisions
            .iter()
            .filter(|(label, desired)| *desired && !current.contains(label.to_str()))
            .map(|(label, _)| LabelOperation::add(label.to_str()));

        let removes = decisions
            .iter()
            .filter(|(label, desired)| !*desired && current.contains(label.to_str()))
            .map(|(label, _)| LabelOperation::remove(label.to_str()));

        adds.chain(removes).collect()
    }
}

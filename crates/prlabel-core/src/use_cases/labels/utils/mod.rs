mod facts_deriver;
mod label_policy;
mod label_sync;
mod outcome;
mod review_reducer;

pub use facts_deriver::FactsDeriver;
pub use label_policy::LabelPolicyEvaluator;
pub use label_sync::LabelSyncEngine;
pub use outcome::{ApplyReport, LabelEvaluation, ReconcileOutcome, SkipReason};
pub use review_reducer::ReviewReducer;

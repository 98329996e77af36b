pub(crate) mod apply_label_operations;
pub(crate) mod evaluate_pull_request_labels;
pub(crate) mod gather_pull_request_facts;
pub(crate) mod plan_label_operations;
pub(crate) mod reconcile_pull_request_labels;
pub(crate) mod utils;

pub use apply_label_operations::ApplyLabelOperationsInterface;
pub use evaluate_pull_request_labels::EvaluatePullRequestLabelsInterface;
pub use gather_pull_request_facts::GatherPullRequestFactsInterface;
pub use plan_label_operations::PlanLabelOperationsInterface;
pub use reconcile_pull_request_labels::ReconcilePullRequestLabelsInterface;
pub use utils::{
    ApplyReport, FactsDeriver, LabelEvaluation, LabelPolicyEvaluator, LabelSyncEngine,
    ReconcileOutcome, ReviewReducer, SkipReason,
};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    apply_label_operations::MockApplyLabelOperationsInterface,
    evaluate_pull_request_labels::MockEvaluatePullRequestLabelsInterface,
    gather_pull_request_facts::MockGatherPullRequestFactsInterface,
    plan_label_operations::MockPlanLabelOperationsInterface,
    reconcile_pull_request_labels::MockReconcilePullRequestLabelsInterface,
};

#[cfg(test)]
mod scenarios;

//! Label policy engine.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    labels::{
        apply_label_operations::ApplyLabelOperations,
        evaluate_pull_request_labels::EvaluatePullRequestLabels,
        gather_pull_request_facts::GatherPullRequestFacts,
        plan_label_operations::PlanLabelOperations,
        reconcile_pull_request_labels::ReconcilePullRequestLabels,
    },
    pulls::{
        preview_pull_request_labels::PreviewPullRequestLabels,
        process_pull_request_event::ProcessPullRequestEvent,
        synchronize_pull_request_labels::SynchronizePullRequestLabels,
    },
    reviews::handle_review_event::HandleReviewEvent,
};

module! {
    pub CoreModule {
        components = [
            GatherPullRequestFacts, PlanLabelOperations, ApplyLabelOperations,
            EvaluatePullRequestLabels, ReconcilePullRequestLabels,
            ProcessPullRequestEvent, PreviewPullRequestLabels,
            SynchronizePullRequestLabels, HandleReviewEvent
        ],
        providers = []
    }
}

use prlabel_models::{LabelOperation, PullRequestFacts};
use shaku::{Component, Interface};

use super::utils::{LabelPolicyEvaluator, LabelSyncEngine};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait PlanLabelOperationsInterface: Interface {
    fn run(&self, facts: &PullRequestFacts) -> Vec<LabelOperation>;
}

#[derive(Component)]
#[shaku(interface = PlanLabelOperationsInterface)]
pub(crate) struct PlanLabelOperations;

impl PlanLabelOperationsInterface for PlanLabelOperations {
    #[tracing::instrument(skip_all, fields(pr_number = facts.number), ret)]
    fn run(&self, facts: &PullRequestFacts) -> Vec<LabelOperation> {
        let decisions = LabelPolicyEvaluator::default().evaluate(facts);
        LabelSyncEngine::default().diff(&decisions, &facts.current_labels)
    }
}

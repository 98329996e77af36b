use async_trait::async_trait;
use prlabel_ghapi_interface::types::GhPullRequest;
use prlabel_models::{PullRequestAction, PullRequestHandle};
use shaku::{Component, HasComponent, Interface};
use tracing::debug;

use super::{
    utils::{LabelEvaluation, SkipReason},
    GatherPullRequestFactsInterface, PlanLabelOperationsInterface,
};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait EvaluatePullRequestLabelsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        upstream_pr: &GhPullRequest,
        action: Option<PullRequestAction>,
    ) -> Result<LabelEvaluation>;
}

#[derive(Component)]
#[shaku(interface = EvaluatePullRequestLabelsInterface)]
pub(crate) struct EvaluatePullRequestLabels;

#[async_trait]
impl EvaluatePullRequestLabelsInterface for EvaluatePullRequestLabels {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle, action = ?action))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        upstream_pr: &GhPullRequest,
        action: Option<PullRequestAction>,
    ) -> Result<LabelEvaluation> {
        if let Some(reason) = Self::skip_reason(ctx, pr_handle, upstream_pr, action) {
            debug!(
                pr_handle = %pr_handle,
                reason = %reason,
                message = "Skipping label evaluation"
            );
            return Ok(LabelEvaluation::Skipped(reason));
        }

        let gather_facts: &dyn GatherPullRequestFactsInterface = ctx.core_module.resolve_ref();
        let facts = gather_facts.run(ctx, pr_handle, upstream_pr, action).await?;

        let plan_operations: &dyn PlanLabelOperationsInterface = ctx.core_module.resolve_ref();
        let operations = plan_operations.run(&facts);

        Ok(LabelEvaluation::Planned { facts, operations })
    }
}

impl EvaluatePullRequestLabels {
    fn skip_reason(
        ctx: &CoreContext<'_>,
        pr_handle: &PullRequestHandle,
        upstream_pr: &GhPullRequest,
        action: Option<PullRequestAction>,
    ) -> Option<SkipReason> {
        if !ctx
            .config
            .policy
            .manages_repository(&pr_handle.repository_path().full_name())
        {
            Some(SkipReason::UnmanagedRepository)
        } else if upstream_pr.draft {
            Some(SkipReason::Draft)
        } else if action.is_none() {
            Some(SkipReason::UnsupportedAction)
        } else {
            None
        }
    }
}

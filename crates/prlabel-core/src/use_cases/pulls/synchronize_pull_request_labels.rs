use async_trait::async_trait;
use prlabel_models::{PullRequestAction, PullRequestHandle};
use shaku::{Component, HasComponent, Interface};

use crate::{
    use_cases::labels::{ReconcileOutcome, ReconcilePullRequestLabelsInterface},
    CoreContext, Result,
};

/// Reconcile labels of a pull request fetched upstream.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SynchronizePullRequestLabelsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        action: PullRequestAction,
    ) -> Result<ReconcileOutcome>;
}

#[derive(Component)]
#[shaku(interface = SynchronizePullRequestLabelsInterface)]
pub(crate) struct SynchronizePullRequestLabels;

#[async_trait]
impl SynchronizePullRequestLabelsInterface for SynchronizePullRequestLabels {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle, action = %action))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        action: PullRequestAction,
    ) -> Result<ReconcileOutcome> {
        let upstream_pr = ctx
            .api_service
            .pulls_get(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;

        let reconcile: &dyn ReconcilePullRequestLabelsInterface = ctx.core_module.resolve_ref();
        reconcile
            .run(ctx, pr_handle, &upstream_pr, Some(action))
            .await
    }
}

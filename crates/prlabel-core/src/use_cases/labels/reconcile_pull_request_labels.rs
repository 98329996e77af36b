use async_trait::async_trait;
use prlabel_ghapi_interface::types::GhPullRequest;
use prlabel_models::{PullRequestAction, PullRequestHandle};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{
    utils::{LabelEvaluation, ReconcileOutcome},
    ApplyLabelOperationsInterface, EvaluatePullRequestLabelsInterface,
};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReconcilePullRequestLabelsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        upstream_pr: &GhPullRequest,
        action: Option<PullRequestAction>,
    ) -> Result<ReconcileOutcome>;
}

#[derive(Component)]
#[shaku(interface = ReconcilePullRequestLabelsInterface)]
pub(crate) struct ReconcilePullRequestLabels;

#[async_trait]
impl ReconcilePullRequestLabelsInterface for ReconcilePullRequestLabels {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle, action = ?action), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        upstream_pr: &GhPullRequest,
        action: Option<PullRequestAction>,
    ) -> Result<ReconcileOutcome> {
        let evaluate: &dyn EvaluatePullRequestLabelsInterface = ctx.core_module.resolve_ref();
        let operations = match evaluate.run(ctx, pr_handle, upstream_pr, action).await? {
            LabelEvaluation::Skipped(reason) => return Ok(reason.into()),
            LabelEvaluation::Planned { operations, .. } => operations,
        };

        let apply: &dyn ApplyLabelOperationsInterface = ctx.core_module.resolve_ref();
        let report = apply.run(ctx, pr_handle, &operations).await?;

        info!(
            pr_handle = %pr_handle,
            added = ?report.added,
            removed = ?report.removed,
            failed_removals = ?report.failed_removals,
            message = "Labels reconciled"
        );

        Ok(ReconcileOutcome::Applied(report))
    }
}

#[cfg(test)]
mod tests {
    use prlabel_models::{LabelOperation, PullRequestFacts};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::labels::{
            ApplyReport, MockApplyLabelOperationsInterface,
            MockEvaluatePullRequestLabelsInterface, SkipReason,
        },
        CoreModule,
    };

    #[tokio::test]
    async fn run_skipped() {
        let mut ctx = CoreContextTest::new();

        let evaluate = {
            let mut mock = MockEvaluatePullRequestLabelsInterface::new();
            mock.expect_run()
                .once()
                .return_once(|_, _, _, _| Ok(LabelEvaluation::Skipped(SkipReason::Draft)));
            mock
        };

        let mut apply = MockApplyLabelOperationsInterface::new();
        apply.expect_run().never();

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn EvaluatePullRequestLabelsInterface>(Box::new(evaluate))
            .with_component_override::<dyn ApplyLabelOperationsInterface>(Box::new(apply))
            .build();

        let outcome = ReconcilePullRequestLabels
            .run(
                &ctx.as_context(),
                &("me", "test", 1).into(),
                &GhPullRequest::default(),
                Some(PullRequestAction::Opened),
            )
            .await
            .unwrap();

        assert_eq!(outcome, ReconcileOutcome::Skipped(SkipReason::Draft));
    }

    #[tokio::test]
    async fn run_applied() {
        let mut ctx = CoreContextTest::new();

        let evaluate = {
            let mut mock = MockEvaluatePullRequestLabelsInterface::new();
            mock.expect_run().once().return_once(|_, _, _, _| {
                Ok(LabelEvaluation::Planned {
                    facts: PullRequestFacts::default(),
                    operations: vec![LabelOperation::add("Approved")],
                })
            });
            mock
        };

        let apply = {
            let mut mock = MockApplyLabelOperationsInterface::new();
            mock.expect_run()
                .once()
                .withf(|_, pr_handle, operations| {
                    pr_handle == &("me", "test", 1).into()
                        && operations == [LabelOperation::add("Approved")]
                })
                .return_once(|_, _, _| {
                    Ok(ApplyReport {
                        added: vec!["Approved".into()],
                        ..Default::default()
                    })
                });
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn EvaluatePullRequestLabelsInterface>(Box::new(evaluate))
            .with_component_override::<dyn ApplyLabelOperationsInterface>(Box::new(apply))
            .build();

        let outcome = ReconcilePullRequestLabels
            .run(
                &ctx.as_context(),
                &("me", "test", 1).into(),
                &GhPullRequest::default(),
                Some(PullRequestAction::Synchronize),
            )
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ReconcileOutcome::Applied(ApplyReport {
                added: vec!["Approved".into()],
                ..Default::default()
            })
        );
    }
}

use async_trait::async_trait;
use prlabel_models::{PullRequestAction, PullRequestHandle};
use shaku::{Component, HasComponent, Interface};

use crate::{
    use_cases::labels::{EvaluatePullRequestLabelsInterface, LabelEvaluation},
    CoreContext, Result,
};

/// Evaluate labels of a pull request fetched upstream, without applying them.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PreviewPullRequestLabelsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        action: PullRequestAction,
    ) -> Result<LabelEvaluation>;
}

#[derive(Component)]
#[shaku(interface = PreviewPullRequestLabelsInterface)]
pub(crate) struct PreviewPullRequestLabels;

#[async_trait]
impl PreviewPullRequestLabelsInterface for PreviewPullRequestLabels {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle, action = %action))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        action: PullRequestAction,
    ) -> Result<LabelEvaluation> {
        let upstream_pr = ctx
            .api_service
            .pulls_get(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;

        let evaluate: &dyn EvaluatePullRequestLabelsInterface = ctx.core_module.resolve_ref();
        evaluate
            .run(ctx, pr_handle, &upstream_pr, Some(action))
            .await
    }
}

#[cfg(test)]
mod tests {
    use prlabel_ghapi_interface::{
        review::{GhReviewApi, GhReviewStateApi},
        types::{GhBranch, GhLabel, GhPullRequest, GhUser},
    };
    use prlabel_models::LabelOperation;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_never_mutates() {
        let mut ctx = CoreContextTest::new();
        ctx.config.policy = Default::default();
        ctx.api_service
            .expect_pulls_get()
            .once()
            .return_once(|_, _, _| {
                Ok(GhPullRequest {
                    number: 1,
                    labels: vec![GhLabel::new("Ready for Review")],
                    base: GhBranch {
                        reference: "develop".into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
            });
        ctx.api_service
            .expect_pulls_get_diff()
            .once()
            .return_once(|_, _, _| Ok(String::new()));
        ctx.api_service
            .expect_pull_reviews_list()
            .once()
            .return_once(|_, _, _| {
                Ok(vec![GhReviewApi {
                    id: 1,
                    user: Some(GhUser::new("alice")),
                    state: GhReviewStateApi::Approved,
                    ..Default::default()
                }])
            });
        ctx.api_service.expect_issue_labels_add().never();
        ctx.api_service.expect_issue_labels_remove().never();

        let evaluation = PreviewPullRequestLabels
            .run(
                &ctx.as_context(),
                &("me", "test", 1).into(),
                PullRequestAction::Synchronize,
            )
            .await
            .unwrap();

        match evaluation {
            LabelEvaluation::Planned { facts, operations } => {
                assert_eq!(facts.approval_count, 1);
                assert_eq!(
                    operations,
                    vec![
                        LabelOperation::add("Add'tl Approval Needed"),
                        LabelOperation::remove("Ready for Review"),
                    ]
                );
            }
            LabelEvaluation::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }
}

use async_trait::async_trait;
use prlabel_ghapi_interface::types::{GhReviewAction, GhReviewEvent};
use prlabel_models::{PullRequestAction, PullRequestHandle};
use shaku::{Component, HasComponent, Interface};

use crate::{
    use_cases::labels::{ReconcileOutcome, ReconcilePullRequestLabelsInterface},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleReviewEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhReviewEvent)
        -> Result<ReconcileOutcome>;
}

#[derive(Component)]
#[shaku(interface = HandleReviewEventInterface)]
pub(crate) struct HandleReviewEvent;

#[async_trait]
impl HandleReviewEventInterface for HandleReviewEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            repo_owner = event.repository.owner.login,
            repo_name = event.repository.name,
            pr_number = event.pull_request.number,
            reviewer = event.review.user.login,
            state = %event.review.state
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: GhReviewEvent,
    ) -> Result<ReconcileOutcome> {
        let pr_handle = PullRequestHandle::from((
            event.repository.owner.login.as_str(),
            event.repository.name.as_str(),
            event.pull_request.number,
        ));

        // A dismissal changes the reviewer's latest verdict too.
        let action = match event.action {
            GhReviewAction::Submitted | GhReviewAction::Dismissed => {
                Some(PullRequestAction::ReviewSubmitted)
            }
            GhReviewAction::Edited => None,
        };

        let reconcile: &dyn ReconcilePullRequestLabelsInterface = ctx.core_module.resolve_ref();
        reconcile
            .run(ctx, &pr_handle, &event.pull_request, action)
            .await
    }
}

#[cfg(test)]
mod tests {
    use prlabel_ghapi_interface::types::{GhPullRequest, GhRepository};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::labels::{MockReconcilePullRequestLabelsInterface, SkipReason},
        CoreModule,
    };

    fn arrange_event(action: GhReviewAction) -> GhReviewEvent {
        GhReviewEvent {
            action,
            pull_request: GhPullRequest {
                number: 1,
                ..Default::default()
            },
            repository: GhRepository::new("me", "test"),
            ..Default::default()
        }
    }

    fn arrange_module(expected_action: Option<PullRequestAction>) -> CoreModule {
        let mut reconcile = MockReconcilePullRequestLabelsInterface::new();
        reconcile
            .expect_run()
            .once()
            .withf(move |_, pr_handle, _, action| {
                pr_handle == &("me", "test", 1).into() && action == &expected_action
            })
            .return_once(|_, _, _, _| Ok(ReconcileOutcome::Skipped(SkipReason::UnsupportedAction)));

        CoreModule::builder()
            .with_component_override::<dyn ReconcilePullRequestLabelsInterface>(Box::new(
                reconcile,
            ))
            .build()
    }

    #[tokio::test]
    async fn run_submitted() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(Some(PullRequestAction::ReviewSubmitted));

        HandleReviewEvent
            .run(&ctx.as_context(), arrange_event(GhReviewAction::Submitted))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_dismissed() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(Some(PullRequestAction::ReviewSubmitted));

        HandleReviewEvent
            .run(&ctx.as_context(), arrange_event(GhReviewAction::Dismissed))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_edited() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(None);

        let outcome = HandleReviewEvent
            .run(&ctx.as_context(), arrange_event(GhReviewAction::Edited))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ReconcileOutcome::Skipped(SkipReason::UnsupportedAction)
        );
    }
}

use async_trait::async_trait;
use prlabel_ghapi_interface::types::{GhPullRequestAction, GhPullRequestEvent};
use prlabel_models::{PullRequestAction, PullRequestHandle};
use shaku::{Component, HasComponent, Interface};

use crate::{
    use_cases::labels::{ReconcileOutcome, ReconcilePullRequestLabelsInterface},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessPullRequestEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: GhPullRequestEvent,
    ) -> Result<ReconcileOutcome>;
}

#[derive(Component)]
#[shaku(interface = ProcessPullRequestEventInterface)]
pub(crate) struct ProcessPullRequestEvent;

#[async_trait]
impl ProcessPullRequestEventInterface for ProcessPullRequestEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            action = %event.action,
            pr_number = event.pull_request.number,
            repository_path = %event.repository.full_name,
            username = %event.pull_request.user.login
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: GhPullRequestEvent,
    ) -> Result<ReconcileOutcome> {
        let pr_handle = PullRequestHandle::from((
            event.repository.owner.login.as_str(),
            event.repository.name.as_str(),
            event.pull_request.number,
        ));

        let reconcile: &dyn ReconcilePullRequestLabelsInterface = ctx.core_module.resolve_ref();
        reconcile
            .run(
                ctx,
                &pr_handle,
                &event.pull_request,
                Self::action_from_event(event.action),
            )
            .await
    }
}

impl ProcessPullRequestEvent {
    fn action_from_event(action: GhPullRequestAction) -> Option<PullRequestAction> {
        match action {
            GhPullRequestAction::Opened => Some(PullRequestAction::Opened),
            GhPullRequestAction::Edited => Some(PullRequestAction::Edited),
            GhPullRequestAction::Reopened => Some(PullRequestAction::Reopened),
            GhPullRequestAction::Synchronize => Some(PullRequestAction::Synchronize),
            GhPullRequestAction::ReadyForReview => Some(PullRequestAction::ReadyForReview),
            _ => None,
        }
    }
}

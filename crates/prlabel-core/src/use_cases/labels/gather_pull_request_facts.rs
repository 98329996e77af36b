use async_trait::async_trait;
use prlabel_ghapi_interface::types::GhPullRequest;
use prlabel_models::{PullRequestAction, PullRequestFacts, PullRequestHandle};
use shaku::{Component, Interface};

use super::utils::{FactsDeriver, ReviewReducer};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GatherPullRequestFactsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        upstream_pr: &GhPullRequest,
        action: Option<PullRequestAction>,
    ) -> Result<PullRequestFacts>;
}

#[derive(Component)]
#[shaku(interface = GatherPullRequestFactsInterface)]
pub(crate) struct GatherPullRequestFacts;

#[async_trait]
impl GatherPullRequestFactsInterface for GatherPullRequestFacts {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle, action = ?action), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        upstream_pr: &GhPullRequest,
        action: Option<PullRequestAction>,
    ) -> Result<PullRequestFacts> {
        let fetch_diff =
            ctx.api_service
                .pulls_get_diff(pr_handle.owner(), pr_handle.name(), pr_handle.number());
        let fetch_reviews =
            ctx.api_service
                .pull_reviews_list(pr_handle.owner(), pr_handle.name(), pr_handle.number());

        let (diff, reviews) = tokio::join!(fetch_diff, fetch_reviews);
        let diff = diff?;
        let reviews = reviews?;

        let reducer = ReviewReducer::default();
        let active_reviews = reducer.reduce(&reducer.events_from_api(&reviews));

        Ok(FactsDeriver::new(&ctx.config.policy).derive(
            upstream_pr,
            action,
            &diff,
            &active_reviews,
        ))
    }
}

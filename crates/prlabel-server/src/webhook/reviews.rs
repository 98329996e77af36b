//! Review webhook handlers.

use std::sync::Arc;

use actix_web::HttpResponse;
use prlabel_core::use_cases::reviews::HandleReviewEventInterface;
use prlabel_ghapi_interface::types::GhReviewEvent;
use shaku::HasComponent;
use tracing::error;

use super::parse_event_type;
use crate::{event_type::EventType, server::AppContext, Result};

pub(crate) fn parse_review_event(body: &str) -> Result<GhReviewEvent> {
    parse_event_type(EventType::PullRequestReview, body)
}

#[tracing::instrument(skip_all, fields(
    action = ?event.action,
    repo_owner = %event.repository.owner.login,
    repo_name = %event.repository.name,
    pr_number = event.pull_request.number,
    reviewer = %event.review.user.login,
))]
pub(crate) fn review_event(ctx: Arc<AppContext>, event: GhReviewEvent) -> HttpResponse {
    tokio::spawn(async move {
        let ctx = ctx.as_core_context();

        let handle_review_event: &dyn HandleReviewEventInterface = ctx.core_module.resolve_ref();
        if let Err(e) = handle_review_event.run(&ctx, event).await {
            error!(error = %e, message = "Could not handle review event");
        }
    });

    HttpResponse::Accepted().body("Pull request review.")
}

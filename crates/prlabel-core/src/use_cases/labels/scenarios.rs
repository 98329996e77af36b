//! Whole-pipeline scenarios, from webhook event to label mutations.

use prlabel_ghapi_interface::{
    review::{GhReviewApi, GhReviewStateApi},
    types::{
        GhBranch, GhLabel, GhPullRequest, GhPullRequestAction, GhPullRequestEvent, GhRepository,
        GhReview, GhReviewAction, GhReviewEvent, GhReviewState, GhUser,
    },
    MockApiService,
};
use pretty_assertions::assert_eq;
use shaku::HasComponent;

use super::{ApplyReport, ReconcileOutcome, SkipReason};
use crate::{
    context::tests::CoreContextTest,
    use_cases::{pulls::ProcessPullRequestEventInterface, reviews::HandleReviewEventInterface},
};

fn arrange_pull_request(number: u64, title: &str, base: &str, labels: &[&str]) -> GhPullRequest {
    GhPullRequest {
        number,
        title: title.into(),
        user: GhUser::new("author"),
        labels: labels.iter().map(|l| GhLabel::new(*l)).collect(),
        head: GhBranch {
            reference: "feature/thing".into(),
            ..Default::default()
        },
        base: GhBranch {
            reference: base.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn review(id: u64, login: &str, state: GhReviewStateApi) -> GhReviewApi {
    GhReviewApi {
        id,
        user: Some(GhUser::new(login)),
        state,
        ..Default::default()
    }
}

fn arrange_reads(api_service: &mut MockApiService, diff: &'static str, reviews: Vec<GhReviewApi>) {
    api_service
        .expect_pulls_get_diff()
        .once()
        .return_once(move |_, _, _| Ok(diff.into()));
    api_service
        .expect_pull_reviews_list()
        .once()
        .return_once(move |_, _, _| Ok(reviews));
}

fn expect_added(api_service: &mut MockApiService, expected: &'static [&'static str]) {
    api_service
        .expect_issue_labels_add()
        .once()
        .withf(move |owner, name, _, labels| {
            owner == "linode"
                && name == "manager"
                && labels.iter().map(String::as_str).eq(expected.iter().copied())
        })
        .return_once(|_, _, _, _| Ok(()));
}

fn expect_removed(api_service: &mut MockApiService, expected: &'static str) {
    api_service
        .expect_issue_labels_remove()
        .once()
        .withf(move |_, _, _, label| label == expected)
        .return_once(|_, _, _, _| Ok(()));
}

fn arrange_context() -> CoreContextTest {
    let mut ctx = CoreContextTest::new();
    ctx.config.policy = Default::default();
    ctx
}

async fn process_pull_request(
    ctx: &CoreContextTest,
    action: GhPullRequestAction,
    pull_request: GhPullRequest,
) -> ReconcileOutcome {
    let process: &dyn ProcessPullRequestEventInterface = ctx.core_module.resolve_ref();
    process
        .run(
            &ctx.as_context(),
            GhPullRequestEvent {
                action,
                number: pull_request.number,
                pull_request,
                repository: GhRepository::new("linode", "manager"),
                ..Default::default()
            },
        )
        .await
        .unwrap()
}

async fn submit_review(
    ctx: &CoreContextTest,
    reviewer: &str,
    state: GhReviewState,
    pull_request: GhPullRequest,
) -> ReconcileOutcome {
    let handle: &dyn HandleReviewEventInterface = ctx.core_module.resolve_ref();
    handle
        .run(
            &ctx.as_context(),
            GhReviewEvent {
                action: GhReviewAction::Submitted,
                review: GhReview {
                    user: GhUser::new(reviewer),
                    state,
                    ..Default::default()
                },
                pull_request,
                repository: GhRepository::new("linode", "manager"),
                ..Default::default()
            },
        )
        .await
        .unwrap()
}

fn applied(added: &[&str], removed: &[&str]) -> ReconcileOutcome {
    ReconcileOutcome::Applied(ApplyReport {
        added: added.iter().map(|l| l.to_string()).collect(),
        removed: removed.iter().map(|l| l.to_string()).collect(),
        failed_removals: vec![],
    })
}

#[tokio::test]
async fn opened_without_changeset() {
    let mut ctx = arrange_context();
    arrange_reads(&mut ctx.api_service, "+++ b/src/index.ts", vec![]);
    expect_added(
        &mut ctx.api_service,
        &["Missing Changeset", "Ready for Review"],
    );
    ctx.api_service.expect_issue_labels_remove().never();

    let outcome = process_pull_request(
        &ctx,
        GhPullRequestAction::Opened,
        arrange_pull_request(10, "feat: add thing", "develop", &[]),
    )
    .await;

    assert_eq!(
        outcome,
        applied(&["Missing Changeset", "Ready for Review"], &[])
    );
}

#[tokio::test]
async fn first_approval() {
    let mut ctx = arrange_context();
    arrange_reads(
        &mut ctx.api_service,
        "",
        vec![review(1, "alice", GhReviewStateApi::Approved)],
    );
    expect_added(&mut ctx.api_service, &["Add'tl Approval Needed"]);
    expect_removed(&mut ctx.api_service, "Ready for Review");

    let outcome = submit_review(
        &ctx,
        "alice",
        GhReviewState::Approved,
        arrange_pull_request(10, "feat: add thing", "develop", &["Ready for Review"]),
    )
    .await;

    assert_eq!(
        outcome,
        applied(&["Add'tl Approval Needed"], &["Ready for Review"])
    );
}

#[tokio::test]
async fn second_approval() {
    let mut ctx = arrange_context();
    arrange_reads(
        &mut ctx.api_service,
        "",
        vec![
            review(1, "alice", GhReviewStateApi::Approved),
            review(2, "bob", GhReviewStateApi::Approved),
        ],
    );
    expect_added(&mut ctx.api_service, &["Approved"]);
    expect_removed(&mut ctx.api_service, "Add'tl Approval Needed");

    let outcome = submit_review(
        &ctx,
        "bob",
        GhReviewState::Approved,
        arrange_pull_request(10, "feat: add thing", "develop", &["Add'tl Approval Needed"]),
    )
    .await;

    assert_eq!(
        outcome,
        applied(&["Approved"], &["Add'tl Approval Needed"])
    );
}

#[tokio::test]
async fn reviewer_changes_mind() {
    let mut ctx = arrange_context();
    arrange_reads(
        &mut ctx.api_service,
        "",
        vec![
            review(1, "alice", GhReviewStateApi::ChangesRequested),
            review(2, "alice", GhReviewStateApi::Approved),
        ],
    );
    expect_added(&mut ctx.api_service, &["Add'tl Approval Needed"]);
    expect_removed(&mut ctx.api_service, "Ready for Review");
    expect_removed(&mut ctx.api_service, "Requires Changes");

    let outcome = submit_review(
        &ctx,
        "alice",
        GhReviewState::Approved,
        arrange_pull_request(
            10,
            "feat: add thing",
            "develop",
            &["Ready for Review", "Requires Changes"],
        ),
    )
    .await;

    assert_eq!(
        outcome,
        applied(
            &["Add'tl Approval Needed"],
            &["Ready for Review", "Requires Changes"]
        )
    );
}

#[tokio::test]
async fn hotfix_to_release() {
    let mut ctx = arrange_context();
    arrange_reads(&mut ctx.api_service, "+++ b/.changeset/pr-12-cve.md", vec![]);
    expect_added(
        &mut ctx.api_service,
        &["Ready for Review", "Release", "Hotfix"],
    );
    ctx.api_service.expect_issue_labels_remove().never();

    let outcome = process_pull_request(
        &ctx,
        GhPullRequestAction::Opened,
        arrange_pull_request(12, "Hotfix: patch CVE", "master", &[]),
    )
    .await;

    assert_eq!(
        outcome,
        applied(&["Ready for Review", "Release", "Hotfix"], &[])
    );
}

#[tokio::test]
async fn approved_stays_approved() {
    let mut ctx = arrange_context();
    arrange_reads(
        &mut ctx.api_service,
        "+++ b/.changeset/pr-10-thing.md",
        vec![
            review(1, "alice", GhReviewStateApi::Approved),
            review(2, "bob", GhReviewStateApi::Approved),
        ],
    );
    ctx.api_service.expect_issue_labels_add().never();
    ctx.api_service.expect_issue_labels_remove().never();

    let outcome = process_pull_request(
        &ctx,
        GhPullRequestAction::Synchronize,
        arrange_pull_request(10, "feat: add thing", "develop", &["Approved"]),
    )
    .await;

    assert_eq!(outcome, applied(&[], &[]));
}

#[tokio::test]
async fn second_run_is_idempotent() {
    let mut ctx = arrange_context();
    arrange_reads(&mut ctx.api_service, "", vec![]);
    ctx.api_service.expect_issue_labels_add().never();
    ctx.api_service.expect_issue_labels_remove().never();

    let outcome = process_pull_request(
        &ctx,
        GhPullRequestAction::Reopened,
        arrange_pull_request(
            10,
            "feat: add thing",
            "develop",
            &["Missing Changeset", "Ready for Review"],
        ),
    )
    .await;

    assert_eq!(outcome, applied(&[], &[]));
}

#[tokio::test]
async fn draft_is_left_alone() {
    let ctx = arrange_context();

    let mut pull_request = arrange_pull_request(10, "feat: add thing", "develop", &[]);
    pull_request.draft = true;

    let outcome = process_pull_request(&ctx, GhPullRequestAction::Opened, pull_request).await;

    assert_eq!(outcome, ReconcileOutcome::Skipped(SkipReason::Draft));
}

#[tokio::test]
async fn unsupported_action_is_left_alone() {
    let ctx = arrange_context();

    let outcome = process_pull_request(
        &ctx,
        GhPullRequestAction::Labeled,
        arrange_pull_request(10, "feat: add thing", "develop", &[]),
    )
    .await;

    assert_eq!(
        outcome,
        ReconcileOutcome::Skipped(SkipReason::UnsupportedAction)
    );
}

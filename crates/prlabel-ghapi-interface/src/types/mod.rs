//! GitHub payload types.

mod common;
mod ping;
mod pulls;
mod reviews;

pub use common::{GhBranch, GhLabel, GhRepository, GhUser};
pub use ping::GhPingEvent;
pub use pulls::{GhPullRequest, GhPullRequestAction, GhPullRequestEvent, GhPullRequestState};
pub use reviews::{GhReview, GhReviewAction, GhReviewEvent, GhReviewState};

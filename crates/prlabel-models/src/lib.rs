//! Domain models.

mod label_decisions;
mod label_operation;
mod policy_label;
mod pull_request_action;
mod pull_request_facts;
mod pull_request_handle;
mod repository_path;
mod review;
mod target_branch;

pub use label_decisions::LabelDecisions;
pub use label_operation::{LabelOperation, LabelOperationKind};
pub use policy_label::{PolicyLabel, PolicyLabelError};
pub use pull_request_action::{PullRequestAction, PullRequestActionError};
pub use pull_request_facts::PullRequestFacts;
pub use pull_request_handle::{PullRequestHandle, PullRequestHandleError};
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use review::{ActiveReviews, ReviewEvent, ReviewVerdict};
pub use target_branch::TargetBranch;

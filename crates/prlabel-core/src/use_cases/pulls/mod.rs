pub(crate) mod preview_pull_request_labels;
pub(crate) mod process_pull_request_event;
pub(crate) mod synchronize_pull_request_labels;

pub use preview_pull_request_labels::PreviewPullRequestLabelsInterface;
pub use process_pull_request_event::ProcessPullRequestEventInterface;
pub use synchronize_pull_request_labels::SynchronizePullRequestLabelsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    preview_pull_request_labels::MockPreviewPullRequestLabelsInterface,
    process_pull_request_event::MockProcessPullRequestEventInterface,
    synchronize_pull_request_labels::MockSynchronizePullRequestLabelsInterface,
};

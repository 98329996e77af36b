//! Fixtures

pub const PING_EVENT_DATA: &str = include_str!("fixtures/ping_event.json");
pub const PULL_REQUEST_OPENED_DATA: &str = include_str!("fixtures/pull_request_opened.json");
pub const PULL_REQUEST_REVIEW_SUBMITTED_DATA: &str =
    include_str!("fixtures/pull_request_review_submitted.json");

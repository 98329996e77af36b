pub(crate) mod handle_review_event;

pub use handle_review_event::HandleReviewEventInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::handle_review_event::MockHandleReviewEventInterface;

use std::collections::BTreeMap;

use prlabel_ghapi_interface::review::{GhReviewApi, GhReviewStateApi};
use prlabel_models::{ActiveReviews, ReviewEvent, ReviewVerdict};

/// Collapses review history into one active review per reviewer.
#[derive(Default)]
pub struct ReviewReducer {
    _private: (),
}

impl ReviewReducer {
    /// Keep the latest submitted review of each reviewer.
    ///
    /// Pending reviews are not submitted yet and never count. On equal
    /// sequences, the event coming last in input wins.
    pub fn reduce(&self, reviews: &[ReviewEvent]) -> ActiveReviews {
        let mut ordered: Vec<&ReviewEvent> = reviews
            .iter()
            .filter(|r| r.verdict != ReviewVerdict::Pending)
            .collect();
        ordered.sort_by_key(|r| r.sequence);

        let mut active = BTreeMap::new();
        for review in ordered.into_iter().rev() {
            active
                .entry(review.reviewer.clone())
                .or_insert_with(|| review.clone());
        }

        active.into()
    }

    /// Convert API reviews to review events, using the review ID as sequence.
    ///
    /// Reviews from deleted accounts have no author and are skipped.
    pub fn events_from_api(&self, reviews: &[GhReviewApi]) -> Vec<ReviewEvent> {
        reviews
            .iter()
            .filter_map(|r| {
                r.user.as_ref().map(|user| {
                    ReviewEvent::new(&user.login, Self::verdict_from_api(r.state), r.id)
                })
            })
            .collect()
    }

    fn verdict_from_api(state: GhReviewStateApi) -> ReviewVerdict {
        match state {
            GhReviewStateApi::Approved => ReviewVerdict::Approved,
            GhReviewStateApi::ChangesRequested => ReviewVerdict::ChangesRequested,
            GhReviewStateApi::Commented => ReviewVerdict::Commented,
            GhReviewStateApi::Dismissed => ReviewVerdict::Dismissed,
            GhReviewStateApi::Pending => ReviewVerdict::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use prlabel_ghapi_interface::types::GhUser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn verdict_of(active: &ActiveReviews, reviewer: &str) -> Option<ReviewVerdict> {
        active.get(reviewer).map(|r| r.verdict)
    }

    #[test]
    fn latest_review_wins() {
        let active = ReviewReducer::default().reduce(&[
            ReviewEvent::new("alice", ReviewVerdict::ChangesRequested, 1),
            ReviewEvent::new("bob", ReviewVerdict::Approved, 2),
            ReviewEvent::new("alice", ReviewVerdict::Approved, 3),
        ]);

        assert_eq!(active.len(), 2);
        assert_eq!(verdict_of(&active, "alice"), Some(ReviewVerdict::Approved));
        assert_eq!(verdict_of(&active, "bob"), Some(ReviewVerdict::Approved));
        assert_eq!(active.approval_count(), 2);
        assert!(!active.changes_requested_present());
    }

    #[test]
    fn order_follows_sequence_not_input() {
        let active = ReviewReducer::default().reduce(&[
            ReviewEvent::new("alice", ReviewVerdict::Approved, 10),
            ReviewEvent::new("alice", ReviewVerdict::ChangesRequested, 4),
        ]);

        assert_eq!(verdict_of(&active, "alice"), Some(ReviewVerdict::Approved));
        assert_eq!(active.get("alice").map(|r| r.sequence), Some(10));
    }

    #[test]
    fn later_comment_replaces_approval() {
        let active = ReviewReducer::default().reduce(&[
            ReviewEvent::new("alice", ReviewVerdict::Approved, 1),
            ReviewEvent::new("alice", ReviewVerdict::Commented, 2),
        ]);

        assert_eq!(verdict_of(&active, "alice"), Some(ReviewVerdict::Commented));
        assert_eq!(active.approval_count(), 0);
    }

    #[test]
    fn dismissed_review_stays_active() {
        let active = ReviewReducer::default().reduce(&[
            ReviewEvent::new("alice", ReviewVerdict::ChangesRequested, 1),
            ReviewEvent::new("alice", ReviewVerdict::Dismissed, 2),
        ]);

        assert_eq!(verdict_of(&active, "alice"), Some(ReviewVerdict::Dismissed));
        assert!(!active.changes_requested_present());
    }

    #[test]
    fn pending_reviews_are_dropped() {
        let active = ReviewReducer::default().reduce(&[
            ReviewEvent::new("alice", ReviewVerdict::Approved, 1),
            ReviewEvent::new("alice", ReviewVerdict::Pending, 2),
            ReviewEvent::new("bob", ReviewVerdict::Pending, 3),
        ]);

        assert_eq!(active.len(), 1);
        assert_eq!(verdict_of(&active, "alice"), Some(ReviewVerdict::Approved));
        assert_eq!(verdict_of(&active, "bob"), None);
    }

    #[test]
    fn empty_history() {
        let active = ReviewReducer::default().reduce(&[]);
        assert!(active.is_empty());
        assert_eq!(active.approval_count(), 0);
    }

    #[test]
    fn one_active_review_per_reviewer() {
        let reviewers = ["alice", "bob", "carol"];
        let verdicts = [
            ReviewVerdict::Approved,
            ReviewVerdict::ChangesRequested,
            ReviewVerdict::Commented,
            ReviewVerdict::Dismissed,
        ];

        let events: Vec<ReviewEvent> = (0..24u64)
            .map(|i| {
                ReviewEvent::new(
                    reviewers[(i as usize * 7) % reviewers.len()],
                    verdicts[(i as usize * 5) % verdicts.len()],
                    i,
                )
            })
            .collect();

        let active = ReviewReducer::default().reduce(&events);
        assert_eq!(active.len(), reviewers.len());

        for reviewer in reviewers {
            let last = events
                .iter()
                .filter(|e| e.reviewer == reviewer)
                .max_by_key(|e| e.sequence)
                .map(|e| e.verdict);
            assert_eq!(verdict_of(&active, reviewer), last, "reviewer {reviewer}");
        }
    }

    #[test]
    fn events_from_api() {
        let events = ReviewReducer::default().events_from_api(&[
            GhReviewApi {
                id: 42,
                user: Some(GhUser::new("alice")),
                state: GhReviewStateApi::ChangesRequested,
                ..Default::default()
            },
            GhReviewApi {
                id: 43,
                user: Some(GhUser::new("bob")),
                state: GhReviewStateApi::Pending,
                ..Default::default()
            },
        ]);

        assert_eq!(
            events,
            vec![
                ReviewEvent::new("alice", ReviewVerdict::ChangesRequested, 42),
                ReviewEvent::new("bob", ReviewVerdict::Pending, 43),
            ]
        );
    }

    #[test]
    fn reviews_without_author_are_skipped() {
        let reducer = ReviewReducer::default();
        let events = reducer.events_from_api(&[
            GhReviewApi {
                id: 1,
                user: None,
                state: GhReviewStateApi::ChangesRequested,
                ..Default::default()
            },
            GhReviewApi {
                id: 2,
                user: Some(GhUser::new("bob")),
                state: GhReviewStateApi::Approved,
                ..Default::default()
            },
        ]);

        assert_eq!(events, vec![ReviewEvent::new("bob", ReviewVerdict::Approved, 2)]);

        let active = reducer.reduce(&events);
        assert_eq!(active.approval_count(), 1);
        assert!(!active.changes_requested_present());
    }
}

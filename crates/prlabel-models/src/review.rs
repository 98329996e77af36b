use std::{collections::BTreeMap, fmt::Display};

/// Submitted review verdict.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReviewVerdict {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    #[default]
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending (not submitted yet).
    Pending,
}

impl Display for ReviewVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Approved => "approved",
            Self::ChangesRequested => "changes_requested",
            Self::Commented => "commented",
            Self::Dismissed => "dismissed",
            Self::Pending => "pending",
        })
    }
}

/// One review submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewEvent {
    /// Reviewer login.
    pub reviewer: String,
    /// Verdict.
    pub verdict: ReviewVerdict,
    /// Submission order, higher is more recent.
    pub sequence: u64,
}

impl ReviewEvent {
    pub fn new<T: Into<String>>(reviewer: T, verdict: ReviewVerdict, sequence: u64) -> Self {
        Self {
            reviewer: reviewer.into(),
            verdict,
            sequence,
        }
    }
}

/// Latest review of each reviewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveReviews {
    reviews: BTreeMap<String, ReviewEvent>,
}

impl ActiveReviews {
    /// Active review of a reviewer.
    pub fn get(&self, reviewer: &str) -> Option<&ReviewEvent> {
        self.reviews.get(reviewer)
    }

    /// Iterate on active reviews, by reviewer.
    pub fn iter(&self) -> impl Iterator<Item = &ReviewEvent> + '_ {
        self.reviews.values()
    }

    /// Count active reviews with an approval.
    pub fn approval_count(&self) -> usize {
        self.count_verdict(ReviewVerdict::Approved)
    }

    /// At least one active review requests changes.
    pub fn changes_requested_present(&self) -> bool {
        self.count_verdict(ReviewVerdict::ChangesRequested) > 0
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    fn count_verdict(&self, verdict: ReviewVerdict) -> usize {
        self.iter().filter(|r| r.verdict == verdict).count()
    }
}

/// Reviews must already be reduced to one per reviewer.
impl From<BTreeMap<String, ReviewEvent>> for ActiveReviews {
    fn from(reviews: BTreeMap<String, ReviewEvent>) -> Self {
        Self { reviews }
    }
}

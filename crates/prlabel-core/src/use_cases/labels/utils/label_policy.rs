use prlabel_models::{LabelDecisions, PolicyLabel, PullRequestFacts, TargetBranch};

/// Maps pull request facts to desired labels.
#[derive(Default)]
pub struct LabelPolicyEvaluator {
    _private: (),
}

impl LabelPolicyEvaluator {
    /// Compute desired presence of each policy label.
    ///
    /// Labels without decision are left untouched by synchronization.
    pub fn evaluate(&self, facts: &PullRequestFacts) -> LabelDecisions {
        let mut decisions = LabelDecisions::new();

        if let Some(missing) = self.missing_changeset(facts) {
            decisions.set(PolicyLabel::MissingChangeset, missing);
        }

        decisions.select_exclusive(&PolicyLabel::REVIEW_STATUS, Some(self.review_status(facts)));
        decisions.set(PolicyLabel::RequiresChanges, facts.changes_requested_present);
        decisions.select_exclusive(
            &PolicyLabel::RELEASE_ROUTING,
            facts.target_branch.map(Self::routing_label),
        );
        decisions.set(PolicyLabel::Hotfix, facts.is_hotfix);

        decisions
    }

    /// Only flag a missing changeset on fresh opens, always clear it once found.
    fn missing_changeset(&self, facts: &PullRequestFacts) -> Option<bool> {
        if facts.has_changeset {
            Some(false)
        } else if facts.action.map(|a| a.is_fresh_open()).unwrap_or(false) {
            Some(true)
        } else {
            None
        }
    }

    fn review_status(&self, facts: &PullRequestFacts) -> PolicyLabel {
        if facts.is_approved() {
            PolicyLabel::Approved
        } else if facts.needs_additional_approval() {
            PolicyLabel::AdditionalApprovalNeeded
        } else {
            PolicyLabel::ReadyForReview
        }
    }

    fn routing_label(target_branch: TargetBranch) -> PolicyLabel {
        match target_branch {
            TargetBranch::Staging => PolicyLabel::ReleaseToStaging,
            TargetBranch::Release => PolicyLabel::Release,
            TargetBranch::MasterToDevelop => PolicyLabel::MasterToDevelop,
        }
    }
}

#[cfg(test)]
mod tests {
    use prlabel_models::PullRequestAction;
    use pretty_assertions::assert_eq;

    use super::*;

    fn evaluate(facts: PullRequestFacts) -> LabelDecisions {
        LabelPolicyEvaluator::default().evaluate(&facts)
    }

    fn desired_count(decisions: &LabelDecisions, group: &[PolicyLabel]) -> usize {
        group
            .iter()
            .filter(|l| decisions.get(**l) == Some(true))
            .count()
    }

    #[test]
    fn missing_changeset_on_fresh_open() {
        for action in [PullRequestAction::Opened, PullRequestAction::Reopened] {
            let decisions = evaluate(PullRequestFacts {
                action: Some(action),
                ..Default::default()
            });
            assert_eq!(decisions.get(PolicyLabel::MissingChangeset), Some(true));
        }
    }

    #[test]
    fn missing_changeset_left_as_is_on_other_actions() {
        for action in [
            PullRequestAction::Edited,
            PullRequestAction::Synchronize,
            PullRequestAction::ReadyForReview,
            PullRequestAction::ReviewSubmitted,
        ] {
            let decisions = evaluate(PullRequestFacts {
                action: Some(action),
                ..Default::default()
            });
            assert_eq!(decisions.get(PolicyLabel::MissingChangeset), None);
        }

        let decisions = evaluate(PullRequestFacts::default());
        assert_eq!(decisions.get(PolicyLabel::MissingChangeset), None);
    }

    #[test]
    fn missing_changeset_cleared_when_found() {
        for action in [None, Some(PullRequestAction::Opened), Some(PullRequestAction::Synchronize)] {
            let decisions = evaluate(PullRequestFacts {
                action,
                has_changeset: true,
                ..Default::default()
            });
            assert_eq!(decisions.get(PolicyLabel::MissingChangeset), Some(false));
        }
    }

    #[test]
    fn review_status_tiers() {
        let expected = [
            (0, PolicyLabel::ReadyForReview),
            (1, PolicyLabel::AdditionalApprovalNeeded),
            (2, PolicyLabel::Approved),
            (3, PolicyLabel::Approved),
            (7, PolicyLabel::Approved),
        ];

        for (approval_count, label) in expected {
            let decisions = evaluate(PullRequestFacts {
                approval_count,
                ..Default::default()
            });

            assert_eq!(decisions.get(label), Some(true), "{approval_count} approvals");
            assert_eq!(desired_count(&decisions, &PolicyLabel::REVIEW_STATUS), 1);
        }
    }

    #[test]
    fn review_status_with_custom_threshold() {
        let decisions = evaluate(PullRequestFacts {
            approval_count: 2,
            needed_approvals: 3,
            ..Default::default()
        });
        assert_eq!(
            decisions.get(PolicyLabel::AdditionalApprovalNeeded),
            Some(true)
        );
    }

    #[test]
    fn requires_changes() {
        let decisions = evaluate(PullRequestFacts {
            changes_requested_present: true,
            approval_count: 2,
            ..Default::default()
        });

        // Approvals and change requests are reported independently.
        assert_eq!(decisions.get(PolicyLabel::RequiresChanges), Some(true));
        assert_eq!(decisions.get(PolicyLabel::Approved), Some(true));

        let decisions = evaluate(PullRequestFacts::default());
        assert_eq!(decisions.get(PolicyLabel::RequiresChanges), Some(false));
    }

    #[test]
    fn release_routing_is_exclusive() {
        let expected = [
            (Some(TargetBranch::Staging), Some(PolicyLabel::ReleaseToStaging)),
            (Some(TargetBranch::Release), Some(PolicyLabel::Release)),
            (
                Some(TargetBranch::MasterToDevelop),
                Some(PolicyLabel::MasterToDevelop),
            ),
            (None, None),
        ];

        for (target_branch, label) in expected {
            let decisions = evaluate(PullRequestFacts {
                target_branch,
                ..Default::default()
            });

            let desired: Vec<PolicyLabel> = PolicyLabel::RELEASE_ROUTING
                .into_iter()
                .filter(|l| decisions.get(*l) == Some(true))
                .collect();
            assert_eq!(desired, label.into_iter().collect::<Vec<_>>());
            for routing_label in PolicyLabel::RELEASE_ROUTING {
                assert!(decisions.get(routing_label).is_some());
            }
        }
    }

    #[test]
    fn hotfix() {
        let decisions = evaluate(PullRequestFacts {
            is_hotfix: true,
            ..Default::default()
        });
        assert_eq!(decisions.get(PolicyLabel::Hotfix), Some(true));

        let decisions = evaluate(PullRequestFacts::default());
        assert_eq!(decisions.get(PolicyLabel::Hotfix), Some(false));
    }

    #[test]
    fn decides_every_label_on_fresh_open() {
        let decisions = evaluate(PullRequestFacts {
            action: Some(PullRequestAction::Opened),
            ..Default::default()
        });
        assert_eq!(decisions.len(), PolicyLabel::ALL.len());
    }
}

use async_trait::async_trait;
use prlabel_models::{LabelOperation, LabelOperationKind, PullRequestHandle};
use shaku::{Component, Interface};
use tracing::warn;

use super::utils::ApplyReport;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApplyLabelOperationsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        operations: &[LabelOperation],
    ) -> Result<ApplyReport>;
}

#[derive(Component)]
#[shaku(interface = ApplyLabelOperationsInterface)]
pub(crate) struct ApplyLabelOperations;

#[async_trait]
impl ApplyLabelOperationsInterface for ApplyLabelOperations {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle, operations = operations.len()), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        operations: &[LabelOperation],
    ) -> Result<ApplyReport> {
        let (to_add, to_remove) = Self::split_operations(operations);
        let mut report = ApplyReport::default();

        if !to_add.is_empty() {
            ctx.api_service
                .issue_labels_add(
                    pr_handle.owner(),
                    pr_handle.name(),
                    pr_handle.number(),
                    &to_add,
                )
                .await?;
            report.added = to_add;
        }

        for label in to_remove {
            match ctx
                .api_service
                .issue_labels_remove(pr_handle.owner(), pr_handle.name(), pr_handle.number(), &label)
                .await
            {
                Ok(()) => report.removed.push(label),
                Err(e) => {
                    warn!(
                        pr_handle = %pr_handle,
                        label = %label,
                        error = %e,
                        message = "Could not remove label"
                    );
                    report.failed_removals.push(label);
                }
            }
        }

        Ok(report)
    }
}

impl ApplyLabelOperations {
    fn split_operations(operations: &[LabelOperation]) -> (Vec<String>, Vec<String>) {
        let mut to_add = vec![];
        let mut to_remove = vec![];

        for operation in operations {
            match operation.kind {
                LabelOperationKind::Add => to_add.push(operation.label.clone()),
                LabelOperationKind::Remove => to_remove.push(operation.label.clone()),
            }
        }

        (to_add, to_remove)
    }
}

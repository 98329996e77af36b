use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use prlabel_core::use_cases::{labels::ReconcileOutcome, pulls::SynchronizePullRequestLabelsInterface};
use prlabel_models::{PullRequestAction, RepositoryPath};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Reconcile pull request labels from upstream
#[derive(Debug, Parser)]
pub(crate) struct PullRequestSyncCommand {
    /// Repository path (e.g. 'MyOrganization/my-project')
    repository_path: RepositoryPath,

    /// Pull request number
    number: u64,

    /// Triggering action to simulate
    #[arg(long, default_value = "synchronize")]
    action: PullRequestAction,
}

#[async_trait]
impl Command for PullRequestSyncCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let (repo_owner, repo_name) = self.repository_path.components();

        let synchronize: &dyn SynchronizePullRequestLabelsInterface =
            ctx.core_module.resolve_ref();
        let outcome = synchronize
            .run(
                &ctx.as_core_context(),
                &(repo_owner, repo_name, self.number).into(),
                self.action,
            )
            .await?;

        let mut writer = ctx.writer.write().await;
        match outcome {
            ReconcileOutcome::Skipped(reason) => writeln!(
                writer,
                "Pull request #{} from '{}' skipped: {}.",
                self.number, self.repository_path, reason
            )?,
            ReconcileOutcome::Applied(report) if report.is_noop() => writeln!(
                writer,
                "Pull request #{} from '{}': {}",
                self.number, self.repository_path, report
            )?,
            ReconcileOutcome::Applied(report) => write!(
                writer,
                "Pull request #{} from '{}' updated:\n{}",
                self.number, self.repository_path, report
            )?,
        }

        Ok(())
    }
}

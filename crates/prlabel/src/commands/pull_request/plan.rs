use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use prlabel_core::use_cases::{labels::LabelEvaluation, pulls::PreviewPullRequestLabelsInterface};
use prlabel_models::{PullRequestAction, PullRequestFacts, RepositoryPath};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show label operations for a pull request, without applying them
#[derive(Debug, Parser)]
pub(crate) struct PullRequestPlanCommand {
    /// Repository path (e.g. 'MyOrganization/my-project')
    repository_path: RepositoryPath,

    /// Pull request number
    number: u64,

    /// Triggering action to simulate
    #[arg(long, default_value = "synchronize")]
    action: PullRequestAction,
}

#[async_trait]
impl Command for PullRequestPlanCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let (repo_owner, repo_name) = self.repository_path.components();

        let preview: &dyn PreviewPullRequestLabelsInterface = ctx.core_module.resolve_ref();
        let evaluation = preview
            .run(
                &ctx.as_core_context(),
                &(repo_owner, repo_name, self.number).into(),
                self.action,
            )
            .await?;

        let mut writer = ctx.writer.write().await;
        match evaluation {
            LabelEvaluation::Skipped(reason) => {
                writeln!(
                    writer,
                    "Pull request #{} from '{}' skipped: {}.",
                    self.number, self.repository_path, reason
                )?;
            }
            LabelEvaluation::Planned { facts, operations } => {
                writeln!(
                    writer,
                    "Pull request #{} from '{}' ({}):",
                    self.number, self.repository_path, self.action
                )?;
                write_facts(&mut *writer, &facts)?;

                if operations.is_empty() {
                    writeln!(writer, "Labels already in sync.")?;
                } else {
                    for operation in operations {
                        writeln!(writer, "{operation}")?;
                    }
                }
            }
        }

        Ok(())
    }
}

fn write_facts(writer: &mut dyn Write, facts: &PullRequestFacts) -> std::io::Result<()> {
    let yes_no = |value: bool| if value { "yes" } else { "no" };

    writeln!(
        writer,
        "  approvals: {}/{}",
        facts.approval_count, facts.needed_approvals
    )?;
    writeln!(writer, "  changeset: {}", yes_no(facts.has_changeset))?;
    writeln!(
        writer,
        "  changes requested: {}",
        yes_no(facts.changes_requested_present)
    )?;
    writeln!(writer, "  hotfix: {}", yes_no(facts.is_hotfix))?;
    match facts.target_branch {
        Some(target) => writeln!(writer, "  target: {target:?}"),
        None => writeln!(writer, "  target: none"),
    }
}

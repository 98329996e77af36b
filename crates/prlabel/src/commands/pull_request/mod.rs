use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod plan;
mod sync;

use self::{plan::PullRequestPlanCommand, sync::PullRequestSyncCommand};

/// Manage pull request labels
#[derive(Parser)]
pub(crate) struct PullRequestCommand {
    #[clap(subcommand)]
    inner: PullRequestSubCommand,
}

#[async_trait]
impl Command for PullRequestCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
pub(crate) enum PullRequestSubCommand {
    Plan(PullRequestPlanCommand),
    Sync(PullRequestSyncCommand),
}

#[async_trait]
impl Command for PullRequestSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Plan(sub) => sub.execute(ctx).await,
            Self::Sync(sub) => sub.execute(ctx).await,
        }
    }
}

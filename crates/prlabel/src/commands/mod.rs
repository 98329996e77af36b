//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use prlabel_config::Config;
use prlabel_core::{CoreContext, CoreModule};
use prlabel_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{pull_request::PullRequestCommand, server::ServerCommand};
use crate::Result;

mod pull_request;
mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    PullRequests(PullRequestCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::PullRequests(sub) => sub.execute(ctx).await,
        }
    }
}

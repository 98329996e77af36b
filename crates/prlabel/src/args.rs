use std::sync::Arc;

use clap::Parser;
use prlabel_config::{ApiDriver, Config};
use prlabel_core::CoreModule;
use prlabel_ghapi_interface::ApiService;
use prlabel_ghapi_null::NullApiService;
use prlabel_server::ghapi::MetricsApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let api_service: Box<dyn ApiService> = match config.api.driver {
                ApiDriver::GitHub => {
                    info!("Using MetricsApiService API driver");
                    Box::new(MetricsApiService::new(config.clone()))
                }
                ApiDriver::Null => {
                    info!("Using NullApiService API driver");
                    Box::new(NullApiService::new())
                }
            };

            let ctx = CommandContext {
                config,
                api_service,
                core_module: CoreModule::builder().build(),
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        actix_rt::System::with_tokio_rt(move || runtime).block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}

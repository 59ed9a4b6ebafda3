use super::args::{Cli, Commands, ConfigCommand, RunArgs};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogSink};
use anyhow::Result;
use log::debug;
use retroclock_runtime::resolve_config_path;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, None | Some(Commands::Run(_)));
    logging::init(
        cli.log_level,
        LogSink::select(cli.log_file.as_deref(), interactive),
    )?;

    let config = cli.config.as_deref();

    let Some(command) = cli.command else {
        debug!("no subcommand, opening the clock");
        let ctx = ExecutionContext::load(config)?;
        return handlers::run::handle(&ctx, &RunArgs::default());
    };

    match command {
        Commands::Run(args) => {
            let ctx = ExecutionContext::load(config)?;
            handlers::run::handle(&ctx, &args)
        }

        Commands::Show { face, output } => {
            let ctx = ExecutionContext::load(config)?;
            handlers::show::handle(&ctx, &face, output)
        }

        Commands::Digits { color, output } => {
            let ctx = ExecutionContext::load(config)?;
            handlers::digits::handle(&ctx, color.as_deref(), output)
        }

        Commands::Calendar { color, at, output } => {
            let ctx = ExecutionContext::load(config)?;
            handlers::calendar::handle(&ctx, color.as_deref(), at, output)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => {
                handlers::config::init(&resolve_config_path(config)?, force)
            }
            ConfigCommand::Show { output } => {
                let ctx = ExecutionContext::load(config)?;
                handlers::config::show(&ctx, output)
            }
            ConfigCommand::Path => handlers::config::path(&resolve_config_path(config)?),
        },
    }
}

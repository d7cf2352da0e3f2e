use super::args::{Cli, Commands, ExpandArgs};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging::{self, LogTarget};
use crate::types::OutputFormat;
use anyhow::Result;
use grouplist_engine::ExpansionState;
use grouplist_store::RecordSource;
use is_terminal::IsTerminal;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Browse {
        expand: ExpandArgs::default(),
    });

    let interactive = is_interactive(&command) && std::io::stdout().is_terminal();
    let target = if interactive {
        LogTarget::for_interactive(cli.log_file.clone())
    } else {
        LogTarget::for_console(cli.log_file.clone())
    };
    logging::init(cli.log_level, target)?;
    tracing::debug!(?config, interactive, "starting");

    match command {
        Commands::Browse { expand } => handlers::browse::handle(
            &HandlerContext::new(OutputFormat::Plain),
            resolve_source(cli.data, &config),
            initial_expansion(&expand, &config),
            expand.expand_all,
            &config,
        ),

        Commands::List { expand, format } => handlers::list::handle(
            &HandlerContext::new(format),
            &resolve_source(cli.data, &config),
            initial_expansion(&expand, &config),
            expand.expand_all,
        ),

        Commands::Demo { print, format } => handlers::demo::handle(print, format, &config),

        Commands::Config { format } => {
            handlers::config::handle(&HandlerContext::new(format), cli.config.as_deref(), &config)
        }
    }
}

fn is_interactive(command: &Commands) -> bool {
    match command {
        Commands::Browse { .. } => true,
        Commands::Demo { print, .. } => !print,
        Commands::List { .. } | Commands::Config { .. } => false,
    }
}

/// `--data` beats the config file, which beats the bundled asset.
fn resolve_source(data_flag: Option<PathBuf>, config: &Config) -> RecordSource {
    data_flag
        .or_else(|| config.data_path.clone())
        .map_or(RecordSource::Bundled, RecordSource::File)
}

/// `--expand` replaces the configured groups rather than adding to them.
fn initial_expansion(args: &ExpandArgs, config: &Config) -> ExpansionState {
    if args.expand.is_empty() {
        ExpansionState::seeded(config.expanded.iter().copied())
    } else {
        ExpansionState::seeded(args.expand.iter().copied())
    }
}

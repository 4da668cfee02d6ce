use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level.into());

    let config_path = resolve_config_path(cli.config.as_deref())?;
    log::debug!("Using configuration {}", config_path.display());

    if let Commands::Config {
        command: ConfigCommand::Init { force },
    } = cli.command
    {
        return handlers::config::init(&config_path, force);
    }

    let config = Config::load_from(&config_path)?;
    let format = cli.format;

    match cli.command {
        Commands::LoadSession { csv_path } => handlers::load_session::handle(&csv_path, format),

        Commands::Participants { data_dir } => {
            handlers::participants::handle(data_dir.as_deref(), &config, format)
        }

        Commands::Summary { csv_path } => handlers::summary::handle(&csv_path, format),

        Commands::Compare {
            paths_a,
            paths_b,
            report,
        } => handlers::compare::handle(&paths_a, &paths_b, report.as_deref(), &config, format),

        Commands::Report { csv_path, out_path } => {
            handlers::report::handle(&csv_path, &out_path, &config, format)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&config, &config_path, format),
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}

fn init_logging(level: log::LevelFilter) {
    // RUST_LOG, when set, refines the level chosen on the command line
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .try_init();
}

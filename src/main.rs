use banner_cli::AppError;
use banner_cli::cli::dispatcher::{Dispatcher, RenderOptions};
use banner_cli::cli::main_types::Cli;
use banner_cli::storage::config::Config;
use banner_cli::utils::logging::{VerboseLogger, init_logging, log_error};
use clap::Parser;
use std::path::PathBuf;

fn exit_with(err: AppError) -> ! {
    eprintln!("{}: {}", err.severity().label(), err);
    if let Some(hint) = err.troubleshooting_hint() {
        eprintln!("hint: {}", hint);
    }
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let logger = VerboseLogger::new(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            log_error("Error loading config");
            exit_with(err);
        }
    };

    if let Some(config_dir) = &cli.config_dir {
        logger.log_with_prefix("Using config directory", config_dir);
    }

    let result = RenderOptions::from_cli(&cli).and_then(|options| {
        let dispatcher = Dispatcher::new(config, config_path, options, cli.verbose);
        dispatcher.dispatch(cli.command)
    });

    if let Err(e) = result {
        exit_with(e);
    }
}

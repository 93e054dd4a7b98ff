//! notebox - a small notes service backed by a JSON file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod routes;
pub mod server;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_list, handle_new, handle_serve, handle_show},
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(cli.verbose, config.log_format(cli.log_format));
    let store_path = config.store_path(cli.store.as_ref());

    match &cli.command {
        Command::Serve(args) => handle_serve(args, &store_path, &config),
        Command::List(args) => handle_list(args, &store_path),
        Command::Show(args) => handle_show(args, &store_path),
        Command::New(args) => handle_new(args, &store_path),
    }
}

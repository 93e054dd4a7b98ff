//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use logging::LogFormat;
use output::OutputFormat;

/// notebox - a small notes service backed by a JSON file
#[derive(Parser, Debug)]
#[command(name = "notebox", version, about, long_about = None)]
pub struct Cli {
    /// Notes file (overrides config file)
    #[arg(short = 's', long, global = true)]
    pub store: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// List all notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Create a new note
    New(NewArgs),
}

/// Arguments for the `serve` command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on, e.g. 127.0.0.1:3000
    #[arg(short, long)]
    pub bind: Option<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title (at least 5 characters)
    pub title: String,

    /// Note body
    #[arg(short, long)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_store_after_subcommand() {
        let cli = Cli::try_parse_from(["notebox", "ls", "--store", "/tmp/n.json"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/n.json")));
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["notebox", "-vv", "serve"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn new_takes_optional_content() {
        let cli = Cli::try_parse_from(["notebox", "new", "My Note", "-c", "Hello"]).unwrap();
        match cli.command {
            Command::New(args) => {
                assert_eq!(args.title, "My Note");
                assert_eq!(args.content.as_deref(), Some("Hello"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_bind_is_optional() {
        let cli = Cli::try_parse_from(["notebox", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        match cli.command {
            Command::Serve(args) => assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_id() {
        assert!(Cli::try_parse_from(["notebox", "show"]).is_err());
    }
}

//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat, truncate_str};
use crate::domain::Note;
use crate::infra::JsonFileStore;
use crate::routes::{RouteError, list_notes};

pub fn handle_list(args: &ListArgs, store_path: &Path) -> Result<()> {
    let store = JsonFileStore::new(store_path);

    let notes = match list_notes(&store) {
        Ok(notes) => notes,
        // An empty store is not a failure on the command line.
        Err(RouteError::Caught(response)) => {
            match args.format {
                OutputFormat::Human => println!("{}", response.message()),
                OutputFormat::Json => {
                    let output = Output::new(Vec::<Note>::new());
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
            return Ok(());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to list notes in {}", store_path.display()));
        }
    };

    match args.format {
        OutputFormat::Human => {
            println!("{:<26}  {:<50}", "ID", "Title");
            println!("{:<26}  {:<50}", "-".repeat(26), "-".repeat(50));
            for note in &notes {
                println!("{:<26}  {:<50}", note.id(), truncate_str(note.title(), 50));
            }
            println!();
            println!("{} note(s)", notes.len());
        }
        OutputFormat::Json => {
            let output = Output::new(&notes);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

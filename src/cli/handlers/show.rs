//! Show command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::cli::ShowArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::NoteId;
use crate::infra::JsonFileStore;
use crate::routes::{RouteError, note_detail};

pub fn handle_show(args: &ShowArgs, store_path: &Path) -> Result<()> {
    let id: NoteId = args
        .id
        .parse()
        .with_context(|| format!("invalid note id: {:?}", args.id))?;
    let store = JsonFileStore::new(store_path);

    let note = match note_detail(&store, &id) {
        Ok(note) => note,
        Err(RouteError::Caught(response)) => bail!("{}", response.message()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read notes in {}", store_path.display()));
        }
    };

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();
            match note.id().timestamp() {
                Some(created) => println!(
                    "ID: {}  Created: {}",
                    note.id(),
                    created.format("%Y-%m-%d %H:%M")
                ),
                None => println!("ID: {}", note.id()),
            }
            if !note.content().is_empty() {
                println!();
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&note))?);
        }
    }

    Ok(())
}

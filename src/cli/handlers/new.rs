//! New note command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::ensure_store_dir;
use crate::cli::NewArgs;
use crate::domain::{RawSubmission, UlidGenerator};
use crate::infra::JsonFileStore;
use crate::routes::{ActionOutcome, create_note};

pub fn handle_new(args: &NewArgs, store_path: &Path) -> Result<()> {
    ensure_store_dir(store_path)?;
    let store = JsonFileStore::new(store_path);

    let raw = RawSubmission {
        title: Some(args.title.clone()),
        content: args.content.clone(),
    };

    let outcome = create_note(&store, &UlidGenerator::new(), raw)
        .with_context(|| format!("failed to save note to {}", store_path.display()))?;

    match outcome {
        ActionOutcome::Redirect { created, .. } => {
            println!("Created note {}", created.id());
            Ok(())
        }
        ActionOutcome::Invalid(failure) => bail!("{}", failure.message),
    }
}

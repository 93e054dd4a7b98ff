//! Command handlers for the CLI.

mod list;
mod new;
mod serve;
mod show;

use anyhow::{Context, Result};
use std::path::Path;

pub use list::handle_list;
pub use new::handle_new;
pub use serve::handle_serve;
pub use show::handle_show;

/// Creates the directory that will hold the notes file, if any.
pub(crate) fn ensure_store_dir(store_path: &Path) -> Result<()> {
    if let Some(parent) = store_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create store directory: {}", parent.display())
        })?;
    }
    Ok(())
}

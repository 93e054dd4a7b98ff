//! Serve command handler.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::net::TcpListener;
use tracing::info;

use super::ensure_store_dir;
use crate::cli::ServeArgs;
use crate::cli::config::Config;
use crate::domain::UlidGenerator;
use crate::infra::JsonFileStore;
use crate::server::{self, AppState};

pub fn handle_serve(args: &ServeArgs, store_path: &Path, config: &Config) -> Result<()> {
    ensure_store_dir(store_path)?;
    let bind = config.bind_addr(args.bind.as_deref());
    let state = AppState::new(JsonFileStore::new(store_path), UlidGenerator::new());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        let listener = TcpListener::bind(&bind)
            .await
            .with_context(|| format!("failed to bind {bind}"))?;
        info!(store = %store_path.display(), "serving notes");
        server::serve(listener, state).await.context("server error")
    })
}

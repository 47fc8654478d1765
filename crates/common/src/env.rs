//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::info;

/// Ensure the document data directory exists, creating it if needed.
pub async fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(data_dir).await.is_err() {
        info!(%data_dir, "data directory missing; creating it");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}

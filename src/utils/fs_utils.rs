// File system utilities

use std::path::Path;

use crate::utils::error::Result;

/// Create a directory and any missing parents; an existing directory is success.
pub async fn ensure_directory_exists(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

/// Write a file, replacing any previous content.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content).await?;
    Ok(())
}

/// Create an empty file, truncating it if it already exists.
pub async fn touch(path: &Path) -> Result<()> {
    tokio::fs::File::create(path).await?;
    Ok(())
}

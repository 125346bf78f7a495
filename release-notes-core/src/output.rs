// output module - writes the generated notes to disk

use std::path::Path;

use tracing::info;

use crate::error::{ReleaseNotesError, Result};

/// write the notes verbatim, replacing any previous file at `path`
pub async fn write_release_notes(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content.as_bytes())
        .await
        .map_err(|source| ReleaseNotesError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), bytes = content.len(), "release notes written");
    Ok(())
}

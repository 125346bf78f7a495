// release-notes-core/src/lib.rs

// declare modules
pub mod ai;
pub mod config;
pub mod error;
pub mod output;

use std::path::PathBuf;

use tracing::warn;

// re-export key structs/functions for external use by other crates
pub use console::style; // re-export for the CLI crate's printing
pub use dotenv::dotenv;
pub use indicatif::{ProgressBar, ProgressStyle};

pub use crate::ai::{build_request, request_completion};
pub use crate::config::Config;
pub use crate::error::{ReleaseNotesError, Result};
pub use crate::output::write_release_notes;

/// what a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNotes {
    pub path: PathBuf,
    pub bytes: usize,
    pub model: String,
}

/// generate release notes for `config` and write them to `config.output_path`.
///
/// the output file is only touched once the api has returned usable content.
pub async fn generate_release_notes(config: &Config) -> Result<GeneratedNotes> {
    for name in config.missing_required() {
        warn!(variable = *name, "environment variable is not set, sending empty value");
    }

    let request = build_request(config);
    let content = request_completion(config, &request).await?;

    write_release_notes(&config.output_path, &content).await?;

    Ok(GeneratedNotes {
        path: config.output_path.clone(),
        bytes: content.len(),
        model: request.model,
    })
}

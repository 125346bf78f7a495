use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

#[derive(Debug, Error)]
pub enum ReleaseNotesError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to send request to openrouter api: {0}")]
    Network(#[source] reqwest::Error),

    #[error("openrouter api error ({status}): {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("failed to parse openrouter api response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("openrouter api response has no message content in choices[0]")]
    MissingContent,

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

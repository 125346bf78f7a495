// configuration module - everything the generator reads from the environment

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const COMMITS_VAR: &str = "COMMITS";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const RELEASE_NAME_VAR: &str = "DOCKERLIKE_RELEASE_NAME";
pub const VERSION_VAR: &str = "NEW_VERSION";
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const SITE_URL_VAR: &str = "SITE_URL";
pub const SITE_NAME_VAR: &str = "SITE_NAME";
pub const MODEL_VAR: &str = "OPENROUTER_MODEL";
pub const ENDPOINT_VAR: &str = "OPENROUTER_ENDPOINT";

pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-maverick";
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_OUTPUT_FILE: &str = "release_notes.md";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// everything needed for one release notes run.
///
/// required values that are absent are kept as empty strings and their names
/// are recorded in `missing`; the request is still sent.
#[derive(Clone)]
pub struct Config {
    pub commits: String,
    pub repository: String,
    pub release_name: String,
    pub version: String,
    pub api_key: String,
    pub site_url: String,
    pub site_name: String,
    pub model: String,
    pub endpoint: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
    missing: Vec<&'static str>,
}

impl Config {
    /// read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |key: &'static str| match lookup(key) {
            Some(value) => value,
            None => {
                missing.push(key);
                String::new()
            }
        };

        let commits = required(COMMITS_VAR);
        let repository = required(REPOSITORY_VAR);
        let release_name = required(RELEASE_NAME_VAR);
        let version = required(VERSION_VAR);
        let api_key = required(API_KEY_VAR);

        let model = lookup(MODEL_VAR)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let endpoint = lookup(ENDPOINT_VAR)
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            commits,
            repository,
            release_name,
            version,
            api_key,
            site_url: lookup(SITE_URL_VAR).unwrap_or_default(),
            site_name: lookup(SITE_NAME_VAR).unwrap_or_default(),
            model,
            endpoint,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timeout: DEFAULT_TIMEOUT,
            missing,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// names of required variables that were not set
    pub fn missing_required(&self) -> &[&'static str] {
        &self.missing
    }
}

// keep the api key out of debug output
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Config")
            .field("commits", &format_args!("{} bytes", self.commits.len()))
            .field("repository", &self.repository)
            .field("release_name", &self.release_name)
            .field("version", &self.version)
            .field("api_key", &api_key)
            .field("site_url", &self.site_url)
            .field("site_name", &self.site_name)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("output_path", &self.output_path)
            .field("timeout", &self.timeout)
            .field("missing", &self.missing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            (COMMITS_VAR, "feat: add webhooks"),
            (REPOSITORY_VAR, "posthoot/posthoot"),
            (RELEASE_NAME_VAR, "brave-otter"),
            (VERSION_VAR, "1.4.0"),
            (API_KEY_VAR, "sk-or-test"),
            (SITE_URL_VAR, "https://posthoot.com"),
            (SITE_NAME_VAR, "Posthoot"),
        ]));

        assert_eq!(config.commits, "feat: add webhooks");
        assert_eq!(config.repository, "posthoot/posthoot");
        assert_eq!(config.release_name, "brave-otter");
        assert_eq!(config.version, "1.4.0");
        assert_eq!(config.api_key, "sk-or-test");
        assert_eq!(config.site_url, "https://posthoot.com");
        assert_eq!(config.site_name, "Posthoot");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(config.missing_required().is_empty());
    }

    #[test]
    fn missing_values_become_empty_strings() {
        let config = Config::from_lookup(lookup_from(&[(VERSION_VAR, "2.0.0")]));

        assert_eq!(config.commits, "");
        assert_eq!(config.api_key, "");
        assert_eq!(config.site_url, "");
        assert_eq!(config.site_name, "");
        assert_eq!(
            config.missing_required(),
            &[COMMITS_VAR, REPOSITORY_VAR, RELEASE_NAME_VAR, API_KEY_VAR]
        );
    }

    #[test]
    fn optional_headers_are_not_reported_missing() {
        let config = Config::from_lookup(lookup_from(&[
            (COMMITS_VAR, "x"),
            (REPOSITORY_VAR, "x"),
            (RELEASE_NAME_VAR, "x"),
            (VERSION_VAR, "x"),
            (API_KEY_VAR, "x"),
        ]));
        assert!(config.missing_required().is_empty());
    }

    #[test]
    fn model_override_is_trimmed_and_blank_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(MODEL_VAR, "  openai/gpt-4o \n")]));
        assert_eq!(config.model, "openai/gpt-4o");

        let config = Config::from_lookup(lookup_from(&[(MODEL_VAR, "   ")]));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn endpoint_override_replaces_default() {
        let config = Config::from_lookup(lookup_from(&[(
            ENDPOINT_VAR,
            " http://127.0.0.1:8080/v1/chat/completions ",
        )]));
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/v1/chat/completions");

        let config = Config::from_lookup(lookup_from(&[(ENDPOINT_VAR, "")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-or-secret")]));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-or-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

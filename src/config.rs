use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable overriding `on_fetch_error`
pub const ENV_ON_FETCH_ERROR: &str = "BOOKMARKS_CSV_ON_FETCH_ERROR";

/// Environment variable overriding `timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "BOOKMARKS_CSV_TIMEOUT_SECS";

/// What to do when a page cannot be fetched during title resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchErrorPolicy {
    /// Stop the whole conversion
    #[default]
    Abort,
    /// Log a warning and keep the URL as the title
    UseUrl,
}

impl FromStr for FetchErrorPolicy {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FetchErrorPolicy::Abort),
            "use-url" | "use_url" => Ok(FetchErrorPolicy::UseUrl),
            other => Err(ConvertError::Config(format!(
                "unknown fetch error policy {:?} (expected \"abort\" or \"use-url\")",
                other
            ))),
        }
    }
}

/// Configuration for a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Behaviour when a title fetch fails
    #[serde(default)]
    pub on_fetch_error: FetchErrorPolicy,

    /// Per-request timeout in seconds (no timeout if unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ConverterConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|e| {
                ConvertError::Config(format!("cannot read {}: {}", path.display(), e))
            })?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(config_str: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(config_str).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Apply overrides from an arbitrary variable lookup; empty values are ignored
    pub fn with_env_from<L>(mut self, lookup: L) -> Result<Self, ConvertError>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(ENV_ON_FETCH_ERROR).filter(|v| !v.is_empty()) {
            self.on_fetch_error = policy.parse()?;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                ConvertError::Config(format!("{} must be a whole number: {}", ENV_TIMEOUT_SECS, e))
            })?;
            self.timeout_secs = Some(secs);
        }

        Ok(self)
    }

    /// Request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Shown when the curated list cannot be loaded.
pub const FALLBACK_PHRASES: [&str; 2] = ["加油！", "你可以的！"];

pub fn fallback_phrases() -> Vec<Value> {
    FALLBACK_PHRASES.iter().map(|s| Value::from(*s)).collect()
}

/// Text for one list entry; strings print bare, anything else as JSON.
pub fn phrase_text(phrase: &Value) -> String {
    match phrase {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Why the curated list could not be used.
#[derive(Debug, Error)]
pub enum InspirationError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: attohttpc::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("inspiration list is not a JSON array: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug)]
pub enum InspirationOutcome {
    Loaded(Vec<Value>),
    Fallback {
        phrases: Vec<Value>,
        reason: InspirationError,
    },
}

impl InspirationOutcome {
    pub fn phrases(&self) -> &[Value] {
        match self {
            InspirationOutcome::Loaded(phrases) => phrases,
            InspirationOutcome::Fallback { phrases, .. } => phrases,
        }
    }

    pub fn into_phrases(self) -> Vec<Value> {
        match self {
            InspirationOutcome::Loaded(phrases) => phrases,
            InspirationOutcome::Fallback { phrases, .. } => phrases,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, InspirationOutcome::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&InspirationError> {
        match self {
            InspirationOutcome::Loaded(_) => None,
            InspirationOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// A resolved inspiration location: a file on disk or an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspirationSource {
    File(PathBuf),
    Url(String),
}

impl InspirationSource {
    /// Resolve `location` the way a page resolves a relative fetch: URLs are
    /// taken as-is, everything else is a path relative to `base_dir`.
    pub fn resolve(base_dir: &Path, location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            InspirationSource::Url(location.to_string())
        } else {
            InspirationSource::File(base_dir.join(location))
        }
    }

    /// Entries come back as the resource holds them, strings or not.
    pub fn read(&self, timeout: Option<Duration>) -> Result<Vec<Value>, InspirationError> {
        let text = match self {
            InspirationSource::File(path) => {
                fs::read_to_string(path).map_err(|source| InspirationError::Read {
                    path: path.clone(),
                    source,
                })?
            }
            InspirationSource::Url(url) => fetch_text(url, timeout)?,
        };
        let phrases: Vec<Value> = serde_json::from_str(&text)?;
        Ok(phrases)
    }

    /// Read the list, collapsing every failure into the fallback phrases.
    pub fn load(&self, timeout: Option<Duration>) -> InspirationOutcome {
        match self.read(timeout) {
            Ok(phrases) => InspirationOutcome::Loaded(phrases),
            Err(reason) => {
                log::error!(
                    "Failed to load inspiration list from {}, check whether the file name contains non-ASCII characters or the path is wrong: {}",
                    self, reason
                );
                InspirationOutcome::Fallback {
                    phrases: fallback_phrases(),
                    reason,
                }
            }
        }
    }
}

impl std::fmt::Display for InspirationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspirationSource::File(path) => write!(f, "{}", path.display()),
            InspirationSource::Url(url) => f.write_str(url),
        }
    }
}

fn fetch_text(url: &str, timeout: Option<Duration>) -> Result<String, InspirationError> {
    let http_err = |source| InspirationError::Http {
        url: url.to_string(),
        source,
    };

    let mut request = attohttpc::get(url);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }
    // Loopback never goes through a proxy
    if is_loopback(url) {
        request = request.proxy_settings(attohttpc::ProxySettings::builder().build());
    }
    let response = request.send().map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(InspirationError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().map_err(http_err)
}

fn is_loopback(url: &str) -> bool {
    let rest = url
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    ["localhost", "127.0.0.1", "[::1]"].iter().any(|host| {
        rest.strip_prefix(host)
            .map(|tail| tail.is_empty() || tail.starts_with([':', '/']))
            .unwrap_or(false)
    })
}

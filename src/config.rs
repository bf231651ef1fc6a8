//! Provider configuration and the credentials derived from it.
//!
//! The host engine hands the provider a JSON config block. Every attribute
//! falls back to an environment variable, so a bare `provider {}` block works
//! when the environment is set up:
//!
//! | Attribute | Environment variable |
//! |---|---|
//! | `target_url` | `OBSERVABILITY_TARGET_URL` |
//! | `api_key` | `OBSERVABILITY_API_KEY` |
//! | `rest_url` | `OBSERVABILITY_REST_URL` |
//! | `request_timeout_seconds` | `OBSERVABILITY_REQUEST_TIMEOUT_SECONDS` |

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use tonic::codegen::http::Uri;

use crate::error::ProviderError;
use crate::schema::{Attribute, Diagnostic, Schema};

/// Environment variable for the gRPC target.
pub const ENV_TARGET_URL: &str = "OBSERVABILITY_TARGET_URL";
/// Environment variable for the API key.
pub const ENV_API_KEY: &str = "OBSERVABILITY_API_KEY";
/// Environment variable for the REST base URL.
pub const ENV_REST_URL: &str = "OBSERVABILITY_REST_URL";
/// Environment variable for the per-request timeout.
pub const ENV_REQUEST_TIMEOUT_SECONDS: &str = "OBSERVABILITY_REQUEST_TIMEOUT_SECONDS";

/// The provider configuration block as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// gRPC endpoint, `host:port` or `https://host:port`.
    pub target_url: Option<String>,
    /// API key sent as a bearer token.
    pub api_key: Option<String>,
    /// Base URL of the REST API; derived from the target host when unset.
    pub rest_url: Option<String>,
    /// Deadline applied to every request.
    pub request_timeout_seconds: Option<i64>,
}

impl ProviderConfig {
    /// Schema of the provider configuration block.
    pub fn schema() -> Schema {
        Schema::v0()
            .with_description("Connection settings for the observability platform")
            .with_attribute(
                "target_url",
                Attribute::optional_string().with_description(format!(
                    "gRPC endpoint of the platform (host:port). Falls back to {}.",
                    ENV_TARGET_URL
                )),
            )
            .with_attribute(
                "api_key",
                Attribute::optional_string()
                    .sensitive()
                    .with_description(format!("API key. Falls back to {}.", ENV_API_KEY)),
            )
            .with_attribute(
                "rest_url",
                Attribute::optional_string().with_description(format!(
                    "Base URL for REST endpoints. Falls back to {}, then https://<target host>.",
                    ENV_REST_URL
                )),
            )
            .with_attribute(
                "request_timeout_seconds",
                Attribute::optional_int64().with_description(format!(
                    "Per-request deadline in seconds. Falls back to {}.",
                    ENV_REQUEST_TIMEOUT_SECONDS
                )),
            )
    }

    /// Parse the raw config block. `null` is treated as an empty block.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ProviderError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Resolve the config against the process environment.
    pub fn resolve(self) -> Result<Credentials, Vec<Diagnostic>> {
        self.resolve_with(process_env)
    }

    /// Resolve the config, looking up unset attributes with `env`.
    ///
    /// All problems are reported at once, one diagnostic per attribute.
    pub fn resolve_with<F>(self, env: F) -> Result<Credentials, Vec<Diagnostic>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut diagnostics = Vec::new();

        let target_url = non_empty(self.target_url).or_else(|| env(ENV_TARGET_URL));
        let api_key = non_empty(self.api_key).or_else(|| env(ENV_API_KEY));
        let rest_url = non_empty(self.rest_url).or_else(|| env(ENV_REST_URL));

        if target_url.is_none() {
            diagnostics.push(missing("target_url", ENV_TARGET_URL));
        }
        if api_key.is_none() {
            diagnostics.push(missing("api_key", ENV_API_KEY));
        }

        let timeout = match self.request_timeout_seconds {
            Some(secs) => positive_timeout(secs, &mut diagnostics),
            None => match env(ENV_REQUEST_TIMEOUT_SECONDS) {
                Some(raw) => match raw.trim().parse::<i64>() {
                    Ok(secs) => positive_timeout(secs, &mut diagnostics),
                    Err(_) => {
                        diagnostics.push(
                            Diagnostic::error("Invalid request timeout")
                                .with_detail(format!(
                                    "{} must be an integer number of seconds, got {:?}",
                                    ENV_REQUEST_TIMEOUT_SECONDS, raw
                                ))
                                .with_attribute("request_timeout_seconds"),
                        );
                        None
                    },
                },
                None => None,
            },
        };

        let (Some(target_url), Some(api_key)) = (target_url, api_key) else {
            return Err(diagnostics);
        };
        if !diagnostics.is_empty() {
            return Err(diagnostics);
        }

        let mut credentials = Credentials::new(target_url, api_key);
        if let Some(rest_url) = rest_url {
            credentials = credentials.with_rest_url(rest_url);
        }
        if let Some(timeout) = timeout {
            credentials = credentials.with_request_timeout(timeout);
        }
        Ok(credentials)
    }
}

/// Look up a non-empty environment variable.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn missing(attribute: &str, env: &str) -> Diagnostic {
    Diagnostic::error(format!("Missing {}", attribute))
        .with_detail(format!(
            "Set '{}' in the provider configuration or the {} environment variable",
            attribute, env
        ))
        .with_attribute(attribute)
}

fn positive_timeout(secs: i64, diagnostics: &mut Vec<Diagnostic>) -> Option<Duration> {
    if secs <= 0 {
        diagnostics.push(
            Diagnostic::error("Invalid request timeout")
                .with_detail(format!("Must be a positive number of seconds, got {}", secs))
                .with_attribute("request_timeout_seconds"),
        );
        return None;
    }
    Some(Duration::from_secs(secs as u64))
}

/// Target, key and transport settings for every client.
///
/// Immutable once built; `Debug` never prints the API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    target_url: String,
    api_key: String,
    rest_url: String,
    request_timeout: Option<Duration>,
}

impl Credentials {
    /// Credentials for `target_url`, with the REST base URL derived from its host.
    pub fn new(target_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let target_url = target_url.into();
        let rest_url = default_rest_url(&target_url);
        Self {
            target_url,
            api_key: api_key.into(),
            rest_url,
            request_timeout: None,
        }
    }

    /// Override the REST base URL.
    pub fn with_rest_url(mut self, rest_url: impl Into<String>) -> Self {
        self.rest_url = rest_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Apply a deadline to every request.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// The gRPC target as configured.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The REST base URL, without a trailing slash.
    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    /// The per-request deadline, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("target_url", &self.target_url)
            .field("api_key", &"<redacted>")
            .field("rest_url", &self.rest_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// `https://<host>` for a target given as `host:port` or a full URL.
fn default_rest_url(target: &str) -> String {
    let host = target
        .parse::<Uri>()
        .ok()
        .and_then(|uri| uri.host().map(str::to_string))
        .unwrap_or_else(|| {
            let without_scheme = target.rsplit("://").next().unwrap_or(target);
            without_scheme
                .split(['/', ':'])
                .next()
                .unwrap_or_default()
                .to_string()
        });
    format!("https://{}", host)
}

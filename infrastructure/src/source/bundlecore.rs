//! Bundlecore registry API source
//!
//! Issues a single authenticated GET against
//! `<base_url>/api/tools/<tool_name>` and maps the JSON envelope into a
//! [`ToolManifest`]. No retry: one failed attempt aborts acquisition.

use async_trait::async_trait;
use luagen_application::ports::metadata_source::{MetadataSource, SourceError};
use luagen_domain::{SchemaMap, ToolManifest};
use tracing::debug;

/// Environment variable holding the bearer credential.
pub const AUTH_TOKEN_VAR: &str = "BCORE_AUTH_TOKEN";

/// Default registry host.
pub const DEFAULT_BASE_URL: &str = "https://bundlecore.com";

/// Fetches a tool manifest from the Bundlecore registry API.
pub struct BundlecoreSource {
    client: reqwest::Client,
    base_url: String,
    token: String,
    tool_name: String,
    schema: SchemaMap,
}

impl BundlecoreSource {
    /// Create a source with an explicit bearer token.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        tool_name: impl Into<String>,
        schema: SchemaMap,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
            tool_name: tool_name.into(),
            schema,
        }
    }

    /// Create a source taking the bearer token from `BCORE_AUTH_TOKEN`.
    ///
    /// Fails before any request is made when the variable is unset or
    /// empty.
    pub fn from_env(
        base_url: impl Into<String>,
        tool_name: impl Into<String>,
        schema: SchemaMap,
    ) -> Result<Self, SourceError> {
        let token = require_token(std::env::var(AUTH_TOKEN_VAR).ok())?;
        Ok(Self::new(base_url, token, tool_name, schema))
    }

    fn tool_url(&self) -> String {
        format!(
            "{}/api/tools/{}",
            self.base_url.trim_end_matches('/'),
            self.tool_name
        )
    }
}

/// An unset or empty credential is a configuration error.
fn require_token(value: Option<String>) -> Result<String, SourceError> {
    value
        .filter(|token| !token.is_empty())
        .ok_or(SourceError::MissingCredential(AUTH_TOKEN_VAR))
}

#[async_trait]
impl MetadataSource for BundlecoreSource {
    async fn fetch(&self) -> Result<ToolManifest, SourceError> {
        let url = self.tool_url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let root: serde_json::Value =
            response.json().await.map_err(|e| SourceError::Format {
                path: url,
                message: e.to_string(),
            })?;

        Ok(self.schema.manifest(&root))
    }
}

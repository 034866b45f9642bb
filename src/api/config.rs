//! Client configuration for the user API. Values come from the CLI (or its
//! environment fallbacks) and are public; do not store secrets here.

use super::errors::AppError;
use url::Url;

/// Default API base used when neither `--api-url` nor `USERDESK_API_URL` is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the client sends requests and how it identifies itself.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    api_base_url: Url,
    user_agent: String,
}

impl ApiConfig {
    /// Validates and normalizes the API base URL.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the URL is empty, malformed, not `http`/`https`,
    /// or carries a query or fragment (endpoint paths are appended to the base).
    pub fn new(api_base_url: &str) -> Result<Self, AppError> {
        let trimmed = normalize_base_url(api_base_url)
            .ok_or_else(|| AppError::Config("API base URL is required.".to_string()))?;

        let url = Url::parse(&trimmed)
            .map_err(|err| AppError::Config(format!("Invalid API base URL {trimmed}: {err}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::Config(format!(
                    "Unsupported API base URL scheme: {scheme}"
                )));
            }
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(AppError::Config(format!(
                "API base URL must not carry a query or fragment: {trimmed}"
            )));
        }

        if url.host_str().is_none() {
            return Err(AppError::Config(format!(
                "API base URL must include a host: {trimmed}"
            )));
        }

        Ok(Self {
            api_base_url: url,
            user_agent: crate::APP_USER_AGENT.to_string(),
        })
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Joins `path` onto the base URL, keeping any path prefix the base carries.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the joined URL does not parse.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let url = build_url_with_base(self.api_base_url.as_str(), path);
        Url::parse(&url).map_err(|err| AppError::Config(format!("Invalid endpoint {url}: {err}")))
    }
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

//! Cross-origin settings for the separately hosted frontend.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Deployed frontend, allowed alongside the local dev server.
pub const DEPLOYED_FRONTEND_ORIGIN: &str =
    "https://tech0-gen-8-step3-testapp-node2-26.azurewebsites.net";

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        DEPLOYED_FRONTEND_ORIGIN.to_string(),
    ]
}

const fn default_allow_credentials() -> bool {
    true
}

const fn default_max_age_secs() -> u64 {
    3600
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Exact origins allowed to call the API.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// How long browsers may cache a preflight response.
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_allow_credentials(),
            max_age_secs: default_max_age_secs(),
        }
    }
}

impl CorsConfig {
    /// Reject origins that cannot be sent back in `Access-Control-Allow-Origin`.
    ///
    /// `*` is refused because it cannot be combined with credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for origin in &self.allowed_origins {
            let well_formed = (origin.starts_with("http://") || origin.starts_with("https://"))
                && !origin.ends_with('/')
                && !origin.chars().any(|c| c.is_whitespace() || c.is_control());
            if !well_formed {
                return Err(ConfigError::InvalidValue {
                    field: "cors.allowed_origins".into(),
                    reason: format!("'{origin}' is not a scheme://host[:port] origin"),
                });
            }
        }
        Ok(())
    }
}

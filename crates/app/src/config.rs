//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `OCH_QOLMA_ADMIN_PASSWORD` - Demo admin panel password (demo-only, see [`crate::admin`])
//! - `OCH_QOLMA_CHEF_API_KEY` - API key for the chef assistant text-generation API
//!
//! ## Optional
//! - `OCH_QOLMA_CHEF_MODEL` - Text-generation model (default: gemini-3-flash-preview)
//! - `OCH_QOLMA_CHEF_BASE_URL` - API base URL (default: <https://generativelanguage.googleapis.com>)
//! - `OCH_QOLMA_CHEF_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10)
//! - `OCH_QOLMA_DELIVERY_ADDRESS` - Default delivery address shown at checkout

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default delivery address pre-filled at checkout.
const DEFAULT_DELIVERY_ADDRESS: &str = "Toshkent, Mirabod tumani";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Chef assistant API configuration
    pub chef: ChefConfig,
    /// Demo admin gate configuration
    pub admin: AdminConfig,
    /// Default delivery address pre-filled at checkout
    pub delivery_address: String,
}

/// Chef assistant (text-generation API) configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ChefConfig {
    /// API key for the text-generation service
    pub api_key: SecretString,
    /// Model identifier
    pub model: String,
    /// Base URL of the API
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ChefConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChefConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Demo admin gate configuration.
///
/// Implements `Debug` manually to redact the password, even though the gate
/// itself is demo-only and not a security mechanism.
#[derive(Clone)]
pub struct AdminConfig {
    /// Expected demo panel password
    pub password: SecretString,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let chef = ChefConfig::from_env()?;
        let admin = AdminConfig::from_env()?;
        let delivery_address =
            get_env_or_default("OCH_QOLMA_DELIVERY_ADDRESS", DEFAULT_DELIVERY_ADDRESS);

        Ok(Self {
            chef,
            admin,
            delivery_address,
        })
    }
}

impl ChefConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = SecretString::from(get_required_env("OCH_QOLMA_CHEF_API_KEY")?);
        let model = get_env_or_default("OCH_QOLMA_CHEF_MODEL", "gemini-3-flash-preview");
        let base_url = get_env_or_default(
            "OCH_QOLMA_CHEF_BASE_URL",
            "https://generativelanguage.googleapis.com",
        );
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("OCH_QOLMA_CHEF_BASE_URL".to_string(), e.to_string())
        })?;
        let timeout_secs = get_env_or_default("OCH_QOLMA_CHEF_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("OCH_QOLMA_CHEF_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl AdminConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            password: SecretString::from(get_required_env("OCH_QOLMA_ADMIN_PASSWORD")?),
        })
    }
}

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an environment variable with a default fallback.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

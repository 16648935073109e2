//! Application state

use folio_core::{Catalog, CatalogClient, CatalogConfig};
use std::sync::Arc;

/// Repository linked from the head bar
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/your-org/folio";

/// Default splash overlay duration in milliseconds
pub const DEFAULT_SPLASH_MS: u64 = 2000;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog the views read from
    pub catalog: Arc<dyn Catalog>,

    /// Settings for the page shell
    pub shell: ShellSettings,
}

/// Settings that shape the page shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    /// How long the splash overlay stays up
    pub splash_ms: u64,

    /// Link target of the repository button
    pub repository_url: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            splash_ms: DEFAULT_SPLASH_MS,
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }
}

impl ShellSettings {
    /// Read `FOLIO_SPLASH_MS` and `FOLIO_REPOSITORY_URL`
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(ms) = std::env::var("FOLIO_SPLASH_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            settings.splash_ms = ms;
        }
        if let Ok(url) = std::env::var("FOLIO_REPOSITORY_URL") {
            settings.repository_url = url;
        }
        settings
    }
}

impl AppState {
    /// Create state around any catalog implementation
    pub fn new(catalog: Arc<dyn Catalog>, shell: ShellSettings) -> Self {
        Self { catalog, shell }
    }

    /// Create state backed by the HTTP catalog, configured from the environment
    pub fn from_env() -> Self {
        let config = CatalogConfig::from_env();
        tracing::info!("Using catalog at {}", config.api_url);

        Self::new(
            Arc::new(CatalogClient::new(config)),
            ShellSettings::from_env(),
        )
    }
}

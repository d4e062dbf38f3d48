use serde::{Deserialize, Serialize};

use crate::catalog::format::DEFAULT_CURRENCY_SYMBOL;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Endpoint returning a JSON array of products.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds. Unset waits indefinitely.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

/// Screen presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Header title (default: "Featured Products").
    #[serde(default = "default_title")]
    pub title: String,
    /// Prefix for prices (default: "$").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Download product images and draw them as thumbnails (default: true).
    #[serde(default = "default_thumbnails")]
    pub thumbnails: bool,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_endpoint() -> String {
    "https://fakestoreapi.com/products".to_string()
}

fn default_title() -> String {
    "Featured Products".to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_thumbnails() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "storefront=info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            currency_symbol: default_currency_symbol(),
            thumbnails: default_thumbnails(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings for the recommendation feed client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_recommended_limit")]
    pub recommended_limit: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
            recommended_limit: default_recommended_limit(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_price_min")]
    pub price_min: f64,
    #[serde(default = "default_price_max")]
    pub price_max: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            price_min: default_price_min(),
            price_max: default_price_max(),
        }
    }
}

fn default_base_url() -> String {
    "https://fakestoreapi.com".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_recommended_limit() -> u32 {
    5
}

fn default_user_agent() -> String {
    concat!("staybook/", env!("CARGO_PKG_VERSION")).into()
}

fn default_price_min() -> f64 {
    0.0
}

fn default_price_max() -> f64 {
    10_000.0
}

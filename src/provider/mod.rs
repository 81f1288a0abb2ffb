//! Provider configurations and request building.
//!
//! Each supported provider has its own variant carrying only its own
//! credentials and flags; shared code never inspects provider-specific
//! fields.

pub mod custom;
pub mod scrape_do;
pub mod scraper_api;

use serde::Deserialize;

pub use custom::CustomProxyConfig;
pub use scrape_do::ScrapeDoConfig;
pub use scraper_api::ScraperApiConfig;

/// Per-provider configuration, tagged by the `provider` field of the
/// submitted form.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum ProviderConfig {
    ScrapeDo(ScrapeDoConfig),
    ScraperApi(ScraperApiConfig),
    Custom(CustomProxyConfig),
}

impl ProviderConfig {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderConfig::ScrapeDo(_) => "Scrape.do",
            ProviderConfig::ScraperApi(_) => "ScraperAPI",
            ProviderConfig::Custom(_) => "Custom Proxy",
        }
    }
}

/// Concrete routing derived from a provider configuration: the proxy
/// endpoint per target scheme plus the certificate policy, mirroring a
/// requests-style proxies mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResolution {
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub accept_invalid_certs: bool,
}

impl ProxyResolution {
    /// No proxy, normal certificate verification.
    pub fn direct() -> Self {
        Self {
            http_proxy: None,
            https_proxy: None,
            accept_invalid_certs: false,
        }
    }

    /// One endpoint tunneling both schemes, certificate verification off.
    pub fn tunnel(proxy_url: String) -> Self {
        Self {
            http_proxy: Some(proxy_url.clone()),
            https_proxy: Some(proxy_url),
            accept_invalid_certs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_tag_deserialization() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"provider": "scrape_do", "token": "abc"}"#).unwrap();
        assert_eq!(config.display_name(), "Scrape.do");

        let config: ProviderConfig =
            serde_json::from_str(r#"{"provider": "scraper_api", "api_key": "k"}"#).unwrap();
        assert_eq!(config.display_name(), "ScraperAPI");

        let config: ProviderConfig = serde_json::from_str(r#"{"provider": "custom"}"#).unwrap();
        assert_eq!(config.display_name(), "Custom Proxy");
    }
}

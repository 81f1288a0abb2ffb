//! Raw custom proxy: an opaque endpoint supplied by the user, either as a
//! single URL or as a `{"http": ..., "https": ...}` mapping pasted as text.
//! No credit concept exists here.

use super::ProxyResolution;
use crate::input;
use serde::Deserialize;
use serde_json::Value;

/// Reported cost for every custom-proxy request.
pub const COST: &str = "Not Available";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomProxyConfig {
    #[serde(default)]
    pub proxy_url: String,
    /// Proxy mapping as free text, run through the loose parser.
    #[serde(default)]
    pub proxies: String,
}

impl CustomProxyConfig {
    /// The raw URL wins and tunnels both schemes; otherwise the `http` and
    /// `https` entries of the parsed mapping each route their own scheme;
    /// otherwise no proxy at all.
    pub fn resolve(&self, warnings: &mut Vec<String>) -> ProxyResolution {
        let trimmed = self.proxy_url.trim();
        if !trimmed.is_empty() {
            return ProxyResolution::tunnel(trimmed.to_string());
        }

        let map = input::normalize_field(&self.proxies, "Proxies", warnings);
        let entry = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        ProxyResolution {
            http_proxy: entry("http"),
            https_proxy: entry("https"),
            accept_invalid_certs: true,
        }
    }
}

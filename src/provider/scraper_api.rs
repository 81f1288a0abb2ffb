//! ScraperAPI: a URL-rewriting gateway. The target URL is passed as a query
//! parameter to the provider's own endpoint, and the credit count for a
//! request comes from a separate cost-lookup endpoint.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

pub const GATEWAY_BASE: &str = "http://api.scraperapi.com/";
pub const COST_ENDPOINT: &str = "http://api.scraperapi.com/cost";

/// Optional flags are kept as raw strings so "false" and "" can be filtered
/// out while everything else passes through verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScraperApiConfig {
    pub api_key: String,
    #[serde(default)]
    pub render: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub premium: String,
    #[serde(default)]
    pub ultra_premium: String,
    #[serde(default)]
    pub autoparse: String,
    #[serde(default)]
    pub keep_headers: String,
    #[serde(default)]
    pub device_type: String,
}

impl ScraperApiConfig {
    /// Flags that actually go on the gateway query: empty values and the
    /// string "false" are excluded.
    pub fn active_flags(&self) -> Vec<(&'static str, &str)> {
        [
            ("render", self.render.as_str()),
            ("country_code", self.country_code.as_str()),
            ("premium", self.premium.as_str()),
            ("ultra_premium", self.ultra_premium.as_str()),
            ("autoparse", self.autoparse.as_str()),
            ("keep_headers", self.keep_headers.as_str()),
            ("device_type", self.device_type.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty() && *value != "false")
        .collect()
    }

    /// Rewrites the target into a gateway call: `api_key`, the encoded
    /// target URL, then the active flags.
    pub fn gateway_url(&self, target: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(GATEWAY_BASE)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            pairs.append_pair("url", target);
            for (name, value) in self.active_flags() {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// The strictly sequential second call that prices the request.
    pub fn cost_lookup_url(&self, target: &str) -> Result<Url, url::ParseError> {
        let render = if self.render.is_empty() {
            "false"
        } else {
            self.render.as_str()
        };
        let mut url = Url::parse(COST_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("url", target)
            .append_pair("render", render);
        Ok(url)
    }
}

/// Credit count from the cost-lookup response body. Shape failures degrade
/// to sentinel strings instead of failing the submission.
pub fn credits_from_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Err(_) => "Invalid Response".to_string(),
        Ok(value) => match value.get("credits") {
            None => "Not Found".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScraperApiConfig {
        ScraperApiConfig {
            api_key: "key123".to_string(),
            render: "true".to_string(),
            country_code: "us".to_string(),
            premium: "false".to_string(),
            ultra_premium: String::new(),
            autoparse: String::new(),
            keep_headers: "true".to_string(),
            device_type: "desktop".to_string(),
        }
    }

    #[test]
    fn test_false_and_empty_flags_are_excluded() {
        let cfg = config();
        let flags = cfg.active_flags();
        assert_eq!(
            flags,
            vec![
                ("render", "true"),
                ("country_code", "us"),
                ("keep_headers", "true"),
                ("device_type", "desktop"),
            ]
        );
    }

    #[test]
    fn test_gateway_url_carries_key_target_and_flags() {
        let url = config().gateway_url("https://httpbin.org/get?x=1").unwrap();
        assert!(url.as_str().starts_with(GATEWAY_BASE));

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("api_key".to_string(), "key123".to_string()));
        assert_eq!(pairs[1].0, "url");
        assert_eq!(pairs[1].1, "https://httpbin.org/get?x=1");
        assert!(pairs.contains(&("render".to_string(), "true".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "premium"));
    }

    #[test]
    fn test_cost_lookup_url_defaults_render_to_false() {
        let cfg = ScraperApiConfig {
            api_key: "key123".to_string(),
            ..Default::default()
        };
        let url = cfg.cost_lookup_url("https://httpbin.org/get").unwrap();
        assert!(url.as_str().starts_with(COST_ENDPOINT));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("render".to_string(), "false".to_string())));
    }

    #[test]
    fn test_credits_from_json_body() {
        assert_eq!(credits_from_body(r#"{"credits": 5}"#), "5");
        assert_eq!(credits_from_body(r#"{"credits": "5"}"#), "5");
    }

    #[test]
    fn test_credits_missing_field() {
        assert_eq!(credits_from_body(r#"{"requests": 10}"#), "Not Found");
    }

    #[test]
    fn test_credits_non_json_body() {
        assert_eq!(credits_from_body("<html>rate limited</html>"), "Invalid Response");
    }
}

use serde::Deserialize;

/// Page-level settings, optionally overridden by `window.SITE_CONFIG`.
///
/// The message limit and the toast delay are part of the service contract
/// and cannot be overridden here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Where quote requests are posted.
    pub quote_endpoint: String,
    /// How far ahead of a section's top it already counts as current.
    pub scroll_lookahead_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            quote_endpoint: "/api/quotes".to_owned(),
            scroll_lookahead_px: 200.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

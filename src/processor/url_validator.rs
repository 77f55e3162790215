use anyhow::{Context, Result};
use regex::Regex;
use url::Url;

use crate::config::SiteConfig;

/// Checks listing URLs against the marketplace's article URL shape
pub struct UrlValidator {
    expected: Regex,
    site_label: String,
}

impl UrlValidator {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let expected = Regex::new(&config.expected_url_pattern).with_context(|| {
            format!("Invalid expected_url_pattern: {}", config.expected_url_pattern)
        })?;

        Ok(Self {
            expected,
            site_label: config.site_label.clone(),
        })
    }

    /// `Err` carries the human-readable reason
    pub fn validate(&self, url: &str) -> std::result::Result<(), String> {
        let has_host = Url::parse(url)
            .map(|parsed| parsed.host_str().is_some_and(|h| !h.is_empty()))
            .unwrap_or(false);
        if !has_host {
            return Err("URL missing scheme or domain".to_string());
        }

        if !self.expected.is_match(url) {
            return Err(format!(
                "URL does not match expected {} article pattern",
                self.site_label
            ));
        }

        Ok(())
    }
}

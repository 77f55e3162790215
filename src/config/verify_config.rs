use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "verify.toml";

/// Configuration for a verification run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    pub site: SiteConfig,
    pub catalog: CatalogConfig,
}

/// Marketplace the listing URLs must point at
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Pattern every listed article URL must match from its start
    pub expected_url_pattern: String,
    /// Short site name used in issue messages
    pub site_label: String,
}

/// Patterns for pulling articles out of the catalog page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub default_index: String,
    pub block_pattern: String,
    pub id_pattern: String,
    pub name_pattern: String,
}

impl VerifyConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: VerifyConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }

    /// Explicit file if given, otherwise `verify.toml` in `dir` when present,
    /// otherwise built-in defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(&fallback)
        } else {
            Ok(Self::default())
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            expected_url_pattern:
                r"^https://www\.willhaben\.at/iad/kaufen-und-verkaufen/d/.*?-\d+/?".to_string(),
            site_label: "willhaben".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_index: "index.htm".to_string(),
            block_pattern: r#"(?s)<div class="product-item".*?</div>\s*</div>"#.to_string(),
            id_pattern: r"ID:\s*(\d+)".to_string(),
            name_pattern: r"<h3>\s*<a[^>]*>([^<]+)</a>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_configs() {
        let config = VerifyConfig::default();
        assert_eq!(config.catalog.default_index, "index.htm");
        assert_eq!(config.site.site_label, "willhaben");
        assert!(config.site.expected_url_pattern.starts_with('^'));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[catalog]\ndefault_index = \"shop.html\"\n").unwrap();

        let config = VerifyConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog.default_index, "shop.html");
        assert_eq!(config.catalog.id_pattern, CatalogConfig::default().id_pattern);
        assert_eq!(config.site.site_label, "willhaben");
    }

    #[test]
    fn test_resolve_picks_up_file_in_dir() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[site]\nsite_label = \"shop\"\n",
        )
        .unwrap();

        let config = VerifyConfig::resolve(None, dir.path()).unwrap();
        assert_eq!(config.site.site_label, "shop");
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = VerifyConfig::resolve(None, dir.path()).unwrap();
        assert_eq!(config.catalog.default_index, "index.htm");
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(VerifyConfig::resolve(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[site\nexpected_url_pattern = 3").unwrap();
        assert!(VerifyConfig::from_file(&path).is_err());
    }
}

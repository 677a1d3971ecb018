use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AdminConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub tables: TablesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub port: u16,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TablesConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![5, 10, 25, 50],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "DA".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// localStorage key holding an API base override
pub const API_BASE_OVERRIDE_KEY: &str = "admin_api_base";

pub fn parse_config(contents: &str) -> Result<AdminConfig, toml::de::Error> {
    toml::from_str(contents)
}

static CONFIG: Lazy<AdminConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("Embedded configuration is invalid, using built-in values: {}", e);
        AdminConfig {
            api: ApiConfig {
                port: 3000,
                prefix: "/api/admin".to_string(),
                base_url: None,
            },
            tables: TablesConfig::default(),
            display: DisplayConfig::default(),
        }
    }
});

pub fn config() -> &'static AdminConfig {
    &CONFIG
}

impl ApiConfig {
    /// API base for a page served at `protocol//hostname`.
    /// `base_url` (or the runtime override) wins over host/port/prefix.
    pub fn resolve_base(&self, protocol: &str, hostname: &str, override_base: Option<&str>) -> String {
        let explicit = override_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| self.base_url.as_deref().map(str::trim).filter(|s| !s.is_empty()));
        if let Some(base) = explicit {
            return base.trim_end_matches('/').to_string();
        }
        let prefix = self.prefix.trim_end_matches('/');
        format!("{}//{}:{}{}", protocol, hostname, self.port, prefix)
    }
}

impl TablesConfig {
    /// Page size options always contain the default size.
    pub fn page_sizes(&self) -> Vec<usize> {
        let mut sizes = self.page_size_options.clone();
        if !sizes.contains(&self.default_page_size) {
            sizes.push(self.default_page_size);
        }
        sizes.retain(|s| *s > 0);
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.prefix, "/api/admin");
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.tables.default_page_size, 10);
        assert_eq!(config.display.currency, "DA");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[api]\nport = 8080\n").unwrap();
        assert_eq!(config.api.prefix, "");
        assert_eq!(config.tables, TablesConfig::default());
        assert_eq!(config.display.currency, "DA");
    }

    #[test]
    fn test_resolve_base() {
        let api = ApiConfig {
            port: 3000,
            prefix: "/api/admin/".to_string(),
            base_url: None,
        };
        assert_eq!(api.resolve_base("http:", "localhost", None), "http://localhost:3000/api/admin");
        assert_eq!(
            api.resolve_base("http:", "localhost", Some("https://x.dz/api/")),
            "https://x.dz/api"
        );
        let fixed = ApiConfig {
            base_url: Some("https://prod.dz/admin".to_string()),
            ..api
        };
        assert_eq!(fixed.resolve_base("http:", "localhost", Some("  ")), "https://prod.dz/admin");
    }

    #[test]
    fn test_page_sizes_include_default() {
        let t = TablesConfig {
            default_page_size: 20,
            page_size_options: vec![50, 10, 0, 10],
        };
        assert_eq!(t.page_sizes(), vec![10, 20, 50]);
    }
}

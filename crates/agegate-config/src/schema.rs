//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Filter settings
    #[serde(default)]
    pub filter: RawFilterConfig,
}

/// Filter-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawFilterConfig {
    /// Minimum age in days a version must have before it may be
    /// advertised as `latest` (default: 7)
    pub max_age_days: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filter_table() {
        let toml_str = r#"
            config_version = 1

            [filter]
            max_age_days = 21
        "#;

        let config: RawConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.filter.max_age_days, Some(21));
    }

    #[test]
    fn filter_table_optional() {
        let config: RawConfig = toml::from_str("config_version = 1").unwrap();
        assert_eq!(config.filter.max_age_days, None);
    }
}

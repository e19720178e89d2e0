use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::starfield::{DEFAULT_EXTENT, DEFAULT_STAR_COUNT};

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Environment variables that override the EmailJS identifiers
pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub emailjs: EmailJsConfig,
    pub starfield: StarfieldConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// Public key, sent as `user_id`
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

impl EmailJsConfig {
    /// All three identifiers are set.
    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    pub extent: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_STAR_COUNT,
            extent: DEFAULT_EXTENT,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document. Missing tables and keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse site config")
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize site config")
    }

    /// Override the EmailJS identifiers from `lookup` (typically the build
    /// environment). Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets = [
            (ENV_SERVICE_ID, &mut self.emailjs.service_id),
            (ENV_TEMPLATE_ID, &mut self.emailjs.template_id),
            (ENV_PUBLIC_KEY, &mut self.emailjs.public_key),
        ];
        for (key, slot) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value.trim().to_string();
            }
        }
    }

    /// Parse, apply overrides and log anything that will keep the contact
    /// form from working.
    pub fn load<F>(contents: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_toml_str(contents)?;
        config.apply_env(lookup);
        if !config.emailjs.is_complete() {
            log::warn!(
                "EmailJS is not fully configured; set {ENV_SERVICE_ID}, {ENV_TEMPLATE_ID} and {ENV_PUBLIC_KEY}"
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.emailjs.endpoint, DEFAULT_EMAILJS_ENDPOINT);
        assert_eq!(config.starfield.count, 5000);
        assert!(!config.emailjs.is_complete());
    }

    #[test]
    fn test_partial_tables() {
        let config = SiteConfig::from_toml_str(
            r#"
            [emailjs]
            service_id = "service_x"

            [starfield]
            count = 1200
            "#,
        )
        .unwrap();
        assert_eq!(config.emailjs.service_id, "service_x");
        assert_eq!(config.emailjs.endpoint, DEFAULT_EMAILJS_ENDPOINT);
        assert_eq!(config.starfield.count, 1200);
        assert_eq!(config.starfield.extent, DEFAULT_EXTENT);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = SiteConfig::from_toml_str("[emailjs\nservice_id = 1").unwrap_err();
        assert!(err.to_string().contains("Failed to parse site config"));
    }

    #[test]
    fn test_env_overrides_identifiers() {
        let env: HashMap<&str, &str> = [
            (ENV_SERVICE_ID, "service_env"),
            (ENV_TEMPLATE_ID, "  template_env "),
            (ENV_PUBLIC_KEY, ""),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::from_toml_str(
            r#"
            [emailjs]
            public_key = "pk_file"
            "#,
        )
        .unwrap();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.emailjs.service_id, "service_env");
        assert_eq!(config.emailjs.template_id, "template_env");
        assert_eq!(config.emailjs.public_key, "pk_file");
        assert!(config.emailjs.is_complete());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = SiteConfig::default();
        config.emailjs.service_id = "svc".into();
        let text = config.to_toml_string().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), config);
    }
}

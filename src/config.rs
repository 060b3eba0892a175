use crate::constants::{GEMINI_API_BASE, GEMINI_MODEL, PEXELS_API_BASE, UNSPLASH_API_BASE};
use crate::error::ConfigError;

/// Credentials and endpoints for the text and photo providers
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub unsplash_api_key: String,
    pub pexels_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub pexels_api_base: String,
    pub unsplash_api_base: String,
}

impl Config {
    /// Creates a config with the public provider endpoints
    pub fn new(
        gemini_api_key: impl Into<String>,
        unsplash_api_key: impl Into<String>,
        pexels_api_key: impl Into<String>,
    ) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            unsplash_api_key: unsplash_api_key.into(),
            pexels_api_key: pexels_api_key.into(),
            gemini_model: GEMINI_MODEL.to_string(),
            gemini_api_base: GEMINI_API_BASE.to_string(),
            pexels_api_base: PEXELS_API_BASE.to_string(),
            unsplash_api_base: UNSPLASH_API_BASE.to_string(),
        }
    }

    /// Points every provider at the same base URL
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        self.gemini_api_base = base.clone();
        self.pexels_api_base = base.clone();
        self.unsplash_api_base = base;
        self
    }

    /// Reads the config from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        let mut config = Self::new(
            required("GEMINI_API_KEY")?,
            required("UNSPLASH_API_KEY")?,
            required("PEXELS_API_KEY")?,
        );

        if let Some(model) = lookup("GEMINI_MODEL") {
            config.gemini_model = model;
        }
        if let Some(base) = lookup("GEMINI_API_BASE") {
            config.gemini_api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(base) = lookup("PEXELS_API_BASE") {
            config.pexels_api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(base) = lookup("UNSPLASH_API_BASE") {
            config.unsplash_api_base = base.trim_end_matches('/').to_string();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_required_keys_with_default_endpoints() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g"),
            ("UNSPLASH_API_KEY", "u"),
            ("PEXELS_API_KEY", "p"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_api_key, "g");
        assert_eq!(config.unsplash_api_key, "u");
        assert_eq!(config.pexels_api_key, "p");
        assert_eq!(config.gemini_model, GEMINI_MODEL);
        assert_eq!(config.pexels_api_base, PEXELS_API_BASE);
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g"),
            ("UNSPLASH_API_KEY", "  "),
            ("PEXELS_API_KEY", "p"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("UNSPLASH_API_KEY"));

        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("GEMINI_API_KEY"));
    }

    #[test]
    fn overrides_strip_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g"),
            ("UNSPLASH_API_KEY", "u"),
            ("PEXELS_API_KEY", "p"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("PEXELS_API_BASE", "http://localhost:9000/"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_model, "gemini-1.5-pro");
        assert_eq!(config.pexels_api_base, "http://localhost:9000");
        assert_eq!(config.unsplash_api_base, UNSPLASH_API_BASE);
    }
}

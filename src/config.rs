use std::env;
use url::Url;

const API_URL: &str = "PUBLIC_PLAYGROUND_API_URL";
const PUBLIC_BASE_URL: &str = "PUBLIC_PLAYGROUND_PUBLIC_BASE_URL";
const PRIVATE_BASE_URL: &str = "PUBLIC_PLAYGROUND_PRIVATE_BASE_URL";
const IOTA_EXPLORER_URL: &str = "PUBLIC_PLAYGROUND_IOTA_EXPLORER_URL";
const IOTA_NETWORK: &str = "PUBLIC_PLAYGROUND_IOTA_NETWORK";
const DEBUG_LANGUAGES: &str = "PUBLIC_PLAYGROUND_DEBUG_LANGUAGES";

/// The playground configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaygroundConfig {
    /// The API every capability client is bound to.
    pub api_url: Url,

    /// The base url for publicly accessible links, without trailing slashes.
    pub public_base_url: String,

    /// The base url for privately accessible links, without trailing slashes.
    pub private_base_url: String,

    /// The ledger explorer url, without trailing slashes.
    pub explorer_url: String,

    /// The network the explorer links point at.
    pub network: String,

    /// Whether the language picker shows the debug entries.
    pub debug_languages: bool,
}

impl PlaygroundConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration using the given lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let result = Self::load(&lookup);
        match &result {
            Ok(config) => tracing::debug!(api_url = %config.api_url, network = %config.network, "configuration loaded"),
            Err(e) => tracing::error!("error during initialisation: {e}"),
        }
        result
    }

    fn load<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).filter(|v| !v.is_empty()).ok_or(ConfigError::Missing(key));
        let api_url = required(API_URL)?;
        let public_base_url = required(PUBLIC_BASE_URL)?;
        let private_base_url = required(PRIVATE_BASE_URL)?;
        let explorer_url = required(IOTA_EXPLORER_URL)?;
        let network = required(IOTA_NETWORK)?;

        let api_url = Url::parse(&api_url).map_err(|source| ConfigError::InvalidUrl { key: API_URL, source })?;
        let debug_languages = lookup(DEBUG_LANGUAGES).and_then(|v| coerce_bool(&v)).unwrap_or(false);
        Ok(Self {
            api_url,
            public_base_url: trim_trailing_slashes(&public_base_url).into(),
            private_base_url: trim_trailing_slashes(&private_base_url).into(),
            explorer_url: trim_trailing_slashes(&explorer_url).into(),
            network,
            debug_languages,
        })
    }

    /// Create a publicly accessible url for a resource.
    pub fn create_public_url(&self, resource_path: &str) -> String {
        join_url(&self.public_base_url, resource_path)
    }

    /// Create a privately accessible url for a resource.
    pub fn create_private_url(&self, resource_path: &str) -> String {
        join_url(&self.private_base_url, resource_path)
    }
}

/// An error when loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid url in {key}")]
    InvalidUrl {
        key: &'static str,

        #[source]
        source: url::ParseError,
    },
}

pub(crate) fn trim_trailing_slashes(s: &str) -> &str {
    s.trim_end_matches('/')
}

pub(crate) fn join_url(base: &str, resource_path: &str) -> String {
    format!("{base}/{}", resource_path.trim_start_matches('/'))
}

fn coerce_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn settings() -> HashMap<&'static str, String> {
        [
            (API_URL, "https://api.example.com/"),
            (PUBLIC_BASE_URL, "https://public.example.com//"),
            (PRIVATE_BASE_URL, "https://private.example.com"),
            (IOTA_EXPLORER_URL, "https://explorer.example.com/"),
            (IOTA_NETWORK, "testnet"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    fn load(settings: &HashMap<&'static str, String>) -> Result<PlaygroundConfig, ConfigError> {
        PlaygroundConfig::from_lookup(|key| settings.get(key).cloned())
    }

    #[test]
    fn load_all_settings() {
        let config = load(&settings()).expect("load failed");
        assert_eq!(config.api_url.as_str(), "https://api.example.com/");
        assert_eq!(config.public_base_url, "https://public.example.com");
        assert_eq!(config.private_base_url, "https://private.example.com");
        assert_eq!(config.explorer_url, "https://explorer.example.com");
        assert_eq!(config.network, "testnet");
        assert!(!config.debug_languages);
    }

    #[rstest]
    #[case::api_url(API_URL)]
    #[case::public_base_url(PUBLIC_BASE_URL)]
    #[case::private_base_url(PRIVATE_BASE_URL)]
    #[case::explorer_url(IOTA_EXPLORER_URL)]
    #[case::network(IOTA_NETWORK)]
    fn missing_setting(#[case] key: &'static str) {
        let mut settings = settings();
        settings.remove(key);
        let err = load(&settings).expect_err("load succeeded");
        assert!(matches!(err, ConfigError::Missing(k) if k == key));
    }

    #[test]
    fn empty_setting_is_missing() {
        let mut settings = settings();
        settings.insert(IOTA_NETWORK, String::new());
        let err = load(&settings).expect_err("load succeeded");
        assert!(matches!(err, ConfigError::Missing(IOTA_NETWORK)));
    }

    #[test]
    fn invalid_api_url() {
        let mut settings = settings();
        settings.insert(API_URL, "not a url".into());
        let err = load(&settings).expect_err("load succeeded");
        assert!(matches!(err, ConfigError::InvalidUrl { key: API_URL, .. }));
    }

    #[rstest]
    #[case::truthy("true", true)]
    #[case::numeric("1", true)]
    #[case::falsy("FALSE", false)]
    #[case::garbage("maybe", false)]
    fn debug_languages(#[case] value: &str, #[case] expected: bool) {
        let mut settings = settings();
        settings.insert(DEBUG_LANGUAGES, value.into());
        let config = load(&settings).expect("load failed");
        assert_eq!(config.debug_languages, expected);
    }

    #[rstest]
    #[case::plain("docs/a.pdf", "https://public.example.com/docs/a.pdf")]
    #[case::leading_slashes("//docs/a.pdf", "https://public.example.com/docs/a.pdf")]
    #[case::empty("", "https://public.example.com/")]
    fn public_url(#[case] path: &str, #[case] expected: &str) {
        let config = load(&settings()).expect("load failed");
        assert_eq!(config.create_public_url(path), expected);
    }

    #[test]
    fn private_url() {
        let config = load(&settings()).expect("load failed");
        assert_eq!(config.create_private_url("/secure/x"), "https://private.example.com/secure/x");
    }
}

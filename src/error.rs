use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single call to an external provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider} request failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request failed with status: {status}")]
    Status {
        provider: &'static str,
        status: StatusCode,
    },

    #[error("{provider} returned an empty response")]
    EmptyResponse { provider: &'static str },

    #[error("{provider} result is missing an image URL")]
    MissingImageUrl { provider: &'static str },
}

impl ProviderError {
    pub fn http(provider: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| ProviderError::Http { provider, source }
    }
}

/// Startup configuration failure
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),
}

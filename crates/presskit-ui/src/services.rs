//! Configuration loading.
//!
//! # Design
//! - Where the document comes from is a [`ConfigSource`]; the browser fetches
//!   it over HTTP, tests hand it over in memory.
//! - The loader never fails outward: any error becomes a
//!   [`Diagnostic::ConfigUnavailable`] and an empty configuration, so the
//!   page keeps working with its authored text.

use std::error::Error as StdError;
use std::rc::Rc;

use async_trait::async_trait;
use presskit_config::{ConfigError, Configuration, validate};
use thiserror::Error;

use crate::core::diagnostics::{Diagnostic, Diagnostics};

#[cfg(target_arch = "wasm32")]
mod http;

#[cfg(target_arch = "wasm32")]
pub use http::HttpSource;

/// Failures while obtaining the configuration document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request could not be made or the body could not be read.
    #[error("request failed: {detail}")]
    Transport {
        /// Transport error rendered as text.
        detail: String,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// Response status code.
        status: u16,
    },
    /// The body was not a usable configuration document.
    #[error("invalid configuration document")]
    Document(#[from] ConfigError),
}

/// Origin of the raw configuration document.
#[async_trait(?Send)]
pub trait ConfigSource {
    /// Human-readable location for diagnostics.
    fn location(&self) -> &str;

    /// Fetch the raw document text.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Transport`] or [`LoadError::Status`] when the
    /// document cannot be retrieved.
    async fn fetch(&self) -> Result<String, LoadError>;
}

/// Source serving a fixed body, or a fixed failure.
#[derive(Clone, Debug)]
pub struct StaticSource {
    location: String,
    body: Result<String, u16>,
}

impl StaticSource {
    /// Source answering with `body`.
    #[must_use]
    pub fn new(location: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            body: Ok(body.into()),
        }
    }

    /// Source answering with HTTP `status`.
    #[must_use]
    pub fn failing(location: impl Into<String>, status: u16) -> Self {
        Self {
            location: location.into(),
            body: Err(status),
        }
    }
}

#[async_trait(?Send)]
impl ConfigSource for StaticSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        self.body
            .clone()
            .map_err(|status| LoadError::Status { status })
    }
}

/// Loads, parses and checks the configuration once per page.
pub struct ConfigLoader<'a, S: ConfigSource + ?Sized> {
    source: &'a S,
    diagnostics: Diagnostics,
}

impl<'a, S: ConfigSource + ?Sized> ConfigLoader<'a, S> {
    /// Loader reading from `source`.
    #[must_use]
    pub const fn new(source: &'a S, diagnostics: Diagnostics) -> Self {
        Self {
            source,
            diagnostics,
        }
    }

    /// Fetch and parse the document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the document cannot be fetched or parsed.
    pub async fn try_load(&self) -> Result<Configuration, LoadError> {
        let raw = self.source.fetch().await?;
        Ok(Configuration::from_json(&raw)?)
    }

    /// Load the configuration, degrading to an empty one on failure.
    pub async fn load(&self) -> Rc<Configuration> {
        let location = self.source.location();
        match self.try_load().await {
            Ok(config) => {
                for issue in validate(&config) {
                    self.diagnostics.emit(Diagnostic::ConfigIssue {
                        detail: issue.to_string(),
                    });
                }
                tracing::info!(
                    location,
                    sections = config.sections().len(),
                    "configuration loaded"
                );
                Rc::new(config)
            }
            Err(err) => {
                self.diagnostics.emit(Diagnostic::ConfigUnavailable {
                    location: location.to_string(),
                    detail: error_chain(&err),
                });
                Rc::new(Configuration::empty())
            }
        }
    }
}

fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

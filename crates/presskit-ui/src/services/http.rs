//! Browser fetch of the configuration document.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{ConfigSource, LoadError};

/// Fetches the document with a GET request relative to the page.
#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    /// Source requesting `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ConfigSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|err| LoadError::Transport {
                detail: err.to_string(),
            })?;
        if !response.ok() {
            return Err(LoadError::Status {
                status: response.status(),
            });
        }
        response.text().await.map_err(|err| LoadError::Transport {
            detail: err.to_string(),
        })
    }
}

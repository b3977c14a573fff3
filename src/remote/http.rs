//! HTTP transport backed by `reqwest`.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::{PostviewError, Result};

use super::{Resource, Transport};

/// Transport that talks to the posts API over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport from configuration
    ///
    /// Uses the configured request timeout for the whole request and caps the
    /// connect phase at the same value.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url()?, config.request_timeout())
    }

    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(PostviewError::Config(format!(
                "base_url '{base_url}' cannot be used as a base URL"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Absolute URL for a resource, keeping any path prefix of the base URL
    pub fn url_for(&self, resource: Resource) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", resource.path()))?;
        if let Some((key, value)) = resource.query() {
            url.query_pairs_mut().append_pair(key, &value);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, resource: Resource) -> Result<serde_json::Value> {
        let url = self.url_for(resource)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostviewError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

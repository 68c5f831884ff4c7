//! Page source trait and its HTTP implementation

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::FetchError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Trait for fetching the raw markup of a changelog page
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page body at `url`
    ///
    /// # Returns
    /// * `Ok(String)` - The response body, undecoded markup
    /// * `Err(FetchError)` - Network failure or non-success status
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Plain HTTP(S) GET client
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Builds a client; `None` leaves requests without a timeout
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        debug!("Fetching changelog page: {}", url);

        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

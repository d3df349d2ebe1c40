use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Capability seam for retrieving one page body, mockable in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over plain HTTP(S) with a browser-like User-Agent.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).with_context(|| format!("Invalid URL {}", url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("Unsupported URL scheme {}", parsed.scheme());
        }

        debug!("GET {}", url);
        let response = self
            .client
            .get(parsed)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Request to {} returned an error status", url))?;

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_non_http_schemes_without_network() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("ftp://files.example/page").await.unwrap_err();
        assert!(err.to_string().contains("scheme"));
    }

    #[tokio::test]
    async fn rejects_unparsable_urls() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("not a url at all").await.unwrap_err();
        assert!(err.to_string().contains("Invalid URL"));
    }
}

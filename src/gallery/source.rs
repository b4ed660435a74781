//! Where pages come from

use crate::api::{decode_page, PageResponse};
use crate::error::Result;
use crate::http::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Something that can produce a decoded page for a URL
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and decode the page at `url`
    async fn fetch_page(&self, url: &str) -> Result<PageResponse>;
}

/// Pages fetched over HTTP from the character API
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: HttpClient,
}

impl HttpPageSource {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<PageResponse> {
        let body = self.client.get_bytes(url).await?;
        let page = decode_page(&body)?;
        debug!(url, records = page.results.len(), "decoded page");
        Ok(page)
    }
}

//! Catalog Sources
//!
//! A source performs exactly one read of the catalog document. There is
//! no retry and no refresh: a failed read is terminal for that attempt.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{CatalogLoadError, CatalogResult};
use super::types::Catalog;

/// Common trait for anything that can produce a catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, used in log lines
    fn location(&self) -> &str;

    /// Perform a single read of the catalog
    async fn load(&self) -> CatalogResult<Catalog>;
}

/// Catalog fetched over HTTP(S)
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    /// Create a source for `url`. Without a timeout the request waits
    /// for as long as the server takes.
    pub fn new(url: impl Into<String>, timeout_ms: Option<u64>) -> CatalogResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn load(&self) -> CatalogResult<Catalog> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogLoadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let catalog = Catalog::from_json(&body)?;

        tracing::debug!(
            url = %self.url,
            categories = catalog.categories.len(),
            "Fetched catalog"
        );

        Ok(catalog)
    }
}

/// Catalog read from a local JSON file
pub struct FileCatalogSource {
    path: PathBuf,
    display: String,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.to_string_lossy().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn location(&self) -> &str {
        &self.display
    }

    async fn load(&self) -> CatalogResult<Catalog> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let catalog = Catalog::from_json(&content)?;
        Ok(catalog)
    }
}

/// Pick a source implementation from a location string.
///
/// `http://` and `https://` locations are fetched over the network;
/// anything else is treated as a file path.
pub fn source_for(location: &str, timeout_ms: Option<u64>) -> CatalogResult<Box<dyn CatalogSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpCatalogSource::new(location, timeout_ms)?))
    } else {
        Ok(Box::new(FileCatalogSource::new(location)))
    }
}

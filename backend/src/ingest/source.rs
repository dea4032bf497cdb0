//! Data sources for the raw buoy CSV.
//!
//! The dataset is fetched exactly once, at startup. There is no retry and no
//! caching: a failed fetch is fatal and the server does not start.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::checksum::dataset_checksum;
use crate::error::{WaveError, WaveResult};
use crate::models::RawRecord;

use super::csv_reader::parse_csv_bytes;

/// Raw records plus the fingerprint of the body they came from.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<RawRecord>,
    pub checksum: String,
    pub source: String,
}

/// Where the raw CSV comes from.
#[async_trait]
pub trait WaveSource: Send + Sync {
    /// Human-readable location, used in logs and errors.
    fn describe(&self) -> String;

    /// Fetch the raw CSV body.
    async fn fetch_body(&self) -> WaveResult<Vec<u8>>;

    /// Fetch, fingerprint and decode the rows for the `allowed` sites.
    ///
    /// The checksum covers the whole body, not only the decoded rows.
    async fn load(&self, allowed: &[String]) -> WaveResult<LoadedDataset> {
        let body = self.fetch_body().await?;
        let checksum = dataset_checksum(&body);
        let records = parse_csv_bytes(&body, allowed)?;
        log::info!(
            "Loaded {} raw records from {} (sha256={})",
            records.len(),
            self.describe(),
            checksum
        );
        Ok(LoadedDataset {
            records,
            checksum,
            source: self.describe(),
        })
    }
}

/// Dataset published over HTTP(S).
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WaveSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_body(&self) -> WaveResult<Vec<u8>> {
        log::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WaveError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

/// Dataset stored on local disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WaveSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_body(&self) -> WaveResult<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| WaveError::fetch(e.to_string(), self.describe()))
    }
}

/// Pick a source for `location`: URLs go over HTTP, anything else is a path.
pub fn source_for(location: &str) -> Box<dyn WaveSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

use std::path::PathBuf;

use temp_heatmap::{Dataset, HeatmapError};
use thiserror::Error;

use crate::config::DataSource;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Dataset(#[from] HeatmapError),
}

/// Loads the dataset once. No retries: any failure ends the run.
pub async fn load_dataset(source: &DataSource) -> Result<Dataset, LoadError> {
    match source {
        DataSource::Url(url) => fetch_dataset(&reqwest::Client::new(), url).await,
        DataSource::File(path) => read_dataset(path).await,
    }
}

pub async fn fetch_dataset(client: &reqwest::Client, url: &str) -> Result<Dataset, LoadError> {
    tracing::debug!(url, "fetching dataset");

    let http_error = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(http_error)?;
    let dataset = Dataset::from_json(&body)?;

    tracing::info!(url, records = dataset.len(), "dataset loaded");
    Ok(dataset)
}

pub async fn read_dataset(path: &std::path::Path) -> Result<Dataset, LoadError> {
    tracing::debug!(path = %path.display(), "reading dataset file");

    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let dataset = Dataset::from_json(&body)?;

    tracing::info!(path = %path.display(), records = dataset.len(), "dataset loaded");
    Ok(dataset)
}

use crate::error::{AppError, Result};
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use url::Url;

/// Fetches single URLs and writes their bodies into a directory.
///
/// # Fields
/// * `client` - Shared HTTP client (default redirects, no timeout)
#[derive(Clone)]
pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    /// Creates a `Downloader` backed by a default `reqwest` client.
    ///
    /// # Errors
    /// * If the TLS backend cannot be initialized
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Downloads `url` into `destination_dir`, named after its last path segment.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the written file
    ///
    /// # Details
    /// 1. Issues a GET and rejects statuses outside 200-299
    /// 2. Derives the file name from the last path segment
    /// 3. Writes the whole body, overwriting an existing file
    ///
    /// Transport and status failures always win over file system ones: the
    /// file name and the destination directory are only looked at once the
    /// body has arrived.
    #[instrument(skip(self, destination_dir), fields(dir = %destination_dir.display()))]
    pub async fn download(&self, url: &str, destination_dir: &Path) -> Result<PathBuf> {
        let target = parse_url(url)?;
        let response = self.client.get(target).send().await?;
        check_status(response.status(), response.url())?;
        let body = response.bytes().await?;

        let name = file_name_for(url).ok_or_else(|| AppError::MissingFileName(url.to_string()))?;
        let path = destination_dir.join(name);
        tokio::fs::write(&path, &body)
            .await
            .map_err(|source| AppError::FileSystem {
                path: path.clone(),
                source,
            })?;

        debug!("Wrote {} bytes to {}", body.len(), path.display());
        Ok(path)
    }
}

/// Final `/`-delimited segment of `url`, verbatim.
///
/// Query strings and fragments stay part of the name. Returns `None` when the
/// URL ends in `/`.
pub fn file_name_for(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| {
        let reason = match e {
            url::ParseError::RelativeUrlWithoutBase => {
                format!("No schema supplied. Perhaps you meant http://{}?", url)
            }
            other => other.to_string(),
        };
        AppError::InvalidUrl {
            url: url.to_string(),
            reason,
        }
    })
}

fn check_status(status: StatusCode, url: &Url) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    let class = if status.is_client_error() {
        "Client Error"
    } else if status.is_server_error() {
        "Server Error"
    } else {
        "Unexpected Status"
    };
    Err(AppError::HttpStatus {
        code: status.as_u16(),
        message: format!(
            "{} {}: {} for url: {}",
            status.as_u16(),
            class,
            status.canonical_reason().unwrap_or(""),
            url
        ),
    })
}

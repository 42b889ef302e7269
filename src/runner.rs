use crate::config::Config;
use crate::downloader::Downloader;
use crate::error::Result;
use crate::lines::read_lines;
use crate::progress::DownloadReport;
use futures::stream::{self, StreamExt};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of downloading one URL token.
#[derive(Debug)]
pub struct Outcome {
    pub url: String,
    pub result: Result<PathBuf>,
}

impl Outcome {
    /// `Success`, or the error text.
    pub fn status_line(&self) -> String {
        match &self.result {
            Ok(_) => "Success".to_string(),
            Err(e) => e.to_string(),
        }
    }
}

/// Drains URL lists through a [`Downloader`].
///
/// Items are processed in input order and a failing item never stops the
/// ones after it.
pub struct Runner {
    downloader: Downloader,
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_downloader(config, Downloader::new()?))
    }

    pub fn with_downloader(config: Config, downloader: Downloader) -> Self {
        Self { downloader, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads `path` and downloads every token in it.
    ///
    /// A missing or unopenable list is not an error for the run: the
    /// diagnostic `Error: <reason>` goes to `out` (whatever the verbosity)
    /// and an empty report is returned.
    pub async fn run_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<DownloadReport> {
        let urls = match read_lines(path) {
            Ok(urls) => urls,
            Err(e) => {
                debug!("Cannot read URL list: {}", e);
                writeln!(out, "Error: {}", e)?;
                return Ok(DownloadReport::new());
            }
        };
        debug!("Processing file: {}", path.display());
        self.run(urls, out).await
    }

    /// Downloads each URL into the configured directory.
    ///
    /// With `verbose` set, writes one status line per URL to `out`, in input
    /// order; otherwise nothing per URL is printed or logged above `debug`.
    /// Up to `concurrent_downloads` requests run at once.
    pub async fn run<I, W>(&self, urls: I, out: &mut W) -> Result<DownloadReport>
    where
        I: IntoIterator<Item = String>,
        W: Write,
    {
        let mut report = DownloadReport::new();
        let save_to = self.config.save_to.clone();

        let mut outcomes = stream::iter(urls)
            .map(|url| {
                let downloader = self.downloader.clone();
                let save_to = save_to.clone();
                async move {
                    let result = downloader.download(&url, &save_to).await;
                    Outcome { url, result }
                }
            })
            .buffered(self.config.concurrency());

        while let Some(outcome) = outcomes.next().await {
            match &outcome.result {
                Ok(path) => {
                    debug!("Downloaded {} to {}", outcome.url, path.display());
                    report.record_success();
                }
                Err(e) => {
                    debug!("Failed to download {}: {}", outcome.url, e);
                    report.record_failure(&outcome.url, e.to_string());
                }
            }
            if self.config.verbose {
                writeln!(out, "{}", outcome.status_line())?;
            }
        }

        report.log_summary();
        if let Some(path) = &self.config.failure_report {
            if let Err(e) = report.export_failures(path) {
                warn!("Failed to export failure report: {}", e);
            }
        }

        Ok(report)
    }
}

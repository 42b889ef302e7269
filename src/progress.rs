use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Outcome bookkeeping for one pass over a URL list.
///
/// # Examples
///
/// ```
/// use image_downloader::DownloadReport;
///
/// let mut report = DownloadReport::new();
/// report.record_success();
/// report.record_failure("http://x/y.jpg", "404 Client Error: Not Found for url: http://x/y.jpg");
/// assert_eq!(report.succeeded(), 1);
/// assert_eq!(report.errors, 1);
/// ```
#[derive(Debug)]
pub struct DownloadReport {
    pub completed: usize,
    pub errors: usize,
    pub start_time: Instant,
    failed_urls: Vec<(String, String)>, // (URL, error message)
}

impl Default for DownloadReport {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadReport {
    pub fn new() -> Self {
        Self {
            completed: 0,
            errors: 0,
            start_time: Instant::now(),
            failed_urls: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.completed += 1;
    }

    pub fn record_failure(&mut self, url: &str, error: impl Into<String>) {
        self.completed += 1;
        self.errors += 1;
        self.failed_urls.push((url.to_string(), error.into()));
    }

    pub fn succeeded(&self) -> usize {
        self.completed.saturating_sub(self.errors)
    }

    pub fn failures(&self) -> &[(String, String)] {
        &self.failed_urls
    }

    pub fn log_summary(&self) {
        debug!(
            total = self.completed,
            succeeded = self.succeeded(),
            failed = self.errors,
            "Finished in {:.1}s",
            self.start_time.elapsed().as_secs_f64()
        );
    }

    /// Appends failed download information to `path`
    ///
    /// Does nothing when every download succeeded.
    pub fn export_failures(&self, path: &Path) -> std::io::Result<()> {
        if self.failed_urls.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        let mut writer = std::io::BufWriter::new(file);

        writeln!(
            writer,
            "\n=== Failed Downloads Report {} ===",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;

        for (url, error) in &self.failed_urls {
            writeln!(writer, "URL: {}", url)?;
            writeln!(writer, "Error: {}", error)?;
            writeln!(writer, "---")?;
        }

        writer.flush()?;
        Ok(())
    }
}

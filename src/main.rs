use clap::Parser;
use image_downloader::error::Result;
use image_downloader::logging::init_logging;
use image_downloader::{Config, Runner};
use std::path::PathBuf;
use tracing::{debug, error};

/// Given a plaintext file containing URLs (one per line), downloads the
/// resources they point to into a local directory.
#[derive(Parser, Debug)]
#[command(name = "image-downloader", version, about)]
struct Cli {
    /// File with one URL per line
    file: PathBuf,

    /// Where to save the downloads. Default is the current directory.
    #[arg(long = "save-to", visible_alias = "save_to", value_name = "DIR")]
    save_to: Option<PathBuf>,

    /// Output the result for each URL
    #[arg(short, long)]
    verbose: bool,

    /// Number of downloads allowed in flight
    #[arg(short = 'j', long = "concurrency", value_name = "N")]
    concurrency: Option<usize>,

    /// Append failed URLs and their errors to this file
    #[arg(long, value_name = "PATH")]
    failure_report: Option<PathBuf>,

    /// TOML file with defaults for the options above
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Builds the run configuration. Explicit flags win over the config file.
    fn into_config(self) -> Result<(PathBuf, Config)> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(dir) = self.save_to {
            config.save_to = dir;
        }
        if self.verbose {
            config.verbose = true;
        }
        if let Some(n) = self.concurrency {
            config.concurrent_downloads = n;
        }
        if self.failure_report.is_some() {
            config.failure_report = self.failure_report;
        }
        Ok((self.file, config))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let (file, config) = Cli::parse().into_config()?;
    let runner = Runner::new(config)?;

    let mut stdout = std::io::stdout();
    match runner.run_file(&file, &mut stdout).await {
        Ok(report) => {
            debug!(
                "Downloaded {} of {} URLs into {}",
                report.succeeded(),
                report.completed,
                runner.config().save_to.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Application error: {}", e);
            std::process::exit(1);
        }
    }
}

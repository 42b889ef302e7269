//! Downloads every URL listed in a text file into a local directory.
//!
//! # Architecture
//!
//! - `lines`: lazy reader turning a URL list into tokens
//! - `Downloader`: fetches one URL and writes its body to disk
//! - `Runner`: drives the downloader over a list and reports per-URL status
//! - `DownloadReport`: run totals and the optional failure report
//! - `Config`: run configuration
//! - `logging`: stderr subscriber setup
//!
//! # Example
//! ```no_run
//! use image_downloader::{Config, Runner};
//! use std::path::Path;
//!
//! async fn example() {
//!     let runner = Runner::new(Config::default()).unwrap();
//!     let mut stdout = std::io::stdout();
//!     runner.run_file(Path::new("data.txt"), &mut stdout).await.unwrap();
//! }
//! ```

pub mod config;
pub mod downloader;
pub mod error;
pub mod lines;
pub mod logging;
pub mod progress;
pub mod runner;

pub use config::Config;
pub use downloader::{file_name_for, Downloader};
pub use error::{AppError, ErrorKind};
pub use lines::{read_lines, UrlLines};
pub use progress::DownloadReport;
pub use runner::{Outcome, Runner};

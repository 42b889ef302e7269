use crate::error::{AppError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Opens a URL list and returns a lazy iterator over its tokens.
///
/// # Format
/// - One URL per line
/// - Blank and whitespace-only lines are skipped
/// - Only the first whitespace-delimited field of a line is used
///
/// Every call reopens the file, so the sequence can be restarted by calling
/// again.
///
/// # Errors
/// - [`AppError::NotFound`] if `path` does not exist
/// - [`AppError::Unreadable`] if it exists but cannot be opened
pub fn read_lines(path: impl AsRef<Path>) -> Result<UrlLines<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::NotFound(path.to_path_buf()),
        _ => AppError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Ok(UrlLines::new(BufReader::new(file), path.to_path_buf()))
}

/// Tokens of a URL list, produced one line at a time.
pub struct UrlLines<R> {
    reader: R,
    path: PathBuf,
    line_no: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> UrlLines<R> {
    pub fn new(reader: R, path: PathBuf) -> Self {
        Self {
            reader,
            path,
            line_no: 0,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for UrlLines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_no += 1;
                    if let Some(token) = first_token(&self.buf) {
                        return Some(token);
                    }
                }
                Err(e) => {
                    warn!(
                        "Stopped reading {} after line {}: {}",
                        self.path.display(),
                        self.line_no,
                        e
                    );
                    self.done = true;
                }
            }
        }
        None
    }
}

/// First whitespace-delimited field of a raw line, if any.
fn first_token(line: &[u8]) -> Option<String> {
    String::from_utf8_lossy(line)
        .split_whitespace()
        .next()
        .map(str::to_owned)
}

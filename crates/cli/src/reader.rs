//! Size-gated input reading.
//!
//! Inputs are read whole into memory, so anything above the cap is rejected
//! up front. Text that is not valid UTF-8 is decoded lossily.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which to log about large inputs (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum input size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Path used in messages for standard input.
pub const STDIN_NAME: &str = "-";

/// Size-gated file reader.
pub struct FileReader {
    /// Maximum file size to read.
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    /// Create a new file reader with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a file as bytes, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
        let size = metadata.len();

        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut file = File::open(path).map_err(|e| io_error(path, e))?;
        let mut buffer = Vec::with_capacity(size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| io_error(path, e))?;

        Ok(buffer)
    }

    /// Read a file as text.
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        Ok(decode(bytes, path))
    }

    /// Read any stream as text, honouring the same size cap.
    pub fn read_stream<R: Read>(&self, stream: R, name: &Path) -> Result<String> {
        let mut buffer = Vec::new();
        stream
            .take(self.max_size + 1)
            .read_to_end(&mut buffer)
            .map_err(|e| io_error(name, e))?;

        let size = buffer.len() as u64;
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: name.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        Ok(decode(buffer, name))
    }

    /// Read standard input as text.
    pub fn read_stdin(&self) -> Result<String> {
        self.read_stream(std::io::stdin().lock(), Path::new(STDIN_NAME))
    }
}

fn decode(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), "input is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;

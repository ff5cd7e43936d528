use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use log_analyzer_ports::LineSource;
use log_analyzer_shared_kernel::{InfrastructureError, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the file as text lines. Invalid UTF-8 is replaced, `\r\n` is accepted.
    pub fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
        let bytes = Self::read_to_end(path)?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text.lines().map(str::to_owned).collect())
    }
}

/// [`LineSource`] backed by a log file on disk.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        FileReader::read_lines(&self.path).map_err(|source| {
            InfrastructureError::FileRead { path: self.path.clone(), source }.into()
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

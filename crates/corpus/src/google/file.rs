//! File handling for the Google corpus layout.

use normeval_core::{EvalError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Every regular, non-hidden file directly under `location`, sorted by path.
pub fn list_data_files(location: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(location).map_err(|e| EvalError::io(location, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EvalError::io(location, e))?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// An open data file, read one trimmed line at a time.
#[derive(Debug)]
pub struct DataFile {
    reader: BufReader<File>,
    line: String,
}

impl DataFile {
    /// Open a data file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| EvalError::io(path, e))?;
        Ok(Self {
            reader: BufReader::new(file),
            line: String::new(),
        })
    }

    /// Read the next line with surrounding whitespace removed.
    ///
    /// Returns `None` at end of file and on a blank line, both of which end
    /// the readable part of the file.
    pub fn next_line(&mut self, path: &Path) -> Result<Option<&str>> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .map_err(|e| EvalError::io(path, e))?;

        let line = self.line.trim();
        if read == 0 || line.is_empty() {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

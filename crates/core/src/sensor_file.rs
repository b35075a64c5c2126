//! Long-lived handle on a pseudo-file sensor
//!
//! Files under `/sys` and `/proc` regenerate their contents on every read
//! from offset zero, so the handle is opened once and rewound after each
//! read instead of being reopened every tick.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::SensorError;

/// An owned, reusable sensor file handle
#[derive(Debug)]
pub struct SensorFile {
    path: PathBuf,
    file: Option<File>,
    buf: String,
}

impl SensorFile {
    /// Open the sensor. A missing file is not an error here: the open is
    /// retried on the next read so hot-plugged devices show up later.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match File::open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                log::warn!("Sensor {} unavailable: {}", path.display(), e);
                None
            }
        };

        Self {
            path,
            file,
            buf: String::with_capacity(64),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the underlying file is currently open
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Read the whole file, rewind for the next tick and hand the contents
    /// and the sensor path to `parse`
    pub fn read_with<T, F>(&mut self, parse: F) -> Result<T, SensorError>
    where
        F: FnOnce(&str, &Path) -> Result<T, SensorError>,
    {
        self.fill()?;
        parse(&self.buf, &self.path)
    }

    /// Parse the first whitespace-separated token of the file
    pub fn read_value<T: FromStr>(&mut self) -> Result<T, SensorError> {
        self.fill()?;
        let token = self
            .buf
            .split_whitespace()
            .next()
            .ok_or_else(|| SensorError::Empty {
                path: self.path.clone(),
            })?;
        token.parse().map_err(|_| SensorError::Parse {
            path: self.path.clone(),
            value: token.to_string(),
        })
    }

    /// Seek back to offset zero so the same handle can be read again
    pub fn rewind(&mut self) -> Result<(), SensorError> {
        if let Some(file) = self.file.as_mut() {
            file.seek(SeekFrom::Start(0)).map_err(|source| SensorError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SensorError> {
        if self.file.is_none() {
            let file = File::open(&self.path).map_err(|source| SensorError::Io {
                path: self.path.clone(),
                source,
            })?;
            log::info!("Sensor {} reopened", self.path.display());
            self.file = Some(file);
        }

        self.buf.clear();
        let read = match self.file.as_mut() {
            Some(file) => file.read_to_string(&mut self.buf),
            None => return Err(SensorError::Empty { path: self.path.clone() }),
        };

        if let Err(source) = read {
            // Drop the handle; the next read reopens it
            self.file = None;
            return Err(SensorError::Io {
                path: self.path.clone(),
                source,
            });
        }

        self.rewind()
    }
}

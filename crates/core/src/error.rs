//! Error types shared by modules and display bridges

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure to read a sensor source
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is empty", .path.display())]
    Empty { path: PathBuf },

    #[error("unexpected value '{}' in {}", .value, .path.display())]
    Parse { path: PathBuf, value: String },

    #[error("field {} missing from {}", .field, .path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("{} query on {} failed: {}", .request, .interface, .source)]
    Ioctl {
        request: &'static str,
        interface: String,
        #[source]
        source: io::Error,
    },
}

/// Failure while talking to the music daemon
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("cannot connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("unexpected greeting from daemon: {0}")]
    Greeting(String),

    #[error("daemon rejected command: {0}")]
    Ack(String),

    #[error("malformed response line: {0}")]
    Protocol(String),

    #[error("connection closed by daemon")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure to hand the status line to the display
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("cannot open display: {0}")]
    Unavailable(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

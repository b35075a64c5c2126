//! Shared constants for the application

/// Default tick interval in milliseconds (config default)
pub const DEFAULT_TICK_MS: u64 = 500;

/// Default separator appended after every module fragment
pub const DEFAULT_DELIMITER: &str = " ";

/// Text written to the display when the process is terminated
pub const TERMINATED_MARKER: &str = "Terminated";

/// Shown by modules whose sensor reports no connection
pub const OFFLINE_TEXT: &str = "Offline";

/// Bytes per kibibyte (`/proc/meminfo` reports kB meaning KiB)
pub const BYTES_PER_KB: u64 = 1024;

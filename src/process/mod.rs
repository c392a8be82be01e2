use std::fmt;
use std::time::Duration;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;
pub use signal::CancelToken;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    SignalError(String),
    TimedOut(String, Duration),
    Cancelled(String),
    Failed(String, std::process::ExitStatus),
    Other(String),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Other(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
            ProcessError::TimedOut(cmd, after) => {
                write!(f, "{} killed after {}s", cmd, after.as_secs())
            }
            ProcessError::Cancelled(cmd) => write!(f, "{} interrupted", cmd),
            ProcessError::Failed(cmd, status) => write!(f, "{} exited with {}", cmd, status),
            ProcessError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}

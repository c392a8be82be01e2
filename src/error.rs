use crate::core::config::ConfigError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Editor(rustyline::error::ReadlineError),
    Io(std::io::Error),
    Config(ConfigError),
    Process(ProcessError),
    Usage(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Editor(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::Config(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Editor(e) => write!(f, "line editor unavailable: {}", e),
            ShellError::Io(e) => write!(f, "terminal i/o failed: {}", e),
            ShellError::Config(e) => write!(f, "cannot load settings: {}", e),
            ShellError::Process(e) => write!(f, "{}", e),
            ShellError::Usage(msg) => write!(f, "{} (try --help)", msg),
        }
    }
}

impl std::error::Error for ShellError {}

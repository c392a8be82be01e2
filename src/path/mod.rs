mod expander;

pub use expander::PathExpander;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Home directory not found"),
        }
    }
}

impl std::error::Error for PathError {}

use super::PathError;
use std::path::{Path, PathBuf};

/// Expands a leading `~` and anchors relative paths at a base directory.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    pub fn with_home(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, PathError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    /// Expands `path` and joins it onto `base` unless it is already absolute.
    pub fn resolve(&self, base: &Path, path: &str) -> Result<PathBuf, PathError> {
        let expanded = self.expand(path)?;
        if expanded.is_absolute() {
            Ok(expanded)
        } else {
            Ok(base.join(expanded))
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, PathError> {
        let home = || self.home.clone().ok_or(PathError::HomeDirNotFound);

        if path.len() == 1 {
            return home();
        }

        match path[1..].strip_prefix('/') {
            Some(stripped) => {
                let mut home_path = home()?;
                for part in stripped.split('/').filter(|p| !p.is_empty()) {
                    home_path.push(part);
                }
                Ok(home_path)
            }
            // "~user/..." is taken literally
            None => Ok(Path::new(path).to_path_buf()),
        }
    }
}
